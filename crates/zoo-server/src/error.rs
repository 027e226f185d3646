use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use zoo_types::{ValidationError, INVALID_ANIMAL_MESSAGE};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("animal not found: {0}")]
    AnimalNotFound(String),

    #[error("invalid animal: {0}")]
    InvalidAnimal(#[from] ValidationError),

    #[error("store error: {0}")]
    Store(#[from] zoo_store::StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::AnimalNotFound(_) => StatusCode::NOT_FOUND.into_response(),
            Self::InvalidAnimal(_) => {
                (StatusCode::BAD_REQUEST, INVALID_ANIMAL_MESSAGE).into_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
