use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{FromRequest, Path, Query, Request, State};
use axum::http::{header, HeaderMap};
use axum::response::Json;
use axum::Form;
use serde_json::{Map, Value};
use tracing::warn;
use zoo_store::Catalog;
use zoo_types::{Animal, AnimalDraft, AnimalQuery, ValidationError};

use crate::error::{ServerError, ServerResult};

const TRAITS_FIELD: &str = "personalityTraits";

/// Run a catalog call on the blocking pool. Catalog locks are std locks and
/// a create holds the write lock across a file rewrite.
async fn blocking<T, F>(f: F) -> ServerResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))
}

/// `GET /api/animals`: animals matching the query-string criteria.
pub async fn list_animals(
    State(catalog): State<Arc<Catalog>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ServerResult<Json<Vec<Animal>>> {
    let query = AnimalQuery::from_pairs(pairs);
    let animals = blocking(move || catalog.list(&query)).await?;
    Ok(Json(animals))
}

/// `GET /api/animals/:id`
pub async fn get_animal(
    State(catalog): State<Arc<Catalog>>,
    Path(id): Path<String>,
) -> ServerResult<Json<Animal>> {
    let found = {
        let id = id.clone();
        blocking(move || catalog.get(&id)).await?
    };
    found.map(Json).ok_or(ServerError::AnimalNotFound(id))
}

/// `POST /api/animals`: validate the body, then store it under a new id.
///
/// Accepts JSON and `application/x-www-form-urlencoded` bodies. Bodies that
/// cannot be decoded count as invalid animals, same as a value that fails
/// validation.
pub async fn create_animal(
    State(catalog): State<Arc<Catalog>>,
    request: Request,
) -> ServerResult<Json<Animal>> {
    let value = if is_form(request.headers()) {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(request, &())
            .await
            .map_err(|e| {
                warn!(error = %e, "rejected animal: unreadable form body");
                ServerError::InvalidAnimal(ValidationError::NotAnObject)
            })?;
        form_object(pairs)
    } else {
        let body = Bytes::from_request(request, &()).await.map_err(|e| {
            warn!(error = %e, "rejected animal: unreadable body");
            ServerError::InvalidAnimal(ValidationError::NotAnObject)
        })?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "rejected animal: body is not JSON");
            ServerError::InvalidAnimal(ValidationError::NotAnObject)
        })?
    };
    let draft = AnimalDraft::from_value(&value).map_err(|e| {
        warn!(error = %e, "rejected animal");
        ServerError::InvalidAnimal(e)
    })?;

    let animal = blocking(move || catalog.create(draft)).await??;
    Ok(Json(animal))
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"))
}

/// Fold decoded form pairs into a JSON object.
///
/// `personalityTraits` and any `key[]` always become arrays, accumulating in
/// order. Other keys become strings, or arrays of strings when repeated.
fn form_object(pairs: Vec<(String, String)>) -> Value {
    let mut object = Map::new();
    for (key, value) in pairs {
        let (key, as_array) = match key.strip_suffix("[]") {
            Some(base) => (base.to_string(), true),
            None => {
                let is_traits = key == TRAITS_FIELD;
                (key, is_traits)
            }
        };
        let value = Value::String(value);
        match object.get_mut(&key) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None if as_array => {
                object.insert(key, Value::Array(vec![value]));
            }
            None => {
                object.insert(key, value);
            }
        }
    }
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn form_traits_always_become_arrays() {
        let single = form_object(pairs(&[("name", "Zoe"), ("personalityTraits", "Curious")]));
        assert_eq!(
            single,
            json!({ "name": "Zoe", "personalityTraits": ["Curious"] })
        );

        let mixed = form_object(pairs(&[
            ("personalityTraits[]", "Brave"),
            ("personalityTraits", "Loyal"),
        ]));
        assert_eq!(mixed, json!({ "personalityTraits": ["Brave", "Loyal"] }));
    }

    #[test]
    fn repeated_form_scalar_becomes_array() {
        let object = form_object(pairs(&[("name", "a"), ("name", "b"), ("tags[]", "x")]));
        assert_eq!(object, json!({ "name": ["a", "b"], "tags": ["x"] }));
    }

    #[test]
    fn form_content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!is_form(&headers));
        headers.insert(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded; charset=UTF-8".parse().unwrap(),
        );
        assert!(is_form(&headers));
        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        assert!(!is_form(&headers));
    }
}
