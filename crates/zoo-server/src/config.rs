use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Environment variable that overrides the listening port.
pub const PORT_ENV: &str = "PORT";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// JSON document holding the catalog.
    pub data_path: PathBuf,
    /// Directory with the HTML pages and front-end assets.
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3001)),
            data_path: PathBuf::from("data/animals.json"),
            public_dir: PathBuf::from("public"),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn from_toml_file(path: &Path) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Apply `PORT` from the process environment, if set.
    pub fn apply_env(self) -> ServerResult<Self> {
        let port = std::env::var(PORT_ENV).ok();
        self.apply_port_var(port.as_deref())
    }

    /// Replace the port with `value` when it is present and non-empty.
    pub fn apply_port_var(self, value: Option<&str>) -> ServerResult<Self> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => Ok(self),
            Some(v) => {
                let port = v
                    .parse::<u16>()
                    .map_err(|_| ServerError::Config(format!("invalid {PORT_ENV}: {v}")))?;
                Ok(self.with_port(port))
            }
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.bind_addr.set_port(port);
        self
    }
}
