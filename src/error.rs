use thiserror::Error;

/// Errors surfaced by the non-probe parts of the crate (parsing, config, export).
/// Probe failures never show up here: they are folded into a `ProbeResult`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
