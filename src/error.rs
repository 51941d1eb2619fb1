use thiserror::Error;

/// Errors raised by the fallible outer layers (catalog loading, argument parsing).
///
/// The geometry and rate estimation core never returns an error; absence of
/// data is reported through sentinel notes instead.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error (TOML): {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Catalog parse error (JSON): {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("Unknown scanner: {0}")]
    UnknownScanner(String),

    #[error("Invalid angle range: {0}")]
    InvalidRange(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;
