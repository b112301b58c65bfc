use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0} is not implemented")]
    Unsupported(&'static str),

    #[error("fail-safe triggered: cursor parked at the top-left corner")]
    FailSafe,

    #[error("pointer injection failed: {0}")]
    Injection(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed frame: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
