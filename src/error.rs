use thiserror::Error;

/// Errors which can occur while writing mock-ups to disk
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to encode or save image: {0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
