use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid quality value: {0}. Must be between 0 and 100")]
    InvalidQuality(u8),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("R2 storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, UploadError>;
