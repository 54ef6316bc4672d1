use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Failed to load image '{path}': {message}")]
    ImageLoad { path: PathBuf, message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported image format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("No images found in {path}")]
    EmptyGallery { path: PathBuf },

    #[error("Settings error: {message}")]
    Settings { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GalleryError>;

impl GalleryError {
    /// Maps an IO failure on `path` to the most specific variant.
    pub fn from_io(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => GalleryError::FileNotFound { path },
            _ => GalleryError::ImageLoad {
                path,
                message: err.to_string(),
            },
        }
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            GalleryError::ImageLoad { .. } => "IMAGE_LOAD_ERROR",
            GalleryError::FileNotFound { .. } => "FILE_NOT_FOUND",
            GalleryError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            GalleryError::EmptyGallery { .. } => "EMPTY_GALLERY",
            GalleryError::Settings { .. } => "SETTINGS_ERROR",
            GalleryError::Io { .. } => "IO_ERROR",
            GalleryError::Json { .. } => "JSON_ERROR",
        }
    }
}
