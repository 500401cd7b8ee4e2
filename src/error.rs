use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadToolError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Walkdir error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Failed to decode {file}: {source}")]
    Decode {
        file: String,
        source: image::ImageError,
    },

    #[error("Failed to re-encode {file}: {source}")]
    Encode {
        file: String,
        source: image::ImageError,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Imgur upload failed: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Imgur response did not contain data.link")]
    MissingLink,
}

impl UploadToolError {
    /// True for failures produced while decoding or re-encoding an image,
    /// as opposed to failures of the upload itself.
    pub fn is_processing_error(&self) -> bool {
        matches!(
            self,
            UploadToolError::Decode { .. } | UploadToolError::Encode { .. }
        )
    }

    /// True for failures of the HTTP upload (transport or non-200 status).
    pub fn is_upload_error(&self) -> bool {
        matches!(
            self,
            UploadToolError::Transport(_)
                | UploadToolError::HttpStatus { .. }
                | UploadToolError::MissingLink
        )
    }
}

pub type Result<T> = std::result::Result<T, UploadToolError>;
