use std::time::Duration;

pub const IMGUR_UPLOAD_URL: &str = "https://api.imgur.com/3/image";

/// Quality used when re-encoding every image to JPEG before upload.
pub const JPEG_QUALITY: u8 = 95;

/// Fixed pause between consecutive uploads to stay under Imgur's rate limits.
pub const PACING_DELAY: Duration = Duration::from_secs(1);

/// Multipart form field and filename Imgur expects for the image payload.
pub const UPLOAD_FIELD_NAME: &str = "image";
pub const UPLOAD_FILE_NAME: &str = "image.jpg";
pub const UPLOAD_MIME_TYPE: &str = "image/jpeg";

/// Extensions the scanner accepts, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp"];

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const ERROR_PREFIX: &str = "❌";
pub const INFO_PREFIX: &str = "📋";
pub const FOUND_PREFIX: &str = "📊";
pub const UPLOAD_PREFIX: &str = "📤";
