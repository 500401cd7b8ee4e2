use crate::constants::JPEG_QUALITY;
use crate::error::{Result, UploadToolError};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// An image re-encoded to JPEG in memory, ready to be uploaded.
#[derive(Debug, Clone)]
pub struct PreparedImage {
    bytes: Vec<u8>,
}

impl PreparedImage {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Returns the file name for error messages, falling back to the full path
/// when the path has no final component.
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Decodes an image file and re-encodes it as JPEG at fixed quality into an
/// in-memory buffer.
///
/// Any color mode that is not plain 8-bit RGB is converted first. Dropping
/// an alpha channel this way is lossy: transparent regions are filled, not
/// composited. Multi-frame formats (GIF) contribute only their first frame.
pub fn prepare_image(path: &Path) -> Result<PreparedImage> {
    let file = file_label(path);

    let img = ImageReader::open(path)
        .map_err(|e| UploadToolError::Decode {
            file: file.clone(),
            source: image::ImageError::IoError(e),
        })?
        .decode()
        .map_err(|e| UploadToolError::Decode {
            file: file.clone(),
            source: e,
        })?;

    let img = match img.color() {
        image::ColorType::Rgb8 => img,
        _ => DynamicImage::ImageRgb8(img.to_rgb8()),
    };

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);
    img.write_with_encoder(encoder)
        .map_err(|e| UploadToolError::Encode { file, source: e })?;

    Ok(PreparedImage {
        bytes: buffer.into_inner(),
    })
}
