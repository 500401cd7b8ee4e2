use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

/// Writes a small valid RGB PNG.
pub fn create_rgb_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let img = RgbImage::from_pixel(4, 4, Rgb([10, 20, 30]));
    img.save(&path).unwrap();
    path
}

/// Writes a small valid PNG with an alpha channel.
pub fn create_rgba_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let mut img = RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 255]));
    img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
    img.put_pixel(1, 1, Rgba([255, 255, 255, 128]));
    img.save(&path).unwrap();
    path
}

/// Writes a file with an image extension but unreadable contents.
pub fn create_broken_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(b"these bytes are not a valid image")
        .unwrap();
    path
}

/// Writes a file the scanner should ignore.
pub fn create_text_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(b"just some notes")
        .unwrap();
    path
}
