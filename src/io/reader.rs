//! Input loading for the PDF and image merge paths.
//!
//! Text inputs are read inline by the text merge routine; PDFs and images go
//! through these loaders so that codec failures surface as typed errors with
//! the offending path attached.

use std::path::{Path, PathBuf};

use image::RgbImage;
use lopdf::Document;
use tracing::debug;

use crate::error::{Result, StackError};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,
}

/// A decoded raster image, converted to RGB.
#[derive(Debug)]
pub struct LoadedImage {
    /// Pixel data in 8-bit RGB.
    pub pixels: RgbImage,

    /// Path to the source file.
    pub path: PathBuf,
}

impl LoadedImage {
    /// Image dimensions as (width, height) in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

/// Load a single PDF document.
///
/// # Errors
///
/// Returns an error if:
/// - The file is empty
/// - The file is encrypted
/// - The PDF structure cannot be parsed
/// - The document has no pages
pub fn load_pdf(path: &Path) -> Result<LoadedPdf> {
    let metadata = std::fs::metadata(path).map_err(|e| StackError::FileNotAccessible {
        path: path.to_path_buf(),
        source: e,
    })?;

    if metadata.len() == 0 {
        return Err(StackError::corrupted_pdf(
            path.to_path_buf(),
            "File is empty",
        ));
    }

    let document = Document::load(path).map_err(|e| {
        let err_msg = e.to_string();
        if err_msg.contains("encrypt") || err_msg.contains("password") {
            StackError::encrypted_pdf(path.to_path_buf())
        } else {
            StackError::failed_to_load_pdf(path.to_path_buf(), err_msg)
        }
    })?;

    let page_count = document.get_pages().len();
    if page_count == 0 {
        return Err(StackError::corrupted_pdf(
            path.to_path_buf(),
            "PDF has no pages",
        ));
    }

    debug!("loaded {} ({page_count} pages)", path.display());

    Ok(LoadedPdf {
        document,
        path: path.to_path_buf(),
        page_count,
    })
}

/// Load and decode a single raster image, converting to 8-bit RGB.
///
/// Grayscale and alpha-carrying images are converted to a common RGB
/// representation so every page of the output PDF shares one color space.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let decoded = image::open(path)
        .map_err(|e| StackError::failed_to_decode_image(path.to_path_buf(), e.to_string()))?;

    let pixels = decoded.to_rgb8();
    let (width, height) = pixels.dimensions();
    debug!("decoded {} ({width}x{height})", path.display());

    Ok(LoadedImage {
        pixels,
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::TempDir;

    #[test]
    fn test_load_pdf_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let empty_path = temp_dir.path().join("empty.pdf");
        std::fs::File::create(&empty_path).unwrap();

        let result = load_pdf(&empty_path);
        assert!(matches!(result, Err(StackError::CorruptedPdf { .. })));
    }

    #[test]
    fn test_load_pdf_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("garbage.pdf");
        std::fs::write(&path, b"this is not a pdf at all").unwrap();

        let result = load_pdf(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_image_png() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("red.png");

        let img = RgbImage::from_pixel(4, 3, Rgb([255, 0, 0]));
        img.save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (4, 3));
        assert_eq!(loaded.pixels.get_pixel(0, 0), &Rgb([255, 0, 0]));
    }

    #[test]
    fn test_load_image_grayscale_converted_to_rgb() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gray.png");

        let img = image::GrayImage::from_pixel(2, 2, image::Luma([128]));
        img.save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (2, 2));
        assert_eq!(loaded.pixels.get_pixel(0, 0), &Rgb([128, 128, 128]));
    }

    #[test]
    fn test_load_image_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not pixels").unwrap();

        let result = load_image(&path);
        assert!(matches!(
            result,
            Err(StackError::FailedToDecodeImage { .. })
        ));
    }
}
