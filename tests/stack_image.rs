//! Integration tests for image-to-PDF stacking.

mod common;

use fstack::StackError;
use fstack::merge::Merger;
use lopdf::Document;
use tempfile::TempDir;

use crate::common::{png_fixture, test_config};

#[test]
fn test_one_page_per_input_image() {
    let temp_dir = TempDir::new().unwrap();
    let a = png_fixture(&temp_dir, "a.png", 16, 16);
    let b = png_fixture(&temp_dir, "b.png", 32, 8);
    let c = png_fixture(&temp_dir, "c.png", 8, 32);
    let d = png_fixture(&temp_dir, "d.png", 4, 4);
    let output = temp_dir.path().join("album.pdf");

    let config = test_config(vec![a, b, c, d], output.clone());
    let report = Merger::new().merge(&config).unwrap();

    assert_eq!(report.files_merged, 4);
    assert_eq!(report.page_count, Some(4));

    let doc = Document::load(&output).unwrap();
    assert_eq!(doc.get_pages().len(), 4);
}

#[test]
fn test_jpg_and_png_are_mixed_within_image_kind() {
    let temp_dir = TempDir::new().unwrap();
    let png = png_fixture(&temp_dir, "a.png", 8, 8);

    // jpg belongs to the same registry entry as png
    let jpg = temp_dir.path().join("b.jpg");
    image::RgbImage::from_pixel(8, 8, image::Rgb([1, 2, 3]))
        .save(&jpg)
        .unwrap();

    let output = temp_dir.path().join("album.pdf");
    let config = test_config(vec![png, jpg], output.clone());
    let report = Merger::new().merge(&config).unwrap();

    assert_eq!(report.page_count, Some(2));
}

#[test]
fn test_image_then_text_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let png = png_fixture(&temp_dir, "a.png", 8, 8);
    let txt = common::text_fixture(&temp_dir, "b.txt", "not an image");
    let output = temp_dir.path().join("album.pdf");

    let config = test_config(vec![png, txt], output.clone());
    let result = Merger::new().merge(&config);

    assert!(matches!(result, Err(StackError::MixedTypes { .. })));
    assert!(!output.exists());
}

#[test]
fn test_undecodable_image_leaves_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let good = png_fixture(&temp_dir, "good.png", 8, 8);
    let bad = temp_dir.path().join("bad.png");
    std::fs::write(&bad, b"PNG? no.").unwrap();
    let output = temp_dir.path().join("album.pdf");

    let config = test_config(vec![good, bad], output.clone());
    let result = Merger::new().merge(&config);

    assert!(matches!(
        result,
        Err(StackError::FailedToDecodeImage { .. })
    ));
    assert!(!output.exists());
}
