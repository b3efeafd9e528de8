//! Shared helpers for integration tests.
//!
//! Fixtures are built programmatically: text files with `std::fs`, minimal
//! PDF documents with `lopdf`, and PNGs with `image`.

#![allow(dead_code)] // not every test binary uses every fixture helper

use std::path::PathBuf;

use fstack::config::{Config, OverwriteMode};
use image::{Rgb, RgbImage};
use lopdf::{Document, Object, dictionary};
use tempfile::TempDir;

/// Build a merge config with default flags and quiet logging.
pub fn test_config(inputs: Vec<PathBuf>, output: PathBuf) -> Config {
    Config {
        inputs,
        output,
        dry_run: false,
        verbose: false,
        quiet: true,
        overwrite_mode: OverwriteMode::Overwrite,
    }
}

/// Write a text fixture with the given contents.
pub fn text_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Write a minimal valid PDF fixture with the given page count.
pub fn pdf_fixture(dir: &TempDir, name: &str, pages: usize) -> PathBuf {
    let path = dir.path().join(name);
    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = (0..pages)
        .map(|_| {
            let page = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            };
            doc.add_object(page).into()
        })
        .collect();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(&path).unwrap();
    path
}

/// Write a solid-color PNG fixture with the given dimensions.
pub fn png_fixture(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.path().join(name);
    RgbImage::from_pixel(width, height, Rgb([80, 120, 200]))
        .save(&path)
        .unwrap();
    path
}
