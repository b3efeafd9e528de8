//! Image-to-PDF merging.
//!
//! Each input image becomes one page of the output PDF, in input order. The
//! decoded pixels are normalized to 8-bit RGB and embedded as an image
//! XObject drawn across the full page; pages are sized one PDF point per
//! pixel. Stream compression is applied by `Document::compress` before the
//! document is written.

use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use tracing::info;

use crate::error::{Result, StackError};
use crate::io::{LoadedImage, OutputWriter, load_image};
use crate::merge::MergeOutcome;

/// Merge image inputs, in order, into a single output PDF with one page per
/// image.
pub(crate) fn stack_images(
    inputs: &[PathBuf],
    output: &Path,
    writer: &OutputWriter,
) -> Result<MergeOutcome> {
    let mut images = Vec::with_capacity(inputs.len());
    for path in inputs {
        info!("processing {}", path.display());
        images.push(load_image(path)?);
    }

    if images.is_empty() {
        return Err(StackError::NoFilesToStack);
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::with_capacity(images.len());
    for img in &images {
        let page_id = add_image_page(&mut doc, pages_id, img)?;
        kids.push(page_id.into());
    }

    let page_count = kids.len();
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count as i64,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.compress();
    doc.renumber_objects();

    let output_size = writer.save_pdf(&mut doc, output)?;

    Ok(MergeOutcome {
        page_count: Some(page_count),
        output_size,
    })
}

/// Add one page containing a full-page image XObject.
///
/// Returns the page's object id; the caller owns the page tree.
fn add_image_page(
    doc: &mut Document,
    pages_id: lopdf::ObjectId,
    img: &LoadedImage,
) -> Result<lopdf::ObjectId> {
    let (width, height) = img.dimensions();

    let image_stream = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        img.pixels.as_raw().clone(),
    );
    let image_id = doc.add_object(image_stream);

    // Scale the unit image square up to the page size and draw it.
    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    (width as i64).into(),
                    0.into(),
                    0.into(),
                    (height as i64).into(),
                    0.into(),
                    0.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let encoded = content
        .encode()
        .map_err(|e| StackError::merge_failed(format!("Failed to encode page content: {e}")))?;
    let content_id = doc.add_object(Stream::new(lopdf::Dictionary::new(), encoded));

    let page = dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            (width as i64).into(),
            (height as i64).into(),
        ],
        "Resources" => dictionary! {
            "XObject" => dictionary! { "Im0" => image_id },
        },
        "Contents" => content_id,
    };

    Ok(doc.add_object(page))
}
