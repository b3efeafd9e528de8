//! PDF page merging.
//!
//! Inputs are loaded with `lopdf` and appended into a single accumulator
//! document: each subsequent document's objects are renumbered past the
//! accumulator's highest object id, moved into the accumulator's object map,
//! and its pages are appended to the page tree. The result is compressed,
//! renumbered, and written once.

use std::path::{Path, PathBuf};

use lopdf::{Document, Object, ObjectId};
use tracing::info;

use crate::error::{Result, StackError};
use crate::io::{OutputWriter, load_pdf};
use crate::merge::MergeOutcome;

/// Merge PDF inputs, in order, into a single output PDF.
pub(crate) fn stack_pdfs(
    inputs: &[PathBuf],
    output: &Path,
    writer: &OutputWriter,
) -> Result<MergeOutcome> {
    let mut loaded = Vec::with_capacity(inputs.len());
    for path in inputs {
        info!("processing {}", path.display());
        loaded.push(load_pdf(path)?);
    }

    let mut iter = loaded.into_iter();
    let first = iter.next().ok_or(StackError::NoFilesToStack)?;

    // The first document is the accumulator; the rest are appended to it.
    let mut merged = first.document;
    let mut max_id = merged.max_id;
    let mut total_pages = first.page_count;

    for next in iter {
        let mut doc = next.document;

        // Renumber objects to avoid id conflicts with the accumulator.
        doc.renumber_objects_with(max_id + 1);
        max_id = doc.max_id;

        let doc_pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
        total_pages += doc_pages.len();

        merged.objects.extend(doc.objects);
        append_pages_to_tree(&mut merged, &doc_pages)?;
    }

    merged.compress();
    merged.renumber_objects();

    let output_size = writer.save_pdf(&mut merged, output)?;

    Ok(MergeOutcome {
        page_count: Some(total_pages),
        output_size,
    })
}

/// Append page references to the accumulator document's page tree.
fn append_pages_to_tree(merged: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
    let catalog = merged
        .catalog_mut()
        .map_err(|e| StackError::merge_failed(format!("Failed to get catalog: {e}")))?;

    let pages_id = catalog
        .get(b"Pages")
        .and_then(|p| p.as_reference())
        .map_err(|e| StackError::merge_failed(format!("Failed to get pages reference: {e}")))?;

    let pages_dict = merged
        .get_object_mut(pages_id)
        .map_err(|e| StackError::merge_failed(format!("Failed to get pages object: {e}")))?;

    let Object::Dictionary(dict) = pages_dict else {
        return Err(StackError::merge_failed("Pages object is not a dictionary"));
    };

    let kids = dict
        .get_mut(b"Kids")
        .map_err(|_| StackError::merge_failed("Pages dictionary missing Kids array"))?;

    let Object::Array(kids_array) = kids else {
        return Err(StackError::merge_failed("Kids is not an array"));
    };

    for &page_id in page_ids {
        kids_array.push(Object::Reference(page_id));
    }

    let current_count = dict.get(b"Count").and_then(|c| c.as_i64()).unwrap_or(0);
    dict.set("Count", Object::Integer(current_count + page_ids.len() as i64));

    Ok(())
}
