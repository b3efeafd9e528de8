//! Input loading and output writing.

pub mod reader;
pub mod writer;

pub use reader::{LoadedImage, LoadedPdf, load_image, load_pdf};
pub use writer::{OutputFile, OutputWriter, WriteOptions};
