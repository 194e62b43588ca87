//! # pdfoutline
//!
//! Infers a hierarchical document outline (title, H1–H3 headings) from
//! the typography of a PDF: no bookmarks, no tagged structure, only the
//! statistical regularities of font size, boldness, and color.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfoutline::{extract_file, to_json, JsonFormat};
//!
//! fn main() -> pdfoutline::Result<()> {
//!     let doc = extract_file("report.pdf")?;
//!     println!("{}", doc.title);
//!     println!("{}", to_json(&doc, JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## How it works
//!
//! 1. Page content is decoded into per-line spans with font metadata.
//! 2. Each line is reduced to one dominant style, weighted by characters.
//! 3. The most frequent style becomes the body style; the largest line on
//!    page 1 becomes the title.
//! 4. Non-body, non-title lines are classified against a detected H1
//!    reference style (numbered headings vote first) into H1–H3.
//! 5. Headings come out in reading order as a JSON-serializable outline.
//!
//! The engine is deterministic: every tie breaks toward the first-seen
//! value, so identical input yields byte-identical output.

pub mod batch;
pub mod decode;
pub mod detect;
pub mod engine;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use decode::{LopdfSource, PageSource, PageText, RawLine, Span, FLAG_BOLD, FLAG_ITALIC};
pub use engine::{
    chunk_sections, collect_lines, infer_outline, outline_from_lines, EngineConfig,
};
pub use error::{Error, Result};
pub use model::{Heading, HeadingLevel, LineRecord, OutlineDocument, SectionChunk, StyleKey};
pub use render::{chunks_to_json, to_json, JsonFormat};

use std::io::Read;
use std::path::Path;

/// Extract an outline from a PDF file with the default configuration.
///
/// # Example
///
/// ```no_run
/// let doc = pdfoutline::extract_file("report.pdf").unwrap();
/// println!("{} headings", doc.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<OutlineDocument> {
    extract_file_with_config(path, &EngineConfig::default())
}

/// Extract an outline from a PDF file with a custom configuration.
pub fn extract_file_with_config<P: AsRef<Path>>(
    path: P,
    config: &EngineConfig,
) -> Result<OutlineDocument> {
    let source = LopdfSource::open(path)?;
    let pages = source.pages()?;
    Ok(infer_outline(&pages, config))
}

/// Extract an outline from PDF bytes.
pub fn extract_bytes(data: &[u8]) -> Result<OutlineDocument> {
    extract_bytes_with_config(data, &EngineConfig::default())
}

/// Extract an outline from PDF bytes with a custom configuration.
pub fn extract_bytes_with_config(data: &[u8], config: &EngineConfig) -> Result<OutlineDocument> {
    let source = LopdfSource::from_bytes(data)?;
    let pages = source.pages()?;
    Ok(infer_outline(&pages, config))
}

/// Extract an outline from a reader.
pub fn extract_reader<R: Read>(reader: R) -> Result<OutlineDocument> {
    let source = LopdfSource::from_reader(reader)?;
    let pages = source.pages()?;
    Ok(infer_outline(&pages, &EngineConfig::default()))
}

/// Extract and serialize in one step.
pub fn extract_to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = extract_file(path)?;
    to_json(&doc, format)
}

/// Extract per-line section chunks from a PDF file.
///
/// Every text line is attributed to its enclosing inferred heading; lines
/// before the first heading fall under the document title.
pub fn extract_sections_file<P: AsRef<Path>>(path: P) -> Result<Vec<SectionChunk>> {
    let source = LopdfSource::open(path)?;
    let pages = source.pages()?;
    let lines = collect_lines(&pages);
    let doc = outline_from_lines(&lines, &EngineConfig::default());
    Ok(chunk_sections(&lines, &doc, &doc.title))
}
