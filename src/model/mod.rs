//! Data model for outline inference.
//!
//! This module defines the intermediate representation that bridges page
//! decoding and heading classification: per-line records with a single
//! dominant style, the style keys used to cluster them, and the public
//! outline shape produced by the engine.

mod line;
mod outline;
mod section;
mod style;

pub use line::LineRecord;
pub use outline::{Heading, HeadingLevel, OutlineDocument};
pub use section::SectionChunk;
pub use style::StyleKey;
