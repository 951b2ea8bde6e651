//! State management module
//!
//! This module contains the data model for an enrichment document:
//! - VideoMeta: the video a document annotates
//! - Annotation: time-anchored notes, quizzes, links, popups
//! - Chapter: named starts that carry until the next chapter
//! - Segment: typed intervals of the runtime
//! - EnrichmentDoc: the on-disk container tying them together

mod annotation;
mod chapter;
mod document;
mod segment;
mod video;

pub use annotation::*;
pub use chapter::*;
pub use document::*;
pub use segment::*;
pub use video::*;
