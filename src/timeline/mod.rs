//! Timeline module
//!
//! The enriched track plus its satellite pieces: the context bar, chapter
//! pills, marker elements, and transport buttons.

mod chapter_nav;
mod context_bar;
mod marker_element;
mod panel;
mod playback_controls;

pub use panel::EnrichedTimeline;
