//! Playhead context: which chapter and segment the current time falls in,
//! which annotations are on screen, and where chapter navigation lands.
//! Everything here is a pure function of (collection, time) and is
//! recomputed on every playhead change.

use crate::constants::CHAPTER_BACK_GRACE_SECONDS;
use crate::state::{Annotation, Chapter, Segment};

/// The first segment in document order containing `time`, both ends
/// inclusive. Document order decides overlaps.
pub fn segment_at(segments: &[Segment], time: f64) -> Option<&Segment> {
    segments.iter().find(|segment| segment.contains(time))
}

/// The chapter whose start is closest at or before `time`. `None` when
/// `time` precedes every chapter, including negative defensive inputs.
pub fn chapter_at(chapters: &[Chapter], time: f64) -> Option<&Chapter> {
    chapters
        .iter()
        .filter(|chapter| chapter.time <= time)
        .max_by(|a, b| a.time.total_cmp(&b.time))
}

/// Annotations whose on-screen window contains `time`.
pub fn active_annotations(annotations: &[Annotation], time: f64) -> Vec<&Annotation> {
    annotations
        .iter()
        .filter(|annotation| annotation.is_active_at(time))
        .collect()
}

/// Seek target for "previous chapter". Within the grace window after a
/// chapter start this skips back to the chapter before it; otherwise it
/// restarts the current chapter. Falls back to the start of the video when
/// nothing is earlier. `None` only when there are no chapters at all.
pub fn previous_chapter_time(chapters: &[Chapter], time: f64) -> Option<f64> {
    if chapters.is_empty() {
        return None;
    }
    chapters
        .iter()
        .filter(|chapter| chapter.time + CHAPTER_BACK_GRACE_SECONDS < time)
        .map(|chapter| chapter.time)
        .max_by(f64::total_cmp)
        .or(Some(0.0))
}

/// Seek target for "next chapter": the earliest chapter start strictly
/// after `time`, if any.
pub fn next_chapter_time(chapters: &[Chapter], time: f64) -> Option<f64> {
    chapters
        .iter()
        .filter(|chapter| chapter.time > time)
        .map(|chapter| chapter.time)
        .min_by(f64::total_cmp)
}
