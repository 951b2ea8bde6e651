//! Marker synthesis: flatten annotations, chapters, and segments into one
//! time-ordered marker list for the enriched track. The list is derived
//! state, rebuilt from scratch whenever a source collection changes.

use crate::state::{Annotation, Chapter, Segment};

/// Which collection a marker came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    Annotation,
    Chapter,
    SegmentStart,
    SegmentEnd,
}

/// The originating entity, cloned into the marker so tooltips can reach
/// fields the marker itself does not carry.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkerSource {
    Annotation(Annotation),
    Chapter(Chapter),
    Segment(Segment),
}

impl MarkerSource {
    /// Longer text for the marker tooltip, when the source has one.
    pub fn description(&self) -> Option<&str> {
        match self {
            MarkerSource::Annotation(_) => None,
            MarkerSource::Chapter(chapter) => chapter.description.as_deref(),
            MarkerSource::Segment(segment) => segment.description.as_deref(),
        }
    }
}

/// A render-ready timeline marker.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineMarker {
    /// Stable id derived from the source entity, e.g. `chapter-<uuid>`.
    /// Segment boundaries get `segment-start-<uuid>` / `segment-end-<uuid>`.
    pub id: String,
    /// Position in seconds.
    pub time: f64,
    pub kind: MarkerKind,
    /// Tooltip title, already resolved through the fallback rules.
    pub title: String,
    /// Hex color resolved from the per-kind tables or an explicit override.
    pub color: String,
    pub source: MarkerSource,
}

impl TimelineMarker {
    /// Short label naming what the marker points at, for tooltips.
    pub fn kind_label(&self) -> &'static str {
        match (&self.source, self.kind) {
            (MarkerSource::Annotation(annotation), _) => annotation.kind.label(),
            (_, MarkerKind::Chapter) => "Chapter",
            (_, MarkerKind::SegmentStart) => "Segment start",
            (_, MarkerKind::SegmentEnd) => "Segment end",
            (_, MarkerKind::Annotation) => "Note",
        }
    }
}

/// Build the merged marker list: one marker per annotation and chapter, two
/// per segment (its boundaries), sorted ascending by time. The sort is
/// stable, so equal times keep emission order (annotations, then chapters,
/// then segment boundaries in document order).
pub fn synthesize_markers(
    annotations: &[Annotation],
    chapters: &[Chapter],
    segments: &[Segment],
) -> Vec<TimelineMarker> {
    let mut markers =
        Vec::with_capacity(annotations.len() + chapters.len() + segments.len() * 2);

    for annotation in annotations {
        markers.push(TimelineMarker {
            id: format!("annotation-{}", annotation.id),
            time: annotation.time,
            kind: MarkerKind::Annotation,
            title: annotation.marker_title().to_string(),
            color: annotation.kind.marker_color().to_string(),
            source: MarkerSource::Annotation(annotation.clone()),
        });
    }

    for chapter in chapters {
        markers.push(TimelineMarker {
            id: format!("chapter-{}", chapter.id),
            time: chapter.time,
            kind: MarkerKind::Chapter,
            title: chapter.title.clone(),
            color: chapter.marker_color().to_string(),
            source: MarkerSource::Chapter(chapter.clone()),
        });
    }

    for segment in segments {
        let color = segment.effective_color().to_string();
        markers.push(TimelineMarker {
            id: format!("segment-start-{}", segment.id),
            time: segment.start_time,
            kind: MarkerKind::SegmentStart,
            title: format!("{} (start)", segment.title),
            color: color.clone(),
            source: MarkerSource::Segment(segment.clone()),
        });
        markers.push(TimelineMarker {
            id: format!("segment-end-{}", segment.id),
            time: segment.end_time,
            kind: MarkerKind::SegmentEnd,
            title: format!("{} (end)", segment.title),
            color,
            source: MarkerSource::Segment(segment.clone()),
        });
    }

    markers.sort_by(|a, b| a.time.total_cmp(&b.time));
    markers
}
