//! Render projection: turn markers, segments, and the playhead into plain
//! percent-positioned view data the track components print into styles.
//! Keeping this pure keeps the visual contract testable without a webview.

use crate::state::Segment;
use crate::utils::format_clock;

use super::coords::time_to_percent;
use super::markers::TimelineMarker;

/// One marker ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerView {
    pub id: String,
    /// Exact source time, used verbatim when the marker is clicked.
    pub time: f64,
    pub left_percent: f64,
    pub color: String,
    pub title: String,
}

/// One segment band painted behind the track.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentBand {
    pub id: String,
    pub left_percent: f64,
    /// Never negative; a malformed interval collapses to zero width.
    pub width_percent: f64,
    pub color: String,
    /// Hover label, e.g. "Sponsor break: 1:30 - 2:00".
    pub label: String,
}

/// Everything the track needs to paint one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineProjection {
    pub progress_percent: f64,
    pub markers: Vec<MarkerView>,
    pub bands: Vec<SegmentBand>,
}

/// Project the derived marker list and raw segments onto the track.
pub fn project(
    markers: &[TimelineMarker],
    segments: &[Segment],
    current_time: f64,
    duration: f64,
) -> TimelineProjection {
    let markers = markers
        .iter()
        .map(|marker| MarkerView {
            id: marker.id.clone(),
            time: marker.time,
            left_percent: time_to_percent(marker.time, duration),
            color: marker.color.clone(),
            title: marker.title.clone(),
        })
        .collect();

    let bands = segments
        .iter()
        .map(|segment| {
            let start = time_to_percent(segment.start_time, duration);
            let end = time_to_percent(segment.end_time, duration);
            SegmentBand {
                id: segment.id.to_string(),
                left_percent: start,
                width_percent: (end - start).max(0.0),
                color: segment.effective_color().to_string(),
                label: format!(
                    "{}: {} - {}",
                    segment.title,
                    format_clock(segment.start_time),
                    format_clock(segment.end_time)
                ),
            }
        })
        .collect();

    TimelineProjection {
        progress_percent: time_to_percent(current_time, duration),
        markers,
        bands,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::{chapter_at, segment_at};
    use crate::core::markers::synthesize_markers;
    use crate::state::{Annotation, AnnotationKind, Chapter, SegmentKind};

    #[test]
    fn test_band_width_never_negative() {
        let mut backwards = Segment::new(200.0, 100.0, "Backwards", SegmentKind::Content);
        backwards.color = Some("#123456".into());
        let projection = project(&[], &[backwards], 0.0, 300.0);
        assert_eq!(projection.bands[0].width_percent, 0.0);
        assert!(projection.bands[0].left_percent > 0.0);
    }

    #[test]
    fn test_progress_clamps_to_track() {
        assert_eq!(project(&[], &[], -10.0, 100.0).progress_percent, 0.0);
        assert_eq!(project(&[], &[], 250.0, 100.0).progress_percent, 100.0);
        assert_eq!(project(&[], &[], 50.0, 0.0).progress_percent, 0.0);
    }

    #[test]
    fn test_band_label_includes_clock_range() {
        let segment = Segment::new(90.0, 120.0, "Sponsor break", SegmentKind::Ad);
        let projection = project(&[], &[segment], 0.0, 300.0);
        assert_eq!(projection.bands[0].label, "Sponsor break: 1:30 - 2:00");
    }

    // The worked review scenario: one annotation, two chapters, two
    // segments on a five-minute video, playhead at 45 s.
    #[test]
    fn test_review_scenario_at_45_seconds() {
        let annotations = vec![Annotation::new(15.0, AnnotationKind::Text, "note")];
        let chapters = vec![Chapter::new(0.0, "Intro"), Chapter::new(60.0, "Body")];
        let segments = vec![
            Segment::new(0.0, 30.0, "Cold open", SegmentKind::Intro),
            Segment::new(30.0, 90.0, "First act", SegmentKind::Content),
        ];
        let duration = 300.0;
        let current = 45.0;

        let markers = synthesize_markers(&annotations, &chapters, &segments);
        assert_eq!(markers.len(), 7);

        assert_eq!(chapter_at(&chapters, current).map(|c| c.time), Some(0.0));
        let segment = segment_at(&segments, current).unwrap();
        assert_eq!((segment.start_time, segment.end_time), (30.0, 90.0));

        let projection = project(&markers, &segments, current, duration);
        assert_eq!(projection.progress_percent, 15.0);
        assert_eq!(projection.markers.len(), 7);
        assert_eq!(projection.bands.len(), 2);
        assert_eq!(projection.bands[1].left_percent, 10.0);
        assert_eq!(projection.bands[1].width_percent, 20.0);
    }
}
