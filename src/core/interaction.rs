//! Pointer handling for the enriched track: a small state machine over
//! Idle, Hovering, and Dragging, plus the pixel-space marker hit-test.
//! The UI layer translates mouse events into calls here and forwards any
//! returned seek target to its callback; this module never touches the
//! playhead itself.

use crate::constants::MARKER_HIT_TOLERANCE_PX;

use super::coords::{pixel_to_time, time_to_pixel};
use super::markers::TimelineMarker;

/// The nearest marker within the hit tolerance of pixel `x`, ties going to
/// the earlier marker. Distance is measured in pixels, not seconds, so the
/// feel is the same at every video duration.
pub fn hit_test_marker<'a>(
    markers: &'a [TimelineMarker],
    x: f64,
    track_width: f64,
    duration: f64,
) -> Option<&'a TimelineMarker> {
    let mut best: Option<&TimelineMarker> = None;
    let mut best_distance = f64::INFINITY;
    for marker in markers {
        let marker_x = time_to_pixel(marker.time, duration, track_width);
        let distance = (x - marker_x).abs();
        if distance <= MARKER_HIT_TOLERANCE_PX && distance < best_distance {
            best_distance = distance;
            best = Some(marker);
        }
    }
    best
}

/// Pointer state for the enriched track.
///
/// Transitions: pointer-down enters Dragging and seeks immediately; every
/// move while dragging seeks again; pointer-up anywhere returns to rest.
/// Moves while not dragging only update the hover time and hovered marker.
/// Leaving the track clears hover state unless a drag is in flight, so a
/// drag survives excursions outside the track.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimelineInteraction {
    dragging: bool,
    hover_time: Option<f64>,
    hovered_marker_id: Option<String>,
}

impl TimelineInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Track time under the pointer, when the pointer is over the track or
    /// a drag is in flight.
    pub fn hover_time(&self) -> Option<f64> {
        self.hover_time
    }

    /// Id of the marker under the pointer, within the hit tolerance.
    pub fn hovered_marker_id(&self) -> Option<&str> {
        self.hovered_marker_id.as_deref()
    }

    /// Pointer pressed on the track at track-local pixel `x`: enter
    /// Dragging and return the seek target for the press position.
    pub fn pointer_down(&mut self, x: f64, track_width: f64, duration: f64) -> f64 {
        self.dragging = true;
        let time = pixel_to_time(x, track_width, duration);
        self.hover_time = Some(time);
        time
    }

    /// Pointer moved to track-local pixel `x` (the track itself or the
    /// full-window capture layer while dragging). Updates hover state and
    /// returns a seek target only while dragging.
    pub fn pointer_move(
        &mut self,
        x: f64,
        track_width: f64,
        duration: f64,
        markers: &[TimelineMarker],
    ) -> Option<f64> {
        let time = pixel_to_time(x, track_width, duration);
        self.hover_time = Some(time);
        self.hovered_marker_id =
            hit_test_marker(markers, x, track_width, duration).map(|marker| marker.id.clone());
        self.dragging.then_some(time)
    }

    /// Pointer released anywhere: the drag ends, no seek fires.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Pointer left the track. Hover state is cleared unless dragging.
    pub fn pointer_leave(&mut self) {
        if !self.dragging {
            self.hover_time = None;
            self.hovered_marker_id = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::markers::synthesize_markers;
    use crate::state::{Annotation, AnnotationKind};

    const WIDTH: f64 = 200.0;
    const DURATION: f64 = 100.0;

    fn markers_at(times: &[f64]) -> Vec<TimelineMarker> {
        let annotations: Vec<Annotation> = times
            .iter()
            .map(|&t| Annotation::new(t, AnnotationKind::Text, format!("at {t}")))
            .collect();
        synthesize_markers(&annotations, &[], &[])
    }

    #[test]
    fn test_drag_sequence_seeks_on_down_and_move_only() {
        let mut interaction = TimelineInteraction::new();
        let markers = markers_at(&[]);

        // Press at the pixel for t=50.
        let seek = interaction.pointer_down(100.0, WIDTH, DURATION);
        assert_eq!(seek, 50.0);
        assert!(interaction.is_dragging());

        // Drag to the pixel for t=80.
        let seek = interaction.pointer_move(160.0, WIDTH, DURATION, &markers);
        assert_eq!(seek, Some(80.0));

        // Release: no further seek, drag over.
        interaction.pointer_up();
        assert!(!interaction.is_dragging());

        // Idle move afterwards hovers without seeking.
        let seek = interaction.pointer_move(20.0, WIDTH, DURATION, &markers);
        assert_eq!(seek, None);
        assert_eq!(interaction.hover_time(), Some(10.0));
    }

    #[test]
    fn test_drag_positions_clamp_to_the_track() {
        let mut interaction = TimelineInteraction::new();
        let markers = markers_at(&[]);
        interaction.pointer_down(100.0, WIDTH, DURATION);
        assert_eq!(interaction.pointer_move(-40.0, WIDTH, DURATION, &markers), Some(0.0));
        assert_eq!(
            interaction.pointer_move(WIDTH + 55.0, WIDTH, DURATION, &markers),
            Some(DURATION)
        );
    }

    #[test]
    fn test_leave_clears_hover_only_when_not_dragging() {
        let mut interaction = TimelineInteraction::new();
        let markers = markers_at(&[25.0]);

        interaction.pointer_move(50.0, WIDTH, DURATION, &markers);
        assert_eq!(interaction.hover_time(), Some(25.0));
        assert!(interaction.hovered_marker_id().is_some());
        interaction.pointer_leave();
        assert_eq!(interaction.hover_time(), None);
        assert!(interaction.hovered_marker_id().is_none());

        interaction.pointer_down(50.0, WIDTH, DURATION);
        interaction.pointer_leave();
        assert!(interaction.is_dragging());
        assert!(interaction.hover_time().is_some());
    }

    #[test]
    fn test_hit_test_tolerance_window() {
        // One marker at t=75, which sits at pixel 150.
        let markers = markers_at(&[75.0]);
        assert!(hit_test_marker(&markers, 150.0, WIDTH, DURATION).is_some());
        assert!(hit_test_marker(&markers, 160.0, WIDTH, DURATION).is_some());
        assert!(hit_test_marker(&markers, 140.0, WIDTH, DURATION).is_some());
        assert!(hit_test_marker(&markers, 160.5, WIDTH, DURATION).is_none());
        assert!(hit_test_marker(&markers, 139.5, WIDTH, DURATION).is_none());
    }

    #[test]
    fn test_hit_test_takes_nearest_and_breaks_ties_to_the_earlier() {
        // On a 256 px track over 128 s, t=50 sits at pixel 100 and t=55 at
        // pixel 110, both exactly.
        let markers = markers_at(&[50.0, 55.0]);
        let hit = |x: f64| hit_test_marker(&markers, x, 256.0, 128.0).map(|m| m.time);
        assert_eq!(hit(104.0), Some(50.0));
        assert_eq!(hit(106.0), Some(55.0));
        assert_eq!(hit(105.0), Some(50.0));
    }

    #[test]
    fn test_hit_test_distance_is_pixels_not_seconds() {
        // On a long video the same pixel tolerance spans far more seconds.
        let markers = markers_at(&[1800.0]);
        let duration = 3600.0;
        let marker_x = time_to_pixel(1800.0, duration, WIDTH);
        // 9 px away is 162 s away in time, still a hit.
        assert!(hit_test_marker(&markers, marker_x + 9.0, WIDTH, duration).is_some());
        assert!(hit_test_marker(&markers, marker_x + 11.0, WIDTH, duration).is_none());
    }

    #[test]
    fn test_hovering_a_marker_does_not_change_seek_targets() {
        // A press near, but not on, a marker still seeks the pixel time; the
        // exact-time jump belongs to the marker element itself.
        let mut interaction = TimelineInteraction::new();
        let markers = markers_at(&[75.0]);
        interaction.pointer_move(152.0, WIDTH, DURATION, &markers);
        assert_eq!(
            interaction.hovered_marker_id(),
            Some(markers[0].id.as_str())
        );
        let seek = interaction.pointer_down(152.0, WIDTH, DURATION);
        assert_eq!(seek, 76.0);
    }
}
