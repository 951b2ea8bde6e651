//! Time/percent/pixel conversions for the enriched track. Every function
//! clamps to the valid range and degrades to zero on empty geometry, so
//! callers never see NaN or infinity.

/// Fraction of the video elapsed at `time`, as a percentage in `[0, 100]`.
/// A zero or negative duration maps every time to 0.
pub fn time_to_percent(time: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }
    (time / duration).clamp(0.0, 1.0) * 100.0
}

/// Map a track-local pixel offset to a time in `[0, duration]`.
pub fn pixel_to_time(x: f64, track_width: f64, duration: f64) -> f64 {
    if track_width <= 0.0 {
        return 0.0;
    }
    (x / track_width).clamp(0.0, 1.0) * duration.max(0.0)
}

/// Pixel position of `time` on a track of the given width.
pub fn time_to_pixel(time: f64, duration: f64, track_width: f64) -> f64 {
    time_to_percent(time, duration) / 100.0 * track_width.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_stays_in_range_and_is_monotonic() {
        let duration = 347.0;
        let mut previous = -1.0;
        for step in 0..=100 {
            let time = duration * step as f64 / 100.0;
            let percent = time_to_percent(time, duration);
            assert!((0.0..=100.0).contains(&percent));
            assert!(percent >= previous);
            previous = percent;
        }
    }

    #[test]
    fn test_percent_clamps_out_of_range_times() {
        assert_eq!(time_to_percent(-10.0, 100.0), 0.0);
        assert_eq!(time_to_percent(250.0, 100.0), 100.0);
    }

    #[test]
    fn test_zero_duration_never_produces_nan() {
        assert_eq!(time_to_percent(42.0, 0.0), 0.0);
        assert_eq!(time_to_percent(42.0, -1.0), 0.0);
        assert_eq!(time_to_percent(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_pixel_to_time_clamps_to_track() {
        assert_eq!(pixel_to_time(-5.0, 200.0, 100.0), 0.0);
        assert_eq!(pixel_to_time(100.0, 200.0, 100.0), 50.0);
        assert_eq!(pixel_to_time(500.0, 200.0, 100.0), 100.0);
        assert_eq!(pixel_to_time(50.0, 0.0, 100.0), 0.0);
    }

    #[test]
    fn test_pixel_time_round_trip() {
        let duration = 300.0;
        let width = 640.0;
        for step in 0..=64 {
            let x = width * step as f64 / 64.0;
            let time = pixel_to_time(x, width, duration);
            let back = time_to_pixel(time, duration, width);
            assert!((back - x).abs() < 1e-9);
        }
    }
}
