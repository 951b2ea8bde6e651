use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    SEGMENT_AD_COLOR, SEGMENT_CONTENT_COLOR, SEGMENT_DEFAULT_COLOR, SEGMENT_HIGHLIGHT_COLOR,
    SEGMENT_INTRO_COLOR, SEGMENT_OUTRO_COLOR, SEGMENT_TRANSITION_COLOR,
};

/// Editorial classification of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Intro,
    Content,
    Outro,
    Ad,
    Transition,
    Highlight,
    /// Catch-all so documents written with newer kinds still load; bands
    /// render in the default gray.
    #[serde(other)]
    Unknown,
}

impl SegmentKind {
    /// Band and boundary-marker color for this kind.
    pub fn color(&self) -> &'static str {
        match self {
            SegmentKind::Intro => SEGMENT_INTRO_COLOR,
            SegmentKind::Content => SEGMENT_CONTENT_COLOR,
            SegmentKind::Outro => SEGMENT_OUTRO_COLOR,
            SegmentKind::Ad => SEGMENT_AD_COLOR,
            SegmentKind::Transition => SEGMENT_TRANSITION_COLOR,
            SegmentKind::Highlight => SEGMENT_HIGHLIGHT_COLOR,
            SegmentKind::Unknown => SEGMENT_DEFAULT_COLOR,
        }
    }

    /// Short user-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            SegmentKind::Intro => "Intro",
            SegmentKind::Content => "Content",
            SegmentKind::Outro => "Outro",
            SegmentKind::Ad => "Ad",
            SegmentKind::Transition => "Transition",
            SegmentKind::Highlight => "Highlight",
            SegmentKind::Unknown => "Segment",
        }
    }
}

/// A typed interval of the video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Unique identifier
    pub id: Uuid,
    /// Start time in seconds
    pub start_time: f64,
    /// End time in seconds; producers keep `start_time < end_time`
    pub end_time: f64,
    /// Segment title
    pub title: String,
    /// Optional longer description (shown in the marker tooltip)
    #[serde(default)]
    pub description: Option<String>,
    /// Editorial kind
    pub kind: SegmentKind,
    /// Optional color override (hex string)
    #[serde(default)]
    pub color: Option<String>,
}

impl Segment {
    /// Create a new segment spanning `[start_time, end_time]`
    pub fn new(start_time: f64, end_time: f64, title: impl Into<String>, kind: SegmentKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_time,
            end_time,
            title: title.into(),
            description: None,
            kind,
            color: None,
        }
    }

    /// Whether `time` falls inside this segment (both ends inclusive)
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time <= self.end_time
    }

    /// Segment length in seconds
    #[allow(dead_code)]
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Explicit color if set, otherwise the kind's color
    pub fn effective_color(&self) -> &str {
        self.color.as_deref().unwrap_or_else(|| self.kind.color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive_on_both_ends() {
        let segment = Segment::new(90.0, 120.0, "Sponsor break", SegmentKind::Ad);
        assert!(segment.contains(90.0));
        assert!(segment.contains(105.0));
        assert!(segment.contains(120.0));
        assert!(!segment.contains(120.01));
        assert!(!segment.contains(89.99));
    }

    #[test]
    fn test_effective_color_prefers_override() {
        let mut segment = Segment::new(0.0, 10.0, "Opening", SegmentKind::Intro);
        assert_eq!(segment.effective_color(), SEGMENT_INTRO_COLOR);
        segment.color = Some("#123456".into());
        assert_eq!(segment.effective_color(), "#123456");
    }

    #[test]
    fn test_unrecognized_kind_falls_back_to_gray() {
        let kind: SegmentKind = serde_json::from_str("\"recap\"").unwrap();
        assert_eq!(kind, SegmentKind::Unknown);
        assert_eq!(kind.color(), SEGMENT_DEFAULT_COLOR);
        assert_eq!(kind.label(), "Segment");
    }
}
