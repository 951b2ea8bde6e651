use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    ANNOTATION_LINK_COLOR, ANNOTATION_POPUP_COLOR, ANNOTATION_QUIZ_COLOR, ANNOTATION_TEXT_COLOR,
    DEFAULT_ANNOTATION_SECONDS,
};

/// What kind of content an annotation carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    Text,
    Quiz,
    Link,
    Popup,
}

impl AnnotationKind {
    /// Marker color for this kind.
    pub fn marker_color(&self) -> &'static str {
        match self {
            AnnotationKind::Text => ANNOTATION_TEXT_COLOR,
            AnnotationKind::Quiz => ANNOTATION_QUIZ_COLOR,
            AnnotationKind::Link => ANNOTATION_LINK_COLOR,
            AnnotationKind::Popup => ANNOTATION_POPUP_COLOR,
        }
    }

    /// Short user-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            AnnotationKind::Text => "Note",
            AnnotationKind::Quiz => "Quiz",
            AnnotationKind::Link => "Link",
            AnnotationKind::Popup => "Popup",
        }
    }
}

/// A time-anchored annotation attached to the video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Unique identifier
    pub id: Uuid,
    /// Anchor time in seconds
    pub time: f64,
    /// Content kind
    pub kind: AnnotationKind,
    /// Optional short title shown on the timeline and overlay
    #[serde(default)]
    pub title: Option<String>,
    /// Body text (quiz question, link caption, note body)
    pub content: String,
    /// How long the annotation stays on screen; `None` means the default window
    #[serde(default)]
    pub duration: Option<f64>,
    /// Display name of the author, if known
    #[serde(default)]
    pub author_name: Option<String>,
    /// Target URL for `Link` annotations
    #[serde(default)]
    pub link: Option<String>,
    /// Answer options for `Quiz` annotations
    #[serde(default)]
    pub quiz_options: Vec<String>,
    /// Index into `quiz_options` of the correct answer
    #[serde(default)]
    pub correct_answer: Option<usize>,
    /// Fractional overlay position (0.0..=1.0 of the player surface)
    #[serde(default)]
    pub position: Option<(f64, f64)>,
    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Annotation {
    /// Create a new annotation at the given time
    pub fn new(time: f64, kind: AnnotationKind, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            time,
            kind,
            title: None,
            content: content.into(),
            duration: None,
            author_name: None,
            link: None,
            quiz_options: Vec::new(),
            correct_answer: None,
            position: None,
            created_at: Utc::now(),
        }
    }

    /// When this annotation leaves the screen
    pub fn end_time(&self) -> f64 {
        self.time + self.duration.unwrap_or(DEFAULT_ANNOTATION_SECONDS)
    }

    /// Whether the annotation is on screen at `time` (both ends inclusive)
    pub fn is_active_at(&self, time: f64) -> bool {
        time >= self.time && time <= self.end_time()
    }

    /// Title for the timeline marker; an empty title falls back to the body
    pub fn marker_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_window_uses_default_duration() {
        let annotation = Annotation::new(10.0, AnnotationKind::Text, "hello");
        assert!(annotation.is_active_at(10.0));
        assert!(annotation.is_active_at(15.0));
        assert!(!annotation.is_active_at(15.1));
        assert!(!annotation.is_active_at(9.9));
    }

    #[test]
    fn test_active_window_uses_explicit_duration() {
        let annotation = Annotation {
            duration: Some(2.0),
            ..Annotation::new(10.0, AnnotationKind::Quiz, "q")
        };
        assert!(annotation.is_active_at(12.0));
        assert!(!annotation.is_active_at(12.5));
    }

    #[test]
    fn test_marker_title_falls_back_to_content() {
        let mut annotation = Annotation::new(0.0, AnnotationKind::Text, "body text");
        assert_eq!(annotation.marker_title(), "body text");
        annotation.title = Some(String::new());
        assert_eq!(annotation.marker_title(), "body text");
        annotation.title = Some("Heading".into());
        assert_eq!(annotation.marker_title(), "Heading");
    }
}
