use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::CHAPTER_MARKER_COLOR;

/// A named instant in the video; a chapter runs until the next one starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Unique identifier
    pub id: Uuid,
    /// Start time in seconds
    pub time: f64,
    /// Chapter title
    pub title: String,
    /// Optional longer description (shown in the marker tooltip)
    #[serde(default)]
    pub description: Option<String>,
    /// Optional color (hex string, e.g., "#3B82F6")
    #[serde(default)]
    pub color: Option<String>,
}

impl Chapter {
    /// Create a new chapter at the given time
    pub fn new(time: f64, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            time,
            title: title.into(),
            description: None,
            color: None,
        }
    }

    /// Marker color, falling back to the shared chapter color
    pub fn marker_color(&self) -> &str {
        self.color.as_deref().unwrap_or(CHAPTER_MARKER_COLOR)
    }
}
