use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata for the video a document annotates. Playback itself is delegated
/// to an external surface; only the URL and duration matter here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMeta {
    /// Unique identifier
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Source URL (direct file or YouTube link)
    pub url: String,
    /// Duration in seconds
    pub duration: f64,
}

impl VideoMeta {
    /// Create metadata for a video
    pub fn new(title: impl Into<String>, url: impl Into<String>, duration: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            url: url.into(),
            duration,
        }
    }
}

impl Default for VideoMeta {
    fn default() -> Self {
        Self::new("Untitled video", "", 0.0)
    }
}
