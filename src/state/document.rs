use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Annotation, AnnotationKind, Chapter, Segment, SegmentKind, VideoMeta};

pub const DOCUMENT_VERSION: &str = "1";

/// Errors surfaced by document load/save.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read or write the document file: {0}")]
    Io(#[from] std::io::Error),
    #[error("the document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything attached to one video: metadata plus the three time-indexed
/// collections. The timeline receives cloned snapshots of this and never
/// writes back into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentDoc {
    /// Document format version
    #[serde(default = "default_version")]
    pub version: String,
    /// The video this document enriches
    pub video: VideoMeta,
    /// Time-anchored annotations
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Named chapter starts
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    /// Typed intervals
    #[serde(default)]
    pub segments: Vec<Segment>,
}

fn default_version() -> String {
    DOCUMENT_VERSION.to_string()
}

impl EnrichmentDoc {
    /// Create an empty document for a video
    pub fn new(video: VideoMeta) -> Self {
        Self {
            version: default_version(),
            video,
            annotations: Vec::new(),
            chapters: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Save the document to a JSON file
    pub fn save_to(&self, path: &Path) -> Result<(), DocumentError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a document from a JSON file
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let json = fs::read_to_string(path)?;
        let doc: EnrichmentDoc = serde_json::from_str(&json)?;
        Ok(doc)
    }

    /// The built-in demo document: a five-minute annotated screening with
    /// every annotation kind, four chapters, and a fully segmented runtime.
    pub fn sample() -> Self {
        let mut video = VideoMeta::new(
            "Big Buck Bunny (annotated screening)",
            "https://www.youtube.com/watch?v=aqz-KE-bpKQ",
            300.0,
        );
        video.description = Some("Demo document used until one is opened".into());

        let mut doc = Self::new(video);

        doc.annotations = vec![
            Annotation {
                title: Some("Important note".into()),
                author_name: Some("Ada".into()),
                ..Annotation::new(
                    15.0,
                    AnnotationKind::Text,
                    "This opening section introduces the key ideas.",
                )
            },
            Annotation {
                title: Some("Quick check".into()),
                quiz_options: vec![
                    "A rabbit".into(),
                    "A squirrel".into(),
                    "A chinchilla".into(),
                ],
                correct_answer: Some(0),
                duration: Some(10.0),
                ..Annotation::new(75.0, AnnotationKind::Quiz, "Who is the main character?")
            },
            Annotation {
                title: Some("Further reading".into()),
                link: Some("https://example.com/making-of".into()),
                ..Annotation::new(150.0, AnnotationKind::Link, "Production notes for this scene")
            },
            Annotation {
                title: Some("Heads up".into()),
                position: Some((0.65, 0.2)),
                ..Annotation::new(220.0, AnnotationKind::Popup, "Watch the background here.")
            },
        ];

        doc.chapters = vec![
            Chapter {
                color: Some("#10B981".into()),
                ..Chapter::new(0.0, "Introduction")
            },
            Chapter {
                color: Some("#3B82F6".into()),
                ..Chapter::new(60.0, "Deep dive")
            },
            Chapter {
                color: Some("#F59E0B".into()),
                ..Chapter::new(180.0, "Worked examples")
            },
            Chapter {
                color: Some("#EF4444".into()),
                ..Chapter::new(240.0, "Conclusion")
            },
        ];

        doc.segments = vec![
            Segment::new(0.0, 30.0, "Opening", SegmentKind::Intro),
            Segment::new(30.0, 90.0, "First part", SegmentKind::Content),
            Segment::new(90.0, 120.0, "Sponsor break", SegmentKind::Ad),
            Segment::new(120.0, 200.0, "Second part", SegmentKind::Content),
            Segment::new(200.0, 230.0, "Key moment", SegmentKind::Highlight),
            Segment::new(230.0, 270.0, "Third part", SegmentKind::Content),
            Segment::new(270.0, 300.0, "Wrap-up", SegmentKind::Outro),
        ];

        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_document_shape() {
        let doc = EnrichmentDoc::sample();
        assert_eq!(doc.annotations.len(), 4);
        assert_eq!(doc.chapters.len(), 4);
        assert_eq!(doc.segments.len(), 7);
        assert_eq!(doc.video.duration, 300.0);
    }

    #[test]
    fn test_document_serialization_round_trip() {
        let doc = EnrichmentDoc::sample();
        let json = serde_json::to_string_pretty(&doc).unwrap();
        let restored: EnrichmentDoc = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, restored);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let json = r#"{
            "video": {
                "id": "7f0c0c4e-3a66-4d6b-8f3e-25c33e5a2b10",
                "title": "Bare",
                "url": "",
                "duration": 10.0
            }
        }"#;
        let doc: EnrichmentDoc = serde_json::from_str(json).unwrap();
        assert_eq!(doc.version, DOCUMENT_VERSION);
        assert!(doc.annotations.is_empty());
        assert!(doc.chapters.is_empty());
        assert!(doc.segments.is_empty());
    }
}
