use urlencoding;

/// Format seconds as M:SS for clocks, tooltips, and band labels.
/// Negative inputs clamp to 0:00.
pub fn format_clock(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Whether a URL points at YouTube (youtube.com or the short youtu.be form),
/// with something after the host.
pub fn is_youtube_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    match rest.split_once('/') {
        Some((host, path)) => (host == "youtube.com" || host == "youtu.be") && !path.is_empty(),
        None => false,
    }
}

/// Extract the 11-character video id from the common YouTube URL shapes:
/// `watch?v=`, `youtu.be/`, `/embed/`, and `/v/`.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    let tail = if let Some((_, tail)) = url.split_once("youtu.be/") {
        Some(tail)
    } else if url.contains("youtube.com/") {
        url.split_once("?v=")
            .or_else(|| url.split_once("&v="))
            .or_else(|| url.split_once("/embed/"))
            .or_else(|| url.split_once("/v/"))
            .map(|(_, tail)| tail)
    } else {
        None
    }?;
    let id = tail.get(..11)?;
    id.chars()
        .all(|c| !c.is_whitespace() && !matches!(c, '"' | '&' | '?' | '/'))
        .then_some(id)
}

/// Embed URL for a video id, with the player options the app expects.
#[allow(dead_code)]
pub fn youtube_embed_url(video_id: &str) -> String {
    let params = [
        ("enablejsapi", "1"),
        ("autoplay", "0"),
        ("controls", "1"),
        ("rel", "0"),
        ("modestbranding", "1"),
        ("playsinline", "1"),
    ];
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!(
        "https://www.youtube.com/embed/{}?{query}",
        urlencoding::encode(video_id)
    )
}

/// Thumbnail variants YouTube serves for a video id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ThumbnailQuality {
    Default,
    Medium,
    High,
    Standard,
    MaxRes,
}

impl ThumbnailQuality {
    fn file_stem(self) -> &'static str {
        match self {
            ThumbnailQuality::Default => "default",
            ThumbnailQuality::Medium => "mqdefault",
            ThumbnailQuality::High => "hqdefault",
            ThumbnailQuality::Standard => "sddefault",
            ThumbnailQuality::MaxRes => "maxresdefault",
        }
    }
}

/// Thumbnail URL for a YouTube video id.
pub fn youtube_thumbnail_url(video_id: &str, quality: ThumbnailQuality) -> String {
    format!(
        "https://img.youtube.com/vi/{}/{}.jpg",
        urlencoding::encode(video_id),
        quality.file_stem()
    )
}

/// Whether a URL looks playable: a YouTube link, a direct file with a known
/// video extension, or an HLS stream.
pub fn is_valid_video_url(url: &str) -> bool {
    let has_scheme = url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("file://");
    if !has_scheme {
        return false;
    }
    if is_youtube_url(url) {
        return true;
    }
    const VIDEO_EXTENSIONS: [&str; 6] = [".mp4", ".webm", ".ogg", ".mov", ".avi", ".wmv"];
    let lower = url.to_lowercase();
    VIDEO_EXTENSIONS.iter().any(|ext| lower.contains(ext)) || lower.contains(".m3u8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "0:00");
        assert_eq!(format_clock(59.9), "0:59");
        assert_eq!(format_clock(60.0), "1:00");
        assert_eq!(format_clock(90.0), "1:30");
        assert_eq!(format_clock(300.0), "5:00");
        assert_eq!(format_clock(3599.0), "59:59");
        assert_eq!(format_clock(-3.0), "0:00");
    }

    #[test]
    fn test_is_youtube_url() {
        assert!(is_youtube_url("https://www.youtube.com/watch?v=aqz-KE-bpKQ"));
        assert!(is_youtube_url("http://youtube.com/embed/aqz-KE-bpKQ"));
        assert!(is_youtube_url("https://youtu.be/aqz-KE-bpKQ"));
        assert!(!is_youtube_url("https://youtube.com"));
        assert!(!is_youtube_url("https://example.com/watch?v=aqz-KE-bpKQ"));
        assert!(!is_youtube_url("https://myyoutube.com/watch?v=x"));
    }

    #[test]
    fn test_youtube_video_id_extraction() {
        let id = Some("aqz-KE-bpKQ");
        assert_eq!(
            youtube_video_id("https://www.youtube.com/watch?v=aqz-KE-bpKQ"),
            id
        );
        assert_eq!(
            youtube_video_id("https://www.youtube.com/watch?list=PL1&v=aqz-KE-bpKQ&t=30s"),
            id
        );
        assert_eq!(youtube_video_id("https://youtu.be/aqz-KE-bpKQ?t=10"), id);
        assert_eq!(
            youtube_video_id("https://www.youtube.com/embed/aqz-KE-bpKQ"),
            id
        );
        assert_eq!(youtube_video_id("https://youtu.be/short"), None);
        assert_eq!(youtube_video_id("https://example.com/watch?v=aqz-KE-bpKQ"), None);
    }

    #[test]
    fn test_youtube_embed_url_carries_player_options() {
        let url = youtube_embed_url("aqz-KE-bpKQ");
        assert!(url.starts_with("https://www.youtube.com/embed/aqz-KE-bpKQ?"));
        assert!(url.contains("enablejsapi=1"));
        assert!(url.contains("modestbranding=1"));
    }

    #[test]
    fn test_thumbnail_urls() {
        assert_eq!(
            youtube_thumbnail_url("aqz-KE-bpKQ", ThumbnailQuality::Medium),
            "https://img.youtube.com/vi/aqz-KE-bpKQ/mqdefault.jpg"
        );
        assert_eq!(
            youtube_thumbnail_url("aqz-KE-bpKQ", ThumbnailQuality::MaxRes),
            "https://img.youtube.com/vi/aqz-KE-bpKQ/maxresdefault.jpg"
        );
    }

    #[test]
    fn test_is_valid_video_url() {
        assert!(is_valid_video_url("https://youtu.be/aqz-KE-bpKQ"));
        assert!(is_valid_video_url("https://cdn.example.com/clip.MP4"));
        assert!(is_valid_video_url("file:///home/user/talk.webm"));
        assert!(is_valid_video_url("https://stream.example.com/live.m3u8"));
        assert!(!is_valid_video_url("ftp://example.com/clip.mp4"));
        assert!(!is_valid_video_url("https://example.com/notes.pdf"));
        assert!(!is_valid_video_url("just words"));
    }
}
