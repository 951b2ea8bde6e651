//! Shared UI constants such as colors, marker color tables, interaction
//! tuning values, and injected scripts.

pub const BG_DEEPEST: &str = "#09090b";
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";
pub const BORDER_ACCENT: &str = "#3b82f6";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_PROGRESS: &str = "#3b82f6";

// Marker colors per annotation kind.
pub const ANNOTATION_TEXT_COLOR: &str = "#FCD34D";
pub const ANNOTATION_QUIZ_COLOR: &str = "#F87171";
pub const ANNOTATION_LINK_COLOR: &str = "#60A5FA";
pub const ANNOTATION_POPUP_COLOR: &str = "#A78BFA";

/// Used when a chapter carries no explicit color.
pub const CHAPTER_MARKER_COLOR: &str = "#3B82F6";

// Segment band and boundary-marker colors per segment kind. The default
// covers kinds this build does not know about.
pub const SEGMENT_INTRO_COLOR: &str = "#10B981";
pub const SEGMENT_CONTENT_COLOR: &str = "#3B82F6";
pub const SEGMENT_OUTRO_COLOR: &str = "#EF4444";
pub const SEGMENT_AD_COLOR: &str = "#F59E0B";
pub const SEGMENT_TRANSITION_COLOR: &str = "#8B5CF6";
pub const SEGMENT_HIGHLIGHT_COLOR: &str = "#EC4899";
pub const SEGMENT_DEFAULT_COLOR: &str = "#6B7280";

/// Horizontal distance, in track pixels, within which a pointer hovers a
/// marker. Pixel distance, not time distance: the tolerance must feel the
/// same at every video duration.
pub const MARKER_HIT_TOLERANCE_PX: f64 = 10.0;

/// Annotations without an explicit duration stay on screen this long.
pub const DEFAULT_ANNOTATION_SECONDS: f64 = 5.0;

/// Arrow-key seek nudge.
pub const SEEK_NUDGE_SECONDS: f64 = 5.0;

/// Within this window after a chapter start, "previous chapter" jumps to the
/// chapter before it instead of restarting the current one.
pub const CHAPTER_BACK_GRACE_SECONDS: f64 = 1.0;

pub const PLAYBACK_TICK_MS: u64 = 16;

pub const TRACK_RECT_SCRIPT: &str = r#"
const hostId = "enriched-track";
let last = null;

function sendRect() {
    const host = document.getElementById(hostId);
    if (!host) {
        return;
    }
    const rect = host.getBoundingClientRect();
    const next = { left: rect.left, width: rect.width };
    if (last &&
        Math.abs(last.left - next.left) < 0.5 &&
        Math.abs(last.width - next.width) < 0.5) {
        return;
    }
    last = next;
    dioxus.send(next);
}

function attach() {
    const host = document.getElementById(hostId);
    if (!host) {
        setTimeout(attach, 100);
        return;
    }
    const observer = new ResizeObserver(() => sendRect());
    observer.observe(host);
    window.addEventListener("resize", sendRect, { passive: true });
    window.addEventListener("scroll", sendRect, { passive: true });
    sendRect();
}

attach();
await new Promise(() => {});
"#;
