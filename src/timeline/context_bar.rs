use dioxus::prelude::*;

use crate::constants::{BG_SURFACE, BORDER_DEFAULT, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use crate::core::context::{chapter_at, next_chapter_time, previous_chapter_time, segment_at};
use crate::state::{Chapter, Segment};
use crate::utils::format_clock;

use super::playback_controls::PlaybackBtn;

/// Header strip above the track: playhead context on the left, transport
/// buttons in the center, the clock on the right.
#[component]
pub fn ContextBar(
    current_time: f64,
    duration: f64,
    chapters: Vec<Chapter>,
    segments: Vec<Segment>,
    is_playing: bool,
    #[props(default)] on_play_pause: Option<EventHandler<MouseEvent>>,
    on_seek: EventHandler<f64>,
) -> Element {
    let play_icon = if is_playing { "⏸" } else { "▶" };
    let timecode = format!("{} / {}", format_clock(current_time), format_clock(duration));

    let chapter = chapter_at(&chapters, current_time).cloned();
    let segment = segment_at(&segments, current_time).cloned();
    let chapters_prev = chapters.clone();
    let chapters_next = chapters.clone();

    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: 32px; padding: 0 14px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                flex-shrink: 0;
            ",

            // Left: label + current chapter / segment chips
            div {
                style: "display: flex; align-items: center; gap: 12px; min-width: 0;",
                span { style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;", "Timeline" }

                if let Some(chapter) = chapter {
                    div {
                        style: "display: flex; align-items: center; gap: 5px; min-width: 0;",
                        span {
                            style: "width: 8px; height: 8px; border-radius: 50%; background-color: {chapter.marker_color()}; flex-shrink: 0;",
                        }
                        span {
                            style: "font-size: 11px; color: {TEXT_PRIMARY}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                            "{chapter.title}"
                        }
                    }
                }

                if let Some(segment) = segment {
                    div {
                        style: "display: flex; align-items: center; gap: 5px; min-width: 0;",
                        span {
                            style: "width: 8px; height: 8px; border-radius: 2px; background-color: {segment.effective_color()}; flex-shrink: 0;",
                        }
                        span {
                            style: "font-size: 11px; color: {TEXT_MUTED}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                            "{segment.title}"
                        }
                        span { style: "font-size: 10px; color: {TEXT_DIM};", "{segment.kind.label()}" }
                    }
                }
            }

            // Center: transport controls
            div {
                style: "display: flex; align-items: center; gap: 4px;",
                PlaybackBtn {
                    icon: "⏮",
                    label: "Jump to start".to_string(),
                    on_click: move |_| on_seek.call(0.0),
                }
                PlaybackBtn {
                    icon: "|◀",
                    label: "Previous chapter".to_string(),
                    on_click: move |_| {
                        if let Some(t) = previous_chapter_time(&chapters_prev, current_time) {
                            on_seek.call(t);
                        }
                    },
                }
                if let Some(on_play_pause) = on_play_pause {
                    PlaybackBtn {
                        icon: play_icon,
                        primary: true,
                        label: "Play/pause".to_string(),
                        on_click: move |e| on_play_pause.call(e),
                    }
                }
                PlaybackBtn {
                    icon: "▶|",
                    label: "Next chapter".to_string(),
                    on_click: move |_| {
                        if let Some(t) = next_chapter_time(&chapters_next, current_time) {
                            on_seek.call(t);
                        }
                    },
                }
                PlaybackBtn {
                    icon: "⏭",
                    label: "Jump to end".to_string(),
                    on_click: move |_| on_seek.call(duration),
                }
            }

            // Right: timecode
            span {
                style: "font-family: 'SF Mono', Consolas, monospace; font-size: 11px; color: {TEXT_DIM};",
                "{timecode}"
            }
        }
    }
}
