use dioxus::prelude::*;
use crate::constants::*;
use crate::core::context::active_annotations;
use crate::core::coords::time_to_percent;
use crate::state::{Annotation, VideoMeta};
use crate::utils::{
    is_valid_video_url, youtube_thumbnail_url, youtube_video_id, ThumbnailQuality,
};

use super::annotation_overlay::AnnotationOverlay;

/// Stage for the video under review. Playback itself is simulated by the
/// app clock, so the stage renders a still surface: a thumbnail backdrop
/// when the source is a YouTube URL, the play state, and the annotation
/// overlay, with a thin progress strip along the bottom edge.
#[component]
pub fn PlayerPanel(
    video: VideoMeta,
    annotations: Vec<Annotation>,
    current_time: f64,
    duration: f64,
    is_playing: bool,
    on_play_pause: EventHandler<MouseEvent>,
) -> Element {
    let active: Vec<Annotation> = active_annotations(&annotations, current_time)
        .into_iter()
        .cloned()
        .collect();
    let progress = time_to_percent(current_time, duration);
    let play_icon = if is_playing { "⏸" } else { "▶" };
    let backdrop = youtube_video_id(&video.url)
        .map(|id| youtube_thumbnail_url(id, ThumbnailQuality::High));
    let bad_url = !video.url.is_empty() && !is_valid_video_url(&video.url);

    rsx! {
        div {
            style: "
                flex: 1; min-height: 0;
                display: flex; align-items: center; justify-content: center;
                padding: 16px; background-color: {BG_DEEPEST};
            ",
            div {
                style: "
                    position: relative; width: 100%; max-width: 960px;
                    aspect-ratio: 16 / 9; max-height: 100%;
                    background-color: #000000;
                    border: 1px solid {BORDER_SUBTLE}; border-radius: 6px;
                    overflow: hidden;
                ",

                if let Some(src) = backdrop {
                    img {
                        src: "{src}",
                        style: "
                            position: absolute; top: 0; left: 0; width: 100%; height: 100%;
                            object-fit: cover; opacity: 0.35; pointer-events: none;
                        ",
                    }
                }

                // Center cluster: play toggle, title, hint
                div {
                    style: "
                        position: absolute; top: 0; left: 0; right: 0; bottom: 0;
                        display: flex; flex-direction: column;
                        align-items: center; justify-content: center; gap: 10px;
                    ",
                    button {
                        class: "collapse-btn",
                        style: "
                            width: 64px; height: 64px; border-radius: 50%;
                            background-color: {BG_HOVER}; border: 1px solid {BORDER_STRONG};
                            color: {TEXT_PRIMARY}; font-size: 22px; cursor: pointer;
                        ",
                        onclick: move |e| on_play_pause.call(e),
                        "{play_icon}"
                    }
                    span { style: "font-size: 15px; font-weight: 600; color: {TEXT_PRIMARY};", "{video.title}" }
                    span { style: "font-size: 11px; color: {TEXT_MUTED};", "Use the timeline below to navigate" }
                    if bad_url {
                        span {
                            style: "
                                margin-top: 4px; padding: 3px 10px; border-radius: 10px;
                                background-color: rgba(239, 68, 68, 0.15);
                                border: 1px solid {SEGMENT_OUTRO_COLOR};
                                font-size: 10px; color: {TEXT_SECONDARY};
                            ",
                            "Unrecognized video URL"
                        }
                    }
                }

                AnnotationOverlay { annotations: active }

                // Progress strip along the bottom edge
                div {
                    style: "
                        position: absolute; bottom: 0; left: 0; right: 0; height: 3px;
                        background-color: {BG_HOVER};
                    ",
                    div {
                        style: "height: 100%; width: {progress}%; background-color: {ACCENT_PROGRESS};",
                    }
                }
            }
        }
    }
}
