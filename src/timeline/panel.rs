//! Enriched timeline panel.
//!
//! One flat track that layers segment bands, a progress fill, synthesized
//! markers, and the playhead, with a context bar above and chapter pills
//! below. All pointer math runs on viewport coordinates against the track
//! rect reported by [`TRACK_RECT_SCRIPT`], so events that bubble up from
//! markers or bands land at the same spot as events on the track itself.

use std::time::Duration;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ACCENT_PROGRESS, ANNOTATION_TEXT_COLOR, BG_BASE, BG_ELEVATED, BORDER_DEFAULT, BORDER_STRONG,
    BORDER_SUBTLE, CHAPTER_MARKER_COLOR, SEGMENT_INTRO_COLOR, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
    TRACK_RECT_SCRIPT,
};
use crate::core::context::chapter_at;
use crate::core::coords::time_to_percent;
use crate::core::interaction::TimelineInteraction;
use crate::core::markers::synthesize_markers;
use crate::core::projection::project;
use crate::state::{Annotation, Chapter, Segment};
use crate::utils::format_clock;

use super::chapter_nav::ChapterNav;
use super::context_bar::ContextBar;
use super::marker_element::TrackMarker;

/// Track geometry in viewport coordinates, pushed by [`TRACK_RECT_SCRIPT`]
/// whenever the element moves or resizes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
struct TrackRect {
    left: f64,
    width: f64,
}

#[component]
pub fn EnrichedTimeline(
    current_time: f64,
    duration: f64,
    annotations: Vec<Annotation>,
    chapters: Vec<Chapter>,
    segments: Vec<Segment>,
    is_playing: bool,
    #[props(default)] on_play_pause: Option<EventHandler<MouseEvent>>,
    on_seek: EventHandler<f64>,
) -> Element {
    let mut interaction = use_signal(TimelineInteraction::new);
    let mut track_rect = use_signal(|| None::<TrackRect>);
    let mut rect_eval = use_signal(|| None::<document::Eval>);

    use_effect(move || {
        if rect_eval().is_some() {
            return;
        }
        let eval = document::eval(TRACK_RECT_SCRIPT);
        rect_eval.set(Some(eval));
    });

    use_future(move || {
        let mut track_rect = track_rect.clone();
        let rect_eval = rect_eval.clone();
        async move {
            loop {
                let Some(eval) = rect_eval() else {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                };
                let mut eval = eval;
                loop {
                    match eval.recv::<TrackRect>().await {
                        Ok(rect) => {
                            if track_rect() != Some(rect) {
                                track_rect.set(Some(rect));
                            }
                        }
                        Err(_) => break,
                    }
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    });

    let markers = synthesize_markers(&annotations, &chapters, &segments);
    let projection = project(&markers, &segments, current_time, duration);

    let snapshot = interaction();
    let is_dragging = snapshot.is_dragging();
    let hover_time = snapshot.hover_time();
    let hovered_id = snapshot.hovered_marker_id().map(str::to_string);
    let hovered_marker = hovered_id
        .as_deref()
        .and_then(|id| markers.iter().find(|marker| marker.id == id))
        .cloned();

    let current_chapter_id = chapter_at(&chapters, current_time).map(|chapter| chapter.id);
    let markers_for_move = markers.clone();
    let markers_for_overlay = markers.clone();

    let progress_percent = projection.progress_percent;
    let counts = format!(
        "{} annotations · {} chapters · {} segments",
        annotations.len(),
        chapters.len(),
        segments.len()
    );

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                background-color: {BG_BASE}; border-top: 1px solid {BORDER_DEFAULT};
                user-select: none; -webkit-user-select: none;
            ",

            ContextBar {
                current_time,
                duration,
                chapters: chapters.clone(),
                segments: segments.clone(),
                is_playing,
                on_play_pause,
                on_seek: move |t| on_seek.call(t),
            }

            // The track itself
            div {
                style: "padding: 12px 14px 6px 14px;",
                div {
                    id: "enriched-track",
                    style: "
                        position: relative; height: 32px;
                        background-color: {BG_ELEVATED};
                        border: 1px solid {BORDER_SUBTLE}; border-radius: 4px;
                        cursor: pointer;
                    ",
                    onmousedown: move |e: MouseEvent| {
                        let Some(rect) = track_rect() else {
                            return;
                        };
                        e.prevent_default();
                        let x = e.client_coordinates().x - rect.left;
                        let time = interaction.write().pointer_down(x, rect.width, duration);
                        on_seek.call(time);
                    },
                    onmousemove: move |e: MouseEvent| {
                        let Some(rect) = track_rect() else {
                            return;
                        };
                        let x = e.client_coordinates().x - rect.left;
                        let seek = interaction
                            .write()
                            .pointer_move(x, rect.width, duration, &markers_for_move);
                        if let Some(time) = seek {
                            on_seek.call(time);
                        }
                    },
                    onmouseleave: move |_| interaction.write().pointer_leave(),

                    // Segment bands, behind everything else. They stay
                    // interactive so the native title tooltip works.
                    for band in projection.bands.iter() {
                        div {
                            key: "{band.id}",
                            style: "
                                position: absolute; top: 0; bottom: 0;
                                left: {band.left_percent}%; width: {band.width_percent}%;
                                background-color: {band.color}; opacity: 0.25;
                            ",
                            title: "{band.label}",
                        }
                    }

                    // Elapsed-time fill
                    div {
                        style: "
                            position: absolute; top: 0; bottom: 0; left: 0;
                            width: {progress_percent}%;
                            background-color: {ACCENT_PROGRESS}; opacity: 0.25;
                            pointer-events: none;
                        ",
                    }

                    for view in projection.markers.iter() {
                        TrackMarker {
                            key: "{view.id}",
                            view: view.clone(),
                            hovered: hovered_id.as_deref() == Some(view.id.as_str()),
                            on_select: move |t| on_seek.call(t),
                        }
                    }

                    // Playhead
                    div {
                        style: "
                            position: absolute; top: -3px; bottom: -3px;
                            left: {progress_percent}%; width: 2px; margin-left: -1px;
                            background-color: {TEXT_PRIMARY};
                            pointer-events: none; z-index: 12;
                        ",
                        div {
                            style: "
                                position: absolute; top: -4px; left: 50%;
                                width: 8px; height: 8px; margin-left: -4px;
                                border-radius: 50%; background-color: {TEXT_PRIMARY};
                            ",
                        }
                    }

                    if let Some(marker) = hovered_marker {
                        div {
                            style: "
                                position: absolute; bottom: calc(100% + 8px);
                                left: {time_to_percent(marker.time, duration)}%;
                                transform: translateX(-50%);
                                background-color: {BG_ELEVATED}; border: 1px solid {BORDER_STRONG};
                                border-radius: 4px; padding: 6px 9px; max-width: 260px;
                                pointer-events: none; z-index: 20; white-space: nowrap;
                            ",
                            div {
                                style: "display: flex; align-items: center; gap: 6px;",
                                span {
                                    style: "width: 7px; height: 7px; border-radius: 50%; background-color: {marker.color}; flex-shrink: 0;",
                                }
                                span {
                                    style: "font-size: 9px; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;",
                                    "{marker.kind_label()}"
                                }
                                span {
                                    style: "font-family: 'SF Mono', Consolas, monospace; font-size: 9px; color: {TEXT_DIM};",
                                    "{format_clock(marker.time)}"
                                }
                            }
                            div {
                                style: "font-size: 11px; color: {TEXT_PRIMARY}; margin-top: 2px; overflow: hidden; text-overflow: ellipsis;",
                                "{marker.title}"
                            }
                            if let Some(description) = marker.source.description() {
                                div {
                                    style: "font-size: 10px; color: {TEXT_MUTED}; margin-top: 2px; white-space: normal;",
                                    "{description}"
                                }
                            }
                        }
                    } else if let Some(time) = hover_time {
                        div {
                            style: "
                                position: absolute; bottom: calc(100% + 8px);
                                left: {time_to_percent(time, duration)}%;
                                transform: translateX(-50%);
                                background-color: {BG_ELEVATED}; border: 1px solid {BORDER_STRONG};
                                border-radius: 4px; padding: 3px 7px;
                                font-family: 'SF Mono', Consolas, monospace; font-size: 10px;
                                color: {TEXT_PRIMARY};
                                pointer-events: none; z-index: 20; white-space: nowrap;
                            ",
                            "{format_clock(time)}"
                        }
                    }
                }
            }

            ChapterNav {
                chapters: chapters.clone(),
                current_chapter_id,
                on_seek: move |t| on_seek.call(t),
            }

            // Counts and marker legend
            div {
                style: "
                    display: flex; align-items: center; gap: 14px;
                    padding: 4px 14px 8px 14px; font-size: 10px; color: {TEXT_DIM};
                ",
                span { "{counts}" }
                div { style: "flex: 1;" }
                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    span { style: "width: 7px; height: 7px; border-radius: 50%; background-color: {ANNOTATION_TEXT_COLOR};" }
                    span { "Annotations" }
                }
                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    span { style: "width: 7px; height: 7px; border-radius: 50%; background-color: {CHAPTER_MARKER_COLOR};" }
                    span { "Chapters" }
                }
                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    span { style: "width: 7px; height: 7px; border-radius: 2px; background-color: {SEGMENT_INTRO_COLOR};" }
                    span { "Segments" }
                }
            }
        }

        // While dragging, a fixed overlay owns the pointer so the scrub keeps
        // tracking when the cursor leaves the track.
        if is_dragging {
            div {
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 9999; cursor: ew-resize;",
                oncontextmenu: move |e| e.prevent_default(),
                onmousemove: move |e: MouseEvent| {
                    let Some(rect) = track_rect() else {
                        return;
                    };
                    let x = e.client_coordinates().x - rect.left;
                    let seek = interaction
                        .write()
                        .pointer_move(x, rect.width, duration, &markers_for_overlay);
                    if let Some(time) = seek {
                        on_seek.call(time);
                    }
                },
                onmouseup: move |_| interaction.write().pointer_up(),
            }
        }
    }
}
