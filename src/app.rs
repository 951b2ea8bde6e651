//! Root application component
//!
//! Owns the enrichment document, the simulated playback clock, and the
//! keyboard and file-dialog wiring, and stacks the title bar, stage,
//! enriched timeline, and status bar.

use dioxus::prelude::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::components::{PlayerPanel, StatusBar, TitleBar};
use crate::constants::{
    BG_BASE, BG_HOVER, BORDER_DEFAULT, BORDER_STRONG, PLAYBACK_TICK_MS, SEEK_NUDGE_SECONDS,
    TEXT_PRIMARY,
};
use crate::core::context::{next_chapter_time, previous_chapter_time};
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::EnrichmentDoc;
use crate::timeline::EnrichedTimeline;

const DOC_FILTER_NAME: &str = "Annotation documents";
const DOC_EXTENSIONS: &[&str] = &["json"];

#[component]
pub fn App() -> Element {
    let mut doc = use_signal(EnrichmentDoc::sample);
    let mut doc_path = use_signal(|| None::<PathBuf>);
    let mut current_time = use_signal(|| 0.0_f64);
    let mut is_playing = use_signal(|| false);
    let mut status = use_signal(|| String::from("Ready"));

    // Wall-clock playback. The clock only advances while playing and pauses
    // itself at the end of the video.
    use_future(move || {
        let mut current_time = current_time.clone();
        let mut is_playing = is_playing.clone();
        let doc = doc.clone();
        async move {
            let mut last_tick = Instant::now();
            loop {
                tokio::time::sleep(Duration::from_millis(PLAYBACK_TICK_MS)).await;
                if !is_playing() {
                    last_tick = Instant::now();
                    continue;
                }

                let now = Instant::now();
                let delta = now.saturating_duration_since(last_tick);
                last_tick = now;

                let duration = doc.read().video.duration;
                let next_time = (current_time() + delta.as_secs_f64()).min(duration);
                current_time.set(next_time);

                if next_time >= duration {
                    is_playing.set(false);
                }
            }
        }
    });

    let mut open_document = {
        let mut doc = doc.clone();
        let mut doc_path = doc_path.clone();
        let mut current_time = current_time.clone();
        let mut is_playing = is_playing.clone();
        let mut status = status.clone();
        move |path: PathBuf| match EnrichmentDoc::load(&path) {
            Ok(loaded) => {
                log::info!("opened document {}", path.display());
                status.set(format!("Opened {}", path.display()));
                doc.set(loaded);
                doc_path.set(Some(path));
                current_time.set(0.0);
                is_playing.set(false);
            }
            Err(err) => {
                log::warn!("failed to open {}: {err}", path.display());
                status.set(format!("Open failed: {err}"));
            }
        }
    };

    let mut pick_and_open = move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter(DOC_FILTER_NAME, DOC_EXTENSIONS)
            .set_title("Open Annotations")
            .pick_file()
        {
            open_document(path);
        }
    };

    let mut save_document = {
        let doc = doc.clone();
        let mut doc_path = doc_path.clone();
        let mut status = status.clone();
        move || {
            let path = doc_path().or_else(|| {
                rfd::FileDialog::new()
                    .add_filter(DOC_FILTER_NAME, DOC_EXTENSIONS)
                    .set_file_name("annotations.json")
                    .set_title("Save Annotations")
                    .save_file()
            });
            let Some(path) = path else {
                return;
            };
            match doc.read().save_to(&path) {
                Ok(()) => {
                    log::info!("saved document {}", path.display());
                    status.set(format!("Saved {}", path.display()));
                    doc_path.set(Some(path));
                }
                Err(err) => {
                    log::warn!("failed to save {}: {err}", path.display());
                    status.set(format!("Save failed: {err}"));
                }
            }
        }
    };

    let duration = doc.read().video.duration;
    let mut seek_to = move |time: f64| {
        current_time.set(time.clamp(0.0, duration.max(0.0)));
    };

    rsx! {
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; overflow: hidden; background-color: {BG_BASE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 6px; height: 6px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            .collapse-btn {{ opacity: 0.6; transition: opacity 0.15s ease, background-color 0.15s ease; }}
            .collapse-btn:hover {{ opacity: 1; background-color: {BG_HOVER} !important; }}
            "#
        }

        div {
            class: "app-container",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0;
            ",
            oncontextmenu: move |e| e.prevent_default(),
            tabindex: "0",
            onkeydown: move |e: KeyboardEvent| {
                let hotkey_context = HotkeyContext {
                    input_focused: false,
                };

                let modifiers = e.modifiers();
                let shift = modifiers.shift();
                let ctrl = modifiers.ctrl();
                let alt = modifiers.alt();
                let meta = modifiers.meta();

                match handle_hotkey(&e.key(), shift, ctrl, alt, meta, &hotkey_context) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        match action {
                            HotkeyAction::PlayPause => is_playing.set(!is_playing()),
                            HotkeyAction::SeekStart => seek_to(0.0),
                            HotkeyAction::SeekEnd => seek_to(duration),
                            HotkeyAction::NudgeBack => {
                                seek_to(current_time() - SEEK_NUDGE_SECONDS)
                            }
                            HotkeyAction::NudgeForward => {
                                seek_to(current_time() + SEEK_NUDGE_SECONDS)
                            }
                            HotkeyAction::PreviousChapter => {
                                let target =
                                    previous_chapter_time(&doc.read().chapters, current_time());
                                if let Some(time) = target {
                                    seek_to(time);
                                }
                            }
                            HotkeyAction::NextChapter => {
                                let target =
                                    next_chapter_time(&doc.read().chapters, current_time());
                                if let Some(time) = target {
                                    seek_to(time);
                                }
                            }
                            HotkeyAction::OpenDocument => pick_and_open(),
                            HotkeyAction::SaveDocument => save_document(),
                        }
                    }
                    HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
                }
            },

            TitleBar {
                video_title: doc.read().video.title.clone(),
                on_open: move |_| pick_and_open(),
                on_save: move |_| save_document(),
            }

            PlayerPanel {
                video: doc.read().video.clone(),
                annotations: doc.read().annotations.clone(),
                current_time: current_time(),
                duration,
                is_playing: is_playing(),
                on_play_pause: move |_| is_playing.set(!is_playing()),
            }

            EnrichedTimeline {
                current_time: current_time(),
                duration,
                annotations: doc.read().annotations.clone(),
                chapters: doc.read().chapters.clone(),
                segments: doc.read().segments.clone(),
                is_playing: is_playing(),
                on_play_pause: move |_| is_playing.set(!is_playing()),
                on_seek: move |time: f64| seek_to(time),
            }

            StatusBar {
                message: status(),
                annotation_count: doc.read().annotations.len(),
                chapter_count: doc.read().chapters.len(),
                segment_count: doc.read().segments.len(),
                current_time: current_time(),
                duration,
            }
        }
    }
}
