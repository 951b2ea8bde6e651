use dioxus::prelude::*;
use uuid::Uuid;

use crate::constants::{
    BG_ELEVATED, BG_HOVER, BORDER_ACCENT, BORDER_DEFAULT, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::state::Chapter;
use crate::utils::format_clock;

/// Row of chapter pills under the track. Clicking a pill seeks to the
/// chapter start; the pill containing the playhead is highlighted.
#[component]
pub fn ChapterNav(
    chapters: Vec<Chapter>,
    current_chapter_id: Option<Uuid>,
    on_seek: EventHandler<f64>,
) -> Element {
    if chapters.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "
                display: flex; align-items: center; gap: 6px;
                padding: 6px 14px; overflow-x: auto;
                flex-shrink: 0;
            ",
            span {
                style: "font-size: 10px; color: {TEXT_DIM}; text-transform: uppercase; letter-spacing: 0.5px; white-space: nowrap; margin-right: 4px;",
                "Chapters"
            }
            for (index, chapter) in chapters.iter().enumerate() {
                {
                    let active = current_chapter_id == Some(chapter.id);
                    let time = chapter.time;
                    let background = if active { BG_HOVER } else { BG_ELEVATED };
                    let border = if active { BORDER_ACCENT } else { BORDER_DEFAULT };
                    let title_color = if active { TEXT_PRIMARY } else { TEXT_MUTED };

                    rsx! {
                        button {
                            key: "{chapter.id}",
                            style: "
                                display: flex; align-items: center; gap: 6px;
                                padding: 3px 10px; border-radius: 12px;
                                background-color: {background}; border: 1px solid {border};
                                cursor: pointer; white-space: nowrap; flex-shrink: 0;
                            ",
                            title: "{chapter.title} - {format_clock(chapter.time)}",
                            onclick: move |_| on_seek.call(time),
                            span { style: "font-size: 10px; color: {TEXT_DIM};", "{index + 1}" }
                            span { style: "font-size: 11px; color: {title_color};", "{chapter.title}" }
                            span {
                                style: "font-family: 'SF Mono', Consolas, monospace; font-size: 10px; color: {TEXT_DIM};",
                                "{format_clock(chapter.time)}"
                            }
                        }
                    }
                }
            }
        }
    }
}
