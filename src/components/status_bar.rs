use dioxus::prelude::*;
use crate::constants::*;
use crate::utils::format_clock;

#[component]
pub fn StatusBar(
    message: String,
    annotation_count: usize,
    chapter_count: usize,
    segment_count: usize,
    current_time: f64,
    duration: f64,
) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: 22px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM};",
            span { "{message}" }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                span { "{annotation_count}a {chapter_count}c {segment_count}s" }
                span { "{format_clock(current_time)} / {format_clock(duration)}" }
            }
        }
    }
}
