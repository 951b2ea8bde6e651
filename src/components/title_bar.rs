use dioxus::prelude::*;
use crate::constants::*;

#[component]
pub fn TitleBar(
    video_title: String,
    on_open: EventHandler<MouseEvent>,
    on_save: EventHandler<MouseEvent>,
) -> Element {
    let action_style = format!(
        "background: transparent; border: none; color: {TEXT_PRIMARY}; \
         font-size: 12px; cursor: pointer; padding: 4px 9px; border-radius: 4px;"
    );

    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: 40px; padding: 0 16px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none;
            ",
            div {
                style: "display: flex; align-items: center; gap: 18px;",
                div {
                    style: "display: flex; align-items: center; gap: 7px;",
                    span { style: "width: 8px; height: 8px; border-radius: 2px; background-color: {ACCENT_PROGRESS};" }
                    span { style: "font-size: 13px; font-weight: 600; color: {TEXT_SECONDARY};", "Video Annotator" }
                }
                button {
                    class: "collapse-btn",
                    style: "{action_style}",
                    onclick: move |e| on_open.call(e),
                    "Open"
                }
                button {
                    class: "collapse-btn",
                    style: "{action_style}",
                    onclick: move |e| on_save.call(e),
                    "Save"
                }
            }
            span {
                style: "font-size: 13px; color: {TEXT_MUTED}; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                "{video_title}"
            }
            span {
                style: "font-size: 10px; color: {TEXT_DIM}; min-width: 220px; text-align: right;",
                "Space play · ← → seek · [ ] chapters"
            }
        }
    }
}
