use dioxus::prelude::*;

use crate::constants::{BG_HOVER, TEXT_MUTED, TEXT_PRIMARY};

/// One transport button in the context bar. The primary button (play/pause)
/// renders larger and brighter than the seek buttons around it; `label`
/// becomes the native tooltip.
#[component]
pub(crate) fn PlaybackBtn(
    icon: &'static str,
    #[props(default = false)] primary: bool,
    #[props(default)] label: Option<String>,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let size = if primary { "28px" } else { "26px" };
    let bg = if primary { BG_HOVER } else { "transparent" };
    let color = if primary { TEXT_PRIMARY } else { TEXT_MUTED };
    let label = label.unwrap_or_default();

    rsx! {
        button {
            class: "collapse-btn",
            style: "
                width: {size}; height: {size};
                border: none; border-radius: 4px;
                background-color: {bg}; color: {color};
                font-size: 10px; cursor: pointer;
                display: flex; align-items: center; justify-content: center;
                transition: all 0.12s ease;
            ",
            title: "{label}",
            onclick: move |e| on_click.call(e),
            "{icon}"
        }
    }
}
