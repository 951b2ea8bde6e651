use dioxus::prelude::*;

use crate::core::projection::MarkerView;
use crate::utils::format_clock;

/// One marker tick on the enriched track.
///
/// A primary press seeks to the marker's exact source time and never
/// reaches the track underneath, so the pixel-derived seek and the drag
/// state stay untouched.
#[component]
pub fn TrackMarker(view: MarkerView, hovered: bool, on_select: EventHandler<f64>) -> Element {
    let time = view.time;
    let opacity = if hovered { "1.0" } else { "0.8" };
    let scale = if hovered { "2.0" } else { "1.0" };
    let clock = format_clock(time);

    rsx! {
        div {
            style: "
                position: absolute;
                left: {view.left_percent}%;
                top: 0;
                width: 4px;
                height: 100%;
                margin-left: -2px;
                background-color: {view.color};
                box-shadow: 0 0 4px {view.color}50;
                opacity: {opacity};
                transform: scaleX({scale});
                transition: transform 0.15s ease, opacity 0.15s ease;
                cursor: pointer;
                z-index: 10;
            ",
            title: "{view.title} - {clock}",
            onmousedown: move |e| {
                if let Some(btn) = e.trigger_button() {
                    if format!("{:?}", btn) == "Primary" {
                        e.prevent_default();
                        e.stop_propagation();
                        on_select.call(time);
                    }
                }
            },
        }
    }
}
