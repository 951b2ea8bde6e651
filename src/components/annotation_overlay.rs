use dioxus::prelude::*;
use crate::constants::*;
use crate::state::{Annotation, AnnotationKind};

/// Cards for the annotations whose active window covers the playhead, laid
/// over the stage at each annotation's fractional position.
///
/// The parent positions this; it only assumes `position: relative` on it.
#[component]
pub fn AnnotationOverlay(annotations: Vec<Annotation>) -> Element {
    rsx! {
        div {
            style: "position: absolute; top: 0; left: 0; right: 0; bottom: 0; pointer-events: none; z-index: 5;",
            for annotation in annotations.iter() {
                {
                    let (x, y) = annotation.position.unwrap_or((0.5, 0.5));
                    let left = x * 100.0;
                    let top = y * 100.0;
                    let color = annotation.kind.marker_color();
                    let title = annotation
                        .title
                        .as_deref()
                        .filter(|t| !t.is_empty());

                    rsx! {
                        div {
                            key: "{annotation.id}",
                            style: "
                                position: absolute; left: {left}%; top: {top}%;
                                transform: translate(-50%, -50%);
                                max-width: 280px; padding: 10px 12px;
                                background-color: rgba(20, 20, 20, 0.94);
                                border: 1px solid {BORDER_STRONG}; border-left: 3px solid {color};
                                border-radius: 6px; pointer-events: auto;
                            ",
                            div {
                                style: "display: flex; align-items: center; gap: 6px; margin-bottom: 4px;",
                                span { style: "width: 8px; height: 8px; border-radius: 50%; background-color: {color}; flex-shrink: 0;" }
                                span {
                                    style: "font-size: 9px; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;",
                                    "{annotation.kind.label()}"
                                }
                                if let Some(title) = title {
                                    span { style: "font-size: 12px; font-weight: 600; color: {TEXT_PRIMARY};", "{title}" }
                                }
                            }
                            p {
                                style: "margin: 0; font-size: 12px; color: {TEXT_SECONDARY};",
                                "{annotation.content}"
                            }
                            if annotation.kind == AnnotationKind::Quiz && !annotation.quiz_options.is_empty() {
                                div {
                                    style: "display: flex; flex-direction: column; gap: 4px; margin-top: 8px;",
                                    for (index, option) in annotation.quiz_options.iter().enumerate() {
                                        button {
                                            key: "{index}",
                                            class: "collapse-btn",
                                            style: "
                                                text-align: left; padding: 5px 8px; font-size: 11px;
                                                background-color: {BG_HOVER}; color: {TEXT_PRIMARY};
                                                border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                                                cursor: pointer;
                                            ",
                                            "{option}"
                                        }
                                    }
                                }
                            }
                            if let Some(link) = annotation.link.as_deref() {
                                div {
                                    style: "
                                        margin-top: 6px; font-size: 11px;
                                        color: {ANNOTATION_LINK_COLOR}; text-decoration: underline;
                                        overflow: hidden; text-overflow: ellipsis; white-space: nowrap;
                                    ",
                                    title: "{link}",
                                    "{link}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
