//! UI components grouped by feature domain.
mod annotation_overlay;
mod player_panel;
mod status_bar;
mod title_bar;

pub use annotation_overlay::AnnotationOverlay;
pub use player_panel::PlayerPanel;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
