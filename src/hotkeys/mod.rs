//! Hotkey system
//!
//! Centralized hotkey management for the annotator.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the App component's hotkey handler

use dioxus::prelude::Key;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
/// This decouples "what key was pressed" from "what should happen".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    // ═══════════════════════════════════════════════════════════════
    // Playback
    // ═══════════════════════════════════════════════════════════════
    /// Toggle playback.
    PlayPause,
    /// Jump to the start of the video.
    SeekStart,
    /// Jump to the end of the video.
    SeekEnd,
    /// Nudge the playhead back a few seconds.
    NudgeBack,
    /// Nudge the playhead forward a few seconds.
    NudgeForward,
    /// Jump to the previous chapter start.
    PreviousChapter,
    /// Jump to the next chapter start.
    NextChapter,

    // ═══════════════════════════════════════════════════════════════
    // Documents
    // ═══════════════════════════════════════════════════════════════
    /// Open an enrichment document.
    OpenDocument,
    /// Save the current enrichment document.
    SaveDocument,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether an input field has focus (should suppress most hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
pub fn handle_hotkey(
    key: &Key,
    _shift: bool,
    ctrl: bool,
    _alt: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    // Suppress hotkeys when typing in an input field
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    match key {
        Key::Character(c) if (ctrl || meta) && (c == "o" || c == "O") => {
            return HotkeyResult::Action(HotkeyAction::OpenDocument);
        }
        Key::Character(c) if (ctrl || meta) && (c == "s" || c == "S") => {
            return HotkeyResult::Action(HotkeyAction::SaveDocument);
        }
        Key::Character(c) if c == " " => return HotkeyResult::Action(HotkeyAction::PlayPause),
        Key::Character(c) if c == "[" => {
            return HotkeyResult::Action(HotkeyAction::PreviousChapter);
        }
        Key::Character(c) if c == "]" => return HotkeyResult::Action(HotkeyAction::NextChapter),
        Key::Home => return HotkeyResult::Action(HotkeyAction::SeekStart),
        Key::End => return HotkeyResult::Action(HotkeyAction::SeekEnd),
        Key::ArrowLeft => return HotkeyResult::Action(HotkeyAction::NudgeBack),
        Key::ArrowRight => return HotkeyResult::Action(HotkeyAction::NudgeForward),
        _ => {}
    }

    HotkeyResult::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_toggles_playback() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character(" ".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::PlayPause)));
    }

    #[test]
    fn test_ctrl_s_saves_document() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("s".to_string()), false, true, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::SaveDocument)));
    }

    #[test]
    fn test_meta_o_opens_document() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("o".to_string()), false, false, false, true, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::OpenDocument)));
    }

    #[test]
    fn test_brackets_step_chapters() {
        let ctx = HotkeyContext::default();
        let prev = handle_hotkey(&Key::Character("[".to_string()), false, false, false, false, &ctx);
        let next = handle_hotkey(&Key::Character("]".to_string()), false, false, false, false, &ctx);
        assert!(matches!(prev, HotkeyResult::Action(HotkeyAction::PreviousChapter)));
        assert!(matches!(next, HotkeyResult::Action(HotkeyAction::NextChapter)));
    }

    #[test]
    fn test_arrows_nudge_playhead() {
        let ctx = HotkeyContext::default();
        let back = handle_hotkey(&Key::ArrowLeft, false, false, false, false, &ctx);
        let forward = handle_hotkey(&Key::ArrowRight, false, false, false, false, &ctx);
        assert!(matches!(back, HotkeyResult::Action(HotkeyAction::NudgeBack)));
        assert!(matches!(forward, HotkeyResult::Action(HotkeyAction::NudgeForward)));
    }

    #[test]
    fn test_home_and_end_jump_to_edges() {
        let ctx = HotkeyContext::default();
        let start = handle_hotkey(&Key::Home, false, false, false, false, &ctx);
        let end = handle_hotkey(&Key::End, false, false, false, false, &ctx);
        assert!(matches!(start, HotkeyResult::Action(HotkeyAction::SeekStart)));
        assert!(matches!(end, HotkeyResult::Action(HotkeyAction::SeekEnd)));
    }

    #[test]
    fn test_suppressed_when_input_focused() {
        let ctx = HotkeyContext {
            input_focused: true,
        };
        let result = handle_hotkey(&Key::Character(" ".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Suppressed));
    }

    #[test]
    fn test_plain_letter_does_not_match() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("s".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::NoMatch));
    }
}
