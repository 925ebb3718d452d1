//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s.
//! The map lives in Rust so the browser bridge and native hosts agree.

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── History ──
    Undo,
    Redo,

    // ── Edit form ──
    /// Add a label, or apply the form to the selected label.
    Commit,
    Deselect,
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
}

impl ShortcutAction {
    /// Stable name reported back to JavaScript.
    pub fn name(self) -> &'static str {
        match self {
            ShortcutAction::Undo => "undo",
            ShortcutAction::Redo => "redo",
            ShortcutAction::Commit => "commit",
            ShortcutAction::Deselect => "deselect",
            ShortcutAction::ToggleBold => "toggleBold",
            ShortcutAction::ToggleItalic => "toggleItalic",
            ShortcutAction::ToggleUnderline => "toggleUnderline",
        }
    }
}

/// Resolves key events into shortcut actions.
///
/// On macOS `meta` is ⌘, elsewhere `ctrl` plays the same role; either
/// one counts as the command modifier.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Enter"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        _alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;

        // ── Modifier combos first (most specific) ──
        if cmd && shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                "b" | "B" => Some(ShortcutAction::ToggleBold),
                "i" | "I" => Some(ShortcutAction::ToggleItalic),
                "u" | "U" => Some(ShortcutAction::ToggleUnderline),
                _ => None,
            };
        }

        // Plain keys belong to the text input, except these two.
        match key {
            "Enter" if !shift => Some(ShortcutAction::Commit),
            "Escape" => Some(ShortcutAction::Deselect),
            _ => None,
        }
    }
}
