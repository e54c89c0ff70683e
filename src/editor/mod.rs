//! Host editor capability contract.
//!
//! The plugin never talks to a concrete editor. The host supplies the three
//! capabilities the translate-selection flow needs — reading the current
//! selection, transactionally replacing a previously captured range, and
//! showing warnings — plus a review surface where the user can edit the
//! translation before acting on it. Menu entries and shortcuts are plain
//! data the host registers and dispatches back as [`PluginAction`]s.

mod plugin;

pub use plugin::TranslatorPlugin;

/// A character range in the host document, captured together with a
/// selection and used later to address the replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

/// The active selection: its text and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub text: String,
    pub range: SelectionRange,
}

/// Capabilities the host editor provides to the plugin.
pub trait EditorHost {
    /// The active selection, or `None` when nothing is selected.
    fn selection(&self) -> Option<Selection>;

    /// Replaces `range` with `text`. The host must group the edit as one
    /// transaction with respect to its undo/redo history.
    fn replace_range(&mut self, range: SelectionRange, text: &str);

    /// Places `text` on the host clipboard.
    fn set_clipboard(&mut self, text: &str);

    /// Shows a non-fatal warning to the user.
    fn warn(&mut self, message: &str);
}

/// What the user chose to do with a reviewed translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewAction {
    /// Replace the original selection with this (possibly edited) text.
    Replace(String),
    /// Copy this text to the clipboard; the captured range stays valid.
    Copy(String),
    /// Close the review without acting.
    Dismiss,
}

/// Review surface: shows the original next to the translation and lets the
/// user edit the translation before choosing an action.
pub trait ReviewUi {
    fn review(&mut self, original: &str, translated: &str) -> ReviewAction;
}

/// Actions the host can dispatch back into the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginAction {
    /// Translate the current selection and open the review surface.
    TranslateSelection,
    /// Open the host's settings dialog (backed by
    /// [`crate::config::SettingsManager`]).
    OpenSettings,
}

/// A menu entry the host should register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub action: PluginAction,
}

/// A keyboard shortcut the host should register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub keys: &'static str,
    pub action: PluginAction,
}
