use std::sync::Arc;

use crate::engine::TranslationEngine;

use super::{EditorHost, MenuItem, PluginAction, ReviewAction, ReviewUi, SelectionRange, Shortcut};

/// Drives the translate-selection flow over the host capability traits.
///
/// The controller remembers the range of the last translated selection so a
/// later replacement lands on the original text even if the cursor moved in
/// the meantime. The range is cleared once a replacement is applied or the
/// review is dismissed.
pub struct TranslatorPlugin {
    engine: Arc<TranslationEngine>,
    pending_range: Option<SelectionRange>,
}

impl TranslatorPlugin {
    pub fn new(engine: Arc<TranslationEngine>) -> Self {
        Self {
            engine,
            pending_range: None,
        }
    }

    /// Main-menu entries to register with the host.
    pub const fn menu_items() -> &'static [MenuItem] {
        &[MenuItem {
            label: "Translation settings",
            action: PluginAction::OpenSettings,
        }]
    }

    /// Context-menu entries to register with the host.
    pub const fn context_menu_items() -> &'static [MenuItem] {
        &[MenuItem {
            label: "Translate selection",
            action: PluginAction::TranslateSelection,
        }]
    }

    /// Keyboard shortcuts to register with the host.
    pub const fn shortcuts() -> &'static [Shortcut] {
        &[Shortcut {
            keys: "Ctrl+T",
            action: PluginAction::TranslateSelection,
        }]
    }

    /// Entry point for host-dispatched actions.
    ///
    /// `OpenSettings` is a no-op here: the settings dialog belongs to the
    /// host, which persists through [`crate::config::SettingsManager`].
    pub async fn invoke<H: EditorHost, U: ReviewUi>(
        &mut self,
        action: PluginAction,
        host: &mut H,
        ui: &mut U,
    ) {
        match action {
            PluginAction::TranslateSelection => self.translate_selection(host, ui).await,
            PluginAction::OpenSettings => {}
        }
    }

    /// Translates the current selection and routes the result through the
    /// review surface.
    ///
    /// A missing selection or a failed translation surfaces as a warning;
    /// nothing is retried.
    pub async fn translate_selection<H: EditorHost, U: ReviewUi>(
        &mut self,
        host: &mut H,
        ui: &mut U,
    ) {
        let Some(selection) = host.selection() else {
            host.warn("Select the text to translate first.");
            return;
        };

        self.pending_range = Some(selection.range);
        tracing::debug!(
            start = selection.range.start,
            end = selection.range.end,
            "translating selection"
        );

        let translated = match self.engine.translate_text(&selection.text).await {
            Ok(translated) => translated,
            Err(err) => {
                self.pending_range = None;
                host.warn(&err.to_string());
                return;
            }
        };

        match ui.review(&selection.text, &translated) {
            ReviewAction::Replace(text) => self.replace_with(host, &text),
            ReviewAction::Copy(text) => host.set_clipboard(&text),
            ReviewAction::Dismiss => self.pending_range = None,
        }
    }

    /// Replaces the captured selection range with `text`.
    ///
    /// Warns and aborts when no range is captured (never translated, already
    /// replaced, or state was reset).
    pub fn replace_with<H: EditorHost>(&mut self, host: &mut H, text: &str) {
        let Some(range) = self.pending_range.take() else {
            host.warn("The original selection is no longer available.");
            return;
        };

        host.replace_range(range, text);
    }

    /// Drops the captured selection range, e.g. when the host document
    /// changed under the plugin.
    pub fn reset(&mut self) {
        self.pending_range = None;
    }
}
