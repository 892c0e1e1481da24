//! Tag editor state machine.
use super::tokenize::{normalize_tags, split_raw, tags_from_value};
use super::width::visual_width;
use super::TagEditorConfig;
use crate::error::{Result, TagError};
use serde_json::Value as JsValue;

/// Editing mode of a [`TagEditor`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Mode {
    /// Tags are displayed as chips.
    #[default]
    Viewing,

    /// Tags are edited as raw text.
    Editing,
}

/// Element of a [`TagEditor`] that is visible.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Pane {
    /// Chip list.
    #[default]
    Chips,

    /// Raw text input.
    Input,
}

/// What a host should display for a [`TagEditor`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TagEditorView {
    pub list_visible: bool,
    pub input_visible: bool,

    /// Tags and input are disabled.
    pub disabled: bool,

    /// Error message to display, if any.
    pub error: Option<String>,
}

/// Editable list of tags.
///
/// Tags are displayed as chips while [`Mode::Viewing`].
/// Focusing the input switches to [`Mode::Editing`] where all tags are
/// edited as a single line of raw text, which is parsed back into tags on blur.
#[derive(Clone, PartialEq, Debug)]
pub struct TagEditor {
    config: TagEditorConfig,
    tags: Vec<String>,
    raw_text: String,
    mode: Mode,
    pane: Pane,
    enabled: bool,
    error: Option<TagError>,

    /// Incremented each time the input should receive focus.
    focus_requests: usize,
}

impl TagEditor {
    /// Creates an enabled, empty editor.
    pub fn new(config: TagEditorConfig) -> Self {
        Self {
            config,
            tags: Vec::new(),
            raw_text: String::new(),
            mode: Mode::default(),
            pane: Pane::default(),
            enabled: true,
            error: None,
            focus_requests: 0,
        }
    }

    pub fn config(&self) -> &TagEditorConfig {
        &self.config
    }

    /// Current tags, in display order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Last validation failure, cleared by a successful commit.
    pub fn error(&self) -> Option<&TagError> {
        self.error.as_ref()
    }

    pub fn focus_requests(&self) -> usize {
        self.focus_requests
    }

    /// Removes all tags and clears the raw text.
    pub fn clear(&mut self) {
        self.tags.clear();
        self.raw_text.clear();
    }

    /// Resume processing user events.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stop processing user events.
    /// An edit in progress is abandoned.
    pub fn disable(&mut self) {
        self.enabled = false;
        if self.mode == Mode::Editing {
            tracing::debug!("abandoning edit");
            self.mode = Mode::Viewing;
            self.raw_text.clear();
            self.error = None;
        }

        self.pane = Pane::Chips;
    }

    /// Replaces all tags with the trimmed, non-empty entries of `content`.
    pub fn set_tags<I, S>(&mut self, content: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = normalize_tags(content);
    }

    /// Replaces all tags from a host supplied value.
    /// Values that are not arrays are ignored.
    #[tracing::instrument(skip(self))]
    pub fn set_tags_value(&mut self, content: &JsValue) {
        match tags_from_value(content) {
            Ok(tags) => self.tags = tags,
            Err(err) => tracing::warn!(?err, "ignoring tags"),
        }
    }

    /// Forces which element is visible, without changing the mode.
    pub fn show_only(&mut self, pane: Pane) {
        self.pane = pane;
    }

    /// Sets the raw text as typed by the user.
    pub fn set_raw_text(&mut self, text: impl Into<String>) {
        if !self.enabled {
            return;
        }

        self.raw_text = text.into();
    }

    /// Container was clicked.
    /// Shows the input and requests focus for it.
    ///
    /// # Returns
    /// If focus was requested.
    pub fn click_container(&mut self) -> bool {
        if !self.enabled {
            return false;
        }

        self.pane = Pane::Input;
        self.focus_requests += 1;
        true
    }

    /// Input received focus.
    /// If the raw text is empty it is filled with the current tags.
    #[tracing::instrument(skip(self))]
    pub fn focus(&mut self) {
        if !self.enabled {
            return;
        }

        self.mode = Mode::Editing;
        self.pane = Pane::Input;
        if self.raw_text.is_empty() {
            self.raw_text = self.tags.join(" ");
        }

        tracing::debug!(raw_text = ?self.raw_text, "editing");
    }

    /// Input lost focus.
    /// Commits the raw text as tags.
    ///
    /// # Errors
    /// + [`TagError::TooLong`] if any tag is wider than the maximum length.
    /// The editor remains in [`Mode::Editing`], the tags are unchanged,
    /// and focus is requested.
    #[tracing::instrument(skip(self))]
    pub fn blur(&mut self) -> Result {
        if !self.enabled || self.mode != Mode::Editing {
            return Ok(());
        }

        let tokens = split_raw(&self.raw_text);
        if let Some(err) = self.validate(&tokens) {
            tracing::warn!(?err, "rejecting commit");
            self.error = Some(err.clone());
            self.focus_requests += 1;
            return Err(err.into());
        }

        self.error = None;
        self.tags = normalize_tags(tokens);
        self.raw_text.clear();
        self.mode = Mode::Viewing;
        self.pane = Pane::Chips;

        tracing::debug!(tags = ?self.tags, "committed");
        Ok(())
    }

    /// Removes the tag at `index`.
    ///
    /// # Returns
    /// The removed tag, or `None` if the index is out of bounds
    /// or the editor is disabled.
    pub fn remove_tag(&mut self, index: usize) -> Option<String> {
        if !self.enabled || index >= self.tags.len() {
            return None;
        }

        Some(self.tags.remove(index))
    }

    /// Derives what the host should display.
    pub fn view(&self) -> TagEditorView {
        TagEditorView {
            list_visible: self.pane == Pane::Chips,
            input_visible: self.enabled && self.pane == Pane::Input,
            disabled: !self.enabled,
            error: self
                .error
                .as_ref()
                .map(|_| self.config.error_message.clone()),
        }
    }

    /// # Returns
    /// The error for the first token that is too long, if any.
    fn validate(&self, tokens: &[&str]) -> Option<TagError> {
        tokens.iter().find_map(|token| {
            let width = visual_width(token);
            if width > self.config.max_length {
                Some(TagError::too_long(*token, width, self.config.max_length))
            } else {
                None
            }
        })
    }
}

impl Default for TagEditor {
    fn default() -> Self {
        Self::new(TagEditorConfig::default())
    }
}

#[cfg(test)]
#[path = "./editor_test.rs"]
mod editor_test;
