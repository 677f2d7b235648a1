//! The editable-surface edit protocol and an in-memory reference surface.
//!
//! A host environment (a browser textarea, an editor widget) implements
//! [`EditSurface`]; the translator drives it through exactly one edit per
//! accepted key press. [`BufferSurface`] is the in-memory implementation
//! used by tests and the demo binary, and the model for host adapters.

/// Input type carried by insertion notifications.
pub const INSERT_TEXT: &str = "insertText";

/// Whether a notification precedes or follows the edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    /// Dispatched before the surface text changes; observers may inspect
    /// the pending insertion.
    BeforeInput,
    /// Dispatched after the text has changed.
    Input,
}

/// One insertion notification, shaped like an ordinary text-entry event so
/// surface observers need no special handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputNotification {
    pub phase: EditPhase,
    pub input_type: &'static str,
    pub data: String,
    pub is_composing: bool,
}

impl InputNotification {
    /// The notification dispatched before an insertion.
    pub fn before_insert(data: &str) -> Self {
        Self {
            phase: EditPhase::BeforeInput,
            input_type: INSERT_TEXT,
            data: data.to_string(),
            is_composing: false,
        }
    }

    /// The notification dispatched after an insertion.
    pub fn after_insert(data: &str) -> Self {
        Self {
            phase: EditPhase::Input,
            input_type: INSERT_TEXT,
            data: data.to_string(),
            is_composing: false,
        }
    }
}

/// A live text-editing surface, as seen by the key translator.
///
/// Offsets are in characters. Implementations decide what "default
/// handling" means for their host; [`EditSurface::prevent_default`] is
/// called before any other method when a key press is translated.
pub trait EditSurface {
    /// Current selection as `(start, end)` character offsets, `start <=
    /// end`. A collapsed selection (caret) has `start == end`.
    fn selection(&self) -> (usize, usize);

    /// Replace `start..end` with `text` and collapse the cursor to the end
    /// of the inserted range.
    fn set_range_text(&mut self, text: &str, start: usize, end: usize);

    /// Deliver an insertion notification to the surface's observers.
    fn notify(&mut self, notification: InputNotification);

    /// Suppress the surface's own default handling of the current key.
    fn prevent_default(&mut self);
}

/// In-memory [`EditSurface`] over a `String` and a selection range.
///
/// Dispatched notifications are recorded in order for inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferSurface {
    text: String,
    selection: (usize, usize),
    notifications: Vec<InputNotification>,
    default_prevented: bool,
}

impl BufferSurface {
    /// Create an empty surface with a collapsed selection at the start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface over `text` with the caret at the end.
    pub fn with_text<T: Into<String>>(text: T) -> Self {
        let text = text.into();
        let end = text.chars().count();
        Self {
            text,
            selection: (end, end),
            ..Self::default()
        }
    }

    /// The current surface text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Move the selection, clamping both offsets to the text length.
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.text.chars().count();
        let start = start.min(len);
        let end = end.clamp(start, len);
        self.selection = (start, end);
    }

    /// All notifications dispatched so far, oldest first.
    pub fn notifications(&self) -> &[InputNotification] {
        &self.notifications
    }

    /// Whether default handling was suppressed for any press so far.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Byte offset of the `char_idx`-th character, clamped to the end.
fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(at, _)| at)
        .unwrap_or(s.len())
}

impl EditSurface for BufferSurface {
    fn selection(&self) -> (usize, usize) {
        self.selection
    }

    fn set_range_text(&mut self, text: &str, start: usize, end: usize) {
        let end = end.max(start);
        let from = byte_offset(&self.text, start);
        let to = byte_offset(&self.text, end);
        let start = self.text[..from].chars().count();
        self.text.replace_range(from..to, text);

        let caret = start + text.chars().count();
        self.selection = (caret, caret);
    }

    fn notify(&mut self, notification: InputNotification) {
        self.notifications.push(notification);
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
