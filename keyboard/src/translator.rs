//! Key-press translation and application.

use crate::layout;
use crate::surface::{EditSurface, InputNotification};

/// One physical key press, as reported by the host environment.
///
/// `key` is the key's textual identity (`"1"`, `"q"`, `" "`, but also
/// `"Enter"` or `"Backspace"`); multi-character identities never map to a
/// symbol. Transient: consumed by one [`translate`] call, never retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    /// True when the key originates from the numeric keypad; keypad
    /// digits must keep typing digits.
    pub numpad: bool,
}

impl KeyPress {
    /// A plain press of `key` with no modifiers.
    pub fn new<K: Into<String>>(key: K) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn has_modifier(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Decide the insertion for one key press.
///
/// Returns `None` - meaning the press must fall through to the surface's
/// default handling - for keys outside the layout table, any press with a
/// modifier active, and keypad keys. Unit-ending keys (tones and the
/// placeholder) carry one trailing separator blank.
///
/// # Examples
/// ```
/// use webzhuyin_keyboard::{translate, KeyPress};
///
/// assert_eq!(translate(&KeyPress::new("1")), Some("ㄅ".to_string()));
/// assert_eq!(translate(&KeyPress::new("6")), Some("ˊ ".to_string()));
/// assert_eq!(translate(&KeyPress::new("Enter")), None);
/// ```
pub fn translate(press: &KeyPress) -> Option<String> {
    if press.has_modifier() || press.numpad {
        return None;
    }

    let mut chars = press.key.chars();
    let key = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    let symbol = layout::symbol_for(key)?;
    let mut text = String::from(symbol);
    if layout::ends_unit(key) {
        text.push(layout::SEPARATOR);
    }
    Some(text)
}

/// Translate `press` and, if it maps, perform the edit against `surface`.
///
/// The edit follows the surface protocol: suppress default handling,
/// dispatch the before-insertion notification, replace the current
/// selection collapsing the cursor to the end, dispatch the
/// after-insertion notification. Returns whether an edit was applied.
pub fn apply(press: &KeyPress, surface: &mut dyn EditSurface) -> bool {
    let Some(text) = translate(press) else {
        tracing::trace!(key = %press.key, "press left to default handling");
        return false;
    };

    surface.prevent_default();
    surface.notify(InputNotification::before_insert(&text));
    let (start, end) = surface.selection();
    surface.set_range_text(&text, start, end);
    surface.notify(InputNotification::after_insert(&text));

    tracing::debug!(key = %press.key, text = %text, "inserted");
    true
}
