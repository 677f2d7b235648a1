//! webzhuyin-keyboard
//!
//! Translates physical key presses on a QWERTY keyboard into bopomofo for
//! live zhuyin text entry, and applies the resulting insertions to an
//! editable surface through a small edit protocol.
//!
//! The decision half is pure: [`translate`] maps one [`KeyPress`] to an
//! optional insertion string. The application half, [`apply`], performs the
//! single in-place edit against a caller-supplied [`EditSurface`],
//! bracketed by before/after insertion notifications so observers of the
//! surface (spellcheckers, undo stacks, change listeners) see ordinary
//! text entry rather than a programmatic mutation.

pub mod layout;
pub mod surface;
pub mod translator;

pub use layout::{symbol_for, KEY_SYMBOLS};
pub use surface::{BufferSurface, EditPhase, EditSurface, InputNotification, INSERT_TEXT};
pub use translator::{apply, translate, KeyPress};
