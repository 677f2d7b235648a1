//! Live-entry flow tests: key presses driven through the edit protocol
//! against the in-memory surface.

use webzhuyin_keyboard::{
    apply, BufferSurface, EditSurface, InputNotification, KeyPress, INSERT_TEXT,
};

fn press(key: &str) -> KeyPress {
    KeyPress::new(key)
}

#[test]
fn typing_a_syllable_builds_separated_units() {
    let mut surface = BufferSurface::new();
    for key in ["s", "u", "3", "c", "l", "3"] {
        assert!(apply(&press(key), &mut surface), "{key} should insert");
    }
    assert_eq!(surface.text(), "ㄋㄧˇ ㄏㄠˇ ");
    let end = surface.text().chars().count();
    assert_eq!(surface.selection(), (end, end));
}

#[test]
fn each_insertion_is_bracketed_by_notifications() {
    let mut surface = BufferSurface::new();
    apply(&press("1"), &mut surface);
    apply(&press("6"), &mut surface);

    let notes = surface.notifications();
    assert_eq!(notes.len(), 4);
    assert_eq!(notes[0], InputNotification::before_insert("ㄅ"));
    assert_eq!(notes[1], InputNotification::after_insert("ㄅ"));
    assert_eq!(notes[2], InputNotification::before_insert("ˊ "));
    assert_eq!(notes[3], InputNotification::after_insert("ˊ "));

    for note in notes {
        assert_eq!(note.input_type, INSERT_TEXT);
        assert!(!note.is_composing);
    }
}

#[test]
fn insertion_replaces_the_active_selection() {
    let mut surface = BufferSurface::with_text("你好嗎");
    surface.select(1, 2);
    assert!(apply(&press("1"), &mut surface));
    assert_eq!(surface.text(), "你ㄅ嗎");
    assert_eq!(surface.selection(), (2, 2));
}

#[test]
fn modified_press_leaves_surface_untouched() {
    let mut surface = BufferSurface::with_text("abc");
    let mut shifted = press("1");
    shifted.shift = true;

    assert!(!apply(&shifted, &mut surface));
    assert_eq!(surface.text(), "abc");
    assert!(surface.notifications().is_empty());
    assert!(!surface.default_prevented());
}

#[test]
fn unknown_key_leaves_surface_untouched() {
    let mut surface = BufferSurface::new();
    assert!(!apply(&press("Enter"), &mut surface));
    assert!(!apply(&press("A"), &mut surface));
    assert_eq!(surface.text(), "");
    assert!(surface.notifications().is_empty());
}

#[test]
fn applied_press_suppresses_default_handling() {
    let mut surface = BufferSurface::new();
    assert!(apply(&press("q"), &mut surface));
    assert!(surface.default_prevented());
}

#[test]
fn typed_text_decomposes_back_to_syllables() {
    // what the translator produces is exactly what the decomposer reads
    let mut surface = BufferSurface::new();
    for key in ["s", "u", "3", "c", "l", "3"] {
        apply(&press(key), &mut surface);
    }
    let pairs = webzhuyin_core::decompose(surface.text());
    assert_eq!(
        pairs,
        vec![
            webzhuyin_core::Syllable::new("ㄋㄧ", "ˇ"),
            webzhuyin_core::Syllable::new("ㄏㄠ", "ˇ"),
        ]
    );
}
