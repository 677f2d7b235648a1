//! The standard (Daqian) zhuyin keyboard layout.
//!
//! Key values follow the standard QWERTY layout: the number row and three
//! letter rows carry the 37 bopomofo symbols in column order, the
//! remaining punctuation keys carry ㄦ and the tone marks. `=` types a
//! plain blank symbol; the space bar types the (invisible) level tone.

use webzhuyin_core::UNIT_SEPARATOR;

/// Key value → bopomofo symbol or tone mark.
pub static KEY_SYMBOLS: phf::Map<char, char> = phf::phf_map! {
    '1' => 'ㄅ', 'q' => 'ㄆ', 'a' => 'ㄇ', 'z' => 'ㄈ',
    '2' => 'ㄉ', 'w' => 'ㄊ', 's' => 'ㄋ', 'x' => 'ㄌ',
    'e' => 'ㄍ', 'd' => 'ㄎ', 'c' => 'ㄏ',
    'r' => 'ㄐ', 'f' => 'ㄑ', 'v' => 'ㄒ',
    '5' => 'ㄓ', 't' => 'ㄔ', 'g' => 'ㄕ', 'b' => 'ㄖ',
    'y' => 'ㄗ', 'h' => 'ㄘ', 'n' => 'ㄙ',
    'u' => 'ㄧ', 'j' => 'ㄨ', 'm' => 'ㄩ',
    '8' => 'ㄚ', 'i' => 'ㄛ', 'k' => 'ㄜ', ',' => 'ㄝ',
    '9' => 'ㄞ', 'o' => 'ㄟ', 'l' => 'ㄠ', '.' => 'ㄡ',
    '0' => 'ㄢ', 'p' => 'ㄣ', ';' => 'ㄤ', '/' => 'ㄥ',
    '-' => 'ㄦ',
    '=' => ' ',
    ' ' => 'ˉ',
    '6' => 'ˊ', '3' => 'ˇ', '4' => 'ˋ', '7' => '˙',
    '\'' => '\'',
};

/// Look up the symbol typed by `key`, if any.
pub fn symbol_for(key: char) -> Option<char> {
    KEY_SYMBOLS.get(&key).copied()
}

/// Keys that end a transcription unit: the five tone keys and the
/// no-transcription placeholder. Their insertion is followed by one
/// separating blank before the next unit begins.
pub fn ends_unit(key: char) -> bool {
    matches!(key, ' ' | '6' | '3' | '4' | '7' | '\'')
}

/// The blank written after a unit-ending insertion.
pub const SEPARATOR: char = UNIT_SEPARATOR;
