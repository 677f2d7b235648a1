//! Bopomofo alphabet and tone-mark data.
//!
//! The tone-mark set covers the five marks of Mandarin zhuyin plus the
//! entering/departing-tone characters used by other Chinese phonetic
//! conventions (Taiwanese Hokkien among them). Every mark terminates the
//! transcription unit it attaches to, so the full set doubles as the chunk
//! boundary set for `transcription::decompose`.

/// The 37 bopomofo symbols in standard order (21 initials, 3 medials,
/// 13 finals/rhymes).
pub const SYMBOLS: &str = "ㄅㄆㄇㄈㄉㄊㄋㄌㄍㄎㄏㄐㄑㄒㄓㄔㄕㄖㄗㄘㄙㄧㄨㄩㄚㄛㄜㄝㄞㄟㄠㄡㄢㄣㄤㄥㄦ";

/// First (level) tone mark. Conventionally invisible in running text.
pub const LEVEL_TONE: char = '\u{02C9}'; // ˉ

/// Second (rising) tone mark.
pub const RISING_TONE: char = '\u{02CA}'; // ˊ

/// Third (dipping) tone mark.
pub const DIPPING_TONE: char = '\u{02C7}'; // ˇ

/// Fourth (falling) tone mark.
pub const FALLING_TONE: char = '\u{02CB}'; // ˋ

/// Neutral tone mark, written before the syllable it modifies.
pub const QIN_SHENG: char = '\u{02D9}'; // ˙

/// Placeholder symbol meaning "this display unit carries no transcription".
pub const PLACEHOLDER: char = '\'';

/// Blank written between transcription units.
pub const UNIT_SEPARATOR: char = ' ';

/// True for any character that ends a transcription unit: the five Mandarin
/// tone marks plus the entering/departing-tone marks ˪ ˫ ㆴ ㆵ ㆶ ㆷ.
pub fn is_tone_mark(ch: char) -> bool {
    matches!(
        ch,
        '\u{02C9}' | '\u{02CA}' | '\u{02C7}' | '\u{02CB}' | '\u{02D9}'
            | '\u{02EA}' | '\u{02EB}'
            | '\u{31B4}' | '\u{31B5}' | '\u{31B6}' | '\u{31B7}'
    )
}

/// True for bopomofo symbol characters (not tone marks).
pub fn is_symbol(ch: char) -> bool {
    SYMBOLS.contains(ch)
}
