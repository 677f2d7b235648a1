//! Zhuyin transcription decomposition.
//!
//! A transcription string like `"ㄋㄧˇ ㄏㄠˇ ㄇㄚ˙"` (or the unspaced
//! `"ㄋㄧˇㄏㄠˇㄇㄚ˙"`) is split into one [`Syllable`] per transcription
//! unit, aligned positionally with the display units of the annotated text.
//! Tone marks terminate the unit they attach to, so whitespace between
//! units is optional.

use serde::{Deserialize, Serialize};

use crate::alphabet::{is_tone_mark, LEVEL_TONE, PLACEHOLDER, QIN_SHENG};

/// One transcription unit: zero or more bopomofo symbols and a tone.
///
/// An empty `symbol` means the aligned display unit carries no
/// transcription. An empty `tone` means no mark is rendered at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    pub symbol: String,
    pub tone: String,
}

impl Syllable {
    pub fn new<S: Into<String>, T: Into<String>>(symbol: S, tone: T) -> Self {
        Self {
            symbol: symbol.into(),
            tone: tone.into(),
        }
    }
}

/// Options for [`decompose_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecomposeOptions {
    /// Replacement for the level tone mark `ˉ` wherever it appears as a
    /// tone, including tones defaulted for unmarked syllables. The level
    /// tone is conventionally invisible; the no-break-space default keeps
    /// it blank without collapsing the annotation's tone column.
    pub level_tone_rendering: String,
}

impl Default for DecomposeOptions {
    fn default() -> Self {
        Self {
            level_tone_rendering: "\u{00A0}".to_string(),
        }
    }
}

/// Decompose a transcription string with default options.
///
/// # Examples
/// ```
/// use webzhuyin_core::{decompose, Syllable};
///
/// assert_eq!(
///     decompose("ㄋㄧˇ ㄏㄠˇ ㄇㄚ˙"),
///     vec![
///         Syllable::new("ㄋㄧ", "ˇ"),
///         Syllable::new("ㄏㄠ", "ˇ"),
///         Syllable::new("ㄇㄚ", "˙"),
///     ]
/// );
/// ```
pub fn decompose(zhuyin: &str) -> Vec<Syllable> {
    decompose_with(zhuyin, &DecomposeOptions::default())
}

/// Decompose a transcription string into syllables.
///
/// Chunking: runs of whitespace separate units, and any tone mark ends the
/// unit it attaches to even without whitespace. Within a chunk, everything
/// before the first tone mark is the symbol. A lone `'` normalizes to an
/// empty symbol (the "no transcription here" placeholder). A missing tone
/// defaults to the level tone unless the symbol is empty.
pub fn decompose_with(zhuyin: &str, opts: &DecomposeOptions) -> Vec<Syllable> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();
    for ch in zhuyin.chars() {
        if ch.is_whitespace() {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(ch);
            if is_tone_mark(ch) {
                chunks.push(std::mem::take(&mut current));
            }
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    let pairs: Vec<Syllable> = chunks.iter().map(|c| split_chunk(c, opts)).collect();
    tracing::trace!(syllables = pairs.len(), "decomposed transcription");
    pairs
}

/// Split one chunk into its `(symbol, tone)` parts and apply defaulting.
fn split_chunk(chunk: &str, opts: &DecomposeOptions) -> Syllable {
    let (symbol, tone) = match chunk.char_indices().find(|&(_, c)| is_tone_mark(c)) {
        Some((at, _)) => chunk.split_at(at),
        None => (chunk, ""),
    };

    let mut it = symbol.chars();
    let symbol = if it.next() == Some(PLACEHOLDER) && it.next().is_none() {
        ""
    } else {
        symbol
    };

    let tone = if tone.is_empty() {
        if symbol.is_empty() {
            String::new()
        } else {
            opts.level_tone_rendering.clone()
        }
    } else if tone.starts_with(LEVEL_TONE) {
        opts.level_tone_rendering.clone()
    } else {
        tone.to_string()
    };

    Syllable::new(symbol, tone)
}

/// Options for [`conventionalize_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConventionOptions {
    /// Move a neutral-tone mark `˙` to the front of its symbol, where
    /// readers expect it.
    pub qin_sheng_prefix: bool,

    /// Rewrite the bopomofo letter `ㄧ` to the han character `一`. Some
    /// fonts draw upright `ㄧ` badly in vertical annotation columns.
    pub symbol_yi_to_hanzi: bool,
}

impl Default for ConventionOptions {
    fn default() -> Self {
        Self {
            qin_sheng_prefix: true,
            symbol_yi_to_hanzi: false,
        }
    }
}

/// Apply habitual-notation conventions with default options.
pub fn conventionalize(pairs: Vec<Syllable>) -> Vec<Syllable> {
    conventionalize_with(pairs, &ConventionOptions::default())
}

/// Rewrite syllables into the notation readers are used to.
pub fn conventionalize_with(pairs: Vec<Syllable>, opts: &ConventionOptions) -> Vec<Syllable> {
    pairs
        .into_iter()
        .map(|mut pair| {
            if opts.qin_sheng_prefix && is_qin_sheng(&pair.tone) {
                pair.symbol.insert(0, QIN_SHENG);
                pair.tone.clear();
            }
            if opts.symbol_yi_to_hanzi {
                pair.symbol = pair.symbol.replace('ㄧ', "一");
            }
            pair
        })
        .collect()
}

fn is_qin_sheng(tone: &str) -> bool {
    let mut it = tone.chars();
    it.next() == Some(QIN_SHENG) && it.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_level() -> DecomposeOptions {
        DecomposeOptions {
            level_tone_rendering: LEVEL_TONE.to_string(),
        }
    }

    #[test]
    fn spaced_transcription() {
        assert_eq!(
            decompose("ㄋㄧˇ ㄏㄠˇ ㄇㄚ˙"),
            vec![
                Syllable::new("ㄋㄧ", "ˇ"),
                Syllable::new("ㄏㄠ", "ˇ"),
                Syllable::new("ㄇㄚ", "˙"),
            ]
        );
    }

    #[test]
    fn tone_marks_bound_units_without_whitespace() {
        assert_eq!(
            decompose("ㄋㄧˇㄏㄠˇㄇㄚ˙"),
            vec![
                Syllable::new("ㄋㄧ", "ˇ"),
                Syllable::new("ㄏㄠ", "ˇ"),
                Syllable::new("ㄇㄚ", "˙"),
            ]
        );
    }

    #[test]
    fn placeholder_apostrophe_is_blank_pair() {
        assert_eq!(decompose("'"), vec![Syllable::new("", "")]);
        assert_eq!(
            decompose("' ㄏㄠˇ"),
            vec![Syllable::new("", ""), Syllable::new("ㄏㄠ", "ˇ")]
        );
    }

    #[test]
    fn missing_tone_defaults_to_level_rendering() {
        // default rendering is the no-break blank
        assert_eq!(decompose("ㄋㄧ"), vec![Syllable::new("ㄋㄧ", "\u{00A0}")]);
        // callers can keep the raw mark
        assert_eq!(
            decompose_with("ㄋㄧ", &raw_level()),
            vec![Syllable::new("ㄋㄧ", "ˉ")]
        );
    }

    #[test]
    fn explicit_level_tone_is_substituted() {
        assert_eq!(decompose("ㄇㄚˉ"), vec![Syllable::new("ㄇㄚ", "\u{00A0}")]);
        assert_eq!(
            decompose_with("ㄇㄚˉ", &raw_level()),
            vec![Syllable::new("ㄇㄚ", "ˉ")]
        );
    }

    #[test]
    fn empty_input_yields_no_pairs() {
        assert!(decompose("").is_empty());
        assert!(decompose("   ").is_empty());
    }

    #[test]
    fn chunk_count_matches_unit_count() {
        let pairs = decompose("ㄓㄨㄥ ㄍㄨㄛˊ ㄖㄣˊ");
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn extended_tone_marks_terminate_chunks() {
        // Hokkien entering tone ㆷ ends the unit like any other mark
        assert_eq!(decompose("ㄒㄧㆷ"), vec![Syllable::new("ㄒㄧ", "ㆷ")]);
        assert_eq!(
            decompose("ㄒㄧㆷㄏㄠˇ"),
            vec![Syllable::new("ㄒㄧ", "ㆷ"), Syllable::new("ㄏㄠ", "ˇ")]
        );
    }

    #[test]
    fn lone_tone_mark_has_empty_symbol() {
        assert_eq!(decompose("ˋ"), vec![Syllable::new("", "ˋ")]);
    }

    #[test]
    fn qin_sheng_moves_to_prefix() {
        let pairs = conventionalize(vec![Syllable::new("ㄇㄚ", "˙")]);
        assert_eq!(pairs, vec![Syllable::new("˙ㄇㄚ", "")]);
    }

    #[test]
    fn qin_sheng_prefix_can_be_disabled() {
        let opts = ConventionOptions {
            qin_sheng_prefix: false,
            ..ConventionOptions::default()
        };
        let pairs = conventionalize_with(vec![Syllable::new("ㄇㄚ", "˙")], &opts);
        assert_eq!(pairs, vec![Syllable::new("ㄇㄚ", "˙")]);
    }

    #[test]
    fn yi_rewrite_is_opt_in() {
        let opts = ConventionOptions {
            symbol_yi_to_hanzi: true,
            ..ConventionOptions::default()
        };
        let pairs = conventionalize_with(vec![Syllable::new("ㄧㄡ", "ˋ")], &opts);
        assert_eq!(pairs, vec![Syllable::new("一ㄡ", "ˋ")]);
    }
}
