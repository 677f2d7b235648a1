//! webzhuyin-core
//!
//! Text segmentation and zhuyin (bopomofo) transcription parsing shared by
//! the webzhuyin crates.
//!
//! This crate turns the two raw inputs of an annotated rendering into their
//! aligned intermediate forms:
//! - `segment` splits annotated source text into display units, honoring the
//!   `\` escape and `[...]` grouping syntax;
//! - `decompose` splits a zhuyin transcription string into `(symbol, tone)`
//!   syllables, one per display unit.
//!
//! Public API:
//! - `segment` - Source text → display units
//! - `Syllable` - One `(symbol, tone)` transcription unit
//! - `decompose` / `decompose_with` - Transcription string → syllables
//! - `conventionalize` / `conventionalize_with` - Habitual-notation rewrites
//! - `alphabet` - Bopomofo symbol and tone-mark data

pub mod alphabet;
pub use alphabet::{is_tone_mark, LEVEL_TONE, QIN_SHENG, UNIT_SEPARATOR};

pub mod segment;
pub use segment::segment;

pub mod transcription;
pub use transcription::{
    conventionalize, conventionalize_with, decompose, decompose_with, ConventionOptions,
    DecomposeOptions, Syllable,
};
