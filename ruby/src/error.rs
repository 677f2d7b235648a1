//! Error taxonomy for the rendering crates.
//!
//! Only two conditions fail fast: an unknown layout mode and an unknown
//! font target, both raised when parsing caller-supplied names. Everything
//! else (short transcriptions, unterminated groups, unknown keys) is
//! handled by permissive defaulting in the functions concerned.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Layout mode name outside the closed enumeration.
    #[error("unknown layout mode `{0}`, expected `vert`, `horiUp` or `horiRight`")]
    InvalidLayout(String),

    /// Font-application target outside `all` / `zhuyin` / `none`.
    #[error("unknown font target `{0}`, expected `all`, `zhuyin` or `none`")]
    InvalidFontTarget(String),
}

pub type Result<T> = std::result::Result<T, Error>;
