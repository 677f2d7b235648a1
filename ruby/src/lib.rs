//! webzhuyin-ruby
//!
//! Ruby-annotation markup and stylesheet generation for zhuyin-annotated
//! Chinese text, built on webzhuyin-core.
//!
//! `compose` zips display units with their syllables into `<ruby>` markup in
//! one of three layouts; `generate_style` emits the matching minified CSS.
//! Both are pure functions of their inputs.

pub mod config;
pub mod error;
pub mod layout;
pub mod markup;
pub mod style;

pub use config::{FontTarget, RenderConfig, RubyOptions, StyleOptions};
pub use error::{Error, Result};
pub use layout::Layout;
pub use markup::compose;
pub use style::{generate_style, FONT_FACE, FONT_FAMILY};

// Re-export the core pipeline so callers can drive text → markup from one crate.
pub use webzhuyin_core::{
    conventionalize, conventionalize_with, decompose, decompose_with, segment, ConventionOptions,
    DecomposeOptions, Syllable,
};
