//! Render configuration: option bags for markup and style generation.
//!
//! Every combination of option values is valid input; defaults reproduce
//! the habitual rendering (kai font applied everywhere, annotations not
//! user-selectable, no scoping).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::layout::Layout;

/// Where the kai font family is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontTarget {
    /// Base text and annotations.
    #[default]
    #[serde(rename = "all")]
    All,
    /// Annotation spans only.
    #[serde(rename = "zhuyin")]
    Zhuyin,
    /// Neither; also suppresses the `@font-face` block.
    #[serde(rename = "none")]
    None,
}

impl FontTarget {
    pub fn name(&self) -> &'static str {
        match self {
            FontTarget::All => "all",
            FontTarget::Zhuyin => "zhuyin",
            FontTarget::None => "none",
        }
    }
}

impl fmt::Display for FontTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FontTarget::All),
            "zhuyin" | "annotation-only" => Ok(FontTarget::Zhuyin),
            "none" => Ok(FontTarget::None),
            other => Err(Error::InvalidFontTarget(other.to_string())),
        }
    }
}

/// Options for [`crate::markup::compose`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RubyOptions {
    /// `id` attribute for the wrapping container; empty = none.
    pub id: String,

    /// Extra class names for the wrapping container, space-separated.
    pub class: String,

    /// Fallback guard text emitted in `<rp>` before each annotation, for
    /// renderers without ruby support. Empty = no guard element.
    pub fallback_before: String,

    /// Fallback guard text emitted in `<rp>` after each annotation.
    pub fallback_after: String,

    /// Leave annotations selectable. Off by default: copying the base text
    /// should not drag the phonetic gloss along with it.
    pub user_selectable: bool,

    /// Embed a `<style>` element (the generated stylesheet plus
    /// `extra_css`) inside the container.
    pub with_css: bool,

    /// Raw CSS appended verbatim after the generated stylesheet when
    /// `with_css` is set.
    pub extra_css: String,

    /// Font application target for the embedded stylesheet.
    pub font_for: FontTarget,

    /// Include the `@font-face` declarations in the embedded stylesheet.
    pub with_font_face: bool,
}

impl Default for RubyOptions {
    fn default() -> Self {
        Self {
            id: String::new(),
            class: String::new(),
            fallback_before: String::new(),
            fallback_after: String::new(),
            user_selectable: false,
            with_css: false,
            extra_css: String::new(),
            font_for: FontTarget::All,
            with_font_face: true,
        }
    }
}

impl RubyOptions {
    /// Style options matching this markup configuration, scoped to the
    /// container's id/classes.
    pub fn style_options(&self) -> StyleOptions {
        StyleOptions {
            scope_id: self.id.clone(),
            scope_class: self.class.clone(),
            font_for: self.font_for,
            with_font_face: self.with_font_face,
        }
    }
}

/// Options for [`crate::style::generate_style`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    /// Scope all rules under this id; empty = no id selector.
    pub scope_id: String,

    /// Scope all rules under these space-separated class names; empty = no
    /// class selector. With `scope_id` also empty the rules apply to every
    /// annotation container in the document.
    pub scope_class: String,

    /// Where the kai font family is applied.
    pub font_for: FontTarget,

    /// Include the `@font-face` declarations for the remote kai faces.
    pub with_font_face: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            scope_id: String::new(),
            scope_class: String::new(),
            font_for: FontTarget::All,
            with_font_face: true,
        }
    }
}

/// A complete render configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub layout: Layout,
    pub ruby: RubyOptions,
    pub style: StyleOptions,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: Layout::HorizontalToneRight,
            ruby: RubyOptions::default(),
            style: StyleOptions::default(),
        }
    }
}

impl RenderConfig {
    /// Load a render configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: RenderConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load a render configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize this configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
