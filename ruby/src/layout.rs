//! Layout modes for rendered annotations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The three supported visual arrangements of base text and annotation.
///
/// Markup structure differs per mode: the horizontal-tone-right mode wraps
/// every unit in its own `<ruby>` element, the other two share one
/// container for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// Top-to-bottom reading, annotation stacked to the side of each
    /// column; rendered with `ruby-position: over` under `vertical-rl`
    /// writing mode.
    #[serde(rename = "vert")]
    Vertical,

    /// Left-to-right reading with symbol and tone both above the base
    /// text.
    #[serde(rename = "horiUp")]
    HorizontalToneAbove,

    /// Left-to-right reading with an upright symbol column to the right of
    /// each base character, tone beside it.
    #[serde(rename = "horiRight")]
    HorizontalToneRight,
}

impl Layout {
    /// Class name carried by the wrapping container; the stylesheet keys
    /// all its rules off this.
    pub fn container_class(&self) -> &'static str {
        match self {
            Layout::Vertical => "zhuyinVert",
            Layout::HorizontalToneAbove => "zhuyinHoriUp",
            Layout::HorizontalToneRight => "zhuyinHoriRight",
        }
    }

    /// Canonical mode name, as accepted by [`Layout::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Layout::Vertical => "vert",
            Layout::HorizontalToneAbove => "horiUp",
            Layout::HorizontalToneRight => "horiRight",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = Error;

    /// Parse a mode name. Accepts the canonical names plus kebab-case
    /// aliases; anything else is [`Error::InvalidLayout`] - mode is never
    /// silently defaulted, since markup and style correctness depend on it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vert" | "vertical" => Ok(Layout::Vertical),
            "horiUp" | "hori-up" | "horizontal-tone-above" => Ok(Layout::HorizontalToneAbove),
            "horiRight" | "hori-right" | "horizontal-tone-right" => Ok(Layout::HorizontalToneRight),
            other => Err(Error::InvalidLayout(other.to_string())),
        }
    }
}
