//! Ruby markup composition.
//!
//! Zips display units with their syllables into the host document's
//! base-text-plus-annotation construct (`<ruby>`/`<rt>`, with `<rp>`
//! fallback guards), nested per the selected [`Layout`].

use webzhuyin_core::{conventionalize_with, ConventionOptions, Syllable};

use crate::config::RubyOptions;
use crate::layout::Layout;
use crate::style::generate_style;

const NBSP: &str = "&nbsp;";

/// Class that makes annotation spans non-selectable; the base text always
/// stays selectable.
const UNSELECTABLE_CLASS: &str = "rtUnselectable";

/// Compose annotated markup for `units` zipped with `zhuyin`.
///
/// Alignment is positional; when `zhuyin` is shorter the remaining units
/// get empty annotations. The output is a self-contained `<div>` safe to
/// insert into a document as-is. Pure: identical inputs produce identical
/// output.
///
/// # Examples
/// ```
/// use webzhuyin_ruby::{compose, decompose, segment, Layout, RubyOptions};
///
/// let html = compose(
///     &segment("你好"),
///     &decompose("ㄋㄧˇ ㄏㄠˇ"),
///     Layout::HorizontalToneRight,
///     &RubyOptions::default(),
/// );
/// assert!(html.contains("你"));
/// assert!(html.contains("ㄋㄧ"));
/// ```
pub fn compose(units: &[String], zhuyin: &[Syllable], layout: Layout, opts: &RubyOptions) -> String {
    // Readers expect the neutral tone in front of its syllable.
    let pairs = conventionalize_with(zhuyin.to_vec(), &ConventionOptions::default());

    let rp_before = if opts.fallback_before.is_empty() {
        String::new()
    } else {
        format!("<rp>{}</rp>", opts.fallback_before)
    };
    let rp_after = if opts.fallback_after.is_empty() {
        String::new()
    } else {
        format!("<rp>{}</rp>", opts.fallback_after)
    };

    let pair_at = |i: usize| pairs.get(i).cloned().unwrap_or_default();

    let mut body = String::new();
    match layout {
        Layout::Vertical => {
            body.push_str("<ruby>");
            for (i, unit) in units.iter().enumerate() {
                let unit = escape_spaces(unit);
                let Syllable { symbol, tone } = pair_at(i);
                let tone = escape_spaces(&tone);
                // An empty tone still needs a hidden spacer so the column
                // keeps the same height as toned neighbours.
                let in_rt = if tone.is_empty() {
                    format!("{symbol}<span hidden>{NBSP}</span>")
                } else {
                    format!("{symbol}<span>{tone}</span>")
                };
                body.push_str(&format!("{unit}{rp_before}<rt>{in_rt}</rt>{rp_after}"));
            }
            body.push_str("</ruby>");
        }

        Layout::HorizontalToneAbove => {
            body.push_str("<ruby>");
            for (i, unit) in units.iter().enumerate() {
                let unit = escape_spaces(unit);
                let Syllable { symbol, tone } = pair_at(i);
                let in_rt = if tone.is_empty() {
                    symbol
                } else {
                    format!("{symbol}<span>{tone}</span>")
                };
                body.push_str(&format!("{unit}{rp_before}<rt>{in_rt}</rt>{rp_after}"));
            }
            body.push_str("</ruby>");
        }

        Layout::HorizontalToneRight => {
            for (i, unit) in units.iter().enumerate() {
                let unit = escape_spaces(unit);
                let Syllable { symbol, tone } = pair_at(i);
                let in_rt = format!("{symbol}<span>{tone}</span>");
                body.push_str(&format!(
                    "<ruby>{unit}{rp_before}<rt>{in_rt}</rt>{rp_after}</ruby>"
                ));
            }
        }
    }

    let mut classes = vec![layout.container_class().to_string()];
    classes.extend(opts.class.split_whitespace().map(str::to_string));
    if !opts.user_selectable {
        classes.push(UNSELECTABLE_CLASS.to_string());
    }

    let id_attr = if opts.id.is_empty() {
        String::new()
    } else {
        format!(" id=\"{}\"", opts.id)
    };

    let style_elem = if opts.with_css {
        format!(
            "<style>{}{}</style>",
            generate_style(layout, &opts.style_options()),
            opts.extra_css
        )
    } else {
        String::new()
    };

    tracing::debug!(%layout, units = units.len(), "composed ruby markup");
    format!(
        "<div{id_attr} class=\"{}\">{style_elem}{body}</div>",
        classes.join(" ")
    )
}

/// Literal spaces inside inline annotation content mis-size lines in some
/// engines; swap them for `&nbsp;`.
fn escape_spaces(s: &str) -> String {
    s.replace(' ', NBSP)
}
