//! Stylesheet generation for the three annotation layouts.
//!
//! One fixed template per layout, parameterized by a scoping selector
//! prefix and the font options, then whitespace-minified. The numeric
//! constants in the templates (line heights, the 0.3em annotation size,
//! translate/margin compensations for engine-specific ruby quirks) are
//! layout data tuned against real renderers; they are emitted verbatim.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{FontTarget, StyleOptions};
use crate::layout::Layout;

/// `@font-face` declarations for the preferred kai (regular-script) faces:
/// the MOE standard kai face plus the CNS kai family, with its Ext-B and
/// Plus planes on their own unicode ranges.
pub const FONT_FACE: &str = r#"
@font-face {
	font-family: "TW-MOE-Std-Kai";
	src:
		local("TW-MOE-Std-Kai"),
		url("https://gist.githubusercontent.com/XiaoPanPanKevinPan/e064a6ca6b35a964e0a927bf2f2ecc84/raw/fb85739e5a3906d2b99fa29f29349779e658b690/edukai-4.0.ttf") format("truetype");
	unicode-range: U+0000-FEFF;
}
@font-face {
	font-family: "TW-Kai";
	src: local("TW-Kai"), url("https://raw.githubusercontent.com/XiaoPanPanKevinPan/fontCollection/main/TW-Kai-98_1.ttf") format("truetype");
	unicode-range: U+0000-FFFF;
}
@font-face {
	font-family: "TW-Kai";
	src: local("TW-Kai-Ext-B"), url("https://raw.githubusercontent.com/XiaoPanPanKevinPan/fontCollection/main/TW-Kai-Ext-B-98_1.ttf") format("truetype");
	unicode-range: U+20000-2FFFF;
}
@font-face {
	font-family: "TW-Kai";
	src: local("TW-Kai-Plus"), url("https://github.com/XiaoPanPanKevinPan/fontCollection/blob/main/TW-Kai-Plus-98_1.ttf") format("truetype");
	unicode-range: U+F0000-FFFFF;
}
"#;

/// Kai family stack: MOE standard kai, CNS kai, then the local kai faces
/// that ship with Windows and macOS.
pub const FONT_FAMILY: &str = r#""TW-MOE-Std-Kai", "TW-Kai", "DFKai-SB", "BiauKai""#;

static FONT_FAMILY_RULE: Lazy<String> = Lazy::new(|| format!("font-family: {FONT_FAMILY};"));

/// Generate the minified stylesheet for `layout`.
///
/// An empty scoping prefix means the rules apply to every annotation
/// container in the document. Pure: identical inputs produce identical
/// output.
pub fn generate_style(layout: Layout, opts: &StyleOptions) -> String {
    let prefix = selector_prefix(opts);
    let font_face = if opts.with_font_face && opts.font_for != FontTarget::None {
        FONT_FACE
    } else {
        ""
    };
    let font_all = if opts.font_for == FontTarget::All {
        FONT_FAMILY_RULE.as_str()
    } else {
        ""
    };
    let font_zhuyin = if opts.font_for == FontTarget::Zhuyin {
        FONT_FAMILY_RULE.as_str()
    } else {
        ""
    };

    let template = match layout {
        Layout::Vertical => vertical_template(&prefix, font_face, font_all, font_zhuyin),
        Layout::HorizontalToneAbove => tone_above_template(&prefix, font_face, font_all, font_zhuyin),
        Layout::HorizontalToneRight => tone_right_template(&prefix, font_face, font_all, font_zhuyin),
    };

    let css = minify(&template);
    tracing::debug!(%layout, bytes = css.len(), "generated stylesheet");
    css
}

/// Build the selector prefix from the scoping options: an id selector
/// and/or one class selector per scope class, concatenated.
fn selector_prefix(opts: &StyleOptions) -> String {
    let mut prefix = String::new();
    if !opts.scope_id.is_empty() {
        prefix.push('#');
        prefix.push_str(&opts.scope_id);
    }
    for class in opts.scope_class.split_whitespace() {
        prefix.push('.');
        prefix.push_str(class);
    }
    prefix
}

fn vertical_template(prefix: &str, font_face: &str, font_all: &str, font_zhuyin: &str) -> String {
    format!(
        r#"{font_face}
{prefix}.zhuyinVert{{
	writing-mode: vertical-rl;
	overflow: auto;
	width: 100%;
	max-height: 100%;
	box-sizing: border-box;
	line-height: 1.8em;
	{font_all}
	padding-right: 0.25em;
}}
{prefix}.zhuyinVert ruby{{
	ruby-position: over;
}}
{prefix}.zhuyinVert rt{{
	writing-mode: vertical-lr;
	text-orientation: upright;
	{font_zhuyin}
	font-size: 0.3em;
	translate: calc((-1em + 2em / 9) + (1em / 9));
	margin-left: calc(0.5em + 1em / 9);
	text-align: center;
	text-justify: none;
}}
{prefix}.zhuyinVert.rtUnselectable rt, {prefix}.zhuyinVert.rtUnselectable rp {{
	user-select: none;
}}
{prefix}.zhuyinVert rt span:last-of-type{{
	display: inline-block;
	height: 0;
	translate: calc(1em - 2em / 9) calc(-1em - 5em / 8 + 2em / 9);
	text-orientation: upright;
}}"#
    )
}

fn tone_above_template(prefix: &str, font_face: &str, font_all: &str, font_zhuyin: &str) -> String {
    format!(
        r#"{font_face}
{prefix}.zhuyinHoriUp {{
	padding-top: 0.5em;
	box-sizing: border-box;
	{font_all}
}}
{prefix}.zhuyinHoriUp ruby {{
	line-height: 1.8em;
}}
{prefix}.zhuyinHoriUp rt {{
	{font_zhuyin}
	font-size: 0.3em;
	text-align: center;
	text-justify: none;
	translate: 0 calc(-1em / 9);
	margin-bottom: 0 calc(-1em / 9);
}}
{prefix}.zhuyinHoriUp.rtUnselectable rt, {prefix}.zhuyinHoriUp.rtUnselectable rp {{
	user-select: none;
}}
{prefix}.zhuyinHoriUp rt span:last-of-type {{
	display: inline-block;
	width: 0px;
	translate: calc(-0.3em - 2em / 9) calc(-1em + 2em / 9);
}}"#
    )
}

fn tone_right_template(prefix: &str, font_face: &str, font_all: &str, font_zhuyin: &str) -> String {
    format!(
        r#"{font_face}
{prefix}.zhuyinHoriRight {{
	{font_all}
	box-sizing: border-box;
}}
{prefix}.zhuyinHoriRight ruby{{
	display: inline-block;
	line-height: 1.3;
}}
{prefix}.zhuyinHoriRight rt{{
	display: inline-grid;
	vertical-align: middle;
	writing-mode: vertical-lr;
	text-orientation: upright;
	{font_zhuyin}
	font-size: 0.3em;
	width: calc(1em / 0.3 * 0.5);
	padding-left: calc(1em / 9);
}}
{prefix}.zhuyinHoriRight.rtUnselectable rt, {prefix}.zhuyinHoriRight.rtUnselectable rp {{
	user-select: none;
}}
{prefix}.zhuyinHoriRight rt span:last-of-type {{
	text-align: end;
	margin-bottom: calc(5em / 8 - 2em / 9);
	margin-left: calc(-2em / 9);
}}"#
    )
}

static NEWLINES_TABS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\n\t]").unwrap());
static COMMENT_BLOCKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*.*?\*/").unwrap());
static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"  +").unwrap());
static AROUND_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r" ?([{}:;]) ?").unwrap());

/// Whitespace-minify a stylesheet: newlines and tabs to spaces, comment
/// blocks out, space runs collapsed, spaces around `{` `}` `:` `;`
/// stripped.
fn minify(css: &str) -> String {
    let css = NEWLINES_TABS.replace_all(css, " ");
    let css = COMMENT_BLOCKS.replace_all(&css, "");
    let css = SPACE_RUNS.replace_all(&css, " ");
    let css = AROUND_PUNCT.replace_all(&css, "$1");
    css.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_option_combinations() -> Vec<StyleOptions> {
        let mut combos = Vec::new();
        for font_for in [FontTarget::All, FontTarget::Zhuyin, FontTarget::None] {
            for with_font_face in [true, false] {
                for (scope_id, scope_class) in
                    [("", ""), ("anno", ""), ("", "a b"), ("anno", "lesson")]
                {
                    combos.push(StyleOptions {
                        scope_id: scope_id.to_string(),
                        scope_class: scope_class.to_string(),
                        font_for,
                        with_font_face,
                    });
                }
            }
        }
        combos
    }

    #[test]
    fn minified_output_has_no_raw_whitespace_runs() {
        for layout in [
            Layout::Vertical,
            Layout::HorizontalToneAbove,
            Layout::HorizontalToneRight,
        ] {
            for opts in all_option_combinations() {
                let css = generate_style(layout, &opts);
                assert!(!css.contains('\n'), "{layout} {opts:?}: newline");
                assert!(!css.contains('\t'), "{layout} {opts:?}: tab");
                assert!(!css.contains("  "), "{layout} {opts:?}: space run");
                assert!(!css.contains("/*"), "{layout} {opts:?}: comment");
            }
        }
    }

    #[test]
    fn scoping_prefix_concatenates_id_and_classes() {
        let opts = StyleOptions {
            scope_id: "anno".to_string(),
            scope_class: "large print".to_string(),
            ..StyleOptions::default()
        };
        let css = generate_style(Layout::Vertical, &opts);
        assert!(css.contains("#anno.large.print.zhuyinVert{"));
    }

    #[test]
    fn empty_scoping_applies_globally() {
        let css = generate_style(Layout::HorizontalToneRight, &StyleOptions::default());
        assert!(css.contains(".zhuyinHoriRight{"));
        assert!(!css.contains("#"));
    }

    #[test]
    fn font_target_selects_where_family_lands() {
        let base = StyleOptions {
            with_font_face: false,
            ..StyleOptions::default()
        };

        let all = generate_style(
            Layout::HorizontalToneAbove,
            &StyleOptions {
                font_for: FontTarget::All,
                ..base.clone()
            },
        );
        let container_rule = all.split(".zhuyinHoriUp{").nth(1).unwrap();
        assert!(container_rule.starts_with("padding-top:0.5em;box-sizing:border-box;font-family:"));

        let zhuyin = generate_style(
            Layout::HorizontalToneAbove,
            &StyleOptions {
                font_for: FontTarget::Zhuyin,
                ..base.clone()
            },
        );
        assert!(zhuyin.contains(".zhuyinHoriUp rt{font-family:"));
        assert!(!zhuyin.contains("box-sizing:border-box;font-family:"));

        let none = generate_style(
            Layout::HorizontalToneAbove,
            &StyleOptions {
                font_for: FontTarget::None,
                ..base
            },
        );
        assert!(!none.contains("font-family"));
    }

    #[test]
    fn font_face_block_is_optional() {
        let with = generate_style(Layout::Vertical, &StyleOptions::default());
        assert!(with.contains("@font-face"));
        assert!(with.contains("TW-MOE-Std-Kai"));

        let without = generate_style(
            Layout::Vertical,
            &StyleOptions {
                with_font_face: false,
                ..StyleOptions::default()
            },
        );
        assert!(!without.contains("@font-face"));

        // font target `none` suppresses the block even when requested
        let none = generate_style(
            Layout::Vertical,
            &StyleOptions {
                font_for: FontTarget::None,
                with_font_face: true,
                ..StyleOptions::default()
            },
        );
        assert!(!none.contains("@font-face"));
    }

    #[test]
    fn generate_style_is_pure() {
        let opts = StyleOptions {
            scope_id: "x".to_string(),
            ..StyleOptions::default()
        };
        assert_eq!(
            generate_style(Layout::Vertical, &opts),
            generate_style(Layout::Vertical, &opts)
        );
    }

    #[test]
    fn minify_strips_comments_and_tightens_punctuation() {
        let css = "a {\n\tcolor: red;\n/* note */\n}\n\nb  { x:  y ; }";
        assert_eq!(minify(css), "a{color:red;}b{x:y;}");
    }

    #[test]
    fn layout_constants_survive_minification() {
        let css = generate_style(Layout::HorizontalToneRight, &StyleOptions::default());
        assert!(css.contains("font-size:0.3em"));
        assert!(css.contains("width:calc(1em / 0.3 * 0.5)"));

        let vert = generate_style(Layout::Vertical, &StyleOptions::default());
        assert!(vert.contains("line-height:1.8em"));
        assert!(vert.contains("translate:calc((-1em + 2em / 9) + (1em / 9))"));
    }
}
