//! Display-unit segmentation of annotated source text.
//!
//! Source text is split into the units that each receive one annotation.
//! A unit is normally one extended grapheme cluster, so user-perceived
//! characters (emoji with modifiers, hangul jamo runs, combining marks)
//! never get torn apart. Two pieces of syntax adjust the default:
//!
//! - `[...]` merges several characters into a single unit, e.g. `你好[嗎呀]`
//!   annotates 嗎呀 as one unit;
//! - `\` escapes the next cluster, so `\[` is a literal bracket.

use unicode_segmentation::UnicodeSegmentation;

/// Escape character: the following cluster is taken verbatim.
pub const ESCAPE: &str = "\\";

/// Opens a multi-character unit.
pub const GROUP_OPEN: &str = "[";

/// Closes a multi-character unit.
pub const GROUP_CLOSE: &str = "]";

/// Split annotated source text into display units.
///
/// Unterminated groups are tolerated: input ending inside `[...` flushes the
/// accumulated unit rather than failing. An escape at end of input emits an
/// empty unit for that position.
///
/// # Examples
/// ```
/// use webzhuyin_core::segment;
///
/// assert_eq!(segment("你好"), vec!["你", "好"]);
/// assert_eq!(segment("你好[嗎呀]"), vec!["你", "好", "嗎呀"]);
/// assert_eq!(segment("a\\[b"), vec!["a", "[", "b"]);
/// ```
pub fn segment(text: &str) -> Vec<String> {
    let clusters: Vec<&str> = text.graphemes(true).collect();
    let mut units: Vec<String> = Vec::new();
    let mut grouping = false;
    let mut pending = String::new();

    let mut i = 0;
    while i < clusters.len() {
        let cluster = clusters[i];
        if !grouping {
            match cluster {
                GROUP_OPEN => grouping = true,
                ESCAPE => {
                    i += 1;
                    units.push(clusters.get(i).copied().unwrap_or("").to_string());
                }
                _ => units.push(cluster.to_string()),
            }
        } else {
            match cluster {
                GROUP_CLOSE => {
                    grouping = false;
                    units.push(std::mem::take(&mut pending));
                }
                ESCAPE => {
                    i += 1;
                    pending.push_str(clusters.get(i).copied().unwrap_or(""));
                }
                _ => pending.push_str(cluster),
            }
        }
        i += 1;
    }
    if !pending.is_empty() {
        units.push(pending);
    }

    tracing::trace!(units = units.len(), "segmented source text");
    units
}
