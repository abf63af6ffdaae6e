//! Name-derived text transforms: captions from file names, display labels
//! from attribute keys, and the attribute skip list.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

/// Leading "`<digits>=`" ordering prefix used for manual image sequencing.
static ORDER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+=").unwrap());

/// Trailing "`.<non-dots>`" file extension.
static EXTENSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[^.]+$").unwrap());

/// Attributes never shown in the generated attribute table.
static SKIP_ATTRIBUTES: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| ["title", "id", "locked", "page", "type"].into_iter().collect());

/// Derives a human caption from an image link's display name.
///
/// Strips the ordering prefix and the extension when present; nothing else
/// is transformed. Once neither remains the name passes through unchanged,
/// so deriving an already-derived single-extension name is a no-op.
pub fn derive_caption(file_name: &str) -> String {
    let without_prefix = ORDER_PREFIX.replace(file_name, "");
    EXTENSION.replace(&without_prefix, "").into_owned()
}

/// Formats a raw attribute key such as `project_owner` into the display
/// label `Project Owner`.
///
/// Underscores become spaces, then the first letter of every
/// whitespace-delimited word is upper-cased (ASCII folding only).
pub fn format_attribute(raw: &str) -> String {
    let spaced = raw.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for ch in spaced.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.push(ch.to_ascii_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Whether an attribute key is excluded from the attribute table.
/// Exact, case-sensitive membership.
pub fn is_skipped_attribute(key: &str) -> bool {
    SKIP_ATTRIBUTES.contains(key)
}
