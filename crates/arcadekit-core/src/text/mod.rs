//! Text shaping for titles, excerpts and descriptions
//!
//! All lengths are counted in Unicode scalar values, so a cut never lands
//! inside a multi-byte character.

use regex::Regex;
use std::sync::OnceLock;

/// Marker appended to a title shortened by [`truncate_word_safe`]
pub const TRUNCATION_MARKER: &str = " ..";

/// Default marker appended to a shortened excerpt
pub const EXCERPT_MARKER: &str = " [...]";

/// A word-safe cut shorter than this falls back to a hard slice
const MIN_WORD_SAFE_CHARS: usize = 4;

static TAG_RE: OnceLock<Option<Regex>> = OnceLock::new();
static SHORTCODE_RE: OnceLock<Option<Regex>> = OnceLock::new();
static OPEN_SHORTCODE_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn compiled(
    cell: &'static OnceLock<Option<Regex>>,
    name: &str,
    pattern: &str,
) -> Option<&'static Regex> {
    cell.get_or_init(|| match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(error = %e, regex = name, "failed to compile regex");
            None
        }
    })
    .as_ref()
}

fn tag_re() -> Option<&'static Regex> {
    compiled(&TAG_RE, "tag", r"(?s)<!--.*?-->|<[^>]*>")
}

fn shortcode_re() -> Option<&'static Regex> {
    compiled(
        &SHORTCODE_RE,
        "shortcode",
        r"\[/?[A-Za-z][\w-]*(?:\s[^\]]*)?/?\]",
    )
}

fn open_shortcode_re() -> Option<&'static Regex> {
    compiled(
        &OPEN_SHORTCODE_RE,
        "open shortcode",
        r"\[([A-Za-z][\w-]*)(?:\s[^\]]*)?/?\]",
    )
}

/// Byte offset just past the first `max_chars` characters of `text`.
///
/// Returns `None` when the text has `max_chars` characters or fewer.
fn char_boundary(text: &str, max_chars: usize) -> Option<usize> {
    text.char_indices().nth(max_chars).map(|(idx, _)| idx)
}

/// Shorten `text` to at most `max_chars` characters without splitting the last word.
///
/// - `max_chars <= 0`, or text that already fits, is returned unchanged with no marker.
/// - Otherwise the first `max_chars` characters are cut back to their last space,
///   dropping the partial word after it.
/// - If that leaves fewer than four characters (one long leading word, or no space
///   at all), the hard `max_chars` slice is used instead, even if it splits a word.
/// - [`TRUNCATION_MARKER`] is appended to every shortened result.
///
/// ```
/// use arcadekit_core::text::truncate_word_safe;
///
/// assert_eq!(truncate_word_safe("Space Invaders Deluxe", 16), "Space Invaders ..");
/// assert_eq!(truncate_word_safe("superlongsingleword", 5), "super ..");
/// assert_eq!(truncate_word_safe("Pong", 10), "Pong");
/// ```
pub fn truncate_word_safe(text: &str, max_chars: i64) -> String {
    if max_chars <= 0 {
        return text.to_string();
    }

    let budget = usize::try_from(max_chars).unwrap_or(usize::MAX);
    let Some(cut) = char_boundary(text, budget) else {
        return text.to_string();
    };

    let candidate = &text[..cut];
    let word_safe = candidate
        .rfind(' ')
        .map_or("", |space| &candidate[..space]);

    let kept = if word_safe.chars().count() < MIN_WORD_SAFE_CHARS {
        candidate
    } else {
        word_safe
    };

    format!("{}{}", kept, TRUNCATION_MARKER)
}

/// Remove HTML tags and comments, keeping the text between them.
pub fn strip_tags(html: &str) -> String {
    match tag_re() {
        Some(re) => re.replace_all(html, "").into_owned(),
        None => html.to_string(),
    }
}

/// Remove bracketed shortcodes such as `[gallery ids="1,2"]`.
///
/// An enclosing shortcode like `[caption]...[/caption]` is removed together
/// with its content. Self-closing tags and unmatched tags are removed alone.
pub fn strip_shortcodes(text: &str) -> String {
    let (Some(open_re), Some(tag_re)) = (open_shortcode_re(), shortcode_re()) else {
        return text.to_string();
    };

    let mut kept = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(caps) = open_re.captures(rest) {
        let (Some(tag), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        kept.push_str(&rest[..tag.start()]);

        let after = &rest[tag.end()..];
        let closing = format!("[/{}]", name.as_str());
        rest = match after.find(&closing) {
            Some(pos) if !tag.as_str().ends_with("/]") => &after[pos + closing.len()..],
            _ => after,
        };
    }
    kept.push_str(rest);

    tag_re.replace_all(&kept, "").into_owned()
}

/// Collapse whitespace and keep the first `max_words` words.
///
/// A limit of zero keeps every word.
pub fn trim_words(text: &str, max_words: usize) -> String {
    let words = text.split_whitespace();
    if max_words == 0 {
        words.collect::<Vec<_>>().join(" ")
    } else {
        words.take(max_words).collect::<Vec<_>>().join(" ")
    }
}

/// Hard-slice `text` to `max_chars` characters and append `marker` when it is longer.
///
/// A `max_chars` of zero disables the limit.
pub fn trim_excerpt(text: &str, max_chars: usize, marker: &str) -> String {
    if max_chars == 0 {
        return text.to_string();
    }

    match char_boundary(text, max_chars) {
        Some(cut) => format!("{}{}", &text[..cut], marker),
        None => text.to_string(),
    }
}
