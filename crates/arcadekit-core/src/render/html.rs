//! Attribute-escaped tag builders

use std::fmt::Write as _;

use crate::config::MediaSize;

/// Escape a value for use inside a double-quoted HTML attribute
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<img src="..." width="..." height="..." class="..." alt="..." />`
///
/// The class attribute is omitted when `class` is empty.
pub fn img_tag(src: &str, size: MediaSize, class: &str, alt: &str) -> String {
    let mut tag = format!(
        r#"<img src="{}" width="{}" height="{}""#,
        escape_attr(src),
        size.width,
        size.height
    );
    if !class.is_empty() {
        let _ = write!(tag, r#" class="{}""#, escape_attr(class));
    }
    let _ = write!(tag, r#" alt="{}" />"#, escape_attr(alt));
    tag
}

/// `<a href="..." title="..." rel="...">inner</a>`; `inner` is trusted markup
pub fn link_tag(href: &str, title: &str, rel: &str, inner: &str) -> String {
    format!(
        r#"<a href="{}" title="{}" rel="{}">{}</a>"#,
        escape_attr(href),
        escape_attr(title),
        escape_attr(rel),
        inner
    )
}

/// Embedded player frame
pub fn iframe_tag(src: &str, size: MediaSize) -> String {
    format!(
        r#"<iframe src="{}" width="{}" height="{}" frameborder="0" allowfullscreen></iframe>"#,
        escape_attr(src),
        size.width,
        size.height
    )
}
