//! HTML fragments for game media

pub mod html;
pub mod video;

pub use html::{escape_attr, iframe_tag, img_tag, link_tag};
pub use video::{IframeEmbedder, VideoEmbedder};

/// Whether a stored media field holds a usable URL.
///
/// Anything that does not start with `http` (any case) is treated as missing.
pub fn is_media_url(url: &str) -> bool {
    url.get(..4)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("http"))
}
