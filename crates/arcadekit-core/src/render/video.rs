//! Gameplay video embedding
//!
//! Resolving provider URLs into player markup is left to the caller; the
//! helpers only hand the stored URL to a [`VideoEmbedder`].

use crate::config::MediaSize;

use super::{html, is_media_url};

/// Turns a stored video URL into player markup
pub trait VideoEmbedder: Send + Sync {
    /// `None` when the URL cannot be embedded
    fn embed(&self, url: &str, size: MediaSize) -> Option<String>;
}

/// Embeds the URL directly in an `<iframe>`
#[derive(Debug, Clone, Copy, Default)]
pub struct IframeEmbedder;

impl VideoEmbedder for IframeEmbedder {
    fn embed(&self, url: &str, size: MediaSize) -> Option<String> {
        let url = url.trim();
        if !is_media_url(url) {
            return None;
        }
        Some(html::iframe_tag(url, size))
    }
}

impl<F> VideoEmbedder for F
where
    F: Fn(&str, MediaSize) -> Option<String> + Send + Sync,
{
    fn embed(&self, url: &str, size: MediaSize) -> Option<String> {
        self(url, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iframe_embedder() {
        let html = IframeEmbedder
            .embed(" https://video.example/e/1 ", MediaSize::new(320, 240))
            .unwrap();
        assert!(html.starts_with(r#"<iframe src="https://video.example/e/1""#));
        assert!(html.contains(r#"width="320" height="240""#));
    }

    #[test]
    fn test_iframe_embedder_rejects_non_urls() {
        assert_eq!(IframeEmbedder.embed("", MediaSize::new(1, 1)), None);
        assert_eq!(
            IframeEmbedder.embed("<object>legacy</object>", MediaSize::new(1, 1)),
            None
        );
    }

    #[test]
    fn test_closure_embedder() {
        let embedder = |url: &str, _size: MediaSize| Some(format!("[video {url}]"));
        assert_eq!(
            embedder.embed("http://v.example/x", MediaSize::new(1, 1)),
            Some("[video http://v.example/x]".to_string())
        );
    }
}
