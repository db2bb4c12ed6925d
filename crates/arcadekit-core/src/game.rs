//! Per-entry theme helpers
//!
//! A [`Game`] binds one entry of a [`MetaSource`] to the theme configuration
//! and renders the title, excerpt, description and media markup for it.

use crate::config::{MediaSize, ThemeConfig};
use crate::error::{ArcadeError, Result};
use crate::meta::{self, EntryId, MetaSource};
use crate::render::{self, VideoEmbedder};
use crate::text;

/// Helpers for a single game entry
pub struct Game<'a, S: MetaSource + ?Sized> {
    source: &'a S,
    config: &'a ThemeConfig,
    id: EntryId,
}

impl<'a, S: MetaSource + ?Sized> Game<'a, S> {
    /// Bind to an entry, failing if the source does not know it
    pub fn new(source: &'a S, config: &'a ThemeConfig, id: EntryId) -> Result<Self> {
        if !source.contains(id) {
            return Err(ArcadeError::EntryNotFound { id: id.get() });
        }
        Ok(Self { source, config, id })
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    fn field(&self, name: &str) -> String {
        self.source.field(self.id, name).unwrap_or_default()
    }

    /// Title with markup removed, used for `alt` and `title` attributes
    fn plain_title(&self) -> String {
        text::strip_tags(&self.source.title(self.id).unwrap_or_default())
    }

    /// Title with markup removed, shortened word-safe to `max_chars` (`<= 0` keeps it whole)
    pub fn title(&self, max_chars: i64) -> String {
        text::truncate_word_safe(&self.plain_title(), max_chars)
    }

    /// Plain-text excerpt of the entry body.
    ///
    /// Shortcodes and tags are removed, the text is cut to the configured word
    /// limit, then hard-sliced to `max_chars` with the excerpt marker.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let content = self.source.content(self.id).unwrap_or_default();
        let plain = text::strip_tags(&text::strip_shortcodes(&content));
        let words = text::trim_words(&plain, self.config.excerpt_words);
        text::trim_excerpt(&words, max_chars, &self.config.excerpt_marker)
    }

    /// Stored description, plain text, trimmed like the excerpt. Empty when absent.
    pub fn description(&self, max_chars: usize) -> String {
        let plain = text::strip_tags(&self.field(meta::DESCRIPTION));
        let words = text::trim_words(&plain, 0);
        text::trim_excerpt(&words, max_chars, &self.config.excerpt_marker)
    }

    /// Raw stored thumbnail URL, possibly empty
    pub fn thumbnail_url(&self) -> String {
        self.field(meta::THUMBNAIL_URL)
    }

    /// Thumbnail `<img>`, falling back to the theme's default image
    pub fn thumbnail(&self, size: Option<MediaSize>, class: &str) -> String {
        let stored = self.thumbnail_url();
        let src = if render::is_media_url(&stored) {
            stored
        } else {
            tracing::debug!(id = %self.id, "no thumbnail, using default");
            self.config.default_thumbnail_url()
        };
        render::img_tag(
            &src,
            size.unwrap_or(self.config.thumbnail),
            class,
            &self.plain_title(),
        )
    }

    /// Raw stored URL of screenshot `number` (1..=4), possibly empty
    pub fn screenshot_url(&self, number: u8) -> Result<String> {
        check_screenshot_number(number)?;
        Ok(self.field(&meta::screenshot_field(number)))
    }

    /// Screenshot `<img>`, or `None` when that slot has no usable URL
    pub fn screenshot(
        &self,
        number: u8,
        size: Option<MediaSize>,
        class: &str,
    ) -> Result<Option<String>> {
        let url = self.screenshot_url(number)?;
        if !render::is_media_url(&url) {
            return Ok(None);
        }
        Ok(Some(render::img_tag(
            &url,
            size.unwrap_or(self.config.screenshot),
            class,
            &self.plain_title(),
        )))
    }

    /// URLs of every screenshot slot holding a usable URL, in slot order
    fn screenshot_urls(&self) -> Vec<String> {
        (1..=meta::SCREENSHOT_SLOTS)
            .map(|number| self.field(&meta::screenshot_field(number)))
            .filter(|url| render::is_media_url(url))
            .collect()
    }

    /// Number of screenshot slots holding a usable URL
    pub fn count_screenshots(&self) -> usize {
        self.screenshot_urls().len()
    }

    /// Every available screenshot, each wrapped in a lightbox link
    pub fn all_screenshots(&self, size: Option<MediaSize>, class: &str) -> Vec<String> {
        let title = self.plain_title();
        let size = size.unwrap_or(self.config.screenshot);
        self.screenshot_urls()
            .iter()
            .map(|url| {
                let img = render::img_tag(url, size, class, &title);
                render::link_tag(url, &title, &self.config.lightbox_rel, &img)
            })
            .collect()
    }

    /// Player markup for the stored gameplay video, if any
    pub fn video(&self, embedder: &dyn VideoEmbedder, size: Option<MediaSize>) -> Option<String> {
        let url = self.field(meta::VIDEO_URL);
        if url.trim().is_empty() {
            return None;
        }
        let embedded = embedder.embed(&url, size.unwrap_or(self.config.video));
        if embedded.is_none() {
            tracing::debug!(id = %self.id, "video URL could not be embedded");
        }
        embedded
    }
}

fn check_screenshot_number(number: u8) -> Result<()> {
    if !(1..=meta::SCREENSHOT_SLOTS).contains(&number) {
        return Err(ArcadeError::invalid_value(
            "screenshot number (expected 1-4)",
            number,
        ));
    }
    Ok(())
}
