//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Width and height of a rendered media element, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSize {
    pub width: u32,
    pub height: u32,
}

impl MediaSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Theme configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Base URL of the active theme, used to build the default thumbnail URL
    #[serde(default)]
    pub template_dir: String,

    /// Default thumbnail path, relative to `template_dir`
    #[serde(default = "default_thumbnail")]
    pub default_thumbnail: String,

    /// Default thumbnail size
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail: MediaSize,

    /// Default screenshot size
    #[serde(default = "default_screenshot_size")]
    pub screenshot: MediaSize,

    /// Default video player size
    #[serde(default = "default_video_size")]
    pub video: MediaSize,

    /// Word limit applied to excerpts before the character limit (0 disables it)
    #[serde(default = "default_excerpt_words")]
    pub excerpt_words: usize,

    /// Marker appended to a shortened excerpt or description
    #[serde(default = "default_excerpt_marker")]
    pub excerpt_marker: String,

    /// `rel` attribute on screenshot gallery links
    #[serde(default = "default_lightbox_rel")]
    pub lightbox_rel: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            template_dir: String::new(),
            default_thumbnail: default_thumbnail(),
            thumbnail: default_thumbnail_size(),
            screenshot: default_screenshot_size(),
            video: default_video_size(),
            excerpt_words: default_excerpt_words(),
            excerpt_marker: default_excerpt_marker(),
            lightbox_rel: default_lightbox_rel(),
        }
    }
}

fn default_thumbnail() -> String {
    "images/def_thumb.png".to_string()
}

fn default_thumbnail_size() -> MediaSize {
    MediaSize::new(100, 100)
}

fn default_screenshot_size() -> MediaSize {
    MediaSize::new(450, 300)
}

fn default_video_size() -> MediaSize {
    MediaSize::new(480, 360)
}

fn default_excerpt_words() -> usize {
    100
}

fn default_excerpt_marker() -> String {
    crate::text::EXCERPT_MARKER.to_string()
}

fn default_lightbox_rel() -> String {
    "lightbox".to_string()
}
