//! Arcadekit Core Library
//!
//! Word-safe title truncation, compact number formatting, and the per-game
//! helpers that turn entry metadata into theme markup.

pub mod config;
pub mod error;
pub mod format;
pub mod game;
pub mod logging;
pub mod meta;
pub mod render;
pub mod text;

pub use error::{ArcadeError, Result};
pub use format::{format_compact, format_compact_count};
pub use game::Game;
pub use text::truncate_word_safe;
