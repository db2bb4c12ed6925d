//! Commands that render helpers for one catalog entry

use serde_json::Value;

use arcadekit_core::config::{MediaSize, ThemeConfig};
use arcadekit_core::error::Result;
use arcadekit_core::meta::MetaSource;
use arcadekit_core::render::IframeEmbedder;
use arcadekit_core::Game;

use crate::cli::GameCommand;

/// Run a catalog command against an already-bound game
pub fn run<S: MetaSource + ?Sized>(
    command: &GameCommand,
    game: &Game<'_, S>,
    config: &ThemeConfig,
) -> Result<Value> {
    let value = match command {
        GameCommand::Title { max, .. } => Value::String(game.title(*max)),

        GameCommand::Excerpt { max, .. } => Value::String(game.excerpt(*max)),

        GameCommand::Description { max, .. } => Value::String(game.description(*max)),

        GameCommand::Thumbnail { image, .. } => Value::String(
            game.thumbnail(Some(image.size_or(config.thumbnail)), &image.class),
        ),

        GameCommand::ThumbnailUrl { .. } => Value::String(game.thumbnail_url()),

        GameCommand::Screenshot { number, image, .. } => game
            .screenshot(
                *number,
                Some(image.size_or(config.screenshot)),
                &image.class,
            )?
            .map_or(Value::Null, Value::String),

        GameCommand::ScreenshotUrl { number, .. } => Value::String(game.screenshot_url(*number)?),

        GameCommand::Screenshots { image, .. } => Value::from(
            game.all_screenshots(Some(image.size_or(config.screenshot)), &image.class),
        ),

        GameCommand::CountScreenshots { .. } => Value::from(game.count_screenshots()),

        GameCommand::Video { width, height, .. } => {
            let size = MediaSize::new(
                width.unwrap_or(config.video.width),
                height.unwrap_or(config.video.height),
            );
            game.video(&IframeEmbedder, Some(size))
                .map_or(Value::Null, Value::String)
        }
    };

    tracing::debug!(id = %game.id(), "rendered helper");
    Ok(value)
}
