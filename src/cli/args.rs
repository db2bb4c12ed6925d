use arcadekit_core::config::MediaSize;
use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct ImageArgs {
    /// Width in pixels (default from the theme config)
    #[arg(long)]
    pub width: Option<u32>,

    /// Height in pixels (default from the theme config)
    #[arg(long)]
    pub height: Option<u32>,

    /// CSS class for the image tag
    #[arg(long, default_value = "")]
    pub class: String,
}

impl ImageArgs {
    /// Fill in whichever dimension was not given from `default`
    pub fn size_or(&self, default: MediaSize) -> MediaSize {
        MediaSize::new(
            self.width.unwrap_or(default.width),
            self.height.unwrap_or(default.height),
        )
    }
}
