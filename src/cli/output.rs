use clap::ValueEnum;

/// Output format for arcadekit commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw value, suitable for pasting into markup
    #[default]
    Human,
    /// `{"value": ...}` envelope for machine consumption
    Json,
}
