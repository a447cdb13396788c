use clap::ValueEnum;

/// Output format for tabular commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table
    Plain,
    /// Pretty-printed JSON
    Json,
    /// CSV on stdout
    Csv,
}
