use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::OutputFormat;

#[derive(Parser)]
#[command(name = "fieldlens")]
#[command(about = "Review AI-extracted document fields from saved analysis results", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file path (defaults to ~/.fieldlens/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List extracted fields with their values and page regions
    Fields {
        /// Saved analysis-result JSON
        result: PathBuf,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Show the classifier's document-type label
    Classify {
        /// Saved classification-result JSON
        result: PathBuf,

        /// Also print the analyzer id mapped to the label in config
        #[arg(long)]
        route: bool,
    },

    /// Token usage totals and estimated cost
    Usage {
        /// Saved analysis-result JSON
        result: PathBuf,
    },

    /// Draw field region highlights onto rendered page images
    Annotate {
        /// Saved analysis-result JSON
        result: PathBuf,

        /// Directory of numbered page images (page-1.png, page-2.png, ...)
        #[arg(long)]
        pages: PathBuf,

        /// Output directory for annotated images
        #[arg(long)]
        out: PathBuf,

        /// Only annotate the named field (default: all fields)
        #[arg(long)]
        field: Option<String>,
    },

    /// Full review: label, fields and usage in one pass
    Inspect {
        /// Saved analysis-result JSON
        result: PathBuf,

        /// Emit the outcome as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config,
}
