use anyhow::Result;
use std::path::Path;

use fieldlens_normalize::{load_result, parse_classifier_output};
use fieldlens_review::route_analyzer;

use crate::config::Config;
use crate::presentation;

pub fn run(result_path: &Path, route: bool, config: &Config) -> Result<()> {
    let result = load_result(result_path)?;

    let Some(label) = parse_classifier_output(&result) else {
        anyhow::bail!("Could not determine document type from classifier output");
    };

    let confidence = label
        .confidence
        .map(|c| format!("{:.2}", c))
        .unwrap_or_else(|| "N/A".to_string());
    println!(
        "Document type: {} (confidence: {})",
        presentation::emphasize(&label.label),
        confidence
    );

    if route {
        match route_analyzer(&label.label, &config.analyzers) {
            Some(analyzer) => println!("Analyzer: {}", analyzer),
            None => anyhow::bail!("No analyzer mapped for document label '{}'", label.label),
        }
    }

    Ok(())
}
