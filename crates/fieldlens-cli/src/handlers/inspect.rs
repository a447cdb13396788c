use anyhow::{Context, Result};
use std::path::Path;

use fieldlens_review::ReviewSession;

use crate::config::Config;
use crate::presentation;

pub fn run(result_path: &Path, json: bool, config: &Config) -> Result<()> {
    let bytes = std::fs::read(result_path)
        .with_context(|| format!("Failed to read {}", result_path.display()))?;

    let mut session = ReviewSession::new();
    let outcome = session.review(&bytes, &config.review_options())?;

    if outcome.fields.is_empty() {
        anyhow::bail!("No fields found in analyzer output");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    match &outcome.label {
        Some(label) => {
            let confidence = label
                .confidence
                .map(|c| format!("{:.2}", c))
                .unwrap_or_else(|| "N/A".to_string());
            println!(
                "Document type: {} (confidence: {})",
                presentation::emphasize(&label.label),
                confidence
            );
        }
        None => println!("Document type: Unknown"),
    }
    println!();

    presentation::print_fields_table(&outcome.fields);
    println!();

    let models = if outcome.usage.models.is_empty() {
        "Unknown".to_string()
    } else {
        outcome.usage.models.join(", ")
    };
    println!(
        "Model(s): {} | Tokens: {} (in {} / out {})",
        models,
        outcome.usage.total_tokens(),
        outcome.usage.input_tokens,
        outcome.usage.output_tokens
    );

    if let Some(cost) = outcome.estimated_cost {
        println!("Estimated cost: ${:.4}", cost);
    }

    Ok(())
}
