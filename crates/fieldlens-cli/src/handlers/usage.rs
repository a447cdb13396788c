use anyhow::Result;
use std::path::Path;

use fieldlens_normalize::{load_result, summarize_usage};
use fieldlens_review::estimate_cost;

use crate::config::Config;

pub fn run(result_path: &Path, config: &Config) -> Result<()> {
    let result = load_result(result_path)?;
    let usage = summarize_usage(&result);

    let models = if usage.models.is_empty() {
        "Unknown".to_string()
    } else {
        usage.models.join(", ")
    };

    println!("Model(s): {}", models);
    println!(
        "Tokens: {} (in {} / out {})",
        usage.total_tokens(),
        usage.input_tokens,
        usage.output_tokens
    );

    match estimate_cost(&usage, &config.review_options()) {
        Some(cost) => println!("Estimated cost: ${:.4}", cost),
        None => println!(
            "Set FIELDLENS_PRICE_PER_1K_INPUT and FIELDLENS_PRICE_PER_1K_OUTPUT to estimate cost."
        ),
    }

    Ok(())
}
