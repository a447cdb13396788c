use anyhow::Result;

use crate::config::Config;

pub fn run(config: &Config) -> Result<()> {
    println!(
        "Endpoint: {}",
        config.endpoint.as_deref().unwrap_or("(not set)")
    );
    println!(
        "API key:  {}",
        if config.api_key.is_some() {
            "configured"
        } else {
            "(not set)"
        }
    );

    if config.analyzers.is_empty() {
        println!("Analyzers: (none mapped)");
    } else {
        println!("Analyzers:");
        for (label, analyzer) in &config.analyzers {
            println!("  {} -> {}", label, analyzer);
        }
    }

    match (config.pricing.input_per_1k, config.pricing.output_per_1k) {
        (Some(input), Some(output)) => {
            println!("Pricing:  ${}/1k input, ${}/1k output", input, output);
        }
        _ => println!("Pricing:  (not set; cost estimates disabled)"),
    }

    Ok(())
}
