use fieldlens_normalize::{extract_fields_with_locations, parse_classifier_output, summarize_usage};
use fieldlens_types::{DocumentLabel, Field, UsageSummary};
use serde::Serialize;
use serde_json::Value;

/// Parameters that affect a review outcome. Part of the session cache key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewOptions {
    /// Price per 1000 input tokens, for the cost estimate display.
    pub price_per_1k_input: Option<f64>,

    /// Price per 1000 output tokens.
    pub price_per_1k_output: Option<f64>,
}

impl ReviewOptions {
    /// Stable fingerprint mixed into the session cache key.
    pub(crate) fn fingerprint(&self) -> String {
        format!("{:?}:{:?}", self.price_per_1k_input, self.price_per_1k_output)
    }
}

/// Everything the review surface needs about one analysis result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOutcome {
    /// Classification label, when the result carries one. Extraction-only
    /// results have none.
    pub label: Option<DocumentLabel>,

    pub fields: Vec<Field>,

    pub usage: UsageSummary,

    /// Linear per-1k-token estimate; `None` unless both prices are set.
    pub estimated_cost: Option<f64>,
}

impl ReviewOutcome {
    /// Normalize one analysis result document. Pure: the same result and
    /// options always produce the same outcome.
    pub fn from_result(result: &Value, options: &ReviewOptions) -> Self {
        let usage = summarize_usage(result);
        let estimated_cost = estimate_cost(&usage, options);

        ReviewOutcome {
            label: parse_classifier_output(result),
            fields: extract_fields_with_locations(result),
            usage,
            estimated_cost,
        }
    }
}

/// `(input/1000) * price_in + (output/1000) * price_out`; `None` unless
/// both prices are configured.
pub fn estimate_cost(usage: &UsageSummary, options: &ReviewOptions) -> Option<f64> {
    let input_price = options.price_per_1k_input?;
    let output_price = options.price_per_1k_output?;

    Some(
        usage.input_tokens as f64 / 1000.0 * input_price
            + usage.output_tokens as f64 / 1000.0 * output_price,
    )
}
