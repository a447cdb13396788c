use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token usage aggregated across the models an analysis run invoked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummary {
    /// Sorted, deduplicated model names seen in the usage block.
    pub models: Vec<String>,

    pub input_tokens: u64,
    pub output_tokens: u64,

    /// The usage mapping as found in the result, for display and debugging.
    /// `null` when the result carried no usage block.
    pub raw: Value,
}

impl UsageSummary {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}
