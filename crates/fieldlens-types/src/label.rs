use serde::{Deserialize, Serialize};

/// Document-type classification outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLabel {
    /// Category assigned by the classifier ("Invoices", "Bank Statements", ...).
    pub label: String,

    /// Classifier confidence in [0, 1] when the result carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}
