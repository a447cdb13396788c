use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::Result;

/// Load a saved analysis-result JSON document from disk.
///
/// The document is kept as a raw `serde_json::Value`; all shape tolerance
/// lives in the normalization functions, not in deserialization.
pub fn load_result(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
