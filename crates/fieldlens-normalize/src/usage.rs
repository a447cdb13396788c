use std::collections::BTreeSet;

use fieldlens_types::UsageSummary;
use serde_json::Value;

/// Summarize the token usage block of an analysis result.
///
/// The block is located by an unconstrained recursive search for the first
/// mapping-valued `usage` key. Within it, `tokens` entries follow the
/// `<model>-input` / `<model>-output` key convention: numeric values
/// accumulate into the totals and the de-suffixed model names are
/// collected, sorted and deduplicated. A result without a usage block
/// yields zero totals and a `null` raw mapping.
pub fn summarize_usage(result: &Value) -> UsageSummary {
    let Some(usage) = find_usage_block(result) else {
        return UsageSummary::default();
    };

    let mut models = BTreeSet::new();
    let mut input_tokens = 0u64;
    let mut output_tokens = 0u64;

    if let Some(Value::Object(tokens)) = usage.get("tokens") {
        for (key, value) in tokens {
            let Some(count) = value.as_f64().filter(|c| *c >= 0.0) else {
                continue;
            };
            if let Some(model) = key.strip_suffix("-input") {
                input_tokens += count as u64;
                if !model.is_empty() {
                    models.insert(model.to_string());
                }
            } else if let Some(model) = key.strip_suffix("-output") {
                output_tokens += count as u64;
                if !model.is_empty() {
                    models.insert(model.to_string());
                }
            }
        }
    }

    UsageSummary {
        models: models.into_iter().collect(),
        input_tokens,
        output_tokens,
        raw: usage.clone(),
    }
}

fn find_usage_block(node: &Value) -> Option<&Value> {
    match node {
        Value::Object(map) => {
            if let Some(usage) = map.get("usage")
                && usage.is_object()
            {
                return Some(usage);
            }
            map.values().find_map(find_usage_block)
        }
        Value::Array(items) => items.iter().find_map(find_usage_block),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summarize_nested_usage() {
        let result = json!({
            "result": {
                "usage": {
                    "tokens": {
                        "doc-mini-input": 1200,
                        "doc-mini-output": 340,
                        "ocr-large-input": 80.9,
                        "requests": 2
                    }
                }
            }
        });

        let usage = summarize_usage(&result);
        assert_eq!(usage.models, vec!["doc-mini", "ocr-large"]);
        assert_eq!(usage.input_tokens, 1280);
        assert_eq!(usage.output_tokens, 340);
        assert_eq!(usage.total_tokens(), 1620);
        assert!(usage.raw.is_object());
    }

    #[test]
    fn test_missing_usage_block() {
        let usage = summarize_usage(&json!({"result": {}}));
        assert!(usage.models.is_empty());
        assert_eq!(usage.total_tokens(), 0);
        assert!(usage.raw.is_null());
    }

    #[test]
    fn test_non_mapping_usage_value_skipped() {
        // A scalar "usage" does not satisfy the search; the mapping deeper
        // in the structure does
        let result = json!({
            "usage": "high",
            "inner": {"usage": {"tokens": {"m-input": 5}}}
        });
        assert_eq!(summarize_usage(&result).input_tokens, 5);
    }

    #[test]
    fn test_non_numeric_and_negative_counts_skipped() {
        let result = json!({
            "usage": {"tokens": {"m-input": "many", "m-output": -3, "n-output": 7}}
        });
        let usage = summarize_usage(&result);
        assert_eq!(usage.input_tokens, 0);
        assert_eq!(usage.output_tokens, 7);
        assert_eq!(usage.models, vec!["n"]);
    }

    #[test]
    fn test_bare_suffix_keys_counted_without_model() {
        let result = json!({
            "usage": {"tokens": {"-input": 10}}
        });
        let usage = summarize_usage(&result);
        assert_eq!(usage.input_tokens, 10);
        assert!(usage.models.is_empty());
    }
}
