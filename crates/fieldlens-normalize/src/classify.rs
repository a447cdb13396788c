use fieldlens_types::DocumentLabel;
use serde_json::{Map, Value};

/// Label keys probed in priority order on every mapping.
const LABEL_KEYS: [&str; 2] = ["category", "label"];

/// Confidence keys; the first present wins, coercible or not.
const CONFIDENCE_KEYS: [&str; 3] = ["confidence", "score", "probability"];

/// Extract the document-type label from a classification result.
///
/// Unconstrained recursive search for the first mapping carrying a string
/// `category` (else `label`) key; traversal follows mapping insertion
/// order, then sequence order. When several classification candidates
/// exist only the first encountered is used — a known limitation of the
/// heuristic, not a guaranteed "best" pick.
///
/// `None` means no label was found anywhere; the caller decides whether
/// that is a user-facing failure.
pub fn parse_classifier_output(result: &Value) -> Option<DocumentLabel> {
    find_first_label(result)
}

fn find_first_label(node: &Value) -> Option<DocumentLabel> {
    match node {
        Value::Object(map) => label_of(map).or_else(|| map.values().find_map(find_first_label)),
        Value::Array(items) => items.iter().find_map(find_first_label),
        _ => None,
    }
}

fn label_of(map: &Map<String, Value>) -> Option<DocumentLabel> {
    for key in LABEL_KEYS {
        if let Some(Value::String(label)) = map.get(key) {
            return Some(DocumentLabel {
                label: label.clone(),
                confidence: confidence_of(map),
            });
        }
    }
    None
}

/// First present of the confidence keys, coerced to a float; non-coercible
/// values are silently treated as absent.
fn confidence_of(map: &Map<String, Value>) -> Option<f64> {
    let value = CONFIDENCE_KEYS.iter().find_map(|key| map.get(*key))?;
    coerce_f64(value)
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
