use fieldlens_types::Field;
use serde_json::{Map, Value};

use crate::evidence::{gather_evidence, resolve_regions};

/// Typed-value keys probed before the generic `value` key.
const VALUE_KEYS: [&str; 7] = [
    "valueString",
    "valueNumber",
    "valueBoolean",
    "valueDate",
    "valueArray",
    "valueObject",
    "value",
];

/// Known nesting points for the fields map under a content entry.
const FIELDS_KEYS: [&str; 4] = ["fields", "extractedFields", "output", "data"];

/// Keys marking a mapping as a field object during the fallback search.
const FIELD_MARKERS: [&str; 4] = ["value", "valueString", "source", "sources"];

/// Evidence keys on the field object itself, preferred over the deep search.
const SHALLOW_EVIDENCE_KEYS: [&str; 3] = ["sources", "source", "evidence"];

/// Normalize an analysis result into a flat field list with resolved
/// page regions.
///
/// Entries keep the insertion order of the located fields map. Entries
/// whose field object is not a mapping are skipped. An empty return means
/// no fields map was found (or the map was empty) — the caller decides
/// whether that is a failure.
pub fn extract_fields_with_locations(result: &Value) -> Vec<Field> {
    let Some(fields_map) = locate_fields_map(result) else {
        return Vec::new();
    };

    let mut extracted = Vec::new();
    for (name, field_value) in fields_map {
        let Some(field_obj) = field_value.as_object() else {
            continue;
        };

        let value = pick_field_value(field_obj);

        let mut regions = resolve_regions(&shallow_evidence(field_obj));
        if regions.is_empty() {
            // The field's own evidence keys came up empty; fall back to the
            // deep search over the whole field object.
            regions = resolve_regions(&gather_evidence(field_value));
        }

        extracted.push(Field {
            name: name.clone(),
            value,
            regions,
        });
    }

    extracted
}

/// First present of the typed-value keys, then the generic `value` key;
/// absence of all yields `Value::Null`.
pub fn pick_field_value(field_obj: &Map<String, Value>) -> Value {
    VALUE_KEYS
        .iter()
        .find_map(|key| field_obj.get(*key))
        .cloned()
        .unwrap_or(Value::Null)
}

/// Locate the fields map inside an analysis result.
///
/// The service nests it at different depths depending on result shape.
/// Known paths under the first document-like content entry are tried in
/// priority order, then an unconstrained recursive search over the whole
/// result. First structural match wins — this is heuristic, not guaranteed
/// unique; ambiguity against an evolving external schema is accepted.
pub fn locate_fields_map(result: &Value) -> Option<&Map<String, Value>> {
    if let Some(content) = document_content(result) {
        for key in FIELDS_KEYS {
            if let Some(map) = content.get(key).and_then(Value::as_object) {
                return Some(map);
            }
        }

        // `fields` one level down, inside an extraction/result sub-object.
        // A non-empty sub-object shadows the later key even without fields.
        for key in ["extraction", "result"] {
            if let Some(sub) = content.get(key).and_then(Value::as_object)
                && !sub.is_empty()
            {
                if let Some(map) = sub.get("fields").and_then(Value::as_object) {
                    return Some(map);
                }
                break;
            }
        }
    }

    find_fields_map(result)
}

/// The first content entry whose kind is `document`, `text`, absent or
/// null; the first entry otherwise.
fn document_content(result: &Value) -> Option<&Map<String, Value>> {
    let contents = contents_of(result)?;

    contents
        .iter()
        .find(|content| {
            content.as_object().is_some_and(|obj| match obj.get("kind") {
                None | Some(Value::Null) => true,
                Some(Value::String(kind)) => kind == "document" || kind == "text",
                Some(_) => false,
            })
        })
        .or_else(|| contents.first())
        .and_then(Value::as_object)
}

/// `result.contents`, falling back to a top-level `contents` array.
fn contents_of(result: &Value) -> Option<&Vec<Value>> {
    let nested = result
        .get("result")
        .and_then(|r| r.get("contents"))
        .and_then(Value::as_array);

    match nested {
        Some(items) if !items.is_empty() => Some(items),
        _ => result.get("contents").and_then(Value::as_array),
    }
}

fn find_fields_map(node: &Value) -> Option<&Map<String, Value>> {
    match node {
        Value::Object(map) => {
            if is_fields_map(map) {
                return Some(map);
            }
            map.values().find_map(find_fields_map)
        }
        Value::Array(items) => items.iter().find_map(find_fields_map),
        _ => None,
    }
}

/// A fields map is a non-empty mapping whose values are all mappings and
/// whose first value carries a recognizable field-object marker key.
fn is_fields_map(map: &Map<String, Value>) -> bool {
    if map.is_empty() || !map.values().all(Value::is_object) {
        return false;
    }

    map.values()
        .next()
        .and_then(Value::as_object)
        .is_some_and(|sample| FIELD_MARKERS.iter().any(|key| sample.contains_key(*key)))
}

/// The field object's own evidence: the first non-empty of
/// `sources`/`source`/`evidence`, wrapped into a list when scalar.
fn shallow_evidence(field_obj: &Map<String, Value>) -> Vec<Value> {
    for key in SHALLOW_EVIDENCE_KEYS {
        match field_obj.get(key) {
            Some(Value::Array(items)) if !items.is_empty() => return items.clone(),
            Some(Value::String(text)) if !text.is_empty() => {
                return vec![Value::String(text.clone())];
            }
            Some(Value::Object(map)) if !map.is_empty() => {
                return vec![Value::Object(map.clone())];
            }
            _ => continue,
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_from_nested_contents() {
        let result = json!({
            "result": {
                "contents": [
                    {"kind": "document", "fields": {"Foo": {"valueString": "bar"}}}
                ]
            }
        });

        let fields = extract_fields_with_locations(&result);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "Foo");
        assert_eq!(fields[0].value, json!("bar"));
        assert!(fields[0].regions.is_empty());
    }

    #[test]
    fn test_extract_preserves_map_order() {
        let result = json!({
            "contents": [
                {"fields": {
                    "Zulu": {"valueString": "z"},
                    "Alpha": {"valueString": "a"}
                }}
            ]
        });

        let names: Vec<String> = extract_fields_with_locations(&result)
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["Zulu", "Alpha"]);
    }

    #[test]
    fn test_value_string_beats_generic_value() {
        let field_obj = json!({"value": "generic", "valueString": "typed"});
        let value = pick_field_value(field_obj.as_object().unwrap());
        assert_eq!(value, json!("typed"));
    }

    #[test]
    fn test_value_priority_order() {
        let field_obj = json!({"valueObject": {"a": 1}, "valueNumber": 7});
        let value = pick_field_value(field_obj.as_object().unwrap());
        assert_eq!(value, json!(7));
    }

    #[test]
    fn test_missing_value_keys_yield_null() {
        let field_obj = json!({"confidence": 0.5});
        assert_eq!(pick_field_value(field_obj.as_object().unwrap()), Value::Null);
    }

    #[test]
    fn test_locator_tries_alternate_keys() {
        let result = json!({
            "contents": [
                {"extractedFields": {"Total": {"valueNumber": 12}}}
            ]
        });
        let fields = extract_fields_with_locations(&result);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "Total");
    }

    #[test]
    fn test_locator_descends_into_extraction() {
        let result = json!({
            "contents": [
                {"extraction": {"fields": {"Name": {"valueString": "x"}}}}
            ]
        });
        assert_eq!(extract_fields_with_locations(&result).len(), 1);
    }

    #[test]
    fn test_locator_skips_non_document_content() {
        let result = json!({
            "result": {
                "contents": [
                    {"kind": "audioVisual", "fields": {"Skip": {"valueString": "no"}}},
                    {"kind": "document", "fields": {"Keep": {"valueString": "yes"}}}
                ]
            }
        });
        let fields = extract_fields_with_locations(&result);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "Keep");
    }

    #[test]
    fn test_locator_fallback_recursive_search() {
        let result = json!({
            "odd": {"shape": {"deep": {
                "Customer": {"valueString": "Acme", "source": "D(1, 0,0, 1,0, 1,1, 0,1)"}
            }}}
        });

        let fields = extract_fields_with_locations(&result);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "Customer");
        assert_eq!(fields[0].regions.len(), 1);
    }

    #[test]
    fn test_no_fields_map_yields_empty() {
        assert!(extract_fields_with_locations(&json!({"status": "running"})).is_empty());
        assert!(extract_fields_with_locations(&json!(null)).is_empty());
    }

    #[test]
    fn test_shallow_sources_preferred() {
        let result = json!({
            "contents": [{"fields": {
                "Amount": {
                    "valueNumber": 9.5,
                    "sources": ["D(1, 0,0, 1,0, 1,1, 0,1)"],
                    "detail": {"source": "D(2, 0,0, 1,0, 1,1, 0,1)"}
                }
            }}]
        });

        let fields = extract_fields_with_locations(&result);
        // Shallow sources resolved something, so the nested page-2 source
        // is never consulted
        assert_eq!(fields[0].regions.len(), 1);
        assert_eq!(fields[0].regions[0].page_number, 1);
    }

    #[test]
    fn test_deep_search_when_shallow_empty() {
        let result = json!({
            "contents": [{"fields": {
                "Amount": {
                    "valueNumber": 9.5,
                    "detail": {"source": "D(2, 0,0, 1,0, 1,1, 0,1)"}
                }
            }}]
        });

        let fields = extract_fields_with_locations(&result);
        assert_eq!(fields[0].regions.len(), 1);
        assert_eq!(fields[0].regions[0].page_number, 2);
    }

    #[test]
    fn test_scalar_source_wrapped() {
        let result = json!({
            "contents": [{"fields": {
                "Vendor": {
                    "valueString": "Contoso",
                    "source": "D(1, 10,10, 90,10, 90,30, 10,30)"
                }
            }}]
        });

        let fields = extract_fields_with_locations(&result);
        assert_eq!(fields[0].regions.len(), 1);
        assert_eq!(fields[0].regions[0].kind, Some('D'));
    }

    #[test]
    fn test_non_mapping_field_entries_skipped() {
        let result = json!({
            "contents": [{"fields": {
                "Good": {"valueString": "ok"},
                "Bad": "just a string"
            }}]
        });

        // Known paths only require the map itself to be a mapping; the
        // non-mapping entry is dropped during extraction
        let fields = extract_fields_with_locations(&result);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "Good");
    }

    #[test]
    fn test_idempotent_normalization() {
        let result = json!({
            "result": {"contents": [{"kind": "document", "fields": {
                "A": {"valueString": "1", "source": "D(1, 0,0, 5,0, 5,5, 0,5)"},
                "B": {"valueArray": [1, 2, 3]}
            }}]}
        });

        let first = extract_fields_with_locations(&result);
        let second = extract_fields_with_locations(&result);
        assert_eq!(first, second);
    }
}
