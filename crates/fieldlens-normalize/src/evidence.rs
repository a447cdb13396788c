use std::collections::HashSet;

use fieldlens_types::Region;
use serde_json::Value;

use crate::regions::regions_from_source_object;
use crate::source::parse_source_string;

/// Keys that carry provenance references, probed in order on every mapping.
const EVIDENCE_KEYS: [&str; 3] = ["source", "sources", "evidence"];

/// Deep-collect every value reachable under an evidence key, at any depth.
///
/// The service's provenance schema is not fixed across analyzer and
/// document kinds — evidence may be a string, a mapping, or a list of
/// either, at any nesting level. The search is unconditional (it does not
/// stop at the first hit) and discovery order follows the natural traversal
/// order of the structure: mapping insertion order, then sequence order.
pub fn gather_evidence(node: &Value) -> Vec<Value> {
    let mut found = Vec::new();
    collect(node, &mut found);
    found
}

fn collect(node: &Value, found: &mut Vec<Value>) {
    match node {
        Value::Object(map) => {
            for key in EVIDENCE_KEYS {
                if let Some(value) = map.get(key) {
                    found.push(value.clone());
                }
            }
            for value in map.values() {
                if value.is_object() || value.is_array() {
                    collect(value, found);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect(item, found);
            }
        }
        _ => {}
    }
}

/// Resolve raw evidence items into page regions.
///
/// Strings go through the compact source parser, mappings through the
/// structured region extractor, lists recurse into their items; anything
/// else is skipped. The concatenated result is deduplicated by
/// (page, bbox), order-preserving, first occurrence kept — the same
/// physical region is frequently referenced from multiple evidence slots.
pub fn resolve_regions(evidence: &[Value]) -> Vec<Region> {
    let mut regions = Vec::new();
    for item in evidence {
        consume(item, &mut regions);
    }

    let mut seen = HashSet::new();
    regions.retain(|region| seen.insert(region.dedup_key()));
    regions
}

fn consume(item: &Value, regions: &mut Vec<Region>) {
    match item {
        Value::String(text) => {
            if let Some(region) = parse_source_string(text) {
                regions.push(region);
            }
        }
        Value::Object(map) => regions.extend(regions_from_source_object(map)),
        Value::Array(items) => {
            for item in items {
                consume(item, regions);
            }
        }
        _ => {}
    }
}
