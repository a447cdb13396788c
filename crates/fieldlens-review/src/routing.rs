use std::collections::BTreeMap;

/// Map a classifier label to the analyzer configured for it.
///
/// The interactive flow classifies first, then runs the label-specific
/// analyzer; an unmapped label is a caller-facing failure, not a fallback
/// to some default analyzer.
pub fn route_analyzer<'a>(label: &str, analyzers: &'a BTreeMap<String, String>) -> Option<&'a str> {
    analyzers.get(label).map(String::as_str)
}
