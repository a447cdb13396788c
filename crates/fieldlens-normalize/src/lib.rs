// NOTE: Normalization Rationale
//
// Why Schema-on-Read (not typed deserialization)?
// - The extraction service's result schema varies by analyzer kind and
//   service version. Field provenance alone has three encodings observed
//   in the wild: compact source strings ("D(1, x1,y1,...)"), boundingRegions
//   arrays, and bare polygon/boundingBox keys on the source object.
// - Walking serde_json::Value keeps every variant readable without a schema
//   migration each time the service ships a new shape.
// - Trade-off: the recursive "find first matching structure" searches have
//   ambiguous tie-breaks when several candidates exist. First match in
//   natural traversal order wins (mapping insertion order, then sequence
//   order), which is why serde_json's preserve_order feature is enabled
//   workspace-wide.
//
// Why Silent Skips (not errors) for malformed provenance?
// - A field with an unreadable source reference is still reviewable; the
//   reviewer just loses the highlight. Dropping the region beats failing
//   the whole document. Only IO and JSON syntax failures surface as errors.

// Error types
pub mod error;

// Compact source-string parsing
pub mod source;

// Structured source-object region extraction
pub mod regions;

// Evidence gathering and region resolution
pub mod evidence;

// Fields-map location and value resolution
pub mod fields;

// Classifier output interpretation
pub mod classify;

// Token usage summarization
pub mod usage;

// Page metadata lookup
pub mod pages;

// Result document loading
pub mod io;

pub use classify::parse_classifier_output;
pub use error::{Error, Result};
pub use evidence::{gather_evidence, resolve_regions};
pub use fields::{extract_fields_with_locations, locate_fields_map, pick_field_value};
pub use io::load_result;
pub use pages::page_dimensions;
pub use regions::regions_from_source_object;
pub use source::parse_source_string;
pub use usage::summarize_usage;
