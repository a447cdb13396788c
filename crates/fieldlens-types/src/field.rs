use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::region::Region;

/// One extracted field: the unique key from the source fields map, its
/// resolved value, and the page regions supporting it.
///
/// The value keeps the service's JSON shape — string, number, boolean,
/// nested object, array, or null — so composite fields (line items,
/// address blocks) survive normalization intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: Value,
    pub regions: Vec<Region>,
}

impl Field {
    /// Sorted, deduplicated page numbers this field was found on.
    pub fn pages(&self) -> Vec<u32> {
        let mut pages: Vec<u32> = self.regions.iter().map(|r| r.page_number).collect();
        pages.sort_unstable();
        pages.dedup();
        pages
    }
}
