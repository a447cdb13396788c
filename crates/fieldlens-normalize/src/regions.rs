use fieldlens_types::{BBox, Region};
use serde_json::{Map, Value};

/// Alternate key names for a page number, tried in order.
const PAGE_KEYS: [&str; 3] = ["pageNumber", "page", "pageIndex"];

/// Alternate key names for a polygon, tried in order.
const POLYGON_KEYS: [&str; 2] = ["polygon", "points"];

/// Normalize one structured "source" reference object into page regions.
///
/// The service spells the same data several ways: a `boundingRegions` (or
/// `regions`) array of per-page entries, or polygon/box keys directly on
/// the source object. Per-page entries fall back to the object-level page
/// number; polygon data is preferred over a bare `boundingBox`.
///
/// A region is only emitted when a page number resolves somewhere in the
/// chain — box data without a page yields nothing. Entries that are not
/// mappings, or whose coordinates are not numeric, are skipped.
pub fn regions_from_source_object(src: &Map<String, Value>) -> Vec<Region> {
    let mut regions = Vec::new();
    let outer_page = page_number_of(src);

    let region_list = ["boundingRegions", "regions"]
        .iter()
        .find_map(|key| match src.get(*key) {
            Some(Value::Array(items)) if !items.is_empty() => Some(items),
            _ => None,
        });

    if let Some(items) = region_list {
        for item in items {
            let Some(entry) = item.as_object() else {
                continue;
            };
            let Some(page_number) = page_number_of(entry).or(outer_page) else {
                continue;
            };
            if let Some(region) = region_from_entry(entry, page_number) {
                regions.push(region);
            }
        }
    } else if let Some(page_number) = outer_page
        && let Some(region) = region_from_entry(src, page_number)
    {
        regions.push(region);
    }

    regions
}

/// Polygon preferred over box; `None` when the entry carries neither.
fn region_from_entry(entry: &Map<String, Value>, page_number: u32) -> Option<Region> {
    if let Some(polygon) = polygon_of(entry) {
        let bbox = BBox::from_polygon(&polygon)?;
        return Some(Region {
            kind: None,
            page_number,
            polygon: Some(polygon),
            bbox,
        });
    }

    box_of(entry).map(|bbox| Region {
        kind: None,
        page_number,
        polygon: None,
        bbox,
    })
}

/// First page key that is present and coercible to a positive integer.
fn page_number_of(obj: &Map<String, Value>) -> Option<u32> {
    PAGE_KEYS
        .iter()
        .filter_map(|key| obj.get(*key))
        .find_map(coerce_page)
}

fn coerce_page(value: &Value) -> Option<u32> {
    let page = match value {
        Value::Number(n) => n.as_f64()? as i64,
        Value::String(s) => s.trim().parse::<f64>().ok()? as i64,
        _ => return None,
    };
    u32::try_from(page).ok().filter(|p| *p >= 1)
}

/// An 8+ element all-numeric array under `polygon` or `points`, kept in full.
fn polygon_of(obj: &Map<String, Value>) -> Option<Vec<f64>> {
    for key in POLYGON_KEYS {
        if let Some(Value::Array(items)) = obj.get(key)
            && items.len() >= 8
            && let Some(coords) = numeric_list(items)
        {
            return Some(coords);
        }
    }
    None
}

/// A `boundingBox` of exactly 4 numeric values: (minX, minY, maxX, maxY).
fn box_of(obj: &Map<String, Value>) -> Option<BBox> {
    match obj.get("boundingBox") {
        Some(Value::Array(items)) if items.len() == 4 => {
            let coords = numeric_list(items)?;
            Some(BBox::new(coords[0], coords[1], coords[2], coords[3]))
        }
        _ => None,
    }
}

fn numeric_list(items: &[Value]) -> Option<Vec<f64>> {
    items.iter().map(Value::as_f64).collect()
}
