use serde::{Deserialize, Serialize};

// NOTE: Coordinate Model
//
// Regions arrive in document units (inches, points, or pixels depending on
// the analyzer); nothing in this crate interprets the unit. The bbox is an
// axis-aligned min/max coercion of the polygon, never a rotated-rectangle
// fit — reviewers get a stable upright highlight even for skewed scans.

/// Axis-aligned bounding box in document units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BBox {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        BBox { x0, y0, x1, y1 }
    }

    /// Coerce an ordered (x, y) pair sequence into its axis-aligned bounds:
    /// min/max over the x and y coordinates independently.
    pub fn from_polygon(polygon: &[f64]) -> Option<BBox> {
        let mut xs = polygon.iter().copied().step_by(2);
        let mut ys = polygon.iter().copied().skip(1).step_by(2);

        let first_x = xs.next()?;
        let first_y = ys.next()?;

        let (min_x, max_x) = xs.fold((first_x, first_x), |(lo, hi), x| (lo.min(x), hi.max(x)));
        let (min_y, max_y) = ys.fold((first_y, first_y), |(lo, hi), y| (lo.min(y), hi.max(y)));

        Some(BBox::new(min_x, min_y, max_x, max_y))
    }

    /// Scale independently on each axis (document units -> raster pixels).
    pub fn scaled(&self, sx: f64, sy: f64) -> BBox {
        BBox::new(self.x0 * sx, self.y0 * sy, self.x1 * sx, self.y1 * sy)
    }

    /// Bit-exact key for equality-based deduplication without an `Eq`
    /// impl on floats.
    pub fn key(&self) -> [u64; 4] {
        [
            self.x0.to_bits(),
            self.y0.to_bits(),
            self.x1.to_bits(),
            self.y1.to_bits(),
        ]
    }
}

/// A page-located rectangle (optionally derived from a polygon) indicating
/// where a field's value was found in the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Tag character of a string-encoded source reference
    /// (`"D(1, ...)"` -> `'D'`). Absent for structured sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<char>,

    /// 1-based page number.
    pub page_number: u32,

    /// Ordered x,y pairs as found in the source; present when the source
    /// carried a polygon rather than a bare box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Vec<f64>>,

    /// Axis-aligned bounds, always derivable from `polygon` when present.
    pub bbox: BBox,
}

impl Region {
    /// Equality key for (page, bbox) deduplication. The same physical
    /// region is frequently referenced from multiple evidence slots.
    pub fn dedup_key(&self) -> (u32, [u64; 4]) {
        (self.page_number, self.bbox.key())
    }
}
