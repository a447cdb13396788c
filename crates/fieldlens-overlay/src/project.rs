use fieldlens_types::BBox;

/// Independent per-axis scale factors from document units to raster pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageScale {
    pub sx: f64,
    pub sy: f64,
}

impl PageScale {
    /// Raster pixel dimension ÷ document-unit page dimension, per axis,
    /// defaulting to 1.0 when the document dimension is unavailable or
    /// non-positive (regions are then assumed to already be in pixels).
    pub fn new(
        raster_width: u32,
        raster_height: u32,
        page_width: Option<f64>,
        page_height: Option<f64>,
    ) -> Self {
        let sx = match page_width {
            Some(width) if width > 0.0 => f64::from(raster_width) / width,
            _ => 1.0,
        };
        let sy = match page_height {
            Some(height) if height > 0.0 => f64::from(raster_height) / height,
            _ => 1.0,
        };
        PageScale { sx, sy }
    }

    pub fn project(&self, bbox: &BBox) -> BBox {
        bbox.scaled(self.sx, self.sy)
    }
}
