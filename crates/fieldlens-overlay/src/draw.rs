use fieldlens_types::{BBox, Region};
use image::{Rgba, RgbaImage};

use crate::project::PageScale;

/// Outline stroke width in raster pixels.
const STROKE: i64 = 3;

/// Highlight color.
const OUTLINE: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Draw a field's regions onto a rendered page image.
///
/// Regions are expressed in document units; each bbox is scaled by the
/// independent per-axis factors of [`PageScale`] (1.0 when the page
/// dimension is unknown) and stroked as a non-filled rectangle, clamped to
/// the image bounds. The input image is left untouched.
pub fn draw_regions_on_page(
    page: &RgbaImage,
    regions: &[Region],
    page_width: Option<f64>,
    page_height: Option<f64>,
) -> RgbaImage {
    let mut img = page.clone();
    let scale = PageScale::new(img.width(), img.height(), page_width, page_height);

    for region in regions {
        stroke_rect(&mut img, &scale.project(&region.bbox));
    }

    img
}

fn stroke_rect(img: &mut RgbaImage, bbox: &BBox) {
    let width = i64::from(img.width());
    let height = i64::from(img.height());

    // Tolerate unordered corners from hand-written boundingBox arrays.
    let x0 = bbox.x0.min(bbox.x1).round() as i64;
    let x1 = bbox.x0.max(bbox.x1).round() as i64;
    let y0 = bbox.y0.min(bbox.y1).round() as i64;
    let y1 = bbox.y0.max(bbox.y1).round() as i64;

    let x_lo = x0.max(0);
    let x_hi = x1.min(width - 1);
    let y_lo = y0.max(0);
    let y_hi = y1.min(height - 1);

    for offset in 0..STROKE {
        for x in x_lo..=x_hi {
            put(img, x, y0 + offset);
            put(img, x, y1 - offset);
        }
        for y in y_lo..=y_hi {
            put(img, x0 + offset, y);
            put(img, x1 - offset, y);
        }
    }
}

fn put(img: &mut RgbaImage, x: i64, y: i64) {
    if x >= 0 && y >= 0 && x < i64::from(img.width()) && y < i64::from(img.height()) {
        img.put_pixel(x as u32, y as u32, OUTLINE);
    }
}
