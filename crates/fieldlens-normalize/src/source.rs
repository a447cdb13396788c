use fieldlens_types::{BBox, Region};

/// Parse a compact provenance reference of the form
/// `kind(page, x1,y1,x2,y2,x3,y3,x4,y4[,...])`.
///
/// The tag character ahead of the parenthesis names the source type; the
/// body carries the 1-based page number followed by at least 8 coordinate
/// values. The first 8 coordinates form a 4-point polygon; extra tokens are
/// ignored. The bbox is the axis-aligned min/max over the x and y
/// coordinates independently.
///
/// Returns `None` for anything malformed — missing parens, too few tokens,
/// a non-numeric or non-positive page — never an error. Callers must treat
/// absence of a result as "skip, don't fail".
pub fn parse_source_string(source: &str) -> Option<Region> {
    let source = source.trim();
    if source.len() < 4 || !source.ends_with(')') {
        return None;
    }

    let open = source.find('(')?;
    let kind = source.chars().next();
    let inner = &source[open + 1..source.len() - 1];

    let parts: Vec<&str> = inner
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() < 9 {
        return None;
    }

    // Page tokens occasionally arrive as "1.0"; truncate like the service does.
    let page = parts[0].parse::<f64>().ok()? as i64;
    let page_number = u32::try_from(page).ok().filter(|p| *p >= 1)?;

    let mut polygon = Vec::with_capacity(8);
    for part in &parts[1..9] {
        polygon.push(part.parse::<f64>().ok()?);
    }

    let bbox = BBox::from_polygon(&polygon)?;
    Some(Region {
        kind,
        page_number,
        polygon: Some(polygon),
        bbox,
    })
}
