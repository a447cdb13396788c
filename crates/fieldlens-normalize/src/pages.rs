use serde_json::Value;

/// Document-unit dimensions of one page, from the result's page metadata
/// (`result.contents[0].pages[page-1]`).
///
/// Either dimension may be absent independently — some analyzers omit page
/// metadata entirely — and non-numeric values are treated as absent.
/// Rasterization falls back to a 1.0 scale for missing dimensions.
pub fn page_dimensions(result: &Value, page_number: u32) -> (Option<f64>, Option<f64>) {
    let Some(page) = page_meta(result, page_number) else {
        return (None, None);
    };

    (
        page.get("width").and_then(Value::as_f64),
        page.get("height").and_then(Value::as_f64),
    )
}

fn page_meta(result: &Value, page_number: u32) -> Option<&Value> {
    if page_number < 1 {
        return None;
    }

    result
        .get("result")?
        .get("contents")?
        .as_array()?
        .first()?
        .get("pages")?
        .as_array()?
        .get(page_number as usize - 1)
}
