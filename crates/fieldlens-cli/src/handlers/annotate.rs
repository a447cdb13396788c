use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use walkdir::WalkDir;

use fieldlens_normalize::{extract_fields_with_locations, load_result, page_dimensions};
use fieldlens_overlay::draw_regions_on_page;
use fieldlens_types::{Field, Region};

/// Trailing number in an image file stem ("page-3" -> 3, "07" -> 7).
static PAGE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\D*$").unwrap());

pub fn run(
    result_path: &Path,
    pages_dir: &Path,
    out_dir: &Path,
    field_name: Option<&str>,
) -> Result<()> {
    let result = load_result(result_path)?;
    let fields = extract_fields_with_locations(&result);

    if fields.is_empty() {
        anyhow::bail!("No fields found in analyzer output");
    }

    let selected: Vec<&Field> = match field_name {
        Some(name) => {
            let field = fields
                .iter()
                .find(|f| f.name == name)
                .with_context(|| format!("No field named '{}' in the result", name))?;
            vec![field]
        }
        None => fields.iter().collect(),
    };

    let mut regions_by_page: BTreeMap<u32, Vec<Region>> = BTreeMap::new();
    for field in &selected {
        for region in &field.regions {
            regions_by_page
                .entry(region.page_number)
                .or_default()
                .push(region.clone());
        }
    }

    if regions_by_page.is_empty() {
        anyhow::bail!("No visible location available to highlight for the selected field(s)");
    }

    let page_images = discover_page_images(pages_dir)?;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let mut written = 0usize;
    for (page_number, regions) in &regions_by_page {
        let Some(image_path) = page_images.get(page_number) else {
            eprintln!("No page image for page {}, skipping", page_number);
            continue;
        };

        let page = image::open(image_path)
            .with_context(|| format!("Failed to open page image {}", image_path.display()))?
            .to_rgba8();

        let (page_width, page_height) = page_dimensions(&result, *page_number);
        let annotated = draw_regions_on_page(&page, regions, page_width, page_height);

        let out_path = out_dir.join(format!("page-{}.png", page_number));
        annotated
            .save(&out_path)
            .with_context(|| format!("Failed to write {}", out_path.display()))?;
        println!("Wrote {}", out_path.display());
        written += 1;
    }

    if written == 0 {
        anyhow::bail!(
            "No page images in {} matched the highlighted pages",
            pages_dir.display()
        );
    }

    Ok(())
}

/// Discover numbered page images directly under a directory. The page
/// number is the trailing number in the file stem; on a tie the lexically
/// first file wins.
fn discover_page_images(dir: &Path) -> Result<BTreeMap<u32, PathBuf>> {
    let mut pages = BTreeMap::new();

    for entry in WalkDir::new(dir).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if !is_png {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let Some(captures) = PAGE_NUMBER.captures(stem) else {
            continue;
        };
        let Ok(page) = captures[1].parse::<u32>() else {
            continue;
        };

        pages.entry(page).or_insert_with(|| path.to_path_buf());
    }

    if pages.is_empty() {
        anyhow::bail!("No numbered .png page images found in {}", dir.display());
    }

    Ok(pages)
}
