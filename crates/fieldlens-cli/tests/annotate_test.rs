mod common;

use common::{fieldlens, fixture};
use image::{Rgba, RgbaImage};
use predicates::prelude::*;
use std::path::Path;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

fn write_blank_page(dir: &Path, name: &str) {
    RgbaImage::from_pixel(400, 400, WHITE)
        .save(dir.join(name))
        .expect("Failed to write page image");
}

#[test]
fn test_annotate_draws_scaled_highlights() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let pages = temp.path().join("pages");
    let out = temp.path().join("out");
    std::fs::create_dir_all(&pages).expect("Failed to create pages dir");
    write_blank_page(&pages, "page-1.png");
    write_blank_page(&pages, "page-2.png");

    fieldlens()
        .arg("annotate")
        .arg(fixture("invoice_result.json"))
        .arg("--pages")
        .arg(&pages)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("page-1.png"))
        .stdout(predicate::str::contains("page-2.png"));

    // VendorName bbox (10,10,90,30) on a 200x200 page rendered at 400x400:
    // scale factor 2 puts the outline at (20,20)-(180,60)
    let annotated = image::open(out.join("page-1.png"))
        .expect("Failed to open annotated page")
        .to_rgba8();
    assert_eq!(*annotated.get_pixel(20, 20), RED);
    assert_eq!(*annotated.get_pixel(180, 40), RED);
    assert_eq!(*annotated.get_pixel(100, 40), WHITE);
    assert_eq!(*annotated.get_pixel(300, 300), WHITE);
}

#[test]
fn test_annotate_single_field_skips_other_pages() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let pages = temp.path().join("pages");
    let out = temp.path().join("out");
    std::fs::create_dir_all(&pages).expect("Failed to create pages dir");
    write_blank_page(&pages, "page-1.png");
    write_blank_page(&pages, "page-2.png");

    fieldlens()
        .arg("annotate")
        .arg(fixture("invoice_result.json"))
        .arg("--pages")
        .arg(&pages)
        .arg("--out")
        .arg(&out)
        .arg("--field")
        .arg("InvoiceTotal")
        .assert()
        .success();

    // InvoiceTotal only has a page-2 region
    assert!(!out.join("page-1.png").exists());
    assert!(out.join("page-2.png").exists());
}

#[test]
fn test_annotate_unknown_field_fails() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let pages = temp.path().join("pages");
    std::fs::create_dir_all(&pages).expect("Failed to create pages dir");
    write_blank_page(&pages, "page-1.png");

    fieldlens()
        .arg("annotate")
        .arg(fixture("invoice_result.json"))
        .arg("--pages")
        .arg(&pages)
        .arg("--out")
        .arg(temp.path().join("out"))
        .arg("--field")
        .arg("NoSuchField")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No field named 'NoSuchField'"));
}

#[test]
fn test_annotate_field_without_regions_fails() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let pages = temp.path().join("pages");
    std::fs::create_dir_all(&pages).expect("Failed to create pages dir");
    write_blank_page(&pages, "page-1.png");

    fieldlens()
        .arg("annotate")
        .arg(fixture("invoice_result.json"))
        .arg("--pages")
        .arg(&pages)
        .arg("--out")
        .arg(temp.path().join("out"))
        .arg("--field")
        .arg("Notes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No visible location"));
}

#[test]
fn test_annotate_empty_pages_dir_fails() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let pages = temp.path().join("pages");
    std::fs::create_dir_all(&pages).expect("Failed to create pages dir");

    fieldlens()
        .arg("annotate")
        .arg(fixture("invoice_result.json"))
        .arg("--pages")
        .arg(&pages)
        .arg("--out")
        .arg(temp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No numbered .png page images"));
}
