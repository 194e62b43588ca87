//! Integration tests for the batch directory driver.

use std::fs;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use pdfoutline::batch::process_dir;
use pdfoutline::EngineConfig;

/// Minimal one-page PDF with a title, one numbered heading, and body text.
fn sample_pdf() -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_regular,
            "F2" => font_bold,
        },
    });

    let mut operations = vec![Operation::new("BT", vec![])];
    let mut place = |font: &str, size: i64, y: i64, text: &str| {
        operations.push(Operation::new("Tf", vec![font.into(), size.into()]));
        operations.push(Operation::new(
            "Tm",
            vec![1.into(), 0.into(), 0.into(), 1.into(), 72.into(), y.into()],
        ));
        operations.push(Operation::new("Tj", vec![Object::string_literal(text)]));
    };
    place("F1", 30, 760, "Field Guide");
    place("F2", 16, 700, "1. Habitats");
    place("F1", 11, 680, "Wetlands support the widest variety");
    place("F1", 11, 664, "Forests come a close second");
    place("F1", 11, 648, "Grasslands round out the list");
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

#[test]
fn test_batch_writes_same_stem_json() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    fs::write(input.path().join("guide.pdf"), sample_pdf()).unwrap();

    let summary = process_dir(input.path(), output.path(), &EngineConfig::default()).unwrap();
    assert_eq!(summary.processed(), 1);
    assert_eq!(summary.failed(), 0);

    let json = fs::read_to_string(output.path().join("guide.json")).unwrap();
    assert!(json.contains("\"title\": \"Field Guide\""));
    assert!(json.contains("\"1. Habitats\""));
}

#[test]
fn test_batch_continues_past_bad_file() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    fs::write(input.path().join("broken.pdf"), b"this is not a pdf").unwrap();
    fs::write(input.path().join("good.pdf"), sample_pdf()).unwrap();

    let summary = process_dir(input.path(), output.path(), &EngineConfig::default()).unwrap();
    assert_eq!(summary.processed(), 1);
    assert_eq!(summary.failed(), 1);

    assert!(output.path().join("good.json").exists());
    assert!(!output.path().join("broken.json").exists());

    let broken = summary
        .entries
        .iter()
        .find(|e| e.input.file_name().unwrap() == "broken.pdf")
        .unwrap();
    assert!(!broken.succeeded());
    assert!(broken.error.is_some());
}

#[test]
fn test_batch_ignores_other_extensions() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    fs::write(input.path().join("notes.txt"), b"plain text").unwrap();
    fs::write(input.path().join("doc.pdf"), sample_pdf()).unwrap();

    let summary = process_dir(input.path(), output.path(), &EngineConfig::default()).unwrap();
    assert_eq!(summary.entries.len(), 1);
    assert!(output.path().join("doc.json").exists());
    assert!(!output.path().join("notes.json").exists());
}

#[test]
fn test_batch_empty_directory() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let summary = process_dir(input.path(), output.path(), &EngineConfig::default()).unwrap();
    assert!(summary.entries.is_empty());
    assert_eq!(summary.processed(), 0);
}
