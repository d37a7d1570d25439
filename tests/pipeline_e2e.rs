//! End-to-end pipeline scenarios against the public API, with the
//! completion service and OCR engine mocked out.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use lopdf::dictionary;
use lopdf::{Document, Stream};

use labsight::config::AnalyzerConfig;
use labsight::pipeline::analysis::MockCompletionClient;
use labsight::report;
use labsight::{AnalysisError, PipelineError, ReportPipeline, TextExtractor};

/// One-page PDF with a real text layer, assembled with lopdf.
fn one_page_pdf(text: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.4");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let content = format!("BT /F1 12 Tf 72 700 Td ({text}) Tj ET");
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        },
    });
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    });
    if let Ok(lopdf::Object::Dictionary(page)) = doc.get_object_mut(page_id) {
        page.set("Parent", pages_id);
    }
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

fn white_jpeg() -> Vec<u8> {
    let img = RgbImage::from_pixel(64, 64, Rgb([255u8, 255, 255]));
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, ImageFormat::Jpeg)
        .unwrap();
    buf.into_inner()
}

#[test]
fn scenario_a_pdf_glucose_report() {
    let pdf = one_page_pdf("Glucose: 150 mg/dL (Normal: 70-100)");
    let pipeline = ReportPipeline::new(Box::new(MockCompletionClient::replying(
        "SEVERITY: Moderate",
    )));

    let outcome = pipeline.process(&mut Cursor::new(pdf), "pdf").unwrap();
    assert!(outcome.extracted_text.contains("Glucose"));
    assert!(outcome.extracted_text.contains("150"));
    assert!(outcome.analysis.unwrap().contains("Moderate"));
}

#[test]
fn scenario_b_jpeg_lab_slip_reaches_analysis() {
    let pipeline = ReportPipeline::with_extractor(
        TextExtractor::with_mock_ocr("Cholesterol 240 mg/dL  HDL 38 mg/dL"),
        Box::new(MockCompletionClient::replying(
            "## HOW SERIOUS IS THIS?\n**Level**: Moderate",
        )),
    );

    let outcome = pipeline
        .process(&mut Cursor::new(white_jpeg()), "jpg")
        .unwrap();
    assert!(outcome.extracted_text.contains("Cholesterol"));
    assert!(outcome.analysis.is_ok());
}

#[test]
fn scenario_c_missing_credential_fails_before_any_upload() {
    let result = AnalyzerConfig::from_lookup(|_| None);
    assert!(result.is_err(), "configuration must fail without a key");
}

#[test]
fn analysis_transport_fault_still_yields_extracted_text() {
    let pdf = one_page_pdf("Creatinine: 2.1 mg/dL");
    let pipeline = ReportPipeline::new(Box::new(MockCompletionClient::failing()));

    let outcome = pipeline.process(&mut Cursor::new(pdf), "pdf").unwrap();
    assert!(outcome.extracted_text.contains("Creatinine"));
    assert!(matches!(
        outcome.analysis,
        Err(AnalysisError::Connection(_))
    ));
}

#[test]
fn blank_scan_is_rejected_at_the_validation_gate() {
    let pipeline = ReportPipeline::with_extractor(
        TextExtractor::with_mock_ocr(""),
        Box::new(MockCompletionClient::replying("never used")),
    );

    let err = pipeline
        .process(&mut Cursor::new(white_jpeg()), "jpeg")
        .unwrap_err();
    assert!(matches!(err, PipelineError::EmptyContent));
}

#[test]
fn unsupported_upload_type_short_circuits() {
    let pipeline = ReportPipeline::new(Box::new(MockCompletionClient::replying("never used")));
    let err = pipeline
        .process(&mut Cursor::new(b"whatever".to_vec()), "docx")
        .unwrap_err();
    assert!(matches!(err, PipelineError::UnsupportedType(_)));
    assert!(err.to_string().contains("Unsupported file type"));
}

#[test]
fn saved_artifact_round_trip() {
    let pdf = one_page_pdf("TSH 8.4 uIU/mL");
    let pipeline = ReportPipeline::new(Box::new(MockCompletionClient::replying(
        "Your thyroid is underactive.",
    )));
    let outcome = pipeline.process(&mut Cursor::new(pdf), "pdf").unwrap();
    let narrative = outcome.analysis.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let source = Path::new("thyroid_panel.pdf");
    let artifact_path = dir.path().join(report::artifact_filename(source));
    std::fs::write(&artifact_path, report::render_artifact(&narrative)).unwrap();

    let saved = std::fs::read_to_string(&artifact_path).unwrap();
    assert!(saved.starts_with("MEDICAL REPORT ANALYSIS\n"));
    assert!(saved.contains("underactive"));
    assert!(artifact_path
        .file_name()
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("analysis_thyroid_panel"));
}
