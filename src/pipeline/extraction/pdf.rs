//! PDF text-layer extraction using the pdf-extract crate.
//!
//! Digital PDFs carry their text as content streams; no OCR is
//! involved. Scanned-image-only PDFs have no text layer and yield the
//! sentinel, which the pipeline's validation gate later rejects.

use tracing::debug;

use super::types::NO_TEXT_PDF;
use super::ExtractionError;

/// Extract the text layer of every page, in source order.
///
/// Pages are concatenated with a newline separator; pages that yield
/// no text contribute nothing (that is not an error). A document
/// whose pages are all textless returns [`NO_TEXT_PDF`] as data.
pub fn extract_pdf_text(pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
        .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;

    debug!(page_count = pages.len(), "PDF text layer extracted");

    let text = pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if text.trim().is_empty() {
        Ok(NO_TEXT_PDF.to_string())
    } else {
        Ok(text.trim().to_string())
    }
}

/// Build a one-page PDF with the given text via lopdf (the same
/// library pdf-extract parses with). An empty string produces a
/// textless page.
#[cfg(test)]
pub(crate) fn test_pdf(text: &str) -> Vec<u8> {
    test_pdf_pages(&[text])
}

/// Build a multi-page PDF; an empty entry produces a textless page.
#[cfg(test)]
pub(crate) fn test_pdf_pages(page_texts: &[&str]) -> Vec<u8> {
    use lopdf::dictionary;
    use lopdf::{Document, Object, Stream};

    let mut doc = Document::with_version("1.4");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let pages_id = doc.new_object_id();
    let mut kids: Vec<Object> = Vec::new();

    for text in page_texts {
        let content = if text.is_empty() {
            String::new()
        } else {
            format!("BT /F1 12 Tf 72 700 Td ({text}) Tj ET")
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}
