use std::io::{Cursor, Read};

use calamine::{open_workbook_auto_from_rs, Reader};
use docx_rs::read_docx;
use quick_xml::events::Event;
use thiserror::Error;
use tracing::debug;

use crate::types::document::{Document, MediaType};

/// Number of data rows included in a spreadsheet summary.
const SPREADSHEET_PREVIEW_ROWS: usize = 5;

/// Errors that can occur during text extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Raw bytes are not valid UTF-8 text
    #[error("Invalid UTF-8 text: {0}")]
    InvalidUtf8(String),

    /// Error extracting text from a PDF
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    /// Error parsing a Word document
    #[error("Word document parsing error: {0}")]
    Word(String),

    /// Error reading a spreadsheet
    #[error("Spreadsheet parsing error: {0}")]
    Spreadsheet(String),

    /// Error reading a presentation
    #[error("Presentation parsing error: {0}")]
    Presentation(String),
}

/// Extract the text content of a document.
///
/// Exact match on the declared media type selects the extractor; any other
/// type falls back to decoding the raw bytes as UTF-8. Every extractor
/// reads the whole document from memory in a single pass and returns one
/// flat string. Failures halt the request; there is no retry and no
/// partial result.
pub fn get_content(document: &Document) -> Result<String, ExtractError> {
    debug!(media_type = ?document.media_type, size = document.content.len(), "extracting document text");
    match &document.media_type {
        MediaType::PlainText => extract_plain_text(&document.content),
        MediaType::Pdf => extract_pdf(&document.content),
        MediaType::Word => extract_word(&document.content),
        MediaType::Excel | MediaType::ExcelLegacy => extract_spreadsheet(&document.content),
        MediaType::PowerPoint | MediaType::PowerPointLegacy => {
            extract_presentation(&document.content)
        }
        MediaType::Other(_) => extract_plain_text(&document.content),
    }
}

/// Decode bytes as UTF-8; fail on invalid sequences.
fn extract_plain_text(bytes: &[u8]) -> Result<String, ExtractError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| ExtractError::InvalidUtf8(e.to_string()))
}

/// Concatenate the text of every page in page order, each followed by a
/// newline. An unextractable (image-only) page contributes an empty line.
fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;
    Ok(join_pages(&pages))
}

/// Join page texts in page order, each followed by a newline.
fn join_pages(pages: &[String]) -> String {
    let mut text = String::new();
    for page in pages {
        text.push_str(page);
        text.push('\n');
    }
    text
}

/// Concatenate the text of every paragraph in document order, each
/// followed by a newline.
fn extract_word(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx =
        read_docx(bytes).map_err(|e| ExtractError::Word(e.to_string()))?;

    let json = docx.json();
    let json_value: serde_json::Value =
        serde_json::from_str(&json).map_err(|e| ExtractError::Word(e.to_string()))?;

    let mut text = String::new();

    // document.children holds the paragraphs, each paragraph's runs hold
    // the text elements
    if let Some(document) = json_value.get("document") {
        if let Some(children) = document.get("children").and_then(|v| v.as_array()) {
            for paragraph in children {
                if let Some(para_data) = paragraph.get("data") {
                    if let Some(para_children) =
                        para_data.get("children").and_then(|v| v.as_array())
                    {
                        for run in para_children {
                            if let Some(run_data) = run.get("data") {
                                if let Some(run_children) =
                                    run_data.get("children").and_then(|v| v.as_array())
                                {
                                    for text_elem in run_children {
                                        if let Some(text_data) = text_elem.get("data") {
                                            if let Some(content) =
                                                text_data.get("text").and_then(|v| v.as_str())
                                            {
                                                text.push_str(content);
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        text.push('\n');
                    }
                }
            }
        }
    }

    Ok(text)
}

/// Produce a lossy textual summary of the first worksheet: a header line
/// of column names, the total row count, and only the first five data
/// rows. The downstream prompt has a token budget, so the full table is
/// deliberately not rendered.
fn extract_spreadsheet(bytes: &[u8]) -> Result<String, ExtractError> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook =
        open_workbook_auto_from_rs(cursor).map_err(|e| ExtractError::Spreadsheet(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ExtractError::Spreadsheet("workbook has no sheets".to_string()))?
        .map_err(|e| ExtractError::Spreadsheet(e.to_string()))?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>());
    let header = rows.next().unwrap_or_default();
    let data: Vec<Vec<String>> = rows.collect();

    Ok(render_table_summary(&header, &data))
}

/// Render the size-bounded text blob for a tabular sheet.
fn render_table_summary(header: &[String], rows: &[Vec<String>]) -> String {
    let mut text = String::new();
    text.push_str(&format!("Columns: {}\n", header.join(", ")));
    text.push_str(&format!("Total rows: {}\n", rows.len()));
    for row in rows.iter().take(SPREADSHEET_PREVIEW_ROWS) {
        text.push_str(&row.join(" | "));
        text.push('\n');
    }
    text
}

/// For each slide in order, emit a separator line identifying the slide,
/// then the text of every text-bearing shape in shape order. A slide with
/// no text shapes contributes only its separator line.
fn extract_presentation(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Presentation(e.to_string()))?;

    let mut slide_names: Vec<String> = archive
        .file_names()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .map(|s| s.to_string())
        .collect();
    slide_names.sort_by_key(|name| {
        name.trim_start_matches("ppt/slides/slide")
            .trim_end_matches(".xml")
            .parse::<u32>()
            .unwrap_or(u32::MAX)
    });

    let mut text = String::new();
    for (idx, name) in slide_names.iter().enumerate() {
        text.push_str(&format!("--- Slide {} ---\n", idx + 1));

        let mut xml = Vec::new();
        archive
            .by_name(name)
            .map_err(|e| ExtractError::Presentation(e.to_string()))?
            .read_to_end(&mut xml)
            .map_err(|e| ExtractError::Presentation(e.to_string()))?;

        text.push_str(&slide_text(&xml)?);
    }
    Ok(text)
}

/// Collect the `a:t` text runs of one slide, one line per paragraph.
fn slide_text(xml: &[u8]) -> Result<String, ExtractError> {
    let mut text = String::new();
    let mut reader = quick_xml::Reader::from_reader(xml);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.local_name().as_ref() == b"t" {
                    if let Ok(Event::Text(te)) = reader.read_event_into(&mut buf) {
                        text.push_str(te.unescape().unwrap_or_default().as_ref());
                    }
                }
            }
            Ok(Event::End(e)) => {
                // a:p closes a paragraph; skip empty paragraphs
                if e.local_name().as_ref() == b"p" && text.chars().last().is_some_and(|c| c != '\n')
                {
                    text.push('\n');
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Presentation(e.to_string())),
            _ => {}
        }
        buf.clear();
    }
    Ok(text)
}
