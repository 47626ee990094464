use crate::error::Result;
use crate::extractor::RawText;
use calamine::{Data, Range, Reader, Xlsx};
use std::io::Cursor;

/// Flattens CSV bytes into a single space-joined string.
///
/// Every cell is coerced to text, header row included (the accepted
/// flattening policy), row-major. Empty cells are skipped so they do not
/// produce phantom separators. Ragged rows are tolerated; structurally
/// broken input fails with a `Parse` error.
pub fn extract_csv(content: &[u8]) -> Result<RawText> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content);

    let mut cells: Vec<String> = Vec::new();
    for record in reader.records() {
        let record = record?;
        for field in record.iter() {
            if !field.is_empty() {
                cells.push(field.to_string());
            }
        }
    }

    Ok(cells.join(" "))
}

/// Flattens the first worksheet of an XLSX workbook into a single
/// space-joined string. Same cell policy as CSV.
pub fn extract_xlsx(content: &[u8]) -> Result<RawText> {
    let mut workbook = Xlsx::new(Cursor::new(content))?;

    let sheet_name = match workbook.sheet_names().first() {
        Some(name) => name.clone(),
        None => return Ok(String::new()),
    };

    let range = workbook.worksheet_range(&sheet_name)?;
    Ok(flatten_range(&range))
}

fn flatten_range(range: &Range<Data>) -> String {
    let mut cells: Vec<String> = Vec::new();
    for row in range.rows() {
        for cell in row {
            if matches!(cell, Data::Empty) {
                continue;
            }
            let text = cell.to_string();
            if !text.is_empty() {
                cells.push(text);
            }
        }
    }
    cells.join(" ")
}
