use super::header::validate_header;
use crate::errors::{OrderDeskError, Result};
use crate::model::{FileFormat, NormalizedTable, Row};
use calamine::{Data, Reader, Xlsx};
use std::io::Cursor;

/// Read the first worksheet of an `.xlsx` workbook; its first row is the header.
///
/// Fully blank rows are skipped, matching how the delimited readers ignore
/// blank lines.
pub(super) fn read_first_sheet(bytes: &[u8]) -> Result<NormalizedTable> {
    let tag = FileFormat::Spreadsheet.tag();
    let malformed = |reason: String| OrderDeskError::MalformedInput {
        format: tag.to_string(),
        reason,
    };

    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| malformed(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| malformed("workbook has no sheets".to_string()))?
        .map_err(|e| malformed(e.to_string()))?;

    let mut sheet_rows = range.rows().filter(|cells| !is_blank(cells));

    let header = sheet_rows.next().ok_or_else(|| OrderDeskError::EmptyInput {
        format: tag.to_string(),
    })?;
    let columns = validate_header(header.iter().map(cell_text))?;

    let rows = sheet_rows
        .map(|cells| Row::from_texts(columns.iter().cloned(), cells.iter().map(cell_text)))
        .collect();

    Ok(NormalizedTable::new(columns, rows))
}

fn is_blank(cells: &[Data]) -> bool {
    cells.iter().all(|c| matches!(c, Data::Empty))
}

/// Render a cell as text.
///
/// Workbooks store every number as a float, so whole numbers are printed
/// without a fractional part (`1.0` becomes `"1"`).
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}
