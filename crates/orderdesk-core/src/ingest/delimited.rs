use super::header::validate_header;
use crate::errors::{OrderDeskError, Result};
use crate::model::{FileFormat, NormalizedTable, Row};
use csv::ReaderBuilder;

/// Read comma- or tab-delimited text whose first record is the header.
///
/// Records must have exactly as many fields as the header.
pub(super) fn read_delimited(
    bytes: &[u8],
    format: FileFormat,
    delimiter: u8,
) -> Result<NormalizedTable> {
    let malformed = |e: csv::Error| OrderDeskError::MalformedInput {
        format: format.tag().to_string(),
        reason: e.to_string(),
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let raw_header = reader.headers().map_err(malformed)?.clone();
    if raw_header.is_empty() {
        return Err(OrderDeskError::EmptyInput {
            format: format.tag().to_string(),
        });
    }
    let columns = validate_header(raw_header.iter())?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(malformed)?;
        rows.push(Row::from_texts(columns.iter().cloned(), record.iter()));
    }

    Ok(NormalizedTable::new(columns, rows))
}
