use crate::errors::{OrderDeskError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Declared format of an uploaded order file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Comma-delimited text, first row is the header
    Csv,
    /// First sheet of an `.xlsx` workbook, first row is the header
    Spreadsheet,
    /// Tab-delimited text, first row is the header
    TabDelimited,
}

impl FileFormat {
    pub const ALL: [FileFormat; 3] = [
        FileFormat::Csv,
        FileFormat::Spreadsheet,
        FileFormat::TabDelimited,
    ];

    /// Canonical format tag
    pub fn tag(&self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Spreadsheet => "spreadsheet",
            FileFormat::TabDelimited => "tab-delimited-text",
        }
    }

    /// Field delimiter for the text formats
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            FileFormat::Csv => Some(b','),
            FileFormat::TabDelimited => Some(b'\t'),
            FileFormat::Spreadsheet => None,
        }
    }

    /// Map an upload's file extension to its format.
    ///
    /// `txt` uploads are tab-delimited exports, not free text.
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Ok(FileFormat::Csv),
            "xlsx" => Ok(FileFormat::Spreadsheet),
            "txt" | "tsv" => Ok(FileFormat::TabDelimited),
            _ => Err(OrderDeskError::UnsupportedFormat {
                tag: ext.to_string(),
            }),
        }
    }

    /// Infer the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| OrderDeskError::UnsupportedFormat {
                tag: path.display().to_string(),
            })?;
        Self::from_extension(ext)
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FileFormat {
    type Err = OrderDeskError;

    fn from_str(s: &str) -> Result<Self> {
        FileFormat::ALL
            .into_iter()
            .find(|f| f.tag() == s)
            .ok_or_else(|| OrderDeskError::UnsupportedFormat { tag: s.to_string() })
    }
}
