//! Operational columns layered on top of every ingested order table

use crate::errors::{OrderDeskError, Result};
use std::fmt;
use std::str::FromStr;

/// Free-form annotation column
pub const NOTE_COLUMN: &str = "note";
/// Dispatch status column
pub const DISPATCH_COLUMN: &str = "dispatch";
/// Business column used for key-based updates and deletes (not unique)
pub const KEY_COLUMN: &str = "product-name";
/// Value `dispatch` takes for freshly inserted or migrated rows
pub const DEFAULT_DISPATCH: &str = "unshipped";

/// Operational columns in storage order
pub const OPERATIONAL_COLUMNS: [&str; 2] = [NOTE_COLUMN, DISPATCH_COLUMN];

/// SQLite column names are case-insensitive, so `Note` names the `note` column.
pub fn is_operational_column(name: &str) -> bool {
    OPERATIONAL_COLUMNS
        .iter()
        .any(|column| column.eq_ignore_ascii_case(name))
}

/// Dispatch status of an order row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DispatchStatus {
    Shipped,
    #[default]
    Unshipped,
}

impl DispatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchStatus::Shipped => "shipped",
            DispatchStatus::Unshipped => "unshipped",
        }
    }
}

impl fmt::Display for DispatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DispatchStatus {
    type Err = OrderDeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "shipped" => Ok(DispatchStatus::Shipped),
            "unshipped" => Ok(DispatchStatus::Unshipped),
            _ => Err(OrderDeskError::InvalidDispatch {
                value: s.to_string(),
            }),
        }
    }
}

/// Column a key-based update may target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationalField {
    Note,
    Dispatch,
}

impl OperationalField {
    pub fn column(&self) -> &'static str {
        match self {
            OperationalField::Note => NOTE_COLUMN,
            OperationalField::Dispatch => DISPATCH_COLUMN,
        }
    }
}

impl FromStr for OperationalField {
    type Err = OrderDeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            NOTE_COLUMN => Ok(OperationalField::Note),
            DISPATCH_COLUMN => Ok(OperationalField::Dispatch),
            _ => Err(OrderDeskError::InvalidField {
                field: s.to_string(),
            }),
        }
    }
}

/// A validated update to one operational column.
///
/// Only `note` and `dispatch` can be targeted, and `dispatch` only accepts
/// the two known statuses, so a constructed value is always writable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Note(String),
    Dispatch(DispatchStatus),
}

impl FieldUpdate {
    /// Validate a caller-supplied field name and value
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        match field.parse::<OperationalField>()? {
            OperationalField::Note => Ok(FieldUpdate::Note(value.to_string())),
            OperationalField::Dispatch => Ok(FieldUpdate::Dispatch(value.parse()?)),
        }
    }

    pub fn field(&self) -> OperationalField {
        match self {
            FieldUpdate::Note(_) => OperationalField::Note,
            FieldUpdate::Dispatch(_) => OperationalField::Dispatch,
        }
    }

    /// Text written to the column
    pub fn value(&self) -> &str {
        match self {
            FieldUpdate::Note(note) => note,
            FieldUpdate::Dispatch(status) => status.as_str(),
        }
    }
}
