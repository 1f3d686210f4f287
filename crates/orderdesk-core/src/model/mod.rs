//! Order table domain model

pub mod format;
pub mod operational;
pub mod table;

pub use format::FileFormat;
pub use operational::{
    is_operational_column, DispatchStatus, FieldUpdate, OperationalField, DEFAULT_DISPATCH,
    DISPATCH_COLUMN, KEY_COLUMN, NOTE_COLUMN, OPERATIONAL_COLUMNS,
};
pub use table::{NormalizedTable, Row};
