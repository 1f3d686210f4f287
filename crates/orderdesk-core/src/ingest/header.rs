use crate::errors::{OrderDeskError, Result};
use crate::model::is_operational_column;
use std::collections::HashSet;

/// Validate and tidy a header row.
///
/// Names are trimmed. Empty names, duplicates and names that collide with
/// the operational columns are rejected: any of them would break the rule
/// that the stored column set is the header plus `note` and `dispatch`.
/// Collisions are checked ignoring ASCII case, as SQLite resolves column
/// names.
pub fn validate_header<I, S>(raw: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut columns = Vec::new();

    for (idx, name) in raw.into_iter().enumerate() {
        let name = name.as_ref().trim().to_string();

        if name.is_empty() {
            return Err(OrderDeskError::InvalidHeader {
                column: format!("#{}", idx + 1),
                reason: "column name is empty".to_string(),
            });
        }
        if is_operational_column(&name) {
            return Err(OrderDeskError::InvalidHeader {
                column: name,
                reason: "reserved for operational data".to_string(),
            });
        }
        if !seen.insert(name.to_ascii_lowercase()) {
            return Err(OrderDeskError::InvalidHeader {
                column: name,
                reason: "duplicate column name".to_string(),
            });
        }

        columns.push(name);
    }

    Ok(columns)
}
