//! Text and JSON rendering of order tables

use orderdesk_core::NormalizedTable;

/// Tab-separated rendering: header line, then one line per row.
///
/// NULL renders as an empty cell.
pub fn render_table(table: &NormalizedTable) -> String {
    let mut out = table.columns().join("\t");
    out.push('\n');
    for row in table.rows() {
        let cells: Vec<&str> = table
            .columns()
            .iter()
            .map(|column| row.get(column).unwrap_or(""))
            .collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}

/// Rows as a JSON array of objects in column order; NULL stays `null`
pub fn render_json(table: &NormalizedTable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(table.rows())
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_core::Row;

    fn sample() -> NormalizedTable {
        let columns = vec!["product-name".to_string(), "note".to_string()];
        NormalizedTable::new(
            columns,
            vec![Row::new(vec![
                ("product-name".to_string(), Some("Widget".to_string())),
                ("note".to_string(), None),
            ])],
        )
    }

    #[test]
    fn test_render_table_blank_for_null() {
        assert_eq!(render_table(&sample()), "product-name\tnote\nWidget\t\n");
    }

    #[test]
    fn test_render_json_keeps_null() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["product-name"], "Widget");
        assert!(value[0]["note"].is_null());
    }
}
