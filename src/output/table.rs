//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format rows as a rounded table with centred headers
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct NoteRow {
        #[tabled(rename = "FLOCK ID")]
        flock_id: &'static str,
        #[tabled(rename = "NOTE")]
        note: &'static str,
    }

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<NoteRow> = vec![];
        assert_eq!(format_table(&rows), "No results found.");
    }

    #[test]
    fn test_format_table_rows_and_style() {
        let rows = vec![
            NoteRow {
                flock_id: "flock:default",
                note: "rack 4",
            },
            NoteRow {
                flock_id: "flock:dmz",
                note: "edge",
            },
        ];

        let result = format_table(&rows);
        assert!(result.contains("FLOCK ID"));
        assert!(result.contains("flock:dmz"));
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
