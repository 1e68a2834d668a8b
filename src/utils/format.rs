//! Formatting utilities for help listings and completion hints.
//!
//! All layouts pad to the widest label plus one column.

/// Column width for a set of labels: the longest one plus one.
fn column_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(0) + 1
}

/// Format `(label, description)` rows as a left-aligned table (e.g., `help`).
pub fn format_command_table(rows: &[(&str, &str)]) -> Vec<String> {
    let width = column_width(rows.iter().map(|(label, _)| *label));
    rows.iter()
        .map(|(label, description)| format!("{label:<width$} {description}"))
        .collect()
}

/// Format `(label, description)` rows for `?` help.
///
/// Labels are right-aligned; a non-empty description follows in quotes.
pub fn format_help_rows(rows: &[(&str, &str)]) -> Vec<String> {
    let width = column_width(rows.iter().map(|(label, _)| *label));
    rows.iter()
        .map(|(label, description)| {
            if description.is_empty() {
                format!("{label:>width$}")
            } else {
                format!("{label:>width$}   \"{description}\"")
            }
        })
        .collect()
}

/// Format labels side by side on one line, each right-aligned.
pub fn format_label_columns(labels: &[&str]) -> String {
    let width = column_width(labels.iter().copied());
    labels
        .iter()
        .map(|label| format!("{label:>width$}"))
        .collect()
}
