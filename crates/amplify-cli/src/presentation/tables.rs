//! Table formatting utilities for CLI output.

/// Width of the first column in two-column tables.
pub const NAME_WIDTH: usize = 34;

/// A horizontal separator line.
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Two-column row with the first column padded to [`NAME_WIDTH`].
///
/// ```rust
/// use amplify_cli::presentation::format_row;
///
/// let row = format_row("appId", "length 1-20");
/// assert!(row.starts_with("appId "));
/// assert!(row.ends_with(" length 1-20"));
/// ```
pub fn format_row(name: &str, detail: &str) -> String {
    format!("{name:<NAME_WIDTH$} {detail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator() {
        assert_eq!(separator(3), "---");
        assert_eq!(separator(0), "");
    }

    #[test]
    fn test_format_row_pads_name() {
        let row = format_row("name", "required");
        assert!(row.starts_with("name "));
        assert!(row.ends_with(" required"));
        assert_eq!(row.len(), NAME_WIDTH + 1 + "required".len());
    }
}
