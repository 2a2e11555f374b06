use std::fmt::Write;

use crate::history::HistoryBuffer;

/// Width of the date column; dates are 20 characters long.
const DATE_WIDTH: usize = 23;
/// Width of the action column; the longest single action name is 9 characters.
const ACTION_WIDTH: usize = 10;

pub const DEFAULT_COLUMN_WIDTH: usize = 15;

/// Renders a history buffer as a fixed-column summary table.
pub struct TableFormatter {
    column_width: usize,
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }

    /// Override the width of the command-line and changes columns.
    #[must_use]
    pub const fn with_column_width(width: usize) -> Self {
        Self {
            column_width: width,
        }
    }

    #[must_use]
    pub fn format(&self, buf: &HistoryBuffer) -> String {
        let id_width = id_column_width(buf.len());
        let width = self.column_width;
        let mut output = String::new();

        let _ = write!(output, "{:<id_width$}", "ID");
        let _ = write!(output, "{:<width$}", "Command line");
        let _ = write!(output, "{:<DATE_WIDTH$}", "Date and Time");
        let _ = write!(output, "{:<ACTION_WIDTH$}", "Action");
        let _ = writeln!(output, "{:<width$}", "Changes");
        output.push('\n');

        for (id, entry) in buf.entries().iter().enumerate() {
            let _ = write!(output, "{id:<id_width$}");
            let _ = write!(output, "{:<width$}", shorten_command(&entry.cmd_line, width));
            let _ = write!(output, "{:<DATE_WIDTH$}", entry.start_date);
            let _ = write!(output, "{:<ACTION_WIDTH$}", entry.action_summary());
            let _ = writeln!(output, "{:<width$}", entry.change_count());
        }

        output
    }
}

/// The ID column grows with the buffer: two spaces of padding plus one
/// column per digit of the buffer size.
fn id_column_width(size: usize) -> usize {
    let mut width = 2;
    let mut frac = size;
    while frac > 0 {
        frac /= 10;
        width += 1;
    }
    width
}

/// Strip a leading `apt ` prefix and truncate with `...` to fit the column.
fn shorten_command(cmd: &str, max_len: usize) -> String {
    let shortened = cmd.strip_prefix("apt ").unwrap_or(cmd);
    if max_len > 3 && shortened.len() > max_len - 3 {
        let truncated: String = shortened.chars().take(max_len - 4).collect();
        return format!("{truncated}...");
    }
    shortened.to_string()
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
