use std::fmt::Write;

use regex::Regex;

use crate::history::{Entry, Kind, split_change_events};

use super::{ColorMode, ansi};

/// Renders a single transaction as a detailed, human-readable view.
pub struct DetailFormatter {
    use_colors: bool,
    event_re: Regex,
    version_re: Regex,
}

impl DetailFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: super::should_use_colors(mode),
            // Pattern to match package:arch (version)/(version, automatic)/(v1, v2)
            event_re: Regex::new(r"([\w\-.:]+) \(([\w.+\-~:]+)(?:, ([\w.+\-~:]+))?\)")
                .expect("Invalid regex"),
            version_re: Regex::new(r"^\d[\w.+\-~:]*$").expect("Invalid regex"),
        }
    }

    #[must_use]
    pub fn format(&self, entry: &Entry, id: usize) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "Transaction ID : {id}");
        let _ = writeln!(output, "Start time     : {}", entry.start_date);
        let _ = writeln!(output, "End time       : {}", entry.end_date);
        let _ = writeln!(output, "Requested by   : {}", entry.requesting_user);
        let _ = writeln!(output, "Command line   : {}", entry.cmd_line);

        if !entry.error.is_empty() {
            let line = format!("Error          : {}", entry.error);
            let _ = writeln!(output, "{}", self.colorize(&line, ansi::RED));
        }
        if !entry.comment.is_empty() {
            let _ = writeln!(output, "Comment        : {}", entry.comment);
        }

        // For each performed action, print what it did to each package
        let _ = writeln!(output, "Packages changed: ");
        for (kind, action) in &entry.actions {
            // Events are ordered by their raw substrings, not by the parsed
            // package name the structured lists are sorted on.
            let mut events = split_change_events(&action.raw);
            events.sort_unstable();
            for event in events {
                let line = self.format_event(*kind, event).unwrap_or_default();
                let _ = writeln!(output, "{line}");
            }
            output.push('\n');
        }

        output
    }

    /// Render one raw package event, `None` if it does not match the
    /// display pattern.
    fn format_event(&self, kind: Kind, event: &str) -> Option<String> {
        let caps = self.event_re.captures(event)?;
        let package = caps.get(1).map_or("", |m| m.as_str());
        let current = caps.get(2).map_or("", |m| m.as_str());
        let candidate = caps
            .get(3)
            .map(|m| m.as_str())
            .filter(|s| self.version_re.is_match(s));

        let action = kind.field_name();
        Some(match candidate {
            Some(candidate) => format!("    {action} {package} ({current} -> {candidate})"),
            None => format!("    {action} {package} ({current})"),
        })
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }
}

#[cfg(test)]
#[path = "detail_tests.rs"]
mod tests;
