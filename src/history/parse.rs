use regex::Regex;

use crate::tagfile::TagSection;

use super::{ActionLog, Change, Entry, Kind};

/// Split a raw action-field value into individual package-change substrings.
///
/// Items end at a `"), "` boundary and keep the closing parenthesis; the
/// final item is emitted as-is. This is a syntactic split only, it does not
/// validate that parentheses are balanced.
#[must_use]
pub fn split_change_events(content: &str) -> Vec<&str> {
    let mut result = Vec::new();
    if content.is_empty() {
        return result;
    }

    let mut rest = content;
    while let Some(pos) = rest.find("), ") {
        result.push(&rest[..=pos]);
        rest = &rest[pos + 3..];
    }
    result.push(rest);
    result
}

/// Parses one tag section into an [`Entry`].
pub struct SectionParser {
    version_re: Regex,
}

impl Default for SectionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            version_re: Regex::new(r"^\d[\w.+\-~:]*$").expect("Invalid regex"),
        }
    }

    /// A second payload token is either a candidate version or an
    /// annotation like `automatic`; version shape is the sole disambiguator.
    fn is_version(&self, s: &str) -> bool {
        self.version_re.is_match(s)
    }

    /// Parse one `<package> (<v1>[, <v2>])` substring.
    ///
    /// Malformed input is tolerated, not rejected: an event without `" ("`
    /// yields a change with default fields.
    #[must_use]
    pub fn parse_change_event(&self, kind: Kind, event: &str) -> Change {
        let mut change = Change::empty(kind);

        let Some(open) = event.find(" (") else {
            return change;
        };
        change.package = event[..open].to_string();

        let Some(close) = event[open..].find(')').map(|i| open + i) else {
            return change;
        };
        let payload = &event[open + 2..close];

        match payload.split_once(", ") {
            None => change.current_version = payload.to_string(),
            Some((current, second)) => {
                change.current_version = current.to_string();
                if self.is_version(second) {
                    change.candidate_version = Some(second.to_string());
                } else {
                    change.automatic = true;
                }
            }
        }

        change
    }

    /// Parse one tag section as a history log entry.
    ///
    /// No field is mandatory at this layer; absence yields an empty string
    /// or an absent map key.
    #[must_use]
    pub fn parse_section(&self, section: &TagSection) -> Entry {
        let mut entry = Entry {
            start_date: section.find("Start-Date").to_string(),
            end_date: section.find("End-Date").to_string(),
            cmd_line: section.find("Commandline").to_string(),
            requesting_user: section.find("Requested-By").to_string(),
            comment: section.find("Comment").to_string(),
            error: section.find("Error").to_string(),
            actions: indexmap::IndexMap::new(),
        };

        for kind in Kind::ALL {
            let content = section.find(kind.field_name());
            if content.is_empty() {
                continue;
            }

            let mut changes: Vec<Change> = split_change_events(content)
                .into_iter()
                .map(|event| self.parse_change_event(kind, event))
                .collect();
            // Changed packages should be in order
            changes.sort_by(|a, b| a.package.cmp(&b.package));

            entry.actions.insert(
                kind,
                ActionLog {
                    raw: content.to_string(),
                    changes,
                },
            );
        }

        entry
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
