use std::io::BufRead;

use indexmap::IndexMap;

/// One blank-line delimited block of `Field: value` lines.
///
/// Field order is preserved as encountered in the log. Lookups for absent
/// fields yield the empty string rather than an error, matching how the
/// history parser treats optional fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSection {
    fields: IndexMap<String, String>,
}

impl TagSection {
    /// Look up a field value by name, empty string if absent.
    #[must_use]
    pub fn find(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    fn insert(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }

    fn append_to_last(&mut self, continuation: &str) {
        let Some(index) = self.fields.len().checked_sub(1) else {
            return;
        };
        if let Some((_, value)) = self.fields.get_index_mut(index) {
            value.push('\n');
            value.push_str(continuation);
        }
    }
}

/// Streaming reader over a tag-formatted file.
///
/// Sections are separated by one or more blank lines; a line starting with
/// whitespace continues the previous field's value per the tag-file
/// convention.
pub struct TagFile<R: BufRead> {
    reader: R,
    line: String,
}

impl<R: BufRead> TagFile<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    /// Read the next section, `Ok(None)` at end of input.
    ///
    /// # Errors
    /// Returns an I/O error if reading from the underlying reader fails.
    pub fn next_section(&mut self) -> std::io::Result<Option<TagSection>> {
        let mut section = TagSection::default();

        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                break;
            }

            let line = self.line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() {
                if section.is_empty() {
                    // Leading blank lines before the first field
                    continue;
                }
                return Ok(Some(section));
            }

            if line.starts_with([' ', '\t']) {
                section.append_to_last(line.trim_start());
            } else if let Some((name, value)) = line.split_once(':') {
                section.insert(name.trim(), value.trim_start());
            }
            // Lines with no colon outside a continuation carry no field;
            // they are skipped rather than aborting the parse.
        }

        if section.is_empty() {
            Ok(None)
        } else {
            Ok(Some(section))
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
