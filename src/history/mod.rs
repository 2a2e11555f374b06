mod buffer;
mod parse;

pub use buffer::HistoryBuffer;
pub use parse::{SectionParser, split_change_events};

use indexmap::IndexMap;

/// The six transaction kinds recorded in a history log section.
///
/// Declaration order is canonical: field lookup, map insertion, and the
/// multi-action summary code all iterate kinds in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Install,
    Reinstall,
    Upgrade,
    Downgrade,
    Remove,
    Purge,
}

impl Kind {
    pub const ALL: [Self; 6] = [
        Self::Install,
        Self::Reinstall,
        Self::Upgrade,
        Self::Downgrade,
        Self::Remove,
        Self::Purge,
    ];

    /// Canonical field name as it appears in the log.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Install => "Install",
            Self::Reinstall => "Reinstall",
            Self::Upgrade => "Upgrade",
            Self::Downgrade => "Downgrade",
            Self::Remove => "Remove",
            Self::Purge => "Purge",
        }
    }

    /// One/two-letter shorthand used in multi-action summary codes.
    #[must_use]
    pub const fn short_code(self) -> &'static str {
        match self {
            Self::Install => "I",
            Self::Reinstall => "rI",
            Self::Upgrade => "U",
            Self::Downgrade => "D",
            Self::Remove => "R",
            Self::Purge => "P",
        }
    }

    #[must_use]
    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.field_name() == name)
    }
}

/// One package's state transition within one action kind.
///
/// Exactly one of `candidate_version` set or `automatic` holds (or
/// neither): a second payload token is either a real candidate version or
/// an annotation marker, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub kind: Kind,
    /// Package identifier; an architecture suffix like `:amd64` is opaque.
    pub package: String,
    pub current_version: String,
    pub candidate_version: Option<String>,
    pub automatic: bool,
}

impl Change {
    /// A change with every field but the kind at its default; malformed
    /// input degrades to this rather than aborting the parse.
    #[must_use]
    pub const fn empty(kind: Kind) -> Self {
        Self {
            kind,
            package: String::new(),
            current_version: String::new(),
            candidate_version: None,
            automatic: false,
        }
    }
}

/// The raw field value of one action kind alongside its parsed changes.
///
/// The raw text is retained because the summary table's change count and
/// the detail view's ordering contract are defined over the unparsed
/// substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLog {
    pub raw: String,
    /// Parsed events, sorted ascending by package name.
    pub changes: Vec<Change>,
}

/// One logged transaction, assembled from one tag section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// Opaque date-time strings; fixed-width and lexicographically sortable.
    pub start_date: String,
    pub end_date: String,
    pub cmd_line: String,
    pub comment: String,
    pub error: String,
    pub requesting_user: String,
    /// Per-kind change lists, inserted in declared kind order. Kinds absent
    /// from the section produce no map entry, never an empty list.
    pub actions: IndexMap<Kind, ActionLog>,
}

impl Entry {
    /// Compact code describing which actions occurred.
    ///
    /// A single kind yields its canonical field name verbatim; several
    /// yield comma-joined shorthand letters in declared kind order.
    #[must_use]
    pub fn action_summary(&self) -> String {
        if self.actions.len() == 1 {
            let Some(kind) = self.actions.keys().next() else {
                return String::new();
            };
            return kind.field_name().to_string();
        }

        let codes: Vec<&str> = self.actions.keys().map(|kind| kind.short_code()).collect();
        codes.join(",")
    }

    /// Total number of package-change events across all kinds, computed by
    /// re-splitting each kind's raw field value.
    #[must_use]
    pub fn change_count(&self) -> usize {
        self.actions
            .values()
            .map(|action| split_change_events(&action.raw).len())
            .sum()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
