//! Parsing of perft divide / bench reports.
//!
//! A report is a list of `<move>: <count>` lines, as printed by an engine's
//! bench command before its summary. Moves and counts are kept as trimmed
//! text; no move legality or count format is checked here.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// One `<move>: <count>` line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entry {
    pub mv: String,
    pub count: String,
}

impl Entry {
    #[must_use]
    pub fn new(mv: impl Into<String>, count: impl Into<String>) -> Self {
        Entry {
            mv: mv.into(),
            count: count.into(),
        }
    }

    /// The count read as a node total, if it is one.
    #[must_use]
    pub fn nodes(&self) -> Option<u64> {
        self.count.parse().ok()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.mv, self.count)
    }
}

/// Parse a single report line. `line_no` is 1-based and only used in errors.
pub fn parse_line(text: &str, line_no: usize) -> Result<Entry, ReportError> {
    let malformed = || ReportError::MalformedLine {
        line: line_no,
        text: text.to_string(),
    };

    let (mv, count) = text.split_once(':').ok_or_else(malformed)?;
    if count.contains(':') {
        return Err(malformed());
    }

    Ok(Entry::new(mv.trim(), count.trim()))
}

/// A parsed report, entries kept in their original line order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Report {
    entries: Vec<Entry>,
}

impl Report {
    /// Parse every line of `text`. The first malformed line fails the whole report.
    pub fn parse(text: &str) -> Result<Self, ReportError> {
        let entries = text
            .lines()
            .enumerate()
            .map(|(i, line)| parse_line(line, i + 1))
            .collect::<Result<Vec<_>, _>>()?;

        #[cfg(feature = "logging")]
        log::debug!("parsed report with {} entries", entries.len());

        Ok(Report { entries })
    }

    #[must_use]
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Report { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move to count lookup. A repeated move keeps its last count.
    #[must_use]
    pub fn count_map(&self) -> HashMap<&str, &str> {
        self.entries
            .iter()
            .map(|e| (e.mv.as_str(), e.count.as_str()))
            .collect()
    }

    /// Sum of all counts, or `None` if any count is not numeric or the sum overflows.
    #[must_use]
    pub fn total_nodes(&self) -> Option<u64> {
        self.entries
            .iter()
            .try_fold(0u64, |acc, e| acc.checked_add(e.nodes()?))
    }
}

impl FromStr for Report {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Report::parse(s)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
