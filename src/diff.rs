//! Comparison of a candidate bench report against a reference report.
//!
//! Only candidate moves are visited, in candidate order. Counts are compared
//! as text, so `5038` and `05038` are reported as a mismatch. Moves that only
//! the reference lists are never reported.

use std::io::{self, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{BenchDiffError, DiffError, Side};
use crate::report::Report;

/// A move whose count differs between the two reports.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mismatch {
    pub mv: String,
    pub reference: String,
    pub candidate: String,
}

/// Result of a completed comparison.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BenchDiff {
    pub mismatches: Vec<Mismatch>,
}

impl BenchDiff {
    /// True when every candidate move matched the reference.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mismatches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Mismatched moves in candidate order.
    pub fn moves(&self) -> impl Iterator<Item = &str> {
        self.mismatches.iter().map(|m| m.mv.as_str())
    }

    /// Write one mismatched move per line.
    pub fn write_moves<W: Write>(&self, mut out: W) -> io::Result<()> {
        for mv in self.moves() {
            writeln!(out, "{mv}")?;
        }
        out.flush()
    }
}

/// Compare `candidate` against `reference`.
///
/// Fails on the first candidate move the reference does not list; no partial
/// result is returned in that case.
pub fn diff_reports(reference: &Report, candidate: &Report) -> Result<BenchDiff, DiffError> {
    let counts = reference.count_map();
    let mut mismatches = Vec::new();

    for (i, entry) in candidate.iter().enumerate() {
        let Some(&expected) = counts.get(entry.mv.as_str()) else {
            return Err(DiffError::MissingMove {
                mv: entry.mv.clone(),
                line: i + 1,
            });
        };

        if expected != entry.count {
            #[cfg(feature = "logging")]
            log::trace!("{}: {} != {}", entry.mv, expected, entry.count);

            mismatches.push(Mismatch {
                mv: entry.mv.clone(),
                reference: expected.to_string(),
                candidate: entry.count.clone(),
            });
        }
    }

    #[cfg(feature = "logging")]
    log::debug!(
        "compared {} candidate moves, {} mismatches",
        candidate.len(),
        mismatches.len()
    );

    Ok(BenchDiff { mismatches })
}

/// Parse both report texts and compare them.
pub fn diff_texts(reference: &str, candidate: &str) -> Result<BenchDiff, BenchDiffError> {
    let reference = Report::parse(reference).map_err(|error| BenchDiffError::Report {
        side: Side::Reference,
        error,
    })?;
    let candidate = Report::parse(candidate).map_err(|error| BenchDiffError::Report {
        side: Side::Candidate,
        error,
    })?;
    Ok(diff_reports(&reference, &candidate)?)
}
