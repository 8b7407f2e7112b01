//! Error types for bench report parsing and diffing.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for report parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Line does not split into exactly one move and one count
    MalformedLine { line: usize, text: String },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::MalformedLine { line, text } => {
                write!(
                    f,
                    "Malformed line {line}: '{text}', expected '<move>: <count>'"
                )
            }
        }
    }
}

impl std::error::Error for ReportError {}

/// Error type for comparison failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// Candidate move has no entry in the reference report
    MissingMove { mv: String, line: usize },
}

impl fmt::Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffError::MissingMove { mv, line } => {
                write!(
                    f,
                    "Move '{mv}' (candidate line {line}) not found in reference report"
                )
            }
        }
    }
}

impl std::error::Error for DiffError {}

/// Which of the two reports an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Reference,
    Candidate,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Reference => write!(f, "reference"),
            Side::Candidate => write!(f, "candidate"),
        }
    }
}

/// Top-level error for a full diff run
#[derive(Debug)]
pub enum BenchDiffError {
    /// One of the reports failed to parse
    Report { side: Side, error: ReportError },
    /// Reports parsed but could not be compared
    Diff(DiffError),
    /// Input could not be read
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for BenchDiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchDiffError::Report { side, error } => write!(f, "{side} report: {error}"),
            BenchDiffError::Diff(e) => write!(f, "{e}"),
            BenchDiffError::Io { path, source } => {
                write!(f, "Failed to read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for BenchDiffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchDiffError::Report { error, .. } => Some(error),
            BenchDiffError::Diff(e) => Some(e),
            BenchDiffError::Io { source, .. } => Some(source),
        }
    }
}

impl From<DiffError> for BenchDiffError {
    fn from(e: DiffError) -> Self {
        BenchDiffError::Diff(e)
    }
}
