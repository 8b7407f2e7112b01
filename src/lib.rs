//! Compare perft divide / bench reports from two chess engines and list the
//! moves whose node counts disagree.

pub mod config;
pub mod diff;
pub mod error;
pub mod report;
pub mod sample;

pub use config::{ConfigError, DiffConfig, Source};
pub use diff::{diff_reports, diff_texts, BenchDiff, Mismatch};
pub use error::{BenchDiffError, DiffError, ReportError, Side};
pub use report::{parse_line, Entry, Report};
