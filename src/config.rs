//! Command-line configuration for the `bench_diff` binary.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{BenchDiffError, Side};
use crate::sample::{CANDIDATE_BENCH, REFERENCE_BENCH};

pub const USAGE: &str = "usage: bench_diff [-v|--verbose] [<reference> <candidate>]
  <reference>, <candidate>  bench reports of '<move>: <count>' lines ('-' reads stdin)
  with no reports given, the built-in sample pair is compared";

/// Where a report is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Built-in sample report
    Embedded(Side),
    Path(PathBuf),
    Stdin,
}

impl Source {
    fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Source::Stdin
        } else {
            Source::Path(PathBuf::from(arg))
        }
    }

    /// Read the full report text.
    pub fn read(&self) -> Result<String, BenchDiffError> {
        match self {
            Source::Embedded(Side::Reference) => Ok(REFERENCE_BENCH.to_string()),
            Source::Embedded(Side::Candidate) => Ok(CANDIDATE_BENCH.to_string()),
            Source::Path(path) => fs::read_to_string(path).map_err(|source| BenchDiffError::Io {
                path: path.clone(),
                source,
            }),
            Source::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|source| BenchDiffError::Io {
                        path: Path::new("-").to_path_buf(),
                        source,
                    })?;
                Ok(text)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Help was requested
    Help,
    /// Arguments could not be understood
    Usage(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Help => write!(f, "{USAGE}"),
            ConfigError::Usage(msg) => write!(f, "{msg}\n{USAGE}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffConfig {
    pub reference: Source,
    pub candidate: Source,
    pub verbose: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        DiffConfig {
            reference: Source::Embedded(Side::Reference),
            candidate: Source::Embedded(Side::Candidate),
            verbose: false,
        }
    }
}

impl DiffConfig {
    /// Build a config from arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut verbose = false;
        let mut positionals: Vec<String> = Vec::new();

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "-v" | "--verbose" => verbose = true,
                "-h" | "--help" => return Err(ConfigError::Help),
                "-" => positionals.push(arg.to_string()),
                _ if arg.starts_with('-') => {
                    return Err(ConfigError::Usage(format!("unknown option '{arg}'")));
                }
                _ => positionals.push(arg.to_string()),
            }
        }

        let mut config = match positionals.as_slice() {
            [] => DiffConfig::default(),
            [reference, candidate] => {
                if reference == "-" && candidate == "-" {
                    return Err(ConfigError::Usage(
                        "only one report can be read from stdin".to_string(),
                    ));
                }
                DiffConfig {
                    reference: Source::from_arg(reference),
                    candidate: Source::from_arg(candidate),
                    verbose: false,
                }
            }
            other => {
                return Err(ConfigError::Usage(format!(
                    "expected 0 or 2 reports, got {}",
                    other.len()
                )));
            }
        };
        config.verbose = verbose;
        Ok(config)
    }

    /// Read both reports as `(reference, candidate)`.
    pub fn load(&self) -> Result<(String, String), BenchDiffError> {
        Ok((self.reference.read()?, self.candidate.read()?))
    }
}
