use std::env;
use std::io;
use std::process;

use bench_diff::{diff_reports, BenchDiff, BenchDiffError, ConfigError, DiffConfig, Report, Side};

fn parse(text: &str, side: Side) -> Result<Report, BenchDiffError> {
    Report::parse(text).map_err(|error| BenchDiffError::Report { side, error })
}

fn print_details(diff: &BenchDiff, reference: &Report, candidate: &Report) {
    for m in &diff.mismatches {
        eprintln!("{}: {} != {}", m.mv, m.reference, m.candidate);
    }
    if let (Some(r), Some(c)) = (reference.total_nodes(), candidate.total_nodes()) {
        eprintln!("Total Nodes: {r} (reference) {c} (candidate)");
    }
    eprintln!("mismatches: {}", diff.len());
}

fn run(config: &DiffConfig) -> Result<(), BenchDiffError> {
    let (reference_text, candidate_text) = config.load()?;
    let reference = parse(&reference_text, Side::Reference)?;
    let candidate = parse(&candidate_text, Side::Candidate)?;

    let diff = diff_reports(&reference, &candidate)?;
    if config.verbose {
        print_details(&diff, &reference, &candidate);
    }

    diff.write_moves(io::stdout().lock())
        .map_err(|source| BenchDiffError::Io {
            path: "<stdout>".into(),
            source,
        })
}

fn main() {
    let config = match DiffConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(ConfigError::Help) => {
            println!("{}", ConfigError::Help);
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("bench_diff: {e}");
        process::exit(1);
    }
}
