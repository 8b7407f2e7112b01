use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn bench_diff() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bench_diff"))
}

fn write_report(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("bench_diff_{}_{name}", std::process::id()));
    fs::write(&path, text).expect("failed to write report");
    path
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn embedded_samples_report_h5h3() {
    let output = bench_diff().output().expect("failed to run bench_diff");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["h5h3"]);
}

#[test]
fn repeated_runs_agree() {
    let first = bench_diff().output().unwrap();
    let second = bench_diff().output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn file_reports_print_mismatches_in_candidate_order() {
    let reference = write_report("order_ref.txt", "a2a3: 380\nb2b3: 420\ng1f3: 440\n");
    let candidate = write_report("order_cand.txt", "g1f3: 441\na2a3: 380\nb2b3: 421\n");

    let output = bench_diff().arg(&reference).arg(&candidate).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["g1f3", "b2b3"]);

    let _ = fs::remove_file(reference);
    let _ = fs::remove_file(candidate);
}

#[test]
fn identical_files_print_nothing() {
    let reference = write_report("same_ref.txt", "e2e4: 13160\n");
    let candidate = write_report("same_cand.txt", "e2e4: 13160\n");

    let output = bench_diff().arg(&reference).arg(&candidate).output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let _ = fs::remove_file(reference);
    let _ = fs::remove_file(candidate);
}

#[test]
fn candidate_from_stdin() {
    let reference = write_report("stdin_ref.txt", "h5h3: 5038\n");
    let mut child = bench_diff()
        .arg(&reference)
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn bench_diff");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"h5h3: 5037\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["h5h3"]);

    let _ = fs::remove_file(reference);
}

#[test]
fn missing_move_fails_without_partial_output() {
    let reference = write_report("missing_ref.txt", "h5h3: 5038\n");
    let candidate = write_report("missing_cand.txt", "h5h3: 5037\ne2e4: 20\n");

    let output = bench_diff().arg(&reference).arg(&candidate).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("e2e4"));

    let _ = fs::remove_file(reference);
    let _ = fs::remove_file(candidate);
}

#[test]
fn malformed_line_fails() {
    let reference = write_report("malformed_ref.txt", "h5h3 5038\n");
    let candidate = write_report("malformed_cand.txt", "h5h3: 5038\n");

    let output = bench_diff().arg(&reference).arg(&candidate).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reference report"));
    assert!(stderr.contains("line 1"));

    let _ = fs::remove_file(reference);
    let _ = fs::remove_file(candidate);
}

#[test]
fn verbose_details_go_to_stderr() {
    let output = bench_diff().arg("--verbose").output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["h5h3"]);
    assert!(String::from_utf8_lossy(&output.stderr).contains("h5h3: 5038 != 5037"));
}

#[test]
fn wrong_argument_count_is_usage_error() {
    let output = bench_diff().arg("only_one.txt").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage"));
}
