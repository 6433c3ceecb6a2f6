//! CLI integration tests for the losstool binary.
//!
//! Tests run the compiled binary through `std::process::Command` and check
//! the report layout, the precision flag, and exit codes for bad input.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Output};

// =============================================================================
// Helper Functions
// =============================================================================

fn losstool_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_losstool"))
}

fn run<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(losstool_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute losstool binary")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "Expected exit code 0, got {:?}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn assert_failure(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(1),
        "Expected exit code 1, got {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

// =============================================================================
// Successful comparisons
// =============================================================================

#[test]
fn identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write(&dir, "ref.dat", "1 2\n2 4\n3 6\n");
    let obtained = write(&dir, "obt.dat", "1 2\n2 4\n3 6\n");

    let output = run(&[&reference, &obtained]);
    assert_success(&output);
    assert_eq!(
        stdout_str(&output),
        "\
Loss values:
MSE: 0.0000000000
MAE: 0.0000000000
RMSE: 0.0000000000
R-squared: 1.0000000000

Additional Statistics:
Number of data points: 3
X range: 1.0000000000 to 3.0000000000
Y range (reference): 2.0000000000 to 6.0000000000
Y range (obtained): 2.0000000000 to 6.0000000000
"
    );
}

#[test]
fn precision_flag() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write(&dir, "ref.dat", "0 1\n1 2\n2 3\n");
    let obtained = write(&dir, "obt.csv", "x,y\n0,2\n1,2\n2,2\n");
    let (reference, obtained) = (reference.to_str().unwrap(), obtained.to_str().unwrap());

    for args in [
        vec![reference, obtained, "-p", "4"],
        vec!["--precision", "4", reference, obtained],
    ] {
        let output = run(args.as_slice());
        assert_success(&output);
        let stdout = stdout_str(&output);
        assert!(stdout.contains("MSE: 0.6667\n"), "{stdout}");
        assert!(stdout.contains("RMSE: 0.8165\n"), "{stdout}");
        assert!(stdout.contains("R-squared: 0.0000\n"), "{stdout}");
        assert!(stdout.contains("X range: 0.0000 to 2.0000\n"), "{stdout}");
    }
}

#[test]
fn zero_variance_reference_prints_non_finite() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write(&dir, "ref.dat", "1 5\n2 5\n3 5\n");
    let obtained = write(&dir, "obt.json", "[[1, 4], [2, 5], [3, 6]]");

    let output = run(&[&reference, &obtained]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("R-squared: -inf\n"));
}

#[test]
fn nan_in_column_prints_nan_range() {
    let dir = tempfile::tempdir().unwrap();
    let data = "1 2\nnan 4\n3 6\n";
    let reference = write(&dir, "ref.dat", data);
    let obtained = write(&dir, "obt.dat", data);
    let (reference, obtained) = (reference.to_str().unwrap(), obtained.to_str().unwrap());

    let output = run(&[reference, obtained, "-p", "2"]);
    assert_success(&output);
    let stdout = stdout_str(&output);
    assert!(stdout.contains("X range: nan to nan\n"), "{stdout}");
    assert!(stdout.contains("Y range (reference): 2.00 to 6.00\n"), "{stdout}");
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write(&dir, "ref.dat", "1 2\n");
    let missing = dir.path().join("missing.dat");

    let output = run(&[&reference, &missing]);
    assert_failure(&output);
    assert!(stdout_str(&output).is_empty());
    let stderr = stderr_str(&output);
    assert!(stderr.starts_with("Error: Unable to read file"), "{stderr}");
    assert!(stderr.contains("missing.dat"), "{stderr}");
}

#[test]
fn single_column_file() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write(&dir, "ref.dat", "1\n2\n3\n");
    let obtained = write(&dir, "obt.dat", "1 2\n2 4\n3 6\n");

    let output = run(&[&reference, &obtained]);
    assert_failure(&output);
    assert!(stdout_str(&output).is_empty());
    assert!(stderr_str(&output).contains("must contain exactly two columns"));
}

#[test]
fn shape_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write(&dir, "ref.dat", "1 2\n2 4\n3 6\n");
    let obtained = write(&dir, "obt.dat", "1 2\n2 4\n");

    let output = run(&[&reference, &obtained]);
    assert_failure(&output);
    assert!(stdout_str(&output).is_empty());
    assert!(stderr_str(&output)
        .contains("Error: Reference and obtained data must have the same shape"));
}

#[test]
fn missing_arguments_is_usage_error() {
    let output = run::<&str>(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_str(&output).contains("Usage"));
}
