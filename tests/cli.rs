use std::path::Path;
use std::process::{Command, Output};

const HEADER: &str = "Max Drawdown,Average Duration,Max Duration,Recovery Factor,Sharpe Ratio,\
Sortino Ratio,Calmar Ratio,Profit Factor,Win Rate,Loss Rate,Average Win,Average Loss,\
Max Consecutive Wins,Max Consecutive Losses,Expectancy,Volatility,Annualized Return,\
Trading Frequency,Turnover Rate,Total Profit";

fn tradestat(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tradestat"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to launch tradestat")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_writes_one_row_per_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("metrics.csv");

    let result = tradestat(&[path_arg(&output), "--seed", "17"]);

    assert_eq!(result.status.code(), Some(0));
    let contents = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines.len(), 101);
    assert!(lines[1..].iter().all(|line| line.split(',').count() == 20));
}

#[test]
fn test_same_seed_same_file_in_both_modes() {
    let dir = tempfile::tempdir().unwrap();
    let parallel = dir.path().join("parallel.csv");
    let sequential = dir.path().join("sequential.csv");

    let a = tradestat(&[path_arg(&parallel), "--seed", "5", "--execution", "parallel"]);
    let b = tradestat(&[path_arg(&sequential), "--seed", "5", "--execution", "sequential"]);

    assert!(a.status.success());
    assert!(b.status.success());
    assert_eq!(
        std::fs::read_to_string(&parallel).unwrap(),
        std::fs::read_to_string(&sequential).unwrap()
    );
}

#[test]
fn test_missing_argument_is_usage_error() {
    let result = tradestat(&[]);

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Usage"));
}

#[test]
fn test_extra_argument_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.csv");
    let second = dir.path().join("b.csv");

    let result = tradestat(&[path_arg(&first), path_arg(&second)]);

    assert_eq!(result.status.code(), Some(1));
    assert!(!first.exists());
    assert!(!second.exists());
}

#[test]
fn test_unwritable_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("no-such-dir").join("metrics.csv");

    let result = tradestat(&[path_arg(&output)]);

    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());
    assert!(String::from_utf8_lossy(&result.stderr).contains("metrics.csv"));
}

#[test]
fn test_config_file_and_evaluation() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("tradestat.toml");
    let output = dir.path().join("metrics.csv");
    let evaluation = dir.path().join("evaluation.csv");
    std::fs::write(
        &config,
        "[generator]\nsequence_count = 7\nmax_length = 20\nseed = 1\n",
    )
    .unwrap();

    let result = tradestat(&[
        path_arg(&output),
        "--config",
        path_arg(&config),
        "--evaluation",
        path_arg(&evaluation),
    ]);

    assert!(result.status.success());
    assert_eq!(std::fs::read_to_string(&output).unwrap().lines().count(), 8);
    let graded = std::fs::read_to_string(&evaluation).unwrap();
    assert_eq!(graded.lines().count(), 8);
    assert!(graded.lines().next().unwrap().ends_with(",Suitability"));
}

#[test]
fn test_invalid_config_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("tradestat.toml");
    let output = dir.path().join("metrics.csv");
    std::fs::write(&config, "[generator]\nsequence_count = 0\n").unwrap();

    let result = tradestat(&[path_arg(&output), "--config", path_arg(&config)]);

    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());
}
