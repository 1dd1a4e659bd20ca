//! End-to-end pipeline tests driving the CLI entry point.

use clap::Parser;

use mondrian_cli::cli::Cli;
use mondrian_cli::commands::run_anonymize;

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("mondrian").chain(args.iter().copied()))
}

fn write_input(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.csv");
    std::fs::write(&path, contents).expect("write input");
    path
}

const INPUT: &str = "name,age,sex\nalice,20,m\nbob,25,m\ncarol,60,f\ndave,65,f\n";

#[test]
fn anonymizes_a_csv_end_to_end() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(&dir, INPUT);
    let output = dir.path().join("out.csv");

    let args = cli(&[
        input.to_str().expect("utf8 path"),
        "--qids",
        "1,2",
        "-k",
        "2",
        "-o",
        output.to_str().expect("utf8 path"),
        "--has-header",
    ]);
    let summary = run_anonymize(&args).expect("pipeline succeeds");

    assert_eq!(summary.records, 4);
    assert_eq!(summary.groups, 2);
    assert_eq!(summary.k, 2);
    assert!(summary.smallest_group >= 2);

    let contents = std::fs::read_to_string(&output).expect("read output");
    assert_eq!(
        contents,
        "name,age,sex\n\
         alice,\"[20, 25]\",m\n\
         bob,\"[20, 25]\",m\n\
         carol,\"[60, 65]\",f\n\
         dave,\"[60, 65]\",f\n"
    );
}

#[test]
fn dry_run_writes_no_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(&dir, INPUT);
    let output = dir.path().join("out.csv");

    let args = cli(&[
        input.to_str().expect("utf8 path"),
        "--qids",
        "1,2",
        "-k",
        "2",
        "-o",
        output.to_str().expect("utf8 path"),
        "--has-header",
        "--dry-run",
    ]);
    let summary = run_anonymize(&args).expect("pipeline succeeds");

    assert!(summary.output.is_none());
    assert!(!output.exists());
    assert_eq!(summary.groups, 2);
}

#[test]
fn oversized_k_fails_with_no_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(&dir, "alice,20\n");
    let output = dir.path().join("out.csv");

    let args = cli(&[
        input.to_str().expect("utf8 path"),
        "--qids",
        "1",
        "-k",
        "2",
        "-o",
        output.to_str().expect("utf8 path"),
    ]);
    let error = run_anonymize(&args).expect_err("undersized class");

    assert!(format!("{error:#}").contains("equivalence class of size 1"));
    assert!(!output.exists());
}
