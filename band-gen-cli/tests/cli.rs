use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const FOX: &str = "The quick brown fox jumps over the lazy dog.";
const FOX_WORDS: [&str; 5] = ["Fox", "Dog", "Quick", "Brown", "Lazy"];

fn cmd() -> Command {
	Command::cargo_bin("band-gen").unwrap()
}

fn fixture(contents: &str) -> (TempDir, PathBuf) {
	let dir = TempDir::new().expect("create temp dir");
	let path = dir.path().join("input.txt");
	fs::write(&path, contents).expect("write fixture");
	(dir, path)
}

fn stdout_lines(output: &[u8]) -> Vec<String> {
	String::from_utf8_lossy(output).lines().map(str::to_owned).collect()
}

#[test]
fn single_name_uses_only_text_words() {
	let (_dir, path) = fixture(FOX);
	let output = cmd().arg(&path).arg("--quiet").assert().success().get_output().stdout.clone();

	let lines = stdout_lines(&output);
	assert_eq!(lines.len(), 1);
	let words: Vec<&str> = lines[0].split(' ').collect();
	assert!((2..=4).contains(&words.len()), "bad name: {}", lines[0]);
	assert!(words.iter().all(|w| FOX_WORDS.contains(w)), "unexpected word in {}", lines[0]);
	let last = words[words.len() - 1];
	assert!(last == "Fox" || last == "Dog");
}

#[test]
fn count_prints_that_many_names() {
	let (_dir, path) = fixture(FOX);
	let output = cmd().arg(&path).arg("5").assert().success().get_output().stdout.clone();
	assert_eq!(stdout_lines(&output).len(), 5);
}

#[test]
fn numbered_lines() {
	let (_dir, path) = fixture(FOX);
	let output = cmd()
		.args(["--numbered", "--seed", "9"])
		.arg(&path)
		.arg("3")
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();
	let lines = stdout_lines(&output);
	assert_eq!(lines.len(), 3);
	for (i, line) in lines.iter().enumerate() {
		assert!(line.starts_with(&format!("{}\t", i + 1)), "unnumbered line: {line}");
	}
}

#[test]
fn seed_is_reproducible() {
	let (_dir, path) = fixture(FOX);
	let run = || cmd().args(["--seed", "1234"]).arg(&path).arg("10").assert().success().get_output().stdout.clone();
	assert_eq!(run(), run());
}

#[test]
fn missing_file_fails_without_names() {
	cmd()
		.arg("missing.txt")
		.assert()
		.failure()
		.code(1)
		.stdout("")
		.stderr(contains("cannot access file"));
}

#[test]
fn non_numeric_count_is_usage_error() {
	let (_dir, path) = fixture(FOX);
	cmd().arg(&path).arg("abc").assert().failure().code(2).stdout("").stderr(contains("invalid value"));
}

#[test]
fn wrong_argument_counts_are_usage_errors() {
	cmd().assert().failure().code(2).stderr(contains("Usage"));

	let (_dir, path) = fixture(FOX);
	cmd().arg(&path).arg("2").arg("3").assert().failure().code(2);
}

#[test]
fn text_without_adjectives_is_rejected() {
	let (_dir, path) = fixture("Dogs and cats.");
	cmd()
		.arg(&path)
		.assert()
		.failure()
		.code(1)
		.stdout("")
		.stderr(contains("insufficient vocabulary"));
}

#[test]
fn input_file_summary_is_logged() {
	let (_dir, path) = fixture(FOX);
	cmd()
		.arg(&path)
		.env_remove("RUST_LOG")
		.assert()
		.success()
		.stderr(contains("Using file").and(contains("input.txt")));

	cmd().arg(&path).arg("--quiet").env_remove("RUST_LOG").assert().success().stderr("");
}

#[test]
fn malformed_text_is_a_tagging_error() {
	let dir = TempDir::new().expect("create temp dir");
	let path = dir.path().join("binary.txt");
	fs::write(&path, [b'o', b'k', b' ', 0xff, 0xfe, 0xfd]).expect("write fixture");

	cmd()
		.arg(&path)
		.arg("--quiet")
		.assert()
		.failure()
		.code(1)
		.stdout("")
		.stderr(contains("tagging failed"));
}

#[test]
fn invalid_word_range_is_rejected() {
	let (_dir, path) = fixture(FOX);
	cmd()
		.args(["--min-words", "5", "--max-words", "3"])
		.arg(&path)
		.assert()
		.failure()
		.stderr(contains("invalid name shape"));
}

#[test]
fn cache_file_is_written_on_request() {
	let (dir, path) = fixture(FOX);
	cmd().arg(&path).arg("--cache").assert().success();
	assert!(dir.path().join("input.txt.vocab").exists());
}
