use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn textviz() -> Command {
    Command::cargo_bin("textviz").unwrap()
}

fn file_with(suffix: &str, content: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn analyzes_plain_text_file() {
    let file = file_with(".txt", b"Hello, World! Hello world.");

    textviz()
        .arg(file.path())
        .arg("--output-format")
        .arg("plain")
        .assert()
        .success()
        .stdout(predicate::str::contains("Characters: 23"))
        .stdout(predicate::str::contains("Words: 4"))
        .stdout(predicate::str::contains("Unique words: 2"))
        .stdout(predicate::str::contains("hello 2"))
        .stdout(predicate::str::contains("world 2"))
        .stdout(predicate::str::contains("SUCCESS: Analysis complete"));
}

#[test]
fn punctuation_only_text_warns_and_reports_zero_words() {
    let file = file_with(".txt", b"... !!! ???");

    textviz()
        .arg(file.path())
        .arg("-v")
        .arg("--output-format")
        .arg("plain")
        .assert()
        .success()
        .stdout(predicate::str::contains("Words: 0"))
        .stdout(predicate::str::contains(
            "WARNING: No words remained after normalization",
        ));
}

#[test]
fn analyzes_csv_file() {
    let file = file_with(".csv", b"word,count\nhello,1\nhello,2\n");

    textviz()
        .arg(file.path())
        .arg("--output-format")
        .arg("plain")
        .assert()
        .success()
        .stdout(predicate::str::contains("Format: CSV"))
        .stdout(predicate::str::contains("hello 2"));
}

#[test]
fn analyzes_json_file() {
    let file = file_with(".json", br#"{"a": 1, "b": "two"}"#);

    textviz()
        .arg(file.path())
        .arg("--output-format")
        .arg("plain")
        .assert()
        .success()
        .stdout(predicate::str::contains("Format: JSON"))
        .stdout(predicate::str::contains("Characters: 5"))
        .stdout(predicate::str::contains("Words: 2"));
}

#[test]
fn json_output_is_machine_readable() {
    let file = file_with(".txt", b"alpha beta alpha");

    let output = textviz()
        .arg(file.path())
        .arg("--output-format")
        .arg("json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["word_count"], 3);
    assert_eq!(report["unique_word_count"], 2);
    assert_eq!(report["top_words"][0]["word"], "alpha");
    assert_eq!(report["top_words"][0]["count"], 2);
    assert_eq!(report["normalized_text"], "alpha beta alpha");
}

#[test]
fn top_n_flag_truncates_table() {
    let file = file_with(".txt", b"a b c d e f");

    let output = textviz()
        .arg(file.path())
        .arg("--top-n")
        .arg("2")
        .arg("--output-format")
        .arg("json")
        .output()
        .unwrap();

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["top_words"].as_array().unwrap().len(), 2);
    assert_eq!(report["unique_word_count"], 6);
}

#[test]
fn human_output_shows_visualizations() {
    let file = file_with(".txt", b"tea tea tea coffee coffee water");

    textviz()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Most Frequent Words"))
        .stdout(predicate::str::contains("Word Crowd"))
        .stdout(predicate::str::contains("#"))
        .stdout(predicate::str::contains("-".repeat(60)))
        .stdout(predicate::str::contains("Analysis complete"));
}

#[test]
fn no_chart_and_no_crowd_suppress_visualizations() {
    let file = file_with(".txt", b"tea tea coffee");

    textviz()
        .arg(file.path())
        .arg("--no-chart")
        .arg("--no-crowd")
        .assert()
        .success()
        .stdout(predicate::str::contains("Most Frequent Words").not())
        .stdout(predicate::str::contains("Word Crowd").not());
}

#[test]
fn unsupported_extension_fails_with_code_2() {
    let file = file_with(".pdf", b"not really a pdf");

    textviz()
        .arg(file.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported or unreadable"));
}

#[test]
fn invalid_utf8_text_fails_with_code_3() {
    let file = file_with(".txt", &[0x48, 0xff, 0xfe, 0x6c]);

    textviz()
        .arg(file.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unsupported or unreadable"));
}

#[test]
fn malformed_json_fails_with_code_4() {
    let file = file_with(".json", b"{broken");

    textviz().arg(file.path()).assert().code(4);
}

#[test]
fn empty_file_fails_with_code_5() {
    let file = file_with(".txt", b"");

    textviz()
        .arg(file.path())
        .assert()
        .code(5)
        .stderr(predicate::str::contains("no extractable text"));
}

#[test]
fn oversize_file_fails_with_code_6() {
    let file = file_with(".txt", &vec![b'x'; 2 * 1024 * 1024]);

    textviz()
        .arg(file.path())
        .arg("--max-size")
        .arg("1")
        .assert()
        .code(6)
        .stderr(predicate::str::contains("File too large"));
}

#[test]
fn missing_file_fails_with_code_7() {
    textviz().arg("/nonexistent/notes.txt").assert().code(7);
}

#[test]
fn generate_config_writes_sample() {
    let dir = TempDir::new().unwrap();

    textviz()
        .current_dir(dir.path())
        .arg("--generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated sample configuration"));

    let content = std::fs::read_to_string(dir.path().join("textviz.toml")).unwrap();
    assert!(content.contains("[analysis]"));
    assert!(content.contains("top_n"));
    assert!(content.lines().any(|line| line.starts_with('#')));
}

#[test]
fn config_file_controls_top_n() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("textviz.toml");
    std::fs::write(
        &config_path,
        "[analysis]\ntop_n = 1\n\n[render]\nchart_width = 40\ncrowd_width = 72\nshow_chart = true\nshow_crowd = true\n\n[limits]\nmax_file_size = 1048576\n",
    )
    .unwrap();

    let file = file_with(".txt", b"one two two");

    let output = textviz()
        .arg(file.path())
        .arg("--config")
        .arg(&config_path)
        .arg("--output-format")
        .arg("json")
        .output()
        .unwrap();

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["top_words"].as_array().unwrap().len(), 1);
    assert_eq!(report["top_words"][0]["word"], "two");
}
