use std::fs;
use std::path::Path;

use assert_cmd::Command;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use predicates::prelude::*;
use tempfile::TempDir;

/// `nota` with its config directory pointed into `home`.
fn nota(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("nota").unwrap();
    cmd.env("HOME", home).env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

fn dirs() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("pdf");
    let output = tmp.path().join("txt");
    fs::create_dir(&input).unwrap();
    (tmp, input, output)
}

/// One-page PDF with `lines` drawn top to bottom in Helvetica.
fn nota_pdf(lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("TL", vec![14.into()]),
        Operation::new("Td", vec![50.into(), 780.into()]),
    ];
    for line in lines {
        let latin1: Vec<u8> = line.chars().map(|c| c as u8).collect();
        operations.push(Operation::new("Tj", vec![Object::string_literal(latin1)]));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut data = Vec::new();
    doc.save_to(&mut data).unwrap();
    data
}

const NOTA_LINES: [&str; 15] = [
    "Header",
    "Foo",
    "Invoice date 01/02/2023",
    "Line 3",
    "Line 4",
    "Line 5",
    "Line 6",
    "Line 7",
    "Line 8",
    "Line 9",
    "Line 10",
    "Line 11",
    "CL123",
    "Nº Nota:",
    "9876",
];

#[test]
fn batch_extracts_and_renames() {
    let (tmp, input, output) = dirs();
    let pdf = nota_pdf(&NOTA_LINES);
    fs::write(input.join("scan.pdf"), &pdf).unwrap();

    nota(tmp.path())
        .args(["batch", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saving:"))
        .stdout(predicate::str::contains("CL123-20230201-NC9876.txt"));

    let text = fs::read_to_string(output.join("CL123-20230201-NC9876.txt")).unwrap();
    assert_eq!(text, NOTA_LINES.join("\n"));

    assert!(!input.join("scan.pdf").exists());
    assert_eq!(fs::read(input.join("CL123-20230201-NC9876.pdf")).unwrap(), pdf);
}

#[test]
fn batch_no_rename_keeps_source() {
    let (tmp, input, output) = dirs();
    fs::write(input.join("scan.pdf"), nota_pdf(&NOTA_LINES)).unwrap();

    nota(tmp.path())
        .args(["batch", "--no-rename", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert!(output.join("CL123-20230201-NC9876.txt").exists());
    assert!(input.join("scan.pdf").exists());
}

#[test]
fn batch_without_pdfs_does_nothing() {
    let (tmp, input, output) = dirs();
    fs::write(input.join("notes.txt"), "not a pdf").unwrap();

    nota(tmp.path())
        .args(["batch", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("No PDF files found"));

    assert!(!output.exists());
    assert!(input.join("notes.txt").exists());
}

#[test]
fn batch_missing_input_dir_fails() {
    let tmp = tempfile::tempdir().unwrap();

    nota(tmp.path())
        .args(["batch", "-i"])
        .arg(tmp.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to list"));
}

#[test]
fn batch_aborts_on_broken_pdf() {
    let (tmp, input, output) = dirs();
    fs::write(input.join("broken.pdf"), "garbage").unwrap();

    nota(tmp.path())
        .args(["batch", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.pdf"));

    assert!(input.join("broken.pdf").exists());
    assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
}

#[test]
fn batch_continue_on_error_writes_summary() {
    let (tmp, input, output) = dirs();
    fs::write(input.join("broken.pdf"), "garbage").unwrap();
    let summary = tmp.path().join("summary.csv");

    nota(tmp.path())
        .args(["batch", "--continue-on-error", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--summary")
        .arg(&summary)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 failed"));

    let csv = fs::read_to_string(&summary).unwrap();
    assert!(csv.starts_with("filename,status,"));
    assert!(csv.contains("broken.pdf,error,"));
}

#[test]
fn process_missing_file_fails() {
    let tmp = tempfile::tempdir().unwrap();

    nota(tmp.path())
        .args(["process"])
        .arg(tmp.path().join("absent.pdf"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn config_init_get_set() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("nota.json");

    nota(tmp.path())
        .arg("-c")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    nota(tmp.path())
        .arg("-c")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    nota(tmp.path())
        .arg("-c")
        .arg(&config)
        .args(["config", "get", "template.client_line"])
        .assert()
        .success()
        .stdout(predicate::str::diff("12\n"));

    nota(tmp.path())
        .arg("-c")
        .arg(&config)
        .args(["config", "set", "template.client_line", "7"])
        .assert()
        .success();

    nota(tmp.path())
        .arg("-c")
        .arg(&config)
        .args(["config", "get", "template.client_line"])
        .assert()
        .success()
        .stdout(predicate::str::diff("7\n"));
}

#[test]
fn config_set_rejects_wrong_type() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("nota.json");

    nota(tmp.path())
        .arg("-c")
        .arg(&config)
        .args(["config", "set", "template.date_line", "two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value"));
}

#[test]
fn unparsable_config_fails() {
    let (tmp, input, _output) = dirs();
    let config = tmp.path().join("nota.json");
    fs::write(&config, "{ not json").unwrap();

    nota(tmp.path())
        .arg("-c")
        .arg(&config)
        .args(["batch", "-i"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"))
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn config_path_uses_config_home() {
    let tmp = tempfile::tempdir().unwrap();

    nota(tmp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nota/config.json"))
        .stdout(predicate::str::contains("not created"));
}
