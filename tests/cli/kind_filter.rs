use crate::common::{TempWorkspace, fixtures, latest, stdout_lines};
use predicates::prelude::*;

const GZIP_HEADER: &[u8] = &[0x1f, 0x8b, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03];
const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

#[test]
fn zip_kind_selects_only_archives() {
    let ws = TempWorkspace::new();
    let gz = ws.create_file("backup.tar.gz", GZIP_HEADER, 500);
    ws.create_file("notes.txt", b"just text\n", 5);

    latest()
        .args(["--kind", "zip", "--newest", "5", &ws.pattern("*")])
        .assert()
        .success()
        .stdout(format!("{}\n", gz.display()))
        .stderr(predicate::str::contains("fewer files than requested: 1"));
}

#[test]
fn kind_uses_content_not_extension() {
    let ws = TempWorkspace::new();
    let disguised = ws.create_file("picture.txt", PNG_HEADER, 50);
    ws.create_file("real.png", b"not really a png\n", 10);

    let output = latest()
        .args(["-k", "IMAGE", "-n", "5", &ws.pattern("*")])
        .output()
        .expect("runs");
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![disguised.display().to_string()]
    );
}

#[test]
fn kind_filter_is_subset_of_unfiltered_selection() {
    let ws = TempWorkspace::new();
    ws.create_file("a.gz", GZIP_HEADER, 40);
    ws.create_file("b.txt", b"b\n", 30);
    ws.create_file("c.gz", GZIP_HEADER, 20);
    ws.create_file("d.txt", b"d\n", 10);
    let pattern = ws.pattern("*");

    let all = stdout_lines(&latest().args(["-n", "3", &pattern]).output().expect("runs"));
    let text = stdout_lines(
        &latest()
            .args(["-n", "3", "-k", "text", &pattern])
            .output()
            .expect("runs"),
    );
    assert_eq!(text.len(), 2);
    assert!(text.iter().all(|line| all.contains(line)));
}

#[test]
fn oldest_with_kind_scans_from_the_old_end() {
    let ws = TempWorkspace::new();
    let old = ws.create_file("old.gz", GZIP_HEADER, 300);
    let mid = ws.create_file("mid.gz", GZIP_HEADER, 200);
    ws.create_file("new.gz", GZIP_HEADER, 100);
    ws.create_file("older.txt", b"text\n", 400);

    let output = latest()
        .args(["-o", "2", "-k", "zip", &ws.pattern("*")])
        .output()
        .expect("runs");
    assert_eq!(
        stdout_lines(&output),
        vec![old.display().to_string(), mid.display().to_string()]
    );
}

#[test]
fn doc_kind_selects_word_documents_by_content() {
    let ws = TempWorkspace::new();
    let report = ws.create_file("report.bin", &fixtures::docx(), 100);
    ws.create_file("notes.doc", b"plain text, wrong extension\n", 10);
    ws.create_file("bundle.zip", &fixtures::stored_zip(&[("a.txt", b"a")]), 20);
    ws.create_file("backup.gz", GZIP_HEADER, 30);

    latest()
        .args(["-q", "-k", "doc", "-n", "5", &ws.pattern("*")])
        .assert()
        .success()
        .stdout(format!("{}\n", report.display()));
}

#[test]
fn no_kind_matches_fails() {
    let ws = TempWorkspace::new();
    ws.create_file("notes.txt", b"text\n", 5);

    latest()
        .args(["-k", "doc", &ws.pattern("*")])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("No files matched the specified kind filter"));
}

#[test]
fn no_kind_matches_allowed() {
    let ws = TempWorkspace::new();
    ws.create_file("notes.txt", b"text\n", 5);

    latest()
        .args(["-0", "-k", "doc", &ws.pattern("*")])
        .assert()
        .success()
        .stdout("")
        .stderr("");
}
