use crate::common::{TempWorkspace, latest, stdout_lines};
use predicates::prelude::*;

fn two_files(ws: &TempWorkspace) -> (String, String) {
    let a = ws.create_file("a.txt", b"alpha\n", 300);
    let b = ws.create_file("b.pdf", b"%PDF-1.4\n", 100);
    (a.display().to_string(), b.display().to_string())
}

#[test]
fn newest_one_prints_newest_path() {
    let ws = TempWorkspace::new();
    let (a, b) = two_files(&ws);

    let output = latest()
        .args(["--newest", "1", &a, &b])
        .output()
        .expect("runs");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec![b]);
}

#[test]
fn default_selects_single_newest() {
    let ws = TempWorkspace::new();
    let (_, b) = two_files(&ws);

    let output = latest().arg(ws.pattern("*")).output().expect("runs");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec![b]);
}

#[test]
fn oldest_one_prints_oldest_path() {
    let ws = TempWorkspace::new();
    let (a, b) = two_files(&ws);

    let output = latest()
        .args(["--oldest", "1", &a, &b])
        .output()
        .expect("runs");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec![a]);
}

#[test]
fn newest_and_oldest_are_mirror_orders() {
    let ws = TempWorkspace::new();
    let a = ws.create_file("1.log", b"1", 400).display().to_string();
    let b = ws.create_file("2.log", b"2", 300).display().to_string();
    let c = ws.create_file("3.log", b"3", 200).display().to_string();
    let pattern = ws.pattern("*.log");

    let newest = latest().args(["-n", "3", &pattern]).output().expect("runs");
    assert_eq!(stdout_lines(&newest), vec![c.clone(), b.clone(), a.clone()]);

    let oldest = latest().args(["-o", "3", &pattern]).output().expect("runs");
    assert_eq!(stdout_lines(&oldest), vec![a, b, c]);
}

#[test]
fn requesting_more_than_available_warns_and_succeeds() {
    let ws = TempWorkspace::new();
    let only = ws.create_file("only.txt", b"x", 10).display().to_string();

    latest()
        .args(["-n", "3", &ws.pattern("*.txt")])
        .assert()
        .success()
        .stdout(format!("{only}\n"))
        .stderr(predicate::str::contains("fewer files than requested: 1"));
}

#[test]
fn allow_empty_result_suppresses_shortfall_warning() {
    let ws = TempWorkspace::new();
    ws.create_file("only.txt", b"x", 10);

    latest()
        .args(["-0", "-n", "3", &ws.pattern("*.txt")])
        .assert()
        .success()
        .stderr(predicate::str::contains("fewer files").not());
}

#[test]
fn overlapping_patterns_list_each_file_once() {
    let ws = TempWorkspace::new();
    let a = ws.create_file("a.txt", b"a", 20).display().to_string();
    let b = ws.create_file("b.txt", b"b", 10).display().to_string();

    let output = latest()
        .args(["-n", "10", &ws.pattern("*.txt"), &ws.pattern("a.*"), &a])
        .output()
        .expect("runs");
    assert_eq!(stdout_lines(&output), vec![b, a]);
}

#[test]
fn recursive_pattern_descends_directories() {
    let ws = TempWorkspace::new();
    let deep = ws.create_file("x/y/z/deep.md", b"# deep", 5).display().to_string();
    ws.create_file("top.md", b"# top", 50);

    let output = latest()
        .args(["-n", "1", &ws.pattern("**/*.md")])
        .output()
        .expect("runs");
    assert_eq!(stdout_lines(&output), vec![deep]);
}

#[test]
fn selected_lines_go_to_stderr_unless_quiet() {
    let ws = TempWorkspace::new();
    let (_, b) = two_files(&ws);

    latest()
        .arg(ws.pattern("*"))
        .assert()
        .success()
        .stderr(predicate::str::contains(format!("Selected {b}")));

    latest()
        .args(["--quiet", &ws.pattern("*")])
        .assert()
        .success()
        .stdout(format!("{b}\n"))
        .stderr("");
}

#[test]
fn tilde_patterns_display_home_relative_paths() {
    let home = TempWorkspace::new();
    let file = home.create_file("reports/q3.txt", b"numbers", 10);

    latest()
        .env("HOME", home.path())
        .arg("~/reports/*.txt")
        .assert()
        .success()
        .stdout(format!("{}\n", file.display()))
        .stderr(predicate::str::contains("Selected ~/reports/q3.txt"));
}

#[test]
fn trailing_slash_pattern_selects_nothing() {
    let ws = TempWorkspace::new();
    ws.create_file("top.txt", b"top", 10);
    ws.create_file("sub/inner.txt", b"inner", 5);

    latest()
        .args(["-q", &ws.pattern("*/")])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("No files found"));
}

#[cfg(target_os = "linux")]
#[test]
fn non_utf8_file_names_are_printed_byte_exact() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let ws = TempWorkspace::new();
    let file = ws.create_file(OsStr::from_bytes(b"\xff.txt"), b"x", 10);

    let output = latest()
        .args(["-q", &ws.pattern("*.txt")])
        .output()
        .expect("runs");
    assert!(output.status.success());

    let mut expected = file.as_os_str().as_bytes().to_vec();
    expected.push(b'\n');
    assert_eq!(output.stdout, expected);
    assert!(std::path::Path::new(OsStr::from_bytes(&output.stdout[..output.stdout.len() - 1])).exists());
}
