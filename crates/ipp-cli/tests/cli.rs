use std::io::Write;
use std::process::{Command, Output, Stdio};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ipp-parse"))
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = bin()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env_remove("RUST_LOG")
        .spawn()
        .expect("failed to spawn ipp-parse");
    // The child may exit before reading stdin (e.g. --help), so a broken pipe is fine.
    let _ = child
        .stdin
        .take()
        .expect("stdin not piped")
        .write_all(stdin.as_bytes());
    child.wait_with_output().expect("failed to wait for ipp-parse")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn translates_stdin_to_xml() {
    let out = run_with_stdin(&[], ".IPPcode23\nMOVE GF@x int@5\n");
    assert_eq!(out.status.code(), Some(0));
    let xml = stdout(&out);
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(xml.contains("<instruction order=\"1\" opcode=\"MOVE\">"));
    assert!(xml.contains("<arg2 type=\"int\">5</arg2>"));
    assert!(stderr(&out).is_empty());
}

#[test]
fn reads_from_source_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, ".IPPcode23\nWRITE string@hi").expect("write source");
    let arg = format!("--source={}", file.path().display());
    let out = run_with_stdin(&[&arg], "this stdin is ignored");
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("<arg1 type=\"string\">hi</arg1>"));
}

#[test]
fn unreadable_source_is_code_11() {
    let out = run_with_stdin(&["--source=/nonexistent/dir/prog.ippc"], "");
    assert_eq!(out.status.code(), Some(11));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).starts_with("Error: "));
}

#[test]
fn help_alone_exits_zero() {
    let out = run_with_stdin(&["--help"], "");
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("Usage"));
}

#[test]
fn help_with_source_is_code_10() {
    let out = run_with_stdin(&["--help", "--source=x"], "");
    assert_eq!(out.status.code(), Some(10));
    assert!(stdout(&out).is_empty());
}

#[test]
fn source_errors_map_to_exit_codes() {
    let cases = [
        ("MOVE GF@x GF@y\n", 21),
        (".IPPcode23\nFOO GF@x\n", 22),
        (".IPPcode23\nMOVE GF@x\n", 23),
        (".IPPcode23\nDEFVAR x\n", 23),
        (".IPPcode23\nBREAK\nREAD GF@x nil\n", 23),
    ];
    for (source, code) in cases {
        let out = run_with_stdin(&[], source);
        assert_eq!(out.status.code(), Some(code), "source {source:?}");
        assert!(stdout(&out).is_empty(), "partial output for {source:?}");
        let err = stderr(&out);
        assert!(err.starts_with("Error: "), "stderr {err:?}");
        assert_eq!(err.lines().count(), 1, "stderr {err:?}");
    }
}
