//! Drives the compiled binary over stdin.

use std::io::Write;
use std::process::{Command, Stdio};

fn run_session(args: &[&str], input: &str) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_treesh"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_quiet_session_over_stdin() {
    let out = run_session(
        &["--quiet"],
        "mkdir folder\ncd folder\ncreateFile text.txt TEXT\nmv text.txt /\ncd /\nls\n",
    );
    assert_eq!(
        out,
        "mkdir folder : true\n\
         cd folder : true\n\
         createFile text.txt TEXT : true\n\
         mv text.txt / : true\n\
         cd / : true\n\
         ls : folder, text.txt\n"
    );
}

#[test]
fn test_banner_unless_quiet() {
    let out = run_session(&[], "exit\n");
    assert!(out.contains("treesh v"));
}

#[test]
fn test_missing_script_fails() {
    let status = Command::new(env!("CARGO_BIN_EXE_treesh"))
        .args(["--quiet", "--script", "/nonexistent/treesh-script"])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(!status.success());
}
