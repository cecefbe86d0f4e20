use std::process::{Command, Output};

fn unipoly(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_unipoly"))
        .args(args)
        .output()
        .expect("failed to run unipoly")
}

fn stdout(args: &[&str]) -> String {
    let output = unipoly(args);
    assert!(output.status.success(), "{:?} failed: {:?}", args, output);
    String::from_utf8_lossy(&output.stdout).trim_end().to_owned()
}

#[test]
fn show() {
    assert_eq!(stdout(&["show", "1.5,2,2"]), "1.5x^2 + 2x + 2");
    assert_eq!(stdout(&["-s", ",", "show", "-200,-1,0.01"]), "-200x^2 - 1x + 0,01");
    assert_eq!(stdout(&["show", "0,0,0"]), "0");
    assert_eq!(
        stdout(&["show", "--coefficients", "0,0.5,-1"]),
        "0.5x - 1\n[0.5; -1]"
    );
}

#[test]
fn arithmetic() {
    assert_eq!(stdout(&["add", "1,0,2,1", "4,-2,5"]), "x^3 + 4x^2 + 6");
    assert_eq!(stdout(&["sub", "1,2", "1,2"]), "0");
    assert_eq!(stdout(&["mul", "1,-3", "1,1,3"]), "x^3 - 2x^2 - 9");
    assert_eq!(stdout(&["neg", "1,-2"]), "-1x + 2");
    assert_eq!(stdout(&["scale", "1.5,2,2", "2"]), "3x^2 + 4x + 4");
}

#[test]
fn base() {
    assert_eq!(stdout(&["base", "1AeF101", "16"]), "28242177");
    assert_eq!(stdout(&["base", "10011", "2"]), "19");
}

#[test]
fn errors_exit_with_failure() {
    assert!(!unipoly(&["base", "10102", "2"]).status.success());
    assert!(!unipoly(&["base", "a", "1"]).status.success());
    assert!(!unipoly(&["show", "1,x"]).status.success());
    assert!(!unipoly(&["-s", "ab", "show", "1"]).status.success());
}
