use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn make_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is before UNIX_EPOCH")
        .as_nanos();
    let pid = std::process::id();
    let dir = std::env::temp_dir().join(format!("qub-integ-{prefix}-{pid}-{nanos}"));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

fn qub() -> Command {
    Command::new(env!("CARGO_BIN_EXE_qub"))
}

#[test]
fn no_action_prints_the_action_listing() {
    let out = qub().output().expect("failed to run qub");
    assert!(
        out.status.success(),
        "qub failed:\nstatus: {}\nstderr:\n{}",
        out.status,
        String::from_utf8_lossy(&out.stderr),
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("Actions:")
            && stdout.contains("convert")
            && stdout.contains("echo")
            && stdout.contains("args"),
        "unexpected listing output:\n{stdout}"
    );
}

#[test]
fn help_flag_prints_the_action_listing() {
    let out = qub()
        .arg("--help")
        .output()
        .expect("failed to run qub --help");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("qub - "), "unexpected help output:\n{stdout}");
    assert!(stdout.contains("Actions:"), "unexpected help output:\n{stdout}");
}

#[test]
fn convert_writes_the_converted_measure() {
    let out = qub()
        .args(["convert", "2km", "--to=m"])
        .output()
        .expect("failed to run qub convert");
    assert!(
        out.status.success(),
        "qub convert failed:\nstderr:\n{}",
        String::from_utf8_lossy(&out.stderr),
    );
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "2 Kilometers = 2000 Meters\n"
    );
}

#[test]
fn convert_handles_volumes_too() {
    let out = qub()
        .args(["convert", "500ml", "--to=l"])
        .output()
        .expect("failed to run qub convert");
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "500 Milliliters = 0.5 Liters\n"
    );
}

#[test]
fn convert_json_output_is_byte_exact() {
    let out = qub()
        .args(["convert", "2km", "--to=m", "--json"])
        .output()
        .expect("failed to run qub convert --json");
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "{\"from\":\"2 Kilometers\",\"value\":2000,\"unit\":\"Meters\"}\n"
    );
}

#[test]
fn convert_rejects_unknown_units_recoverably() {
    let out = qub()
        .args(["convert", "2km", "--to=parsecs"])
        .output()
        .expect("failed to run qub convert");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("unknown unit"),
        "unexpected stderr:\n{stderr}"
    );
}

#[test]
fn echo_duplicates_output_into_the_log_file() {
    let dir = make_temp_dir("echo-log");
    let log_path = dir.join("echo.log");

    let out = qub()
        .arg("echo")
        .arg("one")
        .arg("two")
        .arg(format!("--log={}", log_path.display()))
        .output()
        .expect("failed to run qub echo");
    assert!(
        out.status.success(),
        "qub echo failed:\nstderr:\n{}",
        String::from_utf8_lossy(&out.stderr),
    );

    assert_eq!(String::from_utf8_lossy(&out.stdout), "one\ntwo\n");
    let logged = fs::read_to_string(&log_path).expect("failed to read log file");
    assert_eq!(logged, "one\ntwo\n");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn args_action_renders_the_parsed_store() {
    let out = qub()
        .args(["args", "--name=value", "--flag", "anon"])
        .output()
        .expect("failed to run qub args");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout,
        "[--name=value,--flag,anon]\n\
         {\"named\":[{\"name\":\"name\",\"value\":\"value\"},{\"name\":\"flag\",\"value\":null}],\"anonymous\":[\"anon\"]}\n"
    );
}

#[test]
fn unknown_action_fails_with_the_listing_on_stderr() {
    let out = qub()
        .arg("frobnicate")
        .output()
        .expect("failed to run qub");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("Unknown action: frobnicate") && stderr.contains("Actions:"),
        "unexpected stderr:\n{stderr}"
    );
}
