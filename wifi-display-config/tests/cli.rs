use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use tempfile::TempDir;

fn run(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wifi-display-config"))
        .args(args)
        .current_dir(cwd)
        .env_remove("WIFI_DISPLAY_ROOT")
        .output()
        .unwrap()
}

fn project_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("platformio.ini"), "[env]\n").unwrap();
    dir
}

#[test]
fn fails_outside_project() {
    let dir = tempfile::tempdir().unwrap();
    let header = dir.path().join("include").join("configs.h");
    fs::create_dir_all(header.parent().unwrap()).unwrap();
    fs::write(&header, "previous").unwrap();

    let output = run(dir.path(), &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("platformio.ini"));
    assert_eq!(fs::read_to_string(&header).unwrap(), "previous");
}

#[test]
fn generates_from_subdirectory() {
    let dir = project_dir();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(dir.path().join(".env.local"), "BTN_SELECT=99\n").unwrap();

    let output = run(&src, &[]);

    assert!(output.status.success());
    let header = fs::read_to_string(dir.path().join("include").join("configs.h")).unwrap();
    assert!(header.lines().any(|line| line.starts_with("#define BTN_SELECT 99 ")));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OLED_SDA_PIN: 21"));
    assert!(!stdout.contains("Tip:"));
}

#[test]
fn tip_without_env_local() {
    let dir = project_dir();

    let output = run(dir.path(), &[]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Tip: Copy .env.example to .env.local"));
}

#[test]
fn no_tip_with_custom_env_file() {
    let dir = project_dir();
    fs::write(dir.path().join(".env.local"), "BTN_SELECT=1\n").unwrap();
    fs::write(dir.path().join("custom.env"), "BTN_SELECT=2\n").unwrap();

    let output = run(dir.path(), &["--env-file", "custom.env"]);

    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Tip:"));
    let header = fs::read_to_string(dir.path().join("include").join("configs.h")).unwrap();
    assert!(header.lines().any(|line| line.starts_with("#define BTN_SELECT 2 ")));
}

#[test]
fn stdout_writes_nothing() {
    let dir = project_dir();
    let root = dir.path().to_str().unwrap();

    let output = run(dir.path(), &["--root", root, "--stdout"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("#ifndef CONFIG_H\n"));
    assert!(stdout.ends_with("#endif // CONFIG_H\n"));
    assert!(!dir.path().join("include").exists());
}
