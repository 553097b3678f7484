use std::{env, fs};

#[test]
fn generates_into_package_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env.local"), "BTN_SELECT=3\n").unwrap();
    env::set_var("CARGO_MANIFEST_DIR", dir.path());

    let generated = wifi_display_build::build_script().unwrap();

    assert_eq!(generated.env_file, dir.path().join(".env.local"));
    let header = fs::read_to_string(dir.path().join("include").join("configs.h")).unwrap();
    assert_eq!(header, generated.header);
    assert!(header.lines().any(|line| line.starts_with("#define BTN_SELECT 3 ")));
}
