use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

fn bin(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("webgl-testpage").expect("Binary not built");
    cmd.current_dir(dir.path());
    cmd
}

fn workspace() -> TempDir {
    let dir = tempdir().expect("Failed to create a temp directory");
    fs::write(dir.path().join("webgl-canvas.js"), "console.log(1);").unwrap();
    fs::write(dir.path().join("test.template.html"), "<html>{}</html>").unwrap();
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_flag_writes_page() {
        let dir = workspace();
        bin(&dir)
            .arg("--test-render")
            .assert()
            .success()
            .stdout(predicate::str::contains("test.html"));
        assert_eq!(
            fs::read_to_string(dir.path().join("test.html")).unwrap(),
            "<html>console.log(1);</html>"
        );
    }

    #[test]
    fn test_render_alias() {
        let dir = workspace();
        bin(&dir).arg("--tr").assert().success();
        assert!(dir.path().join("test.html").exists());
    }

    #[test]
    fn test_no_flags_is_a_noop() {
        let dir = workspace();
        bin(&dir).assert().success().stdout(predicate::str::is_empty());
        assert!(!dir.path().join("test.html").exists());
    }

    #[test]
    fn test_missing_script_fails_without_output() {
        let dir = workspace();
        fs::remove_file(dir.path().join("webgl-canvas.js")).unwrap();
        bin(&dir)
            .arg("--tr")
            .assert()
            .failure()
            .stderr(predicate::str::contains("webgl-canvas.js"));
        assert!(!dir.path().join("test.html").exists());
    }

    #[test]
    fn test_missing_template_keeps_previous_page() {
        let dir = workspace();
        fs::remove_file(dir.path().join("test.template.html")).unwrap();
        fs::write(dir.path().join("test.html"), "old").unwrap();
        bin(&dir).arg("--test-render").assert().failure();
        assert_eq!(fs::read_to_string(dir.path().join("test.html")).unwrap(), "old");
    }

    #[test]
    fn test_repeated_render_flag() {
        let dir = workspace();
        bin(&dir).args(["--tr", "--test-render"]).assert().success();
        assert!(dir.path().join("test.html").exists());
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        let dir = workspace();
        bin(&dir).arg("--render").assert().code(2);
        assert!(!dir.path().join("test.html").exists());
    }

    #[test]
    fn test_help_lists_aliases() {
        let dir = workspace();
        bin(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--test-render"))
            .stdout(predicate::str::contains("--tr"))
            .stdout(predicate::str::contains("--test-browser"))
            .stdout(predicate::str::contains("--tb"));
    }
}
