/*!
 * End-to-end tests for the build-data binary
 *
 * Each test runs in its own project directory with PATH pointing at an
 * empty directory, so no real minifier on the host can interfere.
 */

use std::io::Read;
use std::process::{Command, Output};

use assert_fs::prelude::*;
use assert_fs::TempDir;
use flate2::read::GzDecoder;
use predicates::prelude::*;

fn project(html: &str, css: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    temp.child("web/index.html").write_str(html).unwrap();
    temp.child("web/style.css").write_str(css).unwrap();
    temp.child("empty-path").create_dir_all().unwrap();
    temp
}

fn run(temp: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_build-data"))
        .args(args)
        .current_dir(temp.path())
        .env("PATH", temp.child("empty-path").path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn gunzip(bytes: &[u8]) -> String {
    let mut out = String::new();
    GzDecoder::new(bytes).read_to_string(&mut out).unwrap();
    out
}

#[test]
fn test_default_run_without_minifier() {
    let temp = project("<p>hi</p>", "body{color:red}");

    let out = run(&temp, &[]);

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    temp.child("data/index.html").assert("<p>hi</p>");
    temp.child("data/style.css.gz").assert(predicate::path::is_file());
    let gz = std::fs::read(temp.child("data/style.css.gz").path()).unwrap();
    assert_eq!(gunzip(&gz), "body{color:red}");
    assert!(String::from_utf8_lossy(&out.stdout).contains("Built 2 artifacts"));
}

#[test]
fn test_existing_data_dir_is_kept() {
    let temp = project("<p>hi</p>", "p{}");
    temp.child("data/firmware.bin").write_binary(&[1, 2, 3]).unwrap();

    let out = run(&temp, &[]);

    assert!(out.status.success());
    assert_eq!(
        std::fs::read(temp.child("data/firmware.bin").path()).unwrap(),
        vec![1, 2, 3]
    );
    temp.child("data/index.html").assert("<p>hi</p>");
}

#[test]
fn test_missing_html_fails_fast() {
    let temp = TempDir::new().unwrap();
    temp.child("web/style.css").write_str("p{}").unwrap();
    temp.child("empty-path").create_dir_all().unwrap();

    let out = run(&temp, &[]);

    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Source not found"));
    temp.child("data/style.css.gz").assert(predicate::path::missing());
    temp.child("data/index.html").assert(predicate::path::missing());
}

#[test]
fn test_json_reports() {
    let temp = project("<p>hi</p>", "p{}");

    let out = run(&temp, &["--json"]);

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["kind"], "html");
    assert_eq!(lines[1]["kind"], "css");
    assert_eq!(lines[0]["strategy"], "passthrough");
}

#[test]
fn test_invalid_config_file() {
    let temp = project("<p>hi</p>", "p{}");
    temp.child("build-data.toml")
        .write_str("compression_level = 11\n")
        .unwrap();

    let out = run(&temp, &["--config", "build-data.toml"]);

    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("compression_level"));
    temp.child("data").assert(predicate::path::missing());
}

#[test]
fn test_config_file_redirects_output() {
    let temp = project("<p>hi</p>", "p{}");
    temp.child("build-data.toml")
        .write_str("output_dir = \"out/fs\"\ncss_output = \"app.css.gz\"\n")
        .unwrap();

    let out = run(&temp, &["--config", "build-data.toml"]);

    assert!(out.status.success());
    temp.child("out/fs/index.html").assert("<p>hi</p>");
    temp.child("out/fs/app.css.gz").assert(predicate::path::is_file());
    temp.child("data").assert(predicate::path::missing());
}

#[cfg(unix)]
mod with_minifier {
    use super::*;

    /// Config whose minifier runs `script` through /bin/sh; only shell
    /// builtins are available because PATH is empty
    fn use_script(temp: &TempDir, script: &str) {
        temp.child("minify.sh").write_str(script).unwrap();
        let script_path = temp.child("minify.sh").path().display().to_string();
        temp.child("build-data.toml")
            .write_str(&format!("[minifier]\nargs = [{:?}]\n", script_path))
            .unwrap();
    }

    const JOIN_LINES: &str = "while IFS= read -r line; do printf '%s' \"$line\"; done < \"$1\"\n";

    #[test]
    fn test_minifier_is_used_for_both_assets() {
        let temp = project("<p>\nhi\n</p>\n", "body{\ncolor:red\n}\n");
        use_script(&temp, JOIN_LINES);

        let out = run(&temp, &["--config", "build-data.toml", "--minifier", "/bin/sh"]);

        assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
        temp.child("data/index.html").assert("<p>hi</p>");
        let gz = std::fs::read(temp.child("data/style.css.gz").path()).unwrap();
        assert_eq!(gunzip(&gz), "body{color:red}");
    }

    #[test]
    fn test_no_minify_flag_wins() {
        let temp = project("<p>\nhi\n</p>\n", "p{}");
        use_script(&temp, JOIN_LINES);

        let out = run(
            &temp,
            &[
                "--config",
                "build-data.toml",
                "--minifier",
                "/bin/sh",
                "--no-minify",
            ],
        );

        assert!(out.status.success());
        temp.child("data/index.html").assert("<p>\nhi\n</p>\n");
    }

    #[test]
    fn test_failing_minifier_exit_code() {
        let temp = project("<p>hi</p>", "p{}");
        use_script(&temp, "echo 'cannot minify' >&2\nexit 4\n");

        let out = run(&temp, &["--config", "build-data.toml", "--minifier", "/bin/sh"]);

        assert_eq!(out.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(predicate::str::contains("cannot minify").eval(&stderr));
        temp.child("data/index.html").assert(predicate::path::missing());
    }
}
