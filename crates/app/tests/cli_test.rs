//! End-to-end tests for the `varfilter` binary.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

struct Workspace {
    global: TempDir,
    project: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            global: TempDir::new().expect("Failed to create global dir"),
            project: TempDir::new().expect("Failed to create project dir"),
        }
    }

    fn write_global(&self, name: &str, contents: &str) {
        fs::write(self.global.path().join(name), contents).unwrap();
    }

    fn write_project(&self, name: &str, contents: &str) {
        let dir = self.project.path().join(".varfilter");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), contents).unwrap();
    }

    fn command(&self, subcommand: &str) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_varfilter"));
        cmd.arg(subcommand)
            .arg("--global-dir")
            .arg(self.global.path())
            .arg("--project-dir")
            .arg(self.project.path())
            .env_remove("RUST_LOG")
            .env_remove("VARFILTER_MODE")
            .env_remove("VARFILTER_ARCH");
        cmd
    }

    fn expand(&self, args: &[&str]) -> Output {
        self.command("expand").args(args).output().unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_expand_define_and_keep_unresolved() {
    let ws = Workspace::new();
    let output = ws.expand(&["-D", "mode=release", "build/${mode}/${nope}"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "build/release/${nope}\n");
}

#[test]
fn test_project_config_overrides_global() {
    let ws = Workspace::new();
    ws.write_global("config.json", r#"{"mode": "release", "arch": "x86_64"}"#);
    ws.write_project("config.toml", "mode = \"debug\"\n");

    let output = ws.expand(&["${mode}-${arch}"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "debug-x86_64\n");
}

#[test]
fn test_extra_config_file() {
    let ws = Workspace::new();
    ws.write_global("config.json", r#"{"mode": "release"}"#);
    let extra = ws.project.path().join("ci.yaml");
    fs::write(&extra, "mode: ci\njobs: 16\n").unwrap();

    let output = ws.expand(&["--config", extra.to_str().unwrap(), "${mode} -j${jobs}"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "ci -j16\n");
}

#[test]
fn test_unresolved_empty_and_escape() {
    let ws = Workspace::new();
    let output = ws.expand(&["--unresolved", "empty", "[${nope}] $${mode}"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "[] ${mode}\n");
}

#[test]
fn test_strict_fails_on_unresolved() {
    let ws = Workspace::new();
    let output = ws.expand(&["--strict", "${first}", "${second} ${first}"]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "${first}\n${second} ${first}\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unresolved variables: first, second"), "{stderr}");
}

#[test]
fn test_package_manifest_values() {
    let ws = Workspace::new();
    let manifest = ws.project.path().join("zlib.json");
    fs::write(
        &manifest,
        r#"{"name": "zlib", "version": "1.3.1", "buildir": "out/zlib"}"#,
    )
    .unwrap();

    let output = ws.expand(&[
        "--package",
        manifest.to_str().unwrap(),
        "${buildir}/zlib-${version}",
    ]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "out/zlib/zlib-1.3.1\n");
}

#[test]
fn test_builtin_directories() {
    let ws = Workspace::new();
    let output = ws.expand(&["${projectdir}", "${configdir}", "${globaldir}"]);

    assert!(output.status.success());
    let project = ws.project.path();
    let expected = format!(
        "{}\n{}\n{}\n",
        project.display(),
        project.join(".varfilter").display(),
        ws.global.path().display()
    );
    assert_eq!(stdout(&output), expected);
}

#[test]
fn test_expand_lines_from_stdin() {
    let ws = Workspace::new();
    let mut child = ws
        .command("expand")
        .args(["-D", "mode=release", "--stdin"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"one ${mode}\ntwo\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "one release\ntwo\n");
}

#[test]
fn test_vars_lists_builtins() {
    let ws = Workspace::new();
    let output = ws.command("vars").output().unwrap();

    assert!(output.status.success());
    let text = stdout(&output);
    let names: Vec<&str> = text
        .lines()
        .map(|line| line.split('\t').next().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "host",
            "tmpdir",
            "curdir",
            "scriptdir",
            "programdir",
            "globaldir",
            "configdir",
            "projectdir"
        ]
    );
    let projectdir = format!("projectdir\t{}", ws.project.path().display());
    assert!(text.lines().any(|line| line == projectdir));
}

#[test]
fn test_malformed_config_is_reported() {
    let ws = Workspace::new();
    ws.write_global("config.json", "{ not json");

    let output = ws.expand(&["${mode}"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to load configuration"), "{stderr}");
}


#[test]
fn test_environment_overrides_files_and_define_overrides_environment() {
    let ws = Workspace::new();
    ws.write_global("config.toml", "mode = \"global\"\narch = \"x86_64\"\n");
    ws.write_project("config.toml", "mode = \"file\"\n");
    let extra = ws.project.path().join("ci.toml");
    fs::write(&extra, "mode = \"extra\"\n").unwrap();

    let output = ws
        .command("expand")
        .env("VARFILTER_MODE", "env")
        .args(["--config", extra.to_str().unwrap(), "${mode}-${arch}"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "env-x86_64\n");

    let output = ws
        .command("expand")
        .env("VARFILTER_MODE", "env")
        .args(["-D", "mode=def", "${mode}"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "def\n");
}

#[test]
fn test_script_and_program_dir_flags() {
    let ws = Workspace::new();
    let scripts = ws.project.path().join("scripts");
    let program = ws.global.path().join("bin");

    let output = ws.expand(&[
        "--script-dir",
        scripts.to_str().unwrap(),
        "--program-dir",
        program.to_str().unwrap(),
        "${scriptdir}|${programdir}",
    ]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("{}|{}\n", scripts.display(), program.display())
    );
}
