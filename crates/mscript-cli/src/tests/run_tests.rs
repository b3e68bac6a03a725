use std::ffi::OsString;
use std::fs;
use std::process::ExitCode;

use mscript_config::Config;
use rstest::{fixture, rstest};
use serde_json::Value;
use tempfile::TempDir;

use crate::config::ConfigLoader;
use crate::errors::AppError;
use crate::run_with_loader;

const SCRIPT: &str = r#"<msl>
  <read>
    <readSettings>
      <backgroundColor value="{$bg}"/>
      <setDefine format="png" name="bit-depth" value="8"/>
    </readSettings>
  </read>
  <read>
    <readSettings>
      <format value="jpeg"/>
    </readSettings>
  </read>
</msl>"#;

struct StaticConfigLoader;

impl ConfigLoader for StaticConfigLoader {
    fn load(&self, _args: &[OsString]) -> Result<Config, AppError> {
        Ok(Config::default())
    }
}

struct Outcome {
    exit_code: ExitCode,
    stdout: String,
    stderr: String,
}

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn script(&self, contents: &str) -> OsString {
        let path = self.dir.path().join("script.msl");
        fs::write(&path, contents).expect("write script");
        path.into_os_string()
    }
}

#[fixture]
fn workspace() -> Workspace {
    Workspace {
        dir: TempDir::new().expect("temp dir"),
    }
}

fn run_cli(args: &[OsString]) -> Outcome {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let argv = std::iter::once(OsString::from("mscript")).chain(args.iter().cloned());
    let exit_code = run_with_loader(argv, &mut stdout, &mut stderr, false, &StaticConfigLoader);
    Outcome {
        exit_code,
        stdout: String::from_utf8(stdout).expect("stdout utf8"),
        stderr: String::from_utf8(stderr).expect("stderr utf8"),
    }
}

fn args(items: &[&str]) -> Vec<OsString> {
    items.iter().map(OsString::from).collect()
}

#[rstest]
fn settings_emit_json_when_redirected(workspace: Workspace) {
    let mut argv = args(&["settings"]);
    argv.push(workspace.script(SCRIPT));
    argv.extend(args(&["--var", "bg=blue"]));

    let outcome = run_cli(&argv);

    assert_eq!(outcome.exit_code, ExitCode::SUCCESS, "{}", outcome.stderr);
    let value: Value = serde_json::from_str(&outcome.stdout).expect("json output");
    let Some([first, second]) = value.as_array().map(Vec::as_slice) else {
        panic!("expected two sections, got {value}");
    };
    assert_eq!(first.get("backgroundColor"), Some(&Value::from("#0000FFFF")));
    assert_eq!(
        first.pointer("/setDefines/png:bit-depth"),
        Some(&Value::from("8"))
    );
    assert_eq!(second.get("format"), Some(&Value::from("jpeg")));
}

#[rstest]
fn settings_render_human_output_on_request(workspace: Workspace) {
    let mut argv = args(&["settings"]);
    argv.push(workspace.script(SCRIPT));
    argv.extend(args(&["--var", "bg=red", "--output", "human"]));

    let outcome = run_cli(&argv);

    assert_eq!(outcome.exit_code, ExitCode::SUCCESS, "{}", outcome.stderr);
    assert_eq!(
        outcome.stdout,
        "readSettings #1\n  backgroundColor: #FF0000FF\n  setDefines.png:bit-depth: 8\n\
         readSettings #2\n  format: jpeg\n"
    );
}

#[rstest]
fn unknown_directive_fails_with_message(workspace: Workspace) {
    let mut argv = args(&["settings"]);
    argv.push(workspace.script("<readSettings><frobnicate value=\"1\"/></readSettings>"));

    let outcome = run_cli(&argv);

    assert_eq!(outcome.exit_code, ExitCode::FAILURE);
    assert!(outcome.stdout.is_empty());
    assert!(
        outcome
            .stderr
            .contains("unknown directive 'frobnicate' in 'readSettings'"),
        "unexpected stderr: {}",
        outcome.stderr
    );
}

#[rstest]
fn undefined_variable_fails(workspace: Workspace) {
    let mut argv = args(&["settings"]);
    argv.push(workspace.script(SCRIPT));

    let outcome = run_cli(&argv);

    assert_eq!(outcome.exit_code, ExitCode::FAILURE);
    assert!(outcome.stderr.contains("undefined variable 'bg'"));
}

#[rstest]
fn malformed_script_fails(workspace: Workspace) {
    let mut argv = args(&["settings"]);
    argv.push(workspace.script("<readSettings>"));

    let outcome = run_cli(&argv);

    assert_eq!(outcome.exit_code, ExitCode::FAILURE);
    assert!(outcome.stderr.contains("failed to parse script"));
}

#[test]
fn missing_script_fails() {
    let outcome = run_cli(&args(&["settings", "/nonexistent/script.msl"]));

    assert_eq!(outcome.exit_code, ExitCode::FAILURE);
    assert!(outcome.stderr.contains("failed to read script"));
}

#[rstest]
#[case::missing_equals("bg")]
#[case::empty_name("=red")]
fn malformed_variable_is_a_usage_error(#[case] assignment: &str) {
    let outcome = run_cli(&args(&["settings", "script.msl", "--var", assignment]));

    assert_eq!(outcome.exit_code, ExitCode::FAILURE);
    assert!(outcome.stderr.contains("NAME=VALUE"), "{}", outcome.stderr);
}

#[test]
fn directives_lists_sorted_names() {
    let outcome = run_cli(&args(&["directives"]));

    assert_eq!(outcome.exit_code, ExitCode::SUCCESS);
    let names: Vec<&str> = outcome.stdout.lines().collect();
    assert!(names.contains(&"backgroundColor"));
    assert!(names.contains(&"setDefine"));
    assert!(names.windows(2).all(|pair| matches!(pair, [a, b] if a < b)));
}

#[test]
fn help_is_written_to_stdout() {
    let outcome = run_cli(&args(&["--help"]));

    assert_eq!(outcome.exit_code, ExitCode::SUCCESS);
    assert!(outcome.stdout.contains("settings"));
}
