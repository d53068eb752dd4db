use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;
use yongyong_core::{Intent, Persona};

struct CliTestEnv {
    _temp_dir: TempDir,
    base: PathBuf,
    home: PathBuf,
    xdg_config: PathBuf,
    xdg_state: PathBuf,
}

impl CliTestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let home = base.join("home");
        let xdg_config = base.join("xdg-config");
        let xdg_state = base.join("xdg-state");

        fs::create_dir_all(&home).expect("failed to create HOME");
        fs::create_dir_all(&xdg_config).expect("failed to create XDG_CONFIG_HOME");
        fs::create_dir_all(&xdg_state).expect("failed to create XDG_STATE_HOME");

        Self {
            _temp_dir: temp_dir,
            base,
            home,
            xdg_config,
            xdg_state,
        }
    }

    fn write_config(&self, toml: &str) {
        let dir = self.xdg_config.join("yongyong");
        fs::create_dir_all(&dir).expect("failed to create config dir");
        fs::write(dir.join("config.toml"), toml).expect("failed to write config");
    }

    fn write_catalog(&self, json: &str) -> PathBuf {
        let path = self.base.join("catalog.json");
        fs::write(&path, json).expect("failed to write catalog");
        path
    }
}

fn run_bin(env: &CliTestEnv, args: &[&str]) -> Output {
    let bin_path = PathBuf::from(assert_cmd::cargo::cargo_bin!("yongyong"));

    Command::new(bin_path)
        .args(args)
        .env("HOME", &env.home)
        .env("XDG_CONFIG_HOME", &env.xdg_config)
        .env("XDG_STATE_HOME", &env.xdg_state)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to execute yongyong: {e}"))
}

fn assert_success(args: &[&str], output: &Output) {
    if output.status.success() {
        return;
    }

    let rendered_args = args
        .iter()
        .map(|arg| OsString::from(arg).to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    panic!(
        "yongyong {rendered_args} failed\nstatus: {}\nstdout:\n{}\nstderr:\n{}",
        output.status, stdout, stderr
    );
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

fn first_field(line: &str) -> &str {
    line.split('\t').next().unwrap_or_default()
}

// ============================================
// list
// ============================================

#[test]
fn list_defaults_to_recommended() {
    let env = CliTestEnv::new();
    let args = ["list"];
    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let ids: Vec<_> = stdout_lines(&output)
        .iter()
        .map(|l| first_field(l).to_string())
        .collect();
    assert_eq!(ids, ["a1", "a2", "a3", "a4", "a5"]);
}

#[test]
fn list_trending_is_sorted_by_likes() {
    let env = CliTestEnv::new();
    let args = ["list", "--tab", "trending"];
    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 8);
    assert!(
        lines[0].starts_with("a2\tAI文案生成器"),
        "unexpected first line: {}",
        lines[0]
    );
}

#[test]
fn list_unknown_tab_shows_whole_catalog() {
    let env = CliTestEnv::new();
    let args = ["list", "--tab", "bogus"];
    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let ids: Vec<_> = stdout_lines(&output)
        .iter()
        .map(|l| first_field(l).to_string())
        .collect();
    assert_eq!(ids, ["a1", "a2", "a3", "a4", "a5", "a6", "a7", "a8"]);
}

#[test]
fn list_uses_catalog_override() {
    let env = CliTestEnv::new();
    let path = env.write_catalog(
        r#"{
            "users": [{"id": "u1", "name": "小周", "username": "zhou", "avatar": ""}],
            "apps": [{
                "id": "x1",
                "title": "倒计时",
                "description": "简单的倒计时",
                "author_id": "u1",
                "likes": 3,
                "created_at": "2026-02-01T00:00:00Z"
            }]
        }"#,
    );
    let path = path.to_string_lossy().into_owned();
    let args = ["list", "--tab", "all", "--catalog", path.as_str()];
    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("x1\t倒计时\t小周"));
}

#[test]
fn broken_catalog_fails() {
    let env = CliTestEnv::new();
    let path = env.write_catalog(r#"{"users": [], "apps": []}"#);
    let path = path.to_string_lossy().into_owned();
    let output = run_bin(&env, &["--catalog", path.as_str(), "list"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load catalog"), "stderr:\n{stderr}");
}

#[test]
fn logs_go_to_dated_file_in_state_dir() {
    let env = CliTestEnv::new();
    let args = ["list"];
    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let log_dir = env.xdg_state.join("yongyong");
    let names: Vec<String> = fs::read_dir(&log_dir)
        .expect("log dir should exist")
        .map(|entry| {
            let entry = entry.expect("readable entry");
            entry.file_name().to_string_lossy().into_owned()
        })
        .collect();

    assert_eq!(names.len(), 1, "log files: {names:?}");
    assert!(
        names[0].starts_with("yongyong.") && names[0].ends_with(".log"),
        "unexpected log file: {}",
        names[0]
    );
    assert_ne!(names[0], "yongyong.log");
    let contents = fs::read_to_string(log_dir.join(&names[0])).expect("log should be readable");
    assert!(contents.contains("Listing catalog"), "log:\n{contents}");
}

// ============================================
// ask
// ============================================

#[test]
fn ask_prefers_portfolio_rule() {
    let env = CliTestEnv::new();
    let args = ["ask", "--creator", "2", "说说你的项目和技术栈"];
    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        Persona::Helper.reply(Intent::Portfolio, "王芳")
    );
}

#[test]
fn ask_joins_words_and_honors_persona_flag() {
    let env = CliTestEnv::new();
    let args = [
        "ask",
        "--creator",
        "3",
        "--persona",
        "gatekeeper",
        "怎么",
        "联系你",
    ];
    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        Persona::Gatekeeper.reply(Intent::Contact, "陈伟")
    );
}

#[test]
fn ask_uses_configured_persona() {
    let env = CliTestEnv::new();
    env.write_config("[agent]\npersona = \"gatekeeper\"\n");
    let args = ["ask", "--creator", "1", "hello"];
    let output = run_bin(&env, &args);
    assert_success(&args, &output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        Persona::Gatekeeper.reply(Intent::Greeting, "李明")
    );
}

#[test]
fn ask_unknown_creator_fails() {
    let env = CliTestEnv::new();
    let output = run_bin(&env, &["ask", "--creator", "999", "你好"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown creator: 999"), "stderr:\n{stderr}");
}

#[test]
fn ask_blank_utterance_fails() {
    let env = CliTestEnv::new();
    let output = run_bin(&env, &["ask", "--creator", "2", "   "]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_config_is_reported() {
    let env = CliTestEnv::new();
    env.write_config("[agent]\nreply_delay_min_ms = 3000\nreply_delay_max_ms = 1000\n");
    let output = run_bin(&env, &["list"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to load configuration"),
        "stderr:\n{stderr}"
    );
}
