//! Configuration precedence: defaults < file < environment < flags.

use std::io::{Cursor, Write};

use holdem_cli::config::{CONFIG_ENV, SEED_ENV, STACK_ENV};
use holdem_cli::run_with_input;
use serial_test::serial;

struct EnvGuard {
    keys: Vec<&'static str>,
}

impl EnvGuard {
    fn set(pairs: &[(&'static str, &str)]) -> Self {
        let mut keys = Vec::new();
        for key in [CONFIG_ENV, SEED_ENV, STACK_ENV] {
            // SAFETY: tests touching the environment run under #[serial]
            unsafe { std::env::remove_var(key) };
        }
        for (key, value) in pairs {
            unsafe { std::env::set_var(key, value) };
            keys.push(*key);
        }
        EnvGuard { keys }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            unsafe { std::env::remove_var(key) };
        }
    }
}

fn run(args: &[&str], input: &str) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let code = run_with_input(args.iter().copied(), &mut stdin, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
#[serial]
fn cfg_reports_file_and_env_sources() {
    let file = config_file("player1 = \"Ann\"\nstarting_stack = 300\nseed = 5\n");
    let path = file.path().to_string_lossy().to_string();
    let _env = EnvGuard::set(&[(CONFIG_ENV, path.as_str()), (SEED_ENV, "8")]);

    let (code, out, _) = run(&["holdem", "cfg"], "");
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["player_names"]["value"][0], "Ann");
    assert_eq!(json["player_names"]["source"], "file");
    assert_eq!(json["starting_stack"]["value"], 300);
    assert_eq!(json["starting_stack"]["source"], "file");
    assert_eq!(json["seed"]["value"], 8);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["blinds"]["source"], "default");
}

#[test]
#[serial]
fn play_flags_override_configuration() {
    let file = config_file("player1 = \"Ann\"\nplayer2 = \"Bob\"\nstarting_stack = 300\n");
    let path = file.path().to_string_lossy().to_string();
    let _env = EnvGuard::set(&[(CONFIG_ENV, path.as_str()), (STACK_ENV, "250")]);

    let (code, out, _) = run(&["holdem", "play", "--seed", "2"], "q\n");
    assert_eq!(code, 0);
    assert!(out.contains("play: Ann vs Bob stack=250 seed=2"));

    let (code, out, _) = run(
        &["holdem", "play", "--seed", "2", "--p2", "Cat", "--stack", "60"],
        "q\n",
    );
    assert_eq!(code, 0);
    assert!(out.contains("play: Ann vs Cat stack=60 seed=2"));
}

#[test]
#[serial]
fn broken_config_file_fails_both_commands() {
    let file = config_file("starting_stack = \"lots\"\n");
    let path = file.path().to_string_lossy().to_string();
    let _env = EnvGuard::set(&[(CONFIG_ENV, path.as_str())]);

    let (code, out, err) = run(&["holdem", "cfg"], "");
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("cannot parse config file"));

    let (code, _, _) = run(&["holdem", "play"], "q\n");
    assert_eq!(code, 2);
}
