use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const CARDROOM_VARS: &[&str] = &[
    "CARDROOM_CONFIG",
    "CARDROOM_BASE_URL",
    "CARDROOM_STATE_DIR",
    "CARDROOM_ALGORITHM",
    "CARDROOM_SEED_LENGTH",
    "CARDROOM_SHARE_COMMAND",
    "CARDROOM_LOG_LEVEL",
    "CARDROOM_LOG",
];

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug)]
struct TempEnvVar {
    key: String,
    previous: Option<String>,
}

impl TempEnvVar {
    fn set(key: &str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe {
            std::env::set_var(key, value);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }

    fn unset(key: &str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe {
            std::env::remove_var(key);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for TempEnvVar {
    fn drop(&mut self) {
        unsafe {
            match &self.previous {
                Some(prev) => std::env::set_var(&self.key, prev),
                None => std::env::remove_var(&self.key),
            }
        }
    }
}

/// One device: its own state directory and environment. Tests using a
/// sandbox must be `#[serial]` since the environment is process-wide.
#[derive(Debug)]
pub struct Sandbox {
    // restored in reverse order on drop
    env: Vec<TempEnvVar>,
    dir: TempDir,
}

#[allow(dead_code)]
impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut env: Vec<TempEnvVar> = CARDROOM_VARS.iter().map(|k| TempEnvVar::unset(k)).collect();
        env.push(TempEnvVar::set(
            "CARDROOM_STATE_DIR",
            dir.path().join("state").to_str().expect("utf-8 temp path"),
        ));
        Self { env, dir }
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push(TempEnvVar::set(key, value));
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn state_file(&self) -> PathBuf {
        self.dir.path().join("state").join("game.json")
    }

    /// Switches to another device's state directory.
    pub fn use_state_dir(&mut self, name: &str) {
        let dir = self.dir.path().join(name);
        self.env.push(TempEnvVar::set(
            "CARDROOM_STATE_DIR",
            dir.to_str().expect("utf-8 temp path"),
        ));
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let argv: Vec<String> = std::iter::once("cardroom".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        let exit_code = cardroom_cli::run(argv, &mut out, &mut err);
        CliResult {
            exit_code,
            stdout: String::from_utf8_lossy(&out).to_string(),
            stderr: String::from_utf8_lossy(&err).to_string(),
        }
    }

    /// Runs and asserts success, returning stdout.
    pub fn ok(&self, args: &[&str]) -> String {
        let res = self.run(args);
        assert_eq!(
            res.exit_code, 0,
            "`cardroom {}` failed: {}",
            args.join(" "),
            res.stderr
        );
        res.stdout
    }
}

impl Drop for Sandbox {
    fn drop(&mut self) {
        while let Some(var) = self.env.pop() {
            drop(var);
        }
    }
}
