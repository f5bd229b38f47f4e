use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;
use wiremock::MockServer;

/// Identity token written by [`TestEnv::login`].
pub const ID_TOKEN: &str = "cli-id-token";

/// An isolated session file plus the mock service URL.
pub struct TestEnv {
    _dir: TempDir,
    pub session_file: PathBuf,
    pub api_url: String,
}

impl TestEnv {
    pub fn new(server: &MockServer) -> Self {
        let dir = TempDir::new().unwrap();
        let session_file = dir.path().join("session.json");
        Self {
            _dir: dir,
            session_file,
            api_url: server.uri(),
        }
    }

    /// Run the CLI binary with arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_fragments"));
        cmd.args(args);
        cmd.env("API_URL", &self.api_url);
        cmd.env("FRAGMENTS_SESSION_FILE", &self.session_file);
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("FRAGMENTS_ID_TOKEN");
        cmd.env_remove("FRAGMENTS_ACCESS_TOKEN");
        cmd.output().expect("Failed to execute CLI")
    }

    /// Run the CLI and expect success.
    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run the CLI and expect failure.
    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if output.status.success() {
            panic!("CLI command should have failed: {:?}", args);
        }
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Store a session for `alice`.
    pub fn login(&self) {
        self.run_success(&[
            "login",
            "--username",
            "alice",
            "--id-token",
            ID_TOKEN,
            "--access-token",
            "cli-access-token",
        ]);
    }
}

pub fn fragment_json(id: &str, media_type: &str, size: u64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "ownerId": "owner-hash",
        "created": "2024-03-01T10:00:00.000Z",
        "updated": "2024-03-01T10:00:00.000Z",
        "type": media_type,
        "size": size
    })
}
