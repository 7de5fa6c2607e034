#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;

pub const TEST_KEY: &str = "sk_test_cli";

/// A binary invocation isolated from the caller's Clerk environment.
///
/// Runs inside an empty temp dir so no `.env` file is picked up. Keep the
/// returned `TempDir` alive for the duration of the command.
pub fn isolated(mut cmd: Command) -> (Command, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    cmd.current_dir(dir.path())
        .env_remove("CLERK_SECRET_KEY")
        .env_remove("CLERK_API_URL")
        .env_remove("CLERK_LOG");
    (cmd, dir)
}

/// Like [`isolated`], pointed at a mock server with a test key.
pub fn against(cmd: Command, server: &mockito::ServerGuard) -> (Command, TempDir) {
    let (mut cmd, dir) = isolated(cmd);
    cmd.env("CLERK_SECRET_KEY", TEST_KEY)
        .env("CLERK_API_URL", server.url());
    (cmd, dir)
}
