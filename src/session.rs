//! Local server session bookkeeping.
//!
//! These helpers cover the pure parts of launching a local `EDB_RPC_Server`
//! process: locating the executable, parsing the readiness line it prints,
//! and classifying its exit codes. Process spawning itself is left to the
//! embedding application.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable pointing at the server installation root.
pub const SERVER_ROOT_ENV_VAR: &str = "EDBGEO_SERVER_ROOT";

/// File name of the RPC server executable, without platform suffix.
pub const SERVER_EXECUTABLE: &str = "EDB_RPC_Server";

/// Line prefix the server prints once it accepts connections.
const READY_PREFIX: &str = "Server listening on 127.0.0.1:";

/// Errors raised while managing a local server session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no active session")]
    NoActiveSession,

    #[error("a session is already active; disconnect it first")]
    AlreadyActive,

    #[error("server executable not found at {}", .0.display())]
    ExecutableNotFound(PathBuf),

    #[error("server startup failed: {0}")]
    StartupFailed(StartupFailure),

    #[error("timed out waiting for the server readiness message")]
    StartupTimeout,
}

/// Why a freshly launched server exited instead of serving.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartupFailure {
    #[error("Failed to initialize EDB")]
    Internal,

    #[error("No valid license detected")]
    License,

    #[error("server exited with code {0}")]
    Exit(i32),
}

/// Maps a server exit code to its failure cause.
#[must_use]
pub fn classify_exit_code(code: i32) -> StartupFailure {
    match code {
        -1 => StartupFailure::Internal,
        -2 => StartupFailure::License,
        other => StartupFailure::Exit(other),
    }
}

/// Path of the server executable under an installation root.
#[must_use]
pub fn server_executable(install_dir: &Path) -> PathBuf {
    install_dir.join(SERVER_EXECUTABLE)
}

/// Installation root from [`SERVER_ROOT_ENV_VAR`], when set and non-empty.
#[must_use]
pub fn server_root_from_env() -> Option<PathBuf> {
    std::env::var_os(SERVER_ROOT_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Extracts the listening port from a server stdout line.
///
/// Returns `None` for any line that is not the readiness message.
#[must_use]
pub fn parse_ready_line(line: &str) -> Option<u16> {
    line.trim().strip_prefix(READY_PREFIX)?.parse().ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_classify_by_cause() {
        assert_eq!(classify_exit_code(-1), StartupFailure::Internal);
        assert_eq!(classify_exit_code(-2), StartupFailure::License);
        assert_eq!(classify_exit_code(3), StartupFailure::Exit(3));
    }

    #[test]
    fn failure_messages_name_the_cause() {
        assert_eq!(
            classify_exit_code(-1).to_string(),
            "Failed to initialize EDB"
        );
        assert_eq!(
            classify_exit_code(-2).to_string(),
            "No valid license detected"
        );
    }

    #[test]
    fn ready_line_yields_the_port() {
        assert_eq!(
            parse_ready_line("Server listening on 127.0.0.1:50051\n"),
            Some(50051)
        );
        assert_eq!(parse_ready_line("starting up..."), None);
        assert_eq!(parse_ready_line("Server listening on 127.0.0.1:zzz"), None);
    }

    #[test]
    fn executable_path_joins_the_root() {
        let p = server_executable(Path::new("/opt/edb"));
        assert!(p.ends_with("EDB_RPC_Server"));
    }
}
