//! Error types and process exit codes.

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `aadarsh-site` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Structural check failure
    pub const CHECK_ERROR: i32 = 2;

    /// I/O error (directory not writable, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Server error (invalid bind address, bind failed)
    pub const SERVER_ERROR: i32 = 4;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `aadarsh-site` operations.
///
/// Aggregates the domain-specific errors and provides a unified exit-code
/// mapping for `main`.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Structural check failure
    #[error(transparent)]
    Check(#[from] CheckError),

    /// HTTP server error
    #[error(transparent)]
    Server(#[from] ServerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiteError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Check(_) => ExitCode::CHECK_ERROR,
            Self::Server(_) => ExitCode::SERVER_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Check Errors
// ============================================================================

/// Failure summary for the `check` command.
#[derive(Debug, Error)]
pub enum CheckError {
    /// One or more structural checks did not hold.
    #[error("check failed: {errors} error(s), {warnings} warning(s)")]
    Failed {
        /// Number of error-severity issues
        errors: usize,
        /// Number of warning-severity issues
        warnings: usize,
    },
}

// ============================================================================
// Server Errors
// ============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The bind address could not be parsed.
    #[error("invalid bind address \"{input}\": {message}")]
    InvalidBindAddr {
        /// The address string as given on the command line
        input: String,
        /// Parser error message
        message: String,
    },

    /// The TCP listener could not bind.
    #[error("bind failed on {addr}: {source}")]
    Bind {
        /// The resolved address that was attempted
        addr: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

// ============================================================================
// Check Issues
// ============================================================================

/// A single issue found by the structural checks.
#[derive(Debug, Clone, Serialize)]
pub struct CheckIssue {
    /// Where the issue was found (e.g. `similar[3]`, `document`)
    pub location: String,
    /// Description of the issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for CheckIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.location)
    }
}

/// Severity level for check issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A property of the page does not hold
    Error,
    /// Suspicious but not a property violation
    Warning,
}

/// Result type alias for `aadarsh-site` operations.
pub type Result<T> = std::result::Result<T, SiteError>;

// ============================================================================
// Tests
// ============================================================================
