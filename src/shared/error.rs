use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The run completed, whether or not notifications were sent
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (fixture error, unknown rule, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the notification pipeline.
#[derive(Debug, Error)]
pub enum NotifierError {
    /// Change notifications cannot be built without a rule name
    #[error("Rule not found: {rule_key}\n\n💡 Hint: The rule repository must know every rule referenced by an issue")]
    RuleNotFound { rule_key: String },

    #[error("Analysis fixture not found: {path}\n\n💡 Hint: {suggestion}")]
    FixtureNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse analysis fixture: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the fixture is valid JSON")]
    FixtureParseError { path: PathBuf, details: String },

    #[error("Invalid fixture path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a regular JSON file")]
    InvalidFixturePath { path: PathBuf, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}
