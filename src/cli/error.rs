//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Rendered clap parse error, usage line included
    #[error("{0}")]
    Usage(String),
}

impl From<clap::Error> for CliError {
    fn from(e: clap::Error) -> Self {
        CliError::Usage(e.render().to_string())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::StartNodeNotFound { .. } => crate::exitcode::DATAERR,
                ApplicationError::Domain(d) => match d {
                    DomainError::StartNodeNotFound(_) | DomainError::ValueNotFound(_) => {
                        crate::exitcode::DATAERR
                    }
                    DomainError::ParentNotFound(_) | DomainError::SlotOccupied { .. } => {
                        crate::exitcode::SOFTWARE
                    }
                },
            },
        }
    }
}
