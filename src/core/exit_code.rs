use crate::core::error::PmTokenError;

/// Exit codes for the pmtoken CLI
/// Following standard Unix/POSIX conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General/unspecified error
    GeneralError = 1,
    /// Variable-set file is not valid JSON or has an invalid shape
    ParseError = 2,
    /// A required variable is missing from a set
    ConfigError = 3,
    /// File could not be read or written
    FileError = 4,
    /// Token endpoint call failed
    TokenError = 5,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        if let Some(err) = error.downcast_ref::<PmTokenError>() {
            match err {
                PmTokenError::Read(_, _) => ExitCode::FileError,
                PmTokenError::Parse(_, _) => ExitCode::ParseError,
                PmTokenError::Shape(_) => ExitCode::ParseError,
                PmTokenError::MissingVariable(_, _) => ExitCode::ConfigError,
                PmTokenError::TokenRequest(_) => ExitCode::TokenError,
                PmTokenError::Write(_, _) => ExitCode::FileError,
            }
        } else {
            ExitCode::GeneralError
        }
    }
}
