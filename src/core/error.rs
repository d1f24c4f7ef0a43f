use crate::auth::token::TokenRequestError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which variable set a lookup ran against, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableSetName {
    Environment,
    Globals,
}

impl fmt::Display for VariableSetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableSetName::Environment => write!(f, "environment"),
            VariableSetName::Globals => write!(f, "globals"),
        }
    }
}

#[derive(Debug)]
pub enum PmTokenError {
    Read(PathBuf, io::Error),
    Parse(PathBuf, serde_json::Error),
    Shape(PathBuf),
    MissingVariable(VariableSetName, String),
    TokenRequest(TokenRequestError),
    Write(PathBuf, io::Error),
}

impl fmt::Display for PmTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PmTokenError::Read(path, err) => {
                write!(f, "Failed to read {}: {err}", path.display())
            }
            PmTokenError::Parse(path, err) => {
                write!(f, "Invalid JSON in {}: {err}", path.display())
            }
            PmTokenError::Shape(path) => {
                write!(f, "Missing or invalid \"values\" array in {}", path.display())
            }
            PmTokenError::MissingVariable(set, key) => {
                write!(f, "Variable '{key}' not found in the {set} variable set")
            }
            PmTokenError::TokenRequest(err) => write!(f, "{err}"),
            PmTokenError::Write(path, err) => {
                write!(f, "Failed to write {}: {err}", path.display())
            }
        }
    }
}

impl std::error::Error for PmTokenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PmTokenError::Read(_, err) => Some(err),
            PmTokenError::Parse(_, err) => Some(err),
            PmTokenError::TokenRequest(err) => Some(err),
            PmTokenError::Write(_, err) => Some(err),
            _ => None,
        }
    }
}

impl From<TokenRequestError> for PmTokenError {
    fn from(err: TokenRequestError) -> Self {
        PmTokenError::TokenRequest(err)
    }
}
