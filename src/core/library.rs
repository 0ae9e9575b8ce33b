use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::PoisonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    // Raised by lend when no copy with the isbn is free. It covers both an
    // unknown isbn and an isbn whose copies are all lent.
    NotAvailable {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_available(message: &str) -> LibraryError {
        LibraryError::NotAvailable { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::NotAvailable { message } => { message }
            LibraryError::Validation { message, .. } => { message }
            LibraryError::Serialization { message } => { message }
            LibraryError::Runtime { message, .. } => { message }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl<T> From<PoisonError<T>> for LibraryError {
    fn from(err: PoisonError<T>) -> Self {
        LibraryError::runtime(
            format!("catalog lock poisoned {}", err).as_str(), None)
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, reason_code: Some(code) } |
            LibraryError::Runtime { message, reason_code: Some(code) } => {
                write!(f, "{} ({})", message, code)
            }
            _ => {
                write!(f, "{}", self.message())
            }
        }
    }
}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum ItemKind {
    Physical,
    Digital,
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ItemKind::Physical => write!(f, "Physical"),
            ItemKind::Digital => write!(f, "Digital"),
        }
    }
}
