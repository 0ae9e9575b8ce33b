use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    NotAvailable {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::NotAvailable { message } => {
                CommandError::NotAvailable { message }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            // a poisoned catalog lock stays poisoned
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: false }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::NotAvailable { message } => {
                write!(f, "{}", message)
            }
            CommandError::Runtime { message, .. } => {
                write!(f, "{}", message)
            }
            CommandError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CommandError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_command_error() {
        let _ = CommandError::NotAvailable { message: "test".to_string() };
        let _ = CommandError::Runtime { message: "test".to_string(), reason_code: None, retryable: false };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Validation { message: "test".to_string(), reason_code: None };
    }

    #[tokio::test]
    async fn test_should_convert_library_error() {
        assert_eq!(CommandError::NotAvailable { message: "gone".to_string() },
                   CommandError::from(LibraryError::not_available("gone")));
        assert_eq!(CommandError::Validation { message: "bad".to_string(), reason_code: None },
                   CommandError::from(LibraryError::validation("bad", None)));
        assert_eq!(CommandError::Serialization { message: "json".to_string() },
                   CommandError::from(LibraryError::serialization("json")));
        assert_eq!(CommandError::Runtime { message: "lock".to_string(), reason_code: None, retryable: false },
                   CommandError::from(LibraryError::runtime("lock", None)));
    }

    #[tokio::test]
    async fn test_should_display_message_only() {
        let err = CommandError::from(LibraryError::validation("Please enter ISBN to lend a book.", Some("400".to_string())));
        assert_eq!("Please enter ISBN to lend a book.", err.to_string());
    }
}
