use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::model::SharedCatalog;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;

#[derive(Clone)]
pub struct AppState {
    pub(crate) config: Configuration,
    pub(crate) catalog: SharedCatalog,
    pub(crate) publisher: Arc<dyn EventPublisher>,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        let publisher = create_publisher(config.publisher);
        AppState {
            config,
            catalog: SharedCatalog::default(),
            publisher,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub(crate) fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotAvailable { .. } => {
                (StatusCode::CONFLICT, format!("{}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::{AppState, ServerError};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_map_command_errors() {
        let (status, body) = ServerError::from(CommandError::NotAvailable { message: "gone".to_string() });
        assert_eq!(StatusCode::CONFLICT, status);
        assert_eq!("gone", body.as_str());
        let (status, _) = ServerError::from(CommandError::Validation { message: "bad".to_string(), reason_code: None });
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, _) = ServerError::from(CommandError::Serialization { message: "json".to_string() });
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, _) = ServerError::from(CommandError::Runtime { message: "lock".to_string(), reason_code: None, retryable: false });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
    }

    #[tokio::test]
    async fn test_should_build_state_with_empty_catalog() {
        let state = AppState::new(Configuration::new("test"));
        assert!(state.catalog.read(|c| c.is_empty()).expect("should read"));
        assert_eq!("test", state.config.library_name.as_str());
    }
}
