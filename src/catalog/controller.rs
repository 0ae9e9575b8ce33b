use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;
use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest, AddItemCommandResponse};
use crate::catalog::command::available_items_cmd::{AvailableItemsCommand, AvailableItemsCommandRequest, AvailableItemsCommandResponse};
use crate::catalog::command::items_by_author_cmd::{ItemsByAuthorCommand, ItemsByAuthorCommandRequest, ItemsByAuthorCommandResponse};
use crate::catalog::command::remove_item_cmd::{RemoveItemCommand, RemoveItemCommandRequest, RemoveItemCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::shell::form::normalize_add_request;

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.catalog.clone(), state.publisher.clone())
}

pub(crate) async fn add_item(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddItemCommandResponse>, ServerError> {
    let req: AddItemCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = normalize_add_request(&req).map_err(CommandError::from)?;
    let res = AddItemCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_item(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<RemoveItemCommandResponse>, ServerError> {
    let req = RemoveItemCommandRequest::new(isbn);
    let res = RemoveItemCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn available_items(
    State(state): State<AppState>) -> Result<Json<AvailableItemsCommandResponse>, ServerError> {
    let res = AvailableItemsCommand::new(build_service(&state)).execute(AvailableItemsCommandRequest::new()).await?;
    Ok(Json(res))
}

pub(crate) async fn items_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>) -> Result<Json<ItemsByAuthorCommandResponse>, ServerError> {
    let req = ItemsByAuthorCommandRequest::new(author);
    let res = ItemsByAuthorCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::response::Json;
    use serde_json::json;
    use crate::catalog::controller::{add_item, available_items, items_by_author, remove_item};
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    fn state() -> AppState {
        AppState::new(Configuration::new("test").with_publisher(GatewayPublisherVia::Memory))
    }

    #[tokio::test]
    async fn test_should_add_and_list_items() {
        let state = state();
        let res = add_item(State(state.clone()), Json(json!({
            "title": " Dune ", "author": "Frank Herbert", "isbn": "333", "download_size_mb": 2.5
        }))).await.expect("should add item");
        assert_eq!("Dune", res.0.item.title.as_str());
        assert_eq!("Dune by Frank Herbert (ISBN: 333) - Download Size: 2.5 MB", res.0.item.to_string());

        let res = available_items(State(state.clone())).await.expect("should list items");
        assert_eq!(1, res.0.items.len());

        let res = items_by_author(State(state.clone()), Path("frank herbert".to_string())).await.expect("should list items");
        assert_eq!(1, res.0.items.len());

        let res = remove_item(State(state.clone()), Path("333".to_string())).await.expect("should remove item");
        assert_eq!(1, res.0.removed);
        assert!(state.publisher.published().len() >= 2);
    }

    #[tokio::test]
    async fn test_should_reject_bad_json() {
        let err = add_item(State(state()), Json(json!({"title": "Dune"}))).await.expect_err("should reject");
        assert_eq!(StatusCode::BAD_REQUEST, err.0);
    }

    #[tokio::test]
    async fn test_should_reject_blank_fields() {
        let err = add_item(State(state()), Json(json!({"title": "Dune", "author": " ", "isbn": "333"})))
            .await.expect_err("should reject");
        assert_eq!((StatusCode::BAD_REQUEST, "Title, Author, and ISBN are required.".to_string()), err);
    }

    #[tokio::test]
    async fn test_should_keep_size_text() {
        let state = state();
        let digits = "1".repeat(400);
        let res = add_item(State(state.clone()), Json(json!({
            "title": "Dune", "author": "F", "isbn": "1", "download_size_mb": &digits
        }))).await.expect("should add item");
        assert_eq!(format!("Dune by F (ISBN: 1) - Download Size: {} MB", digits), res.0.item.to_string());

        let res = add_item(State(state), Json(json!({
            "title": "Dune", "author": "F", "isbn": "2", "download_size_mb": "2.0"
        }))).await.expect("should add item");
        assert_eq!("Dune by F (ISBN: 2) - Download Size: 2.0 MB", res.0.item.to_string());
    }

    #[tokio::test]
    async fn test_should_reject_bad_size() {
        for size in [json!(-1), json!("1e3"), json!("big")] {
            let err = add_item(State(state()), Json(json!({
                "title": "Dune", "author": "F", "isbn": "1", "download_size_mb": size
            }))).await.expect_err("should reject");
            assert_eq!(StatusCode::BAD_REQUEST, err.0);
            assert!(err.1.contains("Download size must be a valid number."), "{}", err.1);
        }
    }
}
