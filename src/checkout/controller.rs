use axum::{
    extract::State,
    response::Json,
};
use serde_json::Value;
use crate::checkout::command::lend_item_cmd::{LendItemCommand, LendItemCommandRequest, LendItemCommandResponse};
use crate::checkout::command::return_item_cmd::{ReturnItemCommand, ReturnItemCommandRequest, ReturnItemCommandResponse};
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

fn build_service(state: &AppState) -> Box<dyn CheckoutService> {
    factory::create_checkout_service(&state.config, state.catalog.clone(), state.publisher.clone())
}

pub(crate) async fn lend_item(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<LendItemCommandResponse>, ServerError> {
    let req: LendItemCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = LendItemCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn return_item(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ReturnItemCommandResponse>, ServerError> {
    let req: ReturnItemCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = ReturnItemCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}
