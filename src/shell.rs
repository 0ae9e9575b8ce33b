use axum::{
    routing::{delete, get, post},
    Router,
};
use crate::catalog::controller::{add_item, available_items, items_by_author, remove_item};
use crate::checkout::controller::{lend_item, return_item};
use crate::core::controller::AppState;
use crate::shell::controller::{show_form, submit_form};

pub mod controller;
pub mod form;
pub mod render;

// The form page and the json api share one catalog through the state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/catalog", post(add_item))
        .route("/catalog/available", get(available_items))
        .route("/catalog/authors/:author", get(items_by_author))
        .route("/catalog/items/:isbn", delete(remove_item))
        .route("/checkout", post(lend_item))
        .route("/checkout/return", post(return_item))
        .with_state(state)
}
