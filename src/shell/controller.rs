use axum::{
    extract::{Form, State},
    response::Html,
};
use tracing::debug;
use crate::catalog::command::add_item_cmd::AddItemCommand;
use crate::catalog::command::available_items_cmd::{AvailableItemsCommand, AvailableItemsCommandRequest};
use crate::catalog::command::items_by_author_cmd::{ItemsByAuthorCommand, ItemsByAuthorCommandRequest};
use crate::catalog::command::remove_item_cmd::{RemoveItemCommand, RemoveItemCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::checkout::command::lend_item_cmd::{LendItemCommand, LendItemCommandRequest};
use crate::checkout::command::return_item_cmd::{ReturnItemCommand, ReturnItemCommandRequest};
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory::create_checkout_service;
use crate::core::command::{Command, CommandError};
use crate::core::controller::AppState;
use crate::core::library::LibraryError;
use crate::shell::form::{FormAction, ItemForm};
use crate::shell::render::{author_listing, available_listing, render_page, Notice};

fn catalog_service(state: &AppState) -> Box<dyn CatalogService> {
    create_catalog_service(&state.config, state.catalog.clone(), state.publisher.clone())
}

fn checkout_service(state: &AppState) -> Box<dyn CheckoutService> {
    create_checkout_service(&state.config, state.catalog.clone(), state.publisher.clone())
}

fn input_notice(err: LibraryError) -> Notice {
    Notice::input_error(err.message())
}

fn command_notice(err: CommandError) -> Notice {
    match err {
        CommandError::Validation { message, .. } => Notice::input_error(message.as_str()),
        other => Notice::error(other.to_string().as_str()),
    }
}

pub(crate) async fn show_form(State(state): State<AppState>) -> Html<String> {
    Html(render_page(state.config.library_name.as_str(), &ItemForm::default(), None))
}

pub(crate) async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>) -> Html<String> {
    let (form, notice) = handle_action(&state, form).await;
    Html(render_page(state.config.library_name.as_str(), &form, notice.as_ref()))
}

// Runs the action of a submitted form and returns the form to show next.
pub(crate) async fn handle_action(state: &AppState, mut form: ItemForm) -> (ItemForm, Option<Notice>) {
    let action = match form.action {
        Some(action) => action,
        None => return (form, None),
    };
    debug!(?action, "form submitted");
    let notice = match action {
        FormAction::Add => {
            let req = match form.add_request() {
                Ok(req) => req,
                Err(err) => return (form, Some(input_notice(err))),
            };
            match AddItemCommand::new(catalog_service(state)).execute(req).await {
                Ok(_) => return (form.cleared(), Some(Notice::success("Book added successfully."))),
                Err(err) => command_notice(err),
            }
        }
        FormAction::Remove => {
            let isbn = match form.isbn_for(action) {
                Ok(isbn) => isbn,
                Err(err) => return (form, Some(input_notice(err))),
            };
            match RemoveItemCommand::new(catalog_service(state)).execute(RemoveItemCommandRequest::new(isbn)).await {
                Ok(_) => Notice::success("Book removed successfully."),
                Err(err) => command_notice(err),
            }
        }
        FormAction::Lend => {
            let isbn = match form.isbn_for(action) {
                Ok(isbn) => isbn,
                Err(err) => return (form, Some(input_notice(err))),
            };
            match LendItemCommand::new(checkout_service(state)).execute(LendItemCommandRequest::new(isbn)).await {
                Ok(res) => Notice::success(format!("Book '{}' lent successfully.", res.item.title).as_str()),
                Err(err) => command_notice(err),
            }
        }
        FormAction::Return => {
            let isbn = match form.isbn_for(action) {
                Ok(isbn) => isbn,
                Err(err) => return (form, Some(input_notice(err))),
            };
            match ReturnItemCommand::new(checkout_service(state)).execute(ReturnItemCommandRequest::new(isbn)).await {
                Ok(_) => Notice::success("Book returned successfully."),
                Err(err) => command_notice(err),
            }
        }
        FormAction::Available => {
            match AvailableItemsCommand::new(catalog_service(state)).execute(AvailableItemsCommandRequest::new()).await {
                Ok(res) => {
                    form.output = available_listing(&res.items);
                    return (form, None);
                }
                Err(err) => command_notice(err),
            }
        }
        FormAction::Author => {
            let author = match form.author_query() {
                Ok(author) => author,
                Err(err) => return (form, Some(input_notice(err))),
            };
            match ItemsByAuthorCommand::new(catalog_service(state)).execute(ItemsByAuthorCommandRequest::new(author)).await {
                Ok(res) => {
                    form.output = author_listing(res.author.as_str(), &res.items);
                    return (form, None);
                }
                Err(err) => command_notice(err),
            }
        }
    };
    (form, Some(notice))
}
