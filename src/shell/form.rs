use serde::Deserialize;
use crate::catalog::command::add_item_cmd::AddItemCommandRequest;
use crate::core::library::{LibraryError, LibraryResult};
use crate::items::domain::model::DownloadSize;

pub use crate::items::domain::model::INVALID_SIZE_MESSAGE;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Title, Author, and ISBN are required.";
pub const REMOVE_ISBN_MESSAGE: &str = "Please enter ISBN to remove a book.";
pub const LEND_ISBN_MESSAGE: &str = "Please enter ISBN to lend a book.";
pub const RETURN_ISBN_MESSAGE: &str = "Please enter ISBN to return a book.";
pub const AUTHOR_MESSAGE: &str = "Please enter author name to search.";

const INPUT_REASON: &str = "400";

// FormAction is the button that submitted the form.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormAction {
    Add,
    Remove,
    Lend,
    Return,
    Available,
    Author,
}

// ItemForm carries the raw field text of the form. The output area is posted back
// so that it survives actions that do not list anything.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub ebook: Option<String>,
    #[serde(default)]
    pub download_size: String,
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub action: Option<FormAction>,
}

impl ItemForm {
    pub fn is_ebook(&self) -> bool {
        self.ebook.is_some()
    }

    pub(crate) fn add_request(&self) -> LibraryResult<AddItemCommandRequest> {
        let title = required(self.title.as_str(), REQUIRED_FIELDS_MESSAGE)?;
        let author = required(self.author.as_str(), REQUIRED_FIELDS_MESSAGE)?;
        let isbn = required(self.isbn.as_str(), REQUIRED_FIELDS_MESSAGE)?;
        let download_size_mb = if self.is_ebook() {
            Some(parse_download_size(self.download_size.as_str())?)
        } else {
            None
        };
        Ok(AddItemCommandRequest::new(title, author, isbn, download_size_mb))
    }

    pub fn isbn_for(&self, action: FormAction) -> LibraryResult<String> {
        let message = match action {
            FormAction::Remove => REMOVE_ISBN_MESSAGE,
            FormAction::Lend => LEND_ISBN_MESSAGE,
            FormAction::Return => RETURN_ISBN_MESSAGE,
            _ => REQUIRED_FIELDS_MESSAGE,
        };
        required(self.isbn.as_str(), message).map(str::to_string)
    }

    pub fn author_query(&self) -> LibraryResult<String> {
        required(self.author.as_str(), AUTHOR_MESSAGE).map(str::to_string)
    }

    // Empties every field after a successful add; the output area is kept.
    pub fn cleared(&self) -> ItemForm {
        ItemForm {
            output: self.output.to_string(),
            ..ItemForm::default()
        }
    }
}

fn required<'a>(value: &'a str, message: &str) -> LibraryResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(LibraryError::validation(message, Some(INPUT_REASON.to_string())))
    } else {
        Ok(value)
    }
}

// Accepts ascii digits with at most one decimal point, e.g. `12`, `2.5`, `.5` or `3.`.
pub fn parse_download_size(raw: &str) -> LibraryResult<DownloadSize> {
    DownloadSize::parse(raw)
        .map_err(|_| LibraryError::validation(INVALID_SIZE_MESSAGE, Some(INPUT_REASON.to_string())))
}

// Applies the form rules to a json add request and trims its fields. The size was
// already checked when the request was decoded.
pub(crate) fn normalize_add_request(req: &AddItemCommandRequest) -> LibraryResult<AddItemCommandRequest> {
    let title = required(req.title.as_str(), REQUIRED_FIELDS_MESSAGE)?;
    let author = required(req.author.as_str(), REQUIRED_FIELDS_MESSAGE)?;
    let isbn = required(req.isbn.as_str(), REQUIRED_FIELDS_MESSAGE)?;
    Ok(AddItemCommandRequest::new(title, author, isbn, req.download_size_mb.clone()))
}
