use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::ItemKind;
use crate::items::domain::Lendable;
use crate::items::domain::model::{DownloadSize, Item, ItemFormat};

// ItemDto is a data transfer object for catalog and checkout services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_size_mb: Option<DownloadSize>,
    #[serde(default)]
    pub is_lent: bool,
}

impl ItemDto {
    pub fn new(title: &str, author: &str, isbn: &str, download_size_mb: Option<DownloadSize>) -> ItemDto {
        ItemDto {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            kind: if download_size_mb.is_some() { ItemKind::Digital } else { ItemKind::Physical },
            download_size_mb,
            is_lent: false,
        }
    }
}

impl Identifiable for ItemDto {
    fn id(&self) -> &str {
        self.isbn.as_str()
    }
}

impl Display for ItemDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Item::from(self))
    }
}

impl From<&Item> for ItemDto {
    fn from(other: &Item) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            kind: other.kind(),
            download_size_mb: other.download_size_mb().cloned(),
            is_lent: other.is_lent,
        }
    }
}

// The download size decides the format; an ebook always carries one.
impl From<&ItemDto> for Item {
    fn from(other: &ItemDto) -> Self {
        let format = match &other.download_size_mb {
            Some(size) => ItemFormat::Digital { download_size_mb: size.clone() },
            None => ItemFormat::Physical,
        };
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            is_lent: other.is_lent,
            format,
        }
    }
}
