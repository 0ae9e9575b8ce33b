use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{ItemKind, LibraryError, LibraryResult};
use crate::items::domain::Lendable;

pub const INVALID_SIZE_MESSAGE: &str = "Download size must be a valid number.";

// DownloadSize is the size of an ebook in megabytes, kept as the text that was
// entered so `2.0`, `.5` or `007` read back unchanged. Only ascii digits with at
// most one decimal point are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SizeInput", into = "String")]
pub struct DownloadSize(String);

// Json clients may send the size either as a string or as a number.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum SizeInput {
    Text(String),
    Number(serde_json::Number),
}

impl DownloadSize {
    pub fn parse(raw: &str) -> LibraryResult<Self> {
        let raw = raw.trim();
        let dots = raw.chars().filter(|ch| *ch == '.').count();
        let digits = raw.chars().filter(char::is_ascii_digit).count();
        if dots > 1 || digits == 0 || dots + digits != raw.chars().count() {
            return Err(LibraryError::validation(INVALID_SIZE_MESSAGE, None));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<SizeInput> for DownloadSize {
    type Error = LibraryError;

    fn try_from(input: SizeInput) -> Result<Self, Self::Error> {
        match input {
            SizeInput::Text(text) => DownloadSize::parse(text.as_str()),
            SizeInput::Number(number) => DownloadSize::parse(number.to_string().as_str()),
        }
    }
}

impl From<DownloadSize> for String {
    fn from(size: DownloadSize) -> Self {
        size.0
    }
}

impl Display for DownloadSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ItemFormat separates paper books from ebooks, the latter carry their download size.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemFormat {
    Physical,
    Digital {
        download_size_mb: DownloadSize,
    },
}

// Item abstracts a book held by the catalog. The isbn is the lookup key but several
// items may share it.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub is_lent: bool,
    pub format: ItemFormat,
}

impl Item {
    pub fn physical(title: &str, author: &str, isbn: &str) -> Self {
        Self::new(title, author, isbn, ItemFormat::Physical)
    }

    pub fn digital(title: &str, author: &str, isbn: &str, download_size_mb: DownloadSize) -> Self {
        Self::new(title, author, isbn, ItemFormat::Digital { download_size_mb })
    }

    pub fn new(title: &str, author: &str, isbn: &str, format: ItemFormat) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            is_lent: false,
            format,
        }
    }

    pub fn download_size_mb(&self) -> Option<&DownloadSize> {
        match &self.format {
            ItemFormat::Physical => None,
            ItemFormat::Digital { download_size_mb } => Some(download_size_mb),
        }
    }
}

impl Identifiable for Item {
    fn id(&self) -> &str {
        self.isbn.as_str()
    }
}

impl Lendable for Item {
    fn is_lent(&self) -> bool {
        self.is_lent
    }

    fn kind(&self) -> ItemKind {
        match self.format {
            ItemFormat::Physical => ItemKind::Physical,
            ItemFormat::Digital { .. } => ItemKind::Digital,
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (ISBN: {})", self.title, self.author, self.isbn)?;
        if let Some(size) = self.download_size_mb() {
            write!(f, " - Download Size: {} MB", size)?;
        }
        Ok(())
    }
}
