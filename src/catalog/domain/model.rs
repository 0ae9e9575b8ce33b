use std::sync::{Arc, Mutex};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::items::domain::Lendable;
use crate::items::domain::model::Item;

pub const NOT_AVAILABLE_MESSAGE: &str = "Book is not available for lending";

/// Catalog keeps the items of the library in insertion order.
///
/// Isbns are not unique: `remove` and `return_item` act on every match while
/// `lend` takes the first match that is not lent yet. The catalog does not
/// validate what it is given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes every item with the isbn and returns how many were dropped.
    pub fn remove(&mut self, isbn: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id() != isbn);
        before - self.items.len()
    }

    /// Marks the first free item with the isbn as lent.
    pub fn lend(&mut self, isbn: &str) -> LibraryResult<&Item> {
        match self.items.iter_mut().find(|item| item.id() == isbn && !item.is_lent()) {
            Some(item) => {
                item.is_lent = true;
                Ok(&*item)
            }
            None => Err(LibraryError::not_available(NOT_AVAILABLE_MESSAGE)),
        }
    }

    /// Clears the lent flag on every item with the isbn and returns the match count.
    pub fn return_item(&mut self, isbn: &str) -> usize {
        let mut matched = 0;
        for item in self.items.iter_mut().filter(|item| item.id() == isbn) {
            item.is_lent = false;
            matched += 1;
        }
        matched
    }

    pub fn available_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(|item| !item.is_lent())
    }

    /// Items whose author equals `author` once both are lowercased, lent or not.
    pub fn items_by_author(&self, author: &str) -> impl Iterator<Item = &Item> + '_ {
        let author = author.to_lowercase();
        self.items.iter().filter(move |item| item.author.to_lowercase() == author)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// SharedCatalog hands one catalog to every request handler. The lock is only held
// for the duration of a single catalog call.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<Mutex<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> LibraryResult<R> {
        let catalog = self.inner.lock()?;
        Ok(f(&catalog))
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> LibraryResult<R> {
        let mut catalog = self.inner.lock()?;
        Ok(f(&mut catalog))
    }
}
