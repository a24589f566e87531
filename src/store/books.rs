use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::{LibraryError, Response};
use crate::models::{Book, BookKey, BookSummary};
use crate::notice::Notice;
use crate::validate;

/// Book table keyed by `(name, author)`. `order` is a parallel index holding
/// keys in first-insertion order so listings are deterministic.
#[derive(Debug, Default)]
pub struct BookStore {
    books: HashMap<BookKey, Book>,
    order: Vec<BookKey>,
}

impl BookStore {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the entry or top up its inventory. A top-up that would overflow
    /// the shelf count is refused and leaves the entry untouched, so every
    /// copy reported as added is still accounted for.
    pub fn add_book(&mut self, name: &str, author: &str, amount: i64) -> Response<Notice> {
        let amount = validate::validate_add_book(name, author, amount)?;
        let key = BookKey::new(name, author);

        if let Some(book) = self.books.get_mut(&key) {
            book.inventory = book.inventory.checked_add(amount).ok_or_else(|| {
                debug!(book = %key, amount, "top-up rejected, inventory limit");
                LibraryError::InventoryOverflow {
                    name: name.to_string(),
                    amount,
                }
            })?;
            info!(book = %key, inventory = book.inventory, "inventory updated");
            return Ok(Notice::InventoryUpdated {
                name: name.to_string(),
                inventory: book.inventory,
            });
        }

        self.order.push(key.clone());
        self.books.insert(
            key.clone(),
            Book {
                key: key.clone(),
                inventory: amount,
                borrowed_by: Vec::new(),
            },
        );
        info!(book = %key, inventory = amount, "book added");

        Ok(Notice::BookAdded {
            name: name.to_string(),
            author: author.to_string(),
            amount,
        })
    }

    /// Remove the entry entirely. Refused while any copy is out, since the
    /// holders' records would otherwise point at a book that no longer exists.
    pub fn delete_book(&mut self, name: &str, author: &str) -> Response<Notice> {
        validate::validate_book_operation(name, author)?;
        let key = BookKey::new(name, author);

        let book = self
            .books
            .get(&key)
            .ok_or_else(|| LibraryError::book_not_found(name, author))?;
        if !book.borrowed_by.is_empty() {
            debug!(book = %key, out = book.borrowed_by.len(), "delete rejected, copies out");
            return Err(LibraryError::BookCurrentlyBorrowed {
                name: name.to_string(),
            });
        }

        self.books.remove(&key);
        self.order.retain(|k| k != &key);
        info!(book = %key, "book deleted");

        Ok(Notice::BookDeleted {
            name: name.to_string(),
            author: author.to_string(),
        })
    }

    /// Exact lookup on `(name, author)`; there is no partial matching.
    pub fn search_book(&self, name: &str, author: &str) -> Response<Notice> {
        validate::validate_book_operation(name, author)?;
        self.get(name, author)
            .map(|book| Notice::Found(book.summary()))
            .ok_or_else(|| LibraryError::book_not_found(name, author))
    }

    /// Whole catalog, or the empty-catalog notice when nothing is stocked.
    pub fn list_books(&self) -> Notice {
        if self.order.is_empty() {
            return Notice::EmptyCatalog;
        }
        Notice::Catalog(self.summaries())
    }

    /// Books in insertion order.
    pub fn summaries(&self) -> Vec<BookSummary> {
        self.order
            .iter()
            .filter_map(|key| self.books.get(key))
            .map(Book::summary)
            .collect()
    }

    /// Take one copy off the shelf for `user`. Returns the key so the caller
    /// can mirror the loan into the user table.
    pub fn borrow(&mut self, name: &str, author: &str, user: &str) -> Response<BookKey> {
        let key = BookKey::new(name, author);
        let book = self
            .books
            .get_mut(&key)
            .ok_or_else(|| LibraryError::book_not_found(name, author))?;

        if book.inventory == 0 {
            return Err(LibraryError::OutOfStock {
                name: name.to_string(),
            });
        }

        book.inventory -= 1;
        book.borrowed_by.push(user.to_string());
        Ok(key)
    }

    /// Put back the copy held by `user`. Only the first matching holder entry
    /// is removed.
    pub fn return_book(&mut self, name: &str, author: &str, user: &str) -> Response<BookKey> {
        let key = BookKey::new(name, author);
        let book = self
            .books
            .get_mut(&key)
            .ok_or_else(|| LibraryError::book_not_found(name, author))?;

        let position = book
            .borrowed_by
            .iter()
            .position(|holder| holder == user)
            .ok_or_else(|| LibraryError::NotBorrowed {
                name: name.to_string(),
                author: author.to_string(),
            })?;

        book.borrowed_by.remove(position);
        book.inventory += 1;
        Ok(key)
    }

    /// Raw entry, for callers that need the holder list.
    pub fn get(&self, name: &str, author: &str) -> Option<&Book> {
        self.books.get(&BookKey::new(name, author))
    }

    /// Whether the pair names a catalog entry, regardless of stock.
    pub fn exists(&self, name: &str, author: &str) -> bool {
        self.get(name, author).is_some()
    }

    /// Whether at least one copy is on the shelf.
    pub fn is_available(&self, name: &str, author: &str) -> bool {
        self.get(name, author).is_some_and(|book| book.inventory > 0)
    }

    /// Number of distinct catalog entries.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True before the first book is added or after the last is deleted.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
