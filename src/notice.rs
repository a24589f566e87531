//! Success outcomes of the message-producing operations.

use std::fmt;

use crate::models::{BookSummary, Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Registered { role: Role, name: String },
    LoggedIn { role: Role, name: String },
    LoggedOut,
    BookAdded {
        name: String,
        author: String,
        amount: u64,
    },
    InventoryUpdated { name: String, inventory: u64 },
    BookDeleted { name: String, author: String },
    Borrowed { name: String },
    Returned { name: String },
    /// Listing of a catalog with no entries.
    EmptyCatalog,
    /// Listing in insertion order.
    Catalog(Vec<BookSummary>),
    Found(BookSummary),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Registered { role, name } => {
                write!(f, "{role} {name} successfully registered.")
            }
            Notice::LoggedIn { role, name } => write!(f, "{role} {name} successfully logged in."),
            Notice::LoggedOut => f.write_str("Successfully logged out."),
            Notice::BookAdded {
                name,
                author,
                amount,
            } => write!(
                f,
                "Book \"{name}\" by {author} added successfully, inventory: {amount}."
            ),
            Notice::InventoryUpdated { name, inventory } => write!(
                f,
                "Book \"{name}\" inventory successfully updated, new inventory: {inventory}."
            ),
            Notice::BookDeleted { name, author } => {
                write!(f, "Book \"{name}\" by {author} successfully deleted.")
            }
            Notice::Borrowed { name } => write!(f, "Book \"{name}\" successfully borrowed."),
            Notice::Returned { name } => write!(f, "Book \"{name}\" successfully returned."),
            Notice::EmptyCatalog => f.write_str("No books in the library."),
            Notice::Catalog(books) => {
                f.write_str("Book List:")?;
                for book in books {
                    write!(f, "\n{book}")?;
                }
                Ok(())
            }
            Notice::Found(book) => write!(f, "{book}"),
        }
    }
}
