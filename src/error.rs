//! Failure outcomes of the core. Every variant is recoverable and renders to
//! the exact English reply the shell prints; `messages` holds the other
//! bundled translation.

use thiserror::Error;

use crate::auth::Denial;
use crate::models::Role;

/// Outcome type returned by every core operation.
pub type Response<T> = std::result::Result<T, LibraryError>;

/// Broad classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Permission,
    Capacity,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("Invalid role. Role must be \"admin\" or \"user\".")]
    InvalidRole,

    #[error("Invalid parameters provided.")]
    InvalidParameters,

    #[error("Amount must be positive.")]
    AmountMustBePositive,

    /// Carries the role from the rejected registration, not the stored one.
    #[error("{role} {name} already exists.")]
    UserAlreadyExists { role: Role, name: String },

    #[error("User {name} does not exist.")]
    UserNotFound { name: String },

    #[error("Incorrect password.")]
    WrongPassword,

    #[error("No user is currently logged in.")]
    NoActiveSession,

    #[error(transparent)]
    Denied(#[from] Denial),

    #[error("Book \"{name}\" by {author} not found.")]
    BookNotFound { name: String, author: String },

    #[error("Cannot delete book \"{name}\" because it is currently borrowed.")]
    BookCurrentlyBorrowed { name: String },

    #[error("Book \"{name}\" is not available for borrowing.")]
    OutOfStock { name: String },

    /// The top-up would push the shelf count past what `u64` can hold.
    #[error("Cannot add {amount} copies of \"{name}\", inventory limit reached.")]
    InventoryOverflow { name: String, amount: u64 },

    #[error("You have already borrowed \"{name}\" by {author}.")]
    AlreadyBorrowed { name: String, author: String },

    #[error("You have not borrowed \"{name}\" by {author}.")]
    NotBorrowed { name: String, author: String },
}

impl LibraryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRole | Self::InvalidParameters | Self::AmountMustBePositive => {
                ErrorKind::Validation
            }
            Self::UserNotFound { .. } | Self::BookNotFound { .. } => ErrorKind::NotFound,
            Self::UserAlreadyExists { .. }
            | Self::AlreadyBorrowed { .. }
            | Self::NotBorrowed { .. }
            | Self::BookCurrentlyBorrowed { .. } => ErrorKind::Conflict,
            Self::WrongPassword | Self::NoActiveSession | Self::Denied(_) => ErrorKind::Permission,
            Self::OutOfStock { .. } | Self::InventoryOverflow { .. } => ErrorKind::Capacity,
        }
    }

    pub(crate) fn book_not_found(name: &str, author: &str) -> Self {
        Self::BookNotFound {
            name: name.to_string(),
            author: author.to_string(),
        }
    }
}
