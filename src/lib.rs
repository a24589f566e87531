//! Core library surface for the library management shell.
//!
//! The stores own the data, the authorizer gates every request against the
//! current session, and [`LibraryService`] ties them together into the
//! commands the `lms` binary exposes. The shell itself is a thin layer that
//! parses a line, calls one service method and prints the typed outcome.
pub mod auth;
pub mod config;
pub mod error;
pub mod messages;
pub mod models;
pub mod notice;
pub mod service;
pub mod shell;
pub mod store;
pub mod validate;

/// Outcome types every command returns.
pub use error::{ErrorKind, LibraryError, Response};
pub use notice::Notice;

/// Data model shared across layers.
pub use models::{Book, BookKey, Role, Session};

/// Orchestration entry point and the stores it drives.
pub use service::LibraryService;
pub use store::{BookStore, UserStore};

/// Permission matrix.
pub use auth::{Authorizer, Denial, Permission};

/// Interactive front end.
pub use messages::{Locale, Localize};
pub use shell::{Shell, ShellConfig};
