//! Orchestration layer the shell talks to. Each public method is one command:
//! gate it through the [`Authorizer`], delegate to the owning store, and hand
//! back a typed outcome.
//!
//! Borrow and return are the only operations that touch both stores. The user
//! table is the authoritative record of who holds what, so it is consulted
//! before the book table is mutated and updated right after. Both steps are
//! synchronous and infallible once the book table accepted the change, so no
//! compensation is needed while a service value has a single owner.

use tracing::info;

use crate::auth::{Authorizer, BookAction, Denial, Permission};
use crate::error::{LibraryError, Response};
use crate::models::{
    BookKey, BorrowOp, Role, Session, SystemConfig, SystemStats, UserProfile, UserSummary,
};
use crate::notice::Notice;
use crate::store::{BookStore, UserStore};

#[derive(Debug, Default)]
pub struct LibraryService {
    users: UserStore,
    books: BookStore,
    auth: Authorizer,
}

impl LibraryService {
    pub fn new() -> Self {
        Self::default()
    }

    // Registration and login are the entry points to authorization, so they
    // are not gated.

    pub fn register(&mut self, role: &str, name: &str, password: &str) -> Response<Notice> {
        self.users.register(role, name, password)
    }

    pub fn login(&mut self, name: &str, password: &str) -> Response<Notice> {
        self.users.login(name, password)
    }

    pub fn logout(&mut self) -> Response<Notice> {
        self.users.logout()
    }

    pub fn list_books(&self) -> Response<Notice> {
        self.auth.check(&self.users, Permission::Book(BookAction::List))?;
        Ok(self.books.list_books())
    }

    pub fn search_book(&self, name: &str, author: &str) -> Response<Notice> {
        self.auth.check(&self.users, Permission::Book(BookAction::Search))?;
        self.books.search_book(name, author)
    }

    pub fn add_book(&mut self, name: &str, author: &str, amount: i64) -> Response<Notice> {
        self.auth.check(&self.users, Permission::Book(BookAction::Add))?;
        self.books.add_book(name, author, amount)
    }

    pub fn delete_book(&mut self, name: &str, author: &str) -> Response<Notice> {
        self.auth.check(&self.users, Permission::Book(BookAction::Delete))?;
        self.books.delete_book(name, author)
    }

    /// A user may hold at most one copy of a given book, even when more are
    /// on the shelf.
    pub fn borrow_book(&mut self, name: &str, author: &str) -> Response<Notice> {
        let holder = self
            .auth
            .check(&self.users, Permission::Book(BookAction::Borrow))?
            .name
            .clone();
        let key = BookKey::new(name, author);

        if self.users.has_borrowed(&holder, &key) {
            return Err(LibraryError::AlreadyBorrowed {
                name: name.to_string(),
                author: author.to_string(),
            });
        }

        let key = self.books.borrow(name, author, &holder)?;
        self.users.update_borrowed_books(&holder, &key, BorrowOp::Add);
        info!(user = %holder, book = %key, "book borrowed");

        Ok(Notice::Borrowed {
            name: name.to_string(),
        })
    }

    pub fn return_book(&mut self, name: &str, author: &str) -> Response<Notice> {
        let holder = self
            .auth
            .check(&self.users, Permission::Book(BookAction::Return))?
            .name
            .clone();
        let key = BookKey::new(name, author);

        if !self.users.has_borrowed(&holder, &key) {
            return Err(LibraryError::NotBorrowed {
                name: name.to_string(),
                author: author.to_string(),
            });
        }

        let key = self.books.return_book(name, author, &holder)?;
        self.users.update_borrowed_books(&holder, &key, BorrowOp::Remove);
        info!(user = %holder, book = %key, "book returned");

        Ok(Notice::Returned {
            name: name.to_string(),
        })
    }

    pub fn current_user(&self) -> Option<&Session> {
        self.users.current_user()
    }

    /// Catalog and account counts. Any logged-in user may ask.
    pub fn system_stats(&self) -> Response<SystemStats> {
        let session = self.users.check_login()?;
        Ok(SystemStats {
            total_books: self.books.len(),
            total_users: self.users.len(),
            role_stats: self.users.role_stats(),
            current_user: session.name.clone(),
            current_role: session.role,
        })
    }

    /// Admin only. Other roles get a refusal specific to the configuration
    /// rather than the generic admin-required denial.
    pub fn system_config(&self) -> Response<SystemConfig> {
        let session = self.users.check_login()?;
        if session.role != Role::Admin {
            return Err(Denial::ConfigRestricted.into());
        }
        Ok(SystemConfig {
            version: env!("CARGO_PKG_VERSION"),
            environment: if cfg!(debug_assertions) {
                "development"
            } else {
                "production"
            },
            user_registration: true,
            book_management: true,
            borrowing_system: true,
            user_profiles: true,
        })
    }

    /// Profile of `target`, or of the caller when `target` is `None` or blank.
    pub fn view_user_profile(&self, target: Option<&str>) -> Response<UserProfile> {
        let session = self.users.check_login()?;
        let target = target
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(session.name.as_str());
        self.auth.check(
            &self.users,
            Permission::ViewProfile {
                target: Some(target),
            },
        )?;

        let user = self.users.get(target).ok_or_else(|| LibraryError::UserNotFound {
            name: target.to_string(),
        })?;
        let borrowed_books = self.users.borrowed_books(target);

        Ok(UserProfile {
            name: user.name.clone(),
            role: user.role,
            currently_borrowed: borrowed_books.len(),
            borrowed_books,
        })
    }

    pub fn list_users(&self) -> Response<Vec<UserSummary>> {
        self.auth.check(&self.users, Permission::ManageUsers)?;
        Ok(self.users.all_users())
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    pub fn books(&self) -> &BookStore {
        &self.books
    }
}
