//! Domain models shared by the stores, the authorizer and the service layer.
//! They stay plain data holders; every mutation goes through the owning store
//! so the cross-store borrow invariants live in one place.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Role a user registers with. The lowercase names (`admin`, `user`) are what
/// the shell accepts; `Display` renders the capitalised label used in replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Regular,
}

impl Role {
    /// Lowercase identifier accepted on input.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Regular => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("Admin"),
            Role::Regular => f.write_str("User"),
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::Regular),
            _ => Err(()),
        }
    }
}

/// Identity of a catalog entry. Two books are the same entry only when both
/// the title and the author match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookKey {
    pub name: String,
    pub author: String,
}

impl BookKey {
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
        }
    }
}

impl fmt::Display for BookKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.author)
    }
}

/// Registered account. `borrowed` mirrors every book whose `borrowed_by` list
/// carries this user's name.
#[derive(Debug, Clone)]
pub struct User {
    pub name: String,
    pub role: Role,
    pub password: String,
    pub borrowed: BTreeSet<BookKey>,
}

impl User {
    pub fn new(name: impl Into<String>, role: Role, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role,
            password: password.into(),
            borrowed: BTreeSet::new(),
        }
    }
}

/// Catalog entry. `inventory` counts copies on the shelf; `borrowed_by` lists
/// the holders of the copies that are out, in borrow order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub key: BookKey,
    pub inventory: u64,
    pub borrowed_by: Vec<String>,
}

impl Book {
    /// Copies on the shelf plus copies currently out.
    pub fn total_copies(&self) -> u64 {
        self.inventory + self.borrowed_by.len() as u64
    }

    /// One-line listing used by both search and list replies.
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            name: self.key.name.clone(),
            author: self.key.author.clone(),
            inventory: self.inventory,
        }
    }
}

/// Read-only view of a book as shown to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSummary {
    pub name: String,
    pub author: String,
    pub inventory: u64,
}

impl fmt::Display for BookSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - Inventory: {}",
            self.name, self.author, self.inventory
        )
    }
}

/// Snapshot of the authenticated actor taken at login time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub role: Role,
}

/// Direction of a borrow-set update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOp {
    Add,
    Remove,
}

/// Profile view returned by `view_user_profile`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub role: Role,
    pub borrowed_books: Vec<BookKey>,
    pub currently_borrowed: usize,
}

/// Row of the admin user listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub name: String,
    pub role: Role,
    pub borrowed_count: usize,
}

/// Registered accounts broken down by role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleStats {
    pub admin: usize,
    pub user: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemStats {
    pub total_books: usize,
    pub total_users: usize,
    pub role_stats: RoleStats,
    pub current_user: String,
    pub current_role: Role,
}

/// Features compiled into this build, reported to administrators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    pub version: &'static str,
    /// `development` for debug builds, `production` otherwise.
    pub environment: &'static str,
    pub user_registration: bool,
    pub book_management: bool,
    pub borrowing_system: bool,
    pub user_profiles: bool,
}
