use std::collections::HashMap;

use tracing::{debug, info};

use crate::auth::Denial;
use crate::error::{LibraryError, Response};
use crate::models::{BookKey, BorrowOp, Role, RoleStats, Session, User, UserSummary};
use crate::notice::Notice;
use crate::validate;

/// User table plus the single session slot. Accounts are never removed, so
/// the table is an append-only vector with a name index on the side; that
/// keeps listings in registration order.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
    index: HashMap<String, usize>,
    session: Option<Session>,
}

impl UserStore {
    /// No accounts and nobody logged in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names are unique across both roles, so an admin and a user can never
    /// share one.
    pub fn register(&mut self, role: &str, name: &str, password: &str) -> Response<Notice> {
        let role = validate::validate_registration(role, name, password)?;

        if self.index.contains_key(name) {
            debug!(user = name, "registration rejected, name taken");
            return Err(LibraryError::UserAlreadyExists {
                role,
                name: name.to_string(),
            });
        }

        self.index.insert(name.to_string(), self.users.len());
        self.users.push(User::new(name, role, password));
        info!(user = name, role = role.as_str(), "user registered");

        Ok(Notice::Registered {
            role,
            name: name.to_string(),
        })
    }

    /// A successful login silently replaces whatever session was active.
    pub fn login(&mut self, name: &str, password: &str) -> Response<Notice> {
        validate::validate_login(name, password)?;

        let user = self.get(name).ok_or_else(|| LibraryError::UserNotFound {
            name: name.to_string(),
        })?;
        if user.password != password {
            debug!(user = name, "login rejected, wrong password");
            return Err(LibraryError::WrongPassword);
        }

        let session = Session {
            name: user.name.clone(),
            role: user.role,
        };
        if let Some(previous) = self.session.replace(session.clone()) {
            debug!(from = %previous.name, to = %session.name, "session replaced");
        }
        info!(user = name, role = session.role.as_str(), "user logged in");

        Ok(Notice::LoggedIn {
            role: session.role,
            name: session.name,
        })
    }

    /// Clear the session. Fails when nobody is logged in.
    pub fn logout(&mut self) -> Response<Notice> {
        let session = self.session.take().ok_or(LibraryError::NoActiveSession)?;
        info!(user = %session.name, "user logged out");
        Ok(Notice::LoggedOut)
    }

    /// Who is logged in, if anyone.
    pub fn current_user(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The active session, or `NotLoggedIn`.
    pub fn check_login(&self) -> Result<&Session, Denial> {
        self.session.as_ref().ok_or(Denial::NotLoggedIn)
    }

    /// Logged in as an admin.
    pub fn check_admin_permission(&self) -> Result<&Session, Denial> {
        self.check_role(Role::Admin)
    }

    /// Logged in as a regular user. Admins do not pass this check.
    pub fn check_user_permission(&self) -> Result<&Session, Denial> {
        self.check_role(Role::Regular)
    }

    fn check_role(&self, required: Role) -> Result<&Session, Denial> {
        let session = self.check_login()?;
        if session.role != required {
            return Err(Denial::WrongRole { required });
        }
        Ok(session)
    }

    /// Account by exact name.
    pub fn get(&self, name: &str) -> Option<&User> {
        self.index.get(name).map(|&idx| &self.users[idx])
    }

    /// Whether the name is already registered.
    pub fn exists(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Adding a key already held or removing one not held is a no-op, as is
    /// naming an unknown user.
    pub fn update_borrowed_books(&mut self, name: &str, key: &BookKey, op: BorrowOp) {
        let Some(&idx) = self.index.get(name) else {
            return;
        };
        let borrowed = &mut self.users[idx].borrowed;
        match op {
            BorrowOp::Add => {
                borrowed.insert(key.clone());
            }
            BorrowOp::Remove => {
                borrowed.remove(key);
            }
        }
    }

    /// Whether `name` currently holds `key`. Unknown users hold nothing.
    pub fn has_borrowed(&self, name: &str, key: &BookKey) -> bool {
        self.get(name).is_some_and(|user| user.borrowed.contains(key))
    }

    /// Keys held by `name`, sorted by title then author.
    pub fn borrowed_books(&self, name: &str) -> Vec<BookKey> {
        self.get(name)
            .map(|user| user.borrowed.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Every account in registration order.
    pub fn all_users(&self) -> Vec<UserSummary> {
        self.users
            .iter()
            .map(|user| UserSummary {
                name: user.name.clone(),
                role: user.role,
                borrowed_count: user.borrowed.len(),
            })
            .collect()
    }

    /// Account counts per role.
    pub fn role_stats(&self) -> RoleStats {
        let admin = self
            .users
            .iter()
            .filter(|user| user.role == Role::Admin)
            .count();
        RoleStats {
            admin,
            user: self.users.len() - admin,
            total: self.users.len(),
        }
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True until the first registration.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_alice_and_bob() -> UserStore {
        let mut store = UserStore::new();
        store.register("admin", "Alice", "password1").unwrap();
        store.register("user", "Bob", "password2").unwrap();
        store
    }

    #[test]
    fn register_then_duplicate() {
        let mut store = UserStore::new();
        let first = store.register("user", "Bob", "password1").unwrap();
        assert_eq!(first.to_string(), "User Bob successfully registered.");

        let second = store.register("admin", "Bob", "password2").unwrap_err();
        assert_eq!(second.to_string(), "Admin Bob already exists.");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn register_rejects_bad_role_and_blank_fields() {
        let mut store = UserStore::new();
        assert_eq!(
            store.register("invalid", "Charlie", "pw").unwrap_err(),
            LibraryError::InvalidRole
        );
        assert_eq!(
            store.register("user", "  ", "pw").unwrap_err(),
            LibraryError::InvalidParameters
        );
        assert!(store.is_empty());
    }

    #[test]
    fn login_failures() {
        let mut store = store_with_alice_and_bob();
        assert_eq!(
            store.login("Nobody", "pw").unwrap_err().to_string(),
            "User Nobody does not exist."
        );
        assert_eq!(
            store.login("Alice", "wrong").unwrap_err(),
            LibraryError::WrongPassword
        );
        assert!(store.current_user().is_none());
    }

    #[test]
    fn login_replaces_session_silently() {
        let mut store = store_with_alice_and_bob();
        store.login("Alice", "password1").unwrap();
        let notice = store.login("Bob", "password2").unwrap();
        assert_eq!(notice.to_string(), "User Bob successfully logged in.");
        assert_eq!(store.current_user().map(|s| s.role), Some(Role::Regular));
    }

    #[test]
    fn logout_requires_session() {
        let mut store = store_with_alice_and_bob();
        assert_eq!(store.logout().unwrap_err(), LibraryError::NoActiveSession);
        store.login("Alice", "password1").unwrap();
        assert_eq!(store.logout().unwrap(), Notice::LoggedOut);
        assert!(store.current_user().is_none());
    }

    #[test]
    fn permission_guards_report_reason() {
        let mut store = store_with_alice_and_bob();
        assert_eq!(store.check_login().unwrap_err(), Denial::NotLoggedIn);

        store.login("Bob", "password2").unwrap();
        assert_eq!(
            store.check_admin_permission().unwrap_err(),
            Denial::WrongRole {
                required: Role::Admin
            }
        );
        assert_eq!(store.check_user_permission().unwrap().name, "Bob");
    }

    #[test]
    fn borrowed_set_updates_are_idempotent() {
        let mut store = store_with_alice_and_bob();
        let key = BookKey::new("Dune", "Frank Herbert");

        store.update_borrowed_books("Bob", &key, BorrowOp::Add);
        store.update_borrowed_books("Bob", &key, BorrowOp::Add);
        assert!(store.has_borrowed("Bob", &key));
        assert_eq!(store.borrowed_books("Bob").len(), 1);

        store.update_borrowed_books("Bob", &key, BorrowOp::Remove);
        store.update_borrowed_books("Bob", &key, BorrowOp::Remove);
        assert!(!store.has_borrowed("Bob", &key));

        store.update_borrowed_books("Ghost", &key, BorrowOp::Add);
        assert!(!store.exists("Ghost"));
    }

    #[test]
    fn listing_and_stats_follow_registration_order() {
        let store = store_with_alice_and_bob();
        let names: Vec<_> = store.all_users().into_iter().map(|u| u.name).collect();
        assert_eq!(names, ["Alice", "Bob"]);
        assert_eq!(
            store.role_stats(),
            RoleStats {
                admin: 1,
                user: 1,
                total: 2
            }
        );
    }
}
