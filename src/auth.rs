//! Resource/action permission matrix evaluated against the session held by
//! the user store.
//!
//! | resource | action               | allowed                          |
//! |----------|----------------------|----------------------------------|
//! | book     | list, search         | any logged-in user               |
//! | book     | add, delete          | admin                            |
//! | book     | borrow, return       | regular user                     |
//! | user     | view_profile         | admin, or the profile's owner    |
//! | user     | manage               | admin                            |

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::models::{Role, Session};
use crate::store::UserStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Book,
    User,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Book => f.write_str("book"),
            Resource::User => f.write_str("user"),
        }
    }
}

impl FromStr for Resource {
    type Err = Denial;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "book" => Ok(Resource::Book),
            "user" => Ok(Resource::User),
            _ => Err(Denial::UnknownResource),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookAction {
    List,
    Search,
    Add,
    Delete,
    Borrow,
    Return,
}

/// A fully typed request to the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission<'a> {
    Book(BookAction),
    /// `target` names the profile being viewed; `None` means the caller's own.
    ViewProfile { target: Option<&'a str> },
    ManageUsers,
}

impl<'a> Permission<'a> {
    /// Resolve string names as a caller outside the type system would send
    /// them. Unknown names become the matching denial.
    pub fn parse(resource: &str, action: &str, target: Option<&'a str>) -> Result<Self, Denial> {
        match resource.parse::<Resource>()? {
            Resource::Book => {
                let action = match action {
                    "list" => BookAction::List,
                    "search" => BookAction::Search,
                    "add" => BookAction::Add,
                    "delete" => BookAction::Delete,
                    "borrow" => BookAction::Borrow,
                    "return" => BookAction::Return,
                    _ => {
                        return Err(Denial::UnknownAction {
                            resource: Resource::Book,
                        })
                    }
                };
                Ok(Permission::Book(action))
            }
            Resource::User => match action {
                "view_profile" => Ok(Permission::ViewProfile { target }),
                "manage" => Ok(Permission::ManageUsers),
                _ => Err(Denial::UnknownAction {
                    resource: Resource::User,
                }),
            },
        }
    }
}

/// Why a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Denial {
    #[error("Please login first.")]
    NotLoggedIn,
    #[error("{}", wrong_role_text(.required))]
    WrongRole { required: Role },
    #[error("Permission denied. Can only view your own profile.")]
    NotOwnProfile,
    #[error("Permission denied. Cannot view system configuration.")]
    ConfigRestricted,
    #[error("Unknown resource type")]
    UnknownResource,
    #[error("Unknown {resource} action")]
    UnknownAction { resource: Resource },
}

fn wrong_role_text(required: &Role) -> &'static str {
    match required {
        Role::Admin => "Permission denied. Admin role required.",
        Role::Regular => "Permission denied. Only users can perform this action.",
    }
}

/// Stateless gate. Login is checked first, so an anonymous caller always sees
/// `NotLoggedIn` whatever it asked for.
#[derive(Debug, Clone, Copy, Default)]
pub struct Authorizer;

impl Authorizer {
    pub fn check<'s>(
        &self,
        users: &'s UserStore,
        permission: Permission<'_>,
    ) -> Result<&'s Session, Denial> {
        let decision = users
            .check_login()
            .and_then(|session| Self::evaluate(session, permission).map(|()| session));
        if let Err(denial) = &decision {
            debug!(?permission, %denial, "request denied");
        }
        decision
    }

    /// String-named variant of [`Authorizer::check`].
    pub fn check_named<'s>(
        &self,
        users: &'s UserStore,
        resource: &str,
        action: &str,
        target: Option<&str>,
    ) -> Result<&'s Session, Denial> {
        let session = users.check_login()?;
        let permission = Permission::parse(resource, action, target)?;
        Self::evaluate(session, permission)?;
        Ok(session)
    }

    fn evaluate(session: &Session, permission: Permission<'_>) -> Result<(), Denial> {
        let require = |required: Role| {
            if session.role == required {
                Ok(())
            } else {
                Err(Denial::WrongRole { required })
            }
        };

        match permission {
            Permission::Book(BookAction::List | BookAction::Search) => Ok(()),
            Permission::Book(BookAction::Add | BookAction::Delete) => require(Role::Admin),
            Permission::Book(BookAction::Borrow | BookAction::Return) => require(Role::Regular),
            Permission::ViewProfile { target } => match (session.role, target) {
                (Role::Admin, _) => Ok(()),
                (Role::Regular, Some(target)) if target != session.name => {
                    Err(Denial::NotOwnProfile)
                }
                (Role::Regular, _) => Ok(()),
            },
            Permission::ManageUsers => require(Role::Admin),
        }
    }
}
