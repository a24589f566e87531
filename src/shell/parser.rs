//! Turns one input line into a [`Command`]. Arity and verb errors stop here
//! and never reach the library core.

use thiserror::Error;

use crate::error::LibraryError;
use crate::messages::{Locale, Localize, ShellText};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register {
        role: String,
        name: String,
        password: String,
    },
    Login {
        name: String,
        password: String,
    },
    Logout,
    List,
    Search {
        name: String,
        author: String,
    },
    Add {
        name: String,
        author: String,
        amount: i64,
    },
    Delete {
        name: String,
        author: String,
    },
    Borrow {
        name: String,
        author: String,
    },
    Return {
        name: String,
        author: String,
    },
    WhoAmI,
    Profile(Option<String>),
    Users,
    Stats,
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("Invalid command. Type \"help\" for available commands.")]
    InvalidCommand,
    /// The amount token is not an integer. Reported with the same wording the
    /// core uses for a non-positive amount.
    #[error("{}", LibraryError::AmountMustBePositive)]
    InvalidAmount,
}

impl Localize for ShellError {
    fn localize(&self, locale: Locale) -> String {
        match self {
            ShellError::InvalidCommand => ShellText::InvalidCommand.localize(locale),
            ShellError::InvalidAmount => LibraryError::AmountMustBePositive.localize(locale),
        }
    }
}

/// Verb, argument list and one-line description for every command.
pub const USAGE: &[(&str, &str)] = &[
    (
        "register <role> <name> <password>",
        "Register a new user with role (admin/user), name and password",
    ),
    ("login <name> <password>", "Login with name and password"),
    ("logout", "Logout"),
    ("list", "List all books"),
    ("search <bookName> <author>", "Search book by book name and author"),
    ("add <bookName> <author> <amount>", "Add book inventory by book name and author"),
    ("delete <bookName> <author>", "Delete book by name and author"),
    ("borrow <bookName> <author>", "Borrow book by book name and author"),
    ("return <bookName> <author>", "Return book by book name and author"),
    ("whoami", "Show the logged-in user"),
    ("profile [name]", "Show a user profile (your own by default)"),
    ("users", "List all users (admin only)"),
    ("stats", "Show library statistics"),
    ("help", "Display help for commands"),
    ("exit", "Leave the shell"),
];

/// Split a line on whitespace, keeping quoted runs together. Either quote
/// character opens a run that only the same character closes; an explicitly
/// quoted empty string survives as an empty argument.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut quoted = false;

    for ch in line.chars() {
        match quote {
            Some(open) if ch == open => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                quoted = true;
            }
            None if ch.is_whitespace() => {
                if !current.is_empty() || quoted {
                    args.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            None => current.push(ch),
        }
    }

    if !current.is_empty() || quoted {
        args.push(current);
    }
    args
}

pub fn parse(line: &str) -> Result<Command, ShellError> {
    let mut args = tokenize(line).into_iter();
    let verb = args.next().ok_or(ShellError::InvalidCommand)?;
    let rest: Vec<String> = args.collect();

    let command = match (verb.as_str(), rest.as_slice()) {
        ("register", [role, name, password]) => Command::Register {
            role: role.clone(),
            name: name.clone(),
            password: password.clone(),
        },
        ("login", [name, password]) => Command::Login {
            name: name.clone(),
            password: password.clone(),
        },
        ("logout", []) => Command::Logout,
        ("list", []) => Command::List,
        ("search", [name, author]) => Command::Search {
            name: name.clone(),
            author: author.clone(),
        },
        ("add", [name, author, amount]) => Command::Add {
            name: name.clone(),
            author: author.clone(),
            amount: amount
                .trim()
                .parse()
                .map_err(|_| ShellError::InvalidAmount)?,
        },
        ("delete", [name, author]) => Command::Delete {
            name: name.clone(),
            author: author.clone(),
        },
        ("borrow", [name, author]) => Command::Borrow {
            name: name.clone(),
            author: author.clone(),
        },
        ("return", [name, author]) => Command::Return {
            name: name.clone(),
            author: author.clone(),
        },
        ("whoami", []) => Command::WhoAmI,
        ("profile", []) => Command::Profile(None),
        ("profile", [name]) => Command::Profile(Some(name.clone())),
        ("users", []) => Command::Users,
        ("stats", []) => Command::Stats,
        ("help", []) => Command::Help,
        ("exit", []) => Command::Exit,
        _ => return Err(ShellError::InvalidCommand),
    };
    Ok(command)
}
