use crossterm::style::Stylize;

use crate::messages::{Locale, Localize};
use crate::models::{Session, SystemStats, UserProfile, UserSummary};

/// How a reply should be coloured. Picked from the outcome variant, never
/// from the reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Plain,
}

/// One block of text ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub tone: Tone,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
        }
    }

    /// Localize an outcome and tag it by its variant.
    pub fn from_outcome<T: Localize, E: Localize>(outcome: &Result<T, E>, locale: Locale) -> Self {
        match outcome {
            Ok(value) => Self {
                text: value.localize(locale),
                tone: Tone::Success,
            },
            Err(err) => Self::failure(err, locale),
        }
    }

    pub fn failure<E: Localize>(err: &E, locale: Locale) -> Self {
        Self {
            text: err.localize(locale),
            tone: Tone::Failure,
        }
    }

    /// Final string, with ANSI styling when `color` is set.
    pub fn paint(&self, color: bool) -> String {
        if !color {
            return self.text.clone();
        }
        match self.tone {
            Tone::Success => self.text.clone().green().to_string(),
            Tone::Failure => self.text.clone().red().to_string(),
            Tone::Plain => self.text.clone(),
        }
    }
}

pub(crate) fn session_line(session: &Session, locale: Locale) -> String {
    match locale {
        Locale::En => format!("{} ({})", session.name, session.role.as_str()),
        Locale::Zh => format!("{}（{}）", session.name, session.role.as_str()),
    }
}

pub(crate) fn profile_lines(profile: &UserProfile, locale: Locale) -> String {
    let (name, role, borrowed) = match locale {
        Locale::En => ("Name", "Role", "Borrowed"),
        Locale::Zh => ("用户名", "角色", "已借阅"),
    };
    let mut text = format!(
        "{name}: {}\n{role}: {}\n{borrowed}: {}",
        profile.name,
        profile.role.as_str(),
        profile.currently_borrowed
    );
    for key in &profile.borrowed_books {
        text.push_str(&format!("\n  {key}"));
    }
    text
}

pub(crate) fn user_table(users: &[UserSummary], locale: Locale) -> String {
    let header = match locale {
        Locale::En => "User List:",
        Locale::Zh => "用户列表：",
    };
    let mut text = header.to_string();
    for user in users {
        text.push_str(&format!(
            "\n{} - {} - {}",
            user.name,
            user.role.as_str(),
            user.borrowed_count
        ));
    }
    text
}

pub(crate) fn stats_lines(stats: &SystemStats, locale: Locale) -> String {
    let labels = match locale {
        Locale::En => ["Total books", "Total users", "Admins", "Users", "Current user"],
        Locale::Zh => ["图书总数", "用户总数", "管理员", "普通用户", "当前用户"],
    };
    format!(
        "{}: {}\n{}: {}\n{}: {}\n{}: {}\n{}: {} ({})",
        labels[0],
        stats.total_books,
        labels[1],
        stats.total_users,
        labels[2],
        stats.role_stats.admin,
        labels[3],
        stats.role_stats.user,
        labels[4],
        stats.current_user,
        stats.current_role.as_str()
    )
}
