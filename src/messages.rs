//! The two bundled message sets. English is the canonical wording and comes
//! straight from the `Display` impls; the Chinese set is kept here so both
//! languages sit next to each other.

use clap::ValueEnum;

use crate::auth::{Denial, Resource};
use crate::error::LibraryError;
use crate::models::Role;
use crate::notice::Notice;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// Render an outcome in the requested language.
pub trait Localize {
    fn localize(&self, locale: Locale) -> String;
}

fn role_zh(role: Role) -> &'static str {
    match role {
        Role::Admin => "管理员",
        Role::Regular => "用户",
    }
}

impl Localize for Notice {
    fn localize(&self, locale: Locale) -> String {
        if locale == Locale::En {
            return self.to_string();
        }
        match self {
            Notice::Registered { role, name } => format!("{}{name}注册成功。", role_zh(*role)),
            Notice::LoggedIn { role, name } => format!("{}{name}登录成功。", role_zh(*role)),
            Notice::LoggedOut => "已成功退出登录。".to_string(),
            Notice::BookAdded {
                name,
                author,
                amount,
            } => format!("图书《{name}》（{author}）添加成功，库存：{amount}。"),
            Notice::InventoryUpdated { name, inventory } => {
                format!("图书《{name}》库存更新成功，新库存：{inventory}。")
            }
            Notice::BookDeleted { name, author } => format!("图书《{name}》（{author}）已删除。"),
            Notice::Borrowed { name } => format!("图书《{name}》借阅成功。"),
            Notice::Returned { name } => format!("图书《{name}》归还成功。"),
            Notice::EmptyCatalog => "图书馆暂无图书。".to_string(),
            Notice::Catalog(books) => {
                let mut text = String::from("图书列表：");
                for book in books {
                    text.push_str(&format!(
                        "\n{} - {} - 库存：{}",
                        book.name, book.author, book.inventory
                    ));
                }
                text
            }
            Notice::Found(book) => {
                format!("{} - {} - 库存：{}", book.name, book.author, book.inventory)
            }
        }
    }
}

impl Localize for Denial {
    fn localize(&self, locale: Locale) -> String {
        if locale == Locale::En {
            return self.to_string();
        }
        match self {
            Denial::NotLoggedIn => "请先登录。".to_string(),
            Denial::WrongRole {
                required: Role::Admin,
            } => "权限不足，需要管理员角色。".to_string(),
            Denial::WrongRole {
                required: Role::Regular,
            } => "权限不足，只有普通用户可以执行此操作。".to_string(),
            Denial::NotOwnProfile => "权限不足，只能查看自己的信息。".to_string(),
            Denial::ConfigRestricted => "权限不足，无法查看系统配置。".to_string(),
            Denial::UnknownResource => "未知的资源类型".to_string(),
            Denial::UnknownAction {
                resource: Resource::Book,
            } => "未知的图书操作".to_string(),
            Denial::UnknownAction {
                resource: Resource::User,
            } => "未知的用户操作".to_string(),
        }
    }
}

impl Localize for LibraryError {
    fn localize(&self, locale: Locale) -> String {
        if locale == Locale::En {
            return self.to_string();
        }
        match self {
            LibraryError::InvalidRole => "角色无效，必须为 \"admin\" 或 \"user\"。".to_string(),
            LibraryError::InvalidParameters => "参数无效。".to_string(),
            LibraryError::AmountMustBePositive => "数量必须为正整数。".to_string(),
            LibraryError::UserAlreadyExists { role, name } => {
                format!("{}{name}已存在。", role_zh(*role))
            }
            LibraryError::UserNotFound { name } => format!("用户{name}不存在。"),
            LibraryError::WrongPassword => "密码错误。".to_string(),
            LibraryError::NoActiveSession => "当前没有用户登录。".to_string(),
            LibraryError::Denied(denial) => denial.localize(locale),
            LibraryError::BookNotFound { name, author } => {
                format!("未找到图书《{name}》（{author}）。")
            }
            LibraryError::BookCurrentlyBorrowed { name } => {
                format!("图书《{name}》正在被借阅，无法删除。")
            }
            LibraryError::OutOfStock { name } => format!("图书《{name}》暂无库存可借。"),
            LibraryError::InventoryOverflow { name, amount } => {
                format!("无法为《{name}》增加{amount}本，库存已达上限。")
            }
            LibraryError::AlreadyBorrowed { name, author } => {
                format!("你已经借阅了《{name}》（{author}）。")
            }
            LibraryError::NotBorrowed { name, author } => {
                format!("你没有借阅《{name}》（{author}）。")
            }
        }
    }
}

/// Fixed strings printed by the shell itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellText {
    Welcome,
    Goodbye,
    InvalidCommand,
    NotLoggedIn,
    HelpHeader,
}

impl Localize for ShellText {
    fn localize(&self, locale: Locale) -> String {
        let text = match (self, locale) {
            (ShellText::Welcome, Locale::En) => {
                "Welcome to Library Management System, please input your command (input exit to exit):"
            }
            (ShellText::Welcome, Locale::Zh) => "欢迎使用图书管理系统，请输入命令（输入 exit 退出）：",
            (ShellText::Goodbye, Locale::En) => "See you next time!",
            (ShellText::Goodbye, Locale::Zh) => "下次再见！",
            (ShellText::InvalidCommand, Locale::En) => {
                "Invalid command. Type \"help\" for available commands."
            }
            (ShellText::InvalidCommand, Locale::Zh) => "无效命令，输入 \"help\" 查看可用命令。",
            (ShellText::NotLoggedIn, Locale::En) => "No user is currently logged in.",
            (ShellText::NotLoggedIn, Locale::Zh) => "当前没有用户登录。",
            (ShellText::HelpHeader, Locale::En) => "Available commands:",
            (ShellText::HelpHeader, Locale::Zh) => "可用命令：",
        };
        text.to_string()
    }
}
