//! Line-oriented front end. Reads a command per line, runs it against the
//! [`LibraryService`] and prints whatever the core returned.

mod parser;
mod render;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::messages::{Locale, Localize, ShellText};
use crate::service::LibraryService;

pub use parser::{parse, tokenize, Command, ShellError, USAGE};
pub use render::{Reply, Tone};

const PROMPT: &str = "$ ";

/// Presentation settings for one shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellConfig {
    pub locale: Locale,
    pub color: bool,
}

pub struct Shell<R, W> {
    library: LibraryService,
    config: ShellConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(library: LibraryService, config: ShellConfig, input: R, output: W) -> Self {
        Self {
            library,
            config,
            input,
            output,
        }
    }

    /// Print the banner and keep executing lines until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let welcome = ShellText::Welcome.localize(self.config.locale);
        self.print(&Reply::plain(welcome))?;

        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}").context("failed to write prompt")?;
            self.output.flush().context("failed to flush prompt")?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read command")?;
            if read == 0 {
                writeln!(self.output).context("failed to write newline")?;
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let reply = match parse(trimmed) {
                Ok(Command::Exit) => break,
                Ok(command) => self.execute(command),
                Err(err) => {
                    debug!(input = trimmed, %err, "unparseable command");
                    Reply::failure(&err, self.config.locale)
                }
            };
            self.print(&reply)?;
        }

        let goodbye = ShellText::Goodbye.localize(self.config.locale);
        self.print(&Reply::plain(goodbye))
    }

    /// Run one parsed command against the library.
    pub fn execute(&mut self, command: Command) -> Reply {
        let locale = self.config.locale;
        let library = &mut self.library;

        let outcome = match command {
            Command::Register {
                role,
                name,
                password,
            } => library.register(&role, &name, &password),
            Command::Login { name, password } => library.login(&name, &password),
            Command::Logout => library.logout(),
            Command::List => library.list_books(),
            Command::Search { name, author } => library.search_book(&name, &author),
            Command::Add {
                name,
                author,
                amount,
            } => library.add_book(&name, &author, amount),
            Command::Delete { name, author } => library.delete_book(&name, &author),
            Command::Borrow { name, author } => library.borrow_book(&name, &author),
            Command::Return { name, author } => library.return_book(&name, &author),
            Command::WhoAmI => {
                return match library.current_user() {
                    Some(session) => Reply::plain(render::session_line(session, locale)),
                    None => Reply::plain(ShellText::NotLoggedIn.localize(locale)),
                };
            }
            Command::Profile(target) => {
                return match library.view_user_profile(target.as_deref()) {
                    Ok(profile) => Reply::plain(render::profile_lines(&profile, locale)),
                    Err(err) => Reply::failure(&err, locale),
                };
            }
            Command::Users => {
                return match library.list_users() {
                    Ok(users) => Reply::plain(render::user_table(&users, locale)),
                    Err(err) => Reply::failure(&err, locale),
                };
            }
            Command::Stats => {
                return match library.system_stats() {
                    Ok(stats) => Reply::plain(render::stats_lines(&stats, locale)),
                    Err(err) => Reply::failure(&err, locale),
                };
            }
            Command::Help => return Reply::plain(help_text(locale)),
            Command::Exit => return Reply::plain(ShellText::Goodbye.localize(locale)),
        };

        Reply::from_outcome(&outcome, locale)
    }

    pub fn library(&self) -> &LibraryService {
        &self.library
    }

    /// Hand back the writer, typically to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }

    fn print(&mut self, reply: &Reply) -> Result<()> {
        writeln!(self.output, "{}", reply.paint(self.config.color))
            .context("failed to write reply")
    }
}

fn help_text(locale: Locale) -> String {
    let width = USAGE.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    let mut text = ShellText::HelpHeader.localize(locale);
    for (usage, description) in USAGE {
        text.push_str(&format!("\n  {usage:<width$}  {description}"));
    }
    text
}
