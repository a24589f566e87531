//! Command-line and environment configuration for the `lms` binary.

use clap::Parser;

use crate::messages::Locale;
use crate::shell::ShellConfig;

/// Interactive library management shell
#[derive(Parser, Debug)]
#[command(name = "lms")]
#[command(about = "In-memory library catalog with role-based borrowing")]
#[command(version)]
pub struct Args {
    /// Language of replies
    #[arg(long, value_enum, env = "LMS_LANG", default_value = "en")]
    pub lang: Locale,

    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

/// Resolved settings the binary runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub shell: ShellConfig,
    pub log_level: String,
}

impl Config {
    /// `no_color_env` is whether `NO_COLOR` is set; `is_tty` whether stdout
    /// is a terminal. Colour needs both a terminal and no opt-out.
    pub fn from_args(args: Args, no_color_env: bool, is_tty: bool) -> Self {
        Self {
            shell: ShellConfig {
                locale: args.lang,
                color: !args.no_color && !no_color_env && is_tty,
            },
            log_level: args.log_level,
        }
    }
}
