use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// 默认窗口大小（匹配前后各一半）
pub const DEFAULT_LIMIT: usize = 100;

#[derive(Parser, Debug)]
#[command(
    name = "git-needle",
    version,
    about = "Search the full history of a git repository for a literal string",
    long_about = crate::docs::USAGE
)]
pub struct Args {
    /// Repository to search (defaults to the current directory)
    #[arg(short = 'C', long = "repo", value_name = "PATH", global = true)]
    pub repo: Option<PathBuf>,

    /// Do not emphasise matches with color
    #[arg(long = "no-color", global = true, default_value_t = false)]
    pub no_color: bool,

    /// More logging on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search file contents or diffs of past commits
    #[command(disable_help_flag = true)]
    Search(SearchArgs),

    /// List commits that added or removed a string (git log -S)
    Log(LogArgs),

    /// Print documentation generated from the usage text
    Doc(DocArgs),
}

// -h is --hash here, so only the long help flag is available
#[derive(ClapArgs, Debug, Default)]
pub struct SearchArgs {
    /// Words of the search string, joined with single spaces
    #[arg(value_name = "STRING")]
    pub string: Vec<String>,

    /// Characters of context around the first match; 0 shows the rest of the text
    #[arg(short = 'l', long = "limit", value_name = "N", default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Show the whole file or diff instead of a window
    #[arg(short = 'a', long = "all", default_value_t = false)]
    pub all: bool,

    /// Search commit diffs instead of file contents
    #[arg(short = 'd', long = "diff", default_value_t = false)]
    pub diff: bool,

    /// Borderless tables without padding
    #[arg(short = 'r', long = "raw", default_value_t = false)]
    pub raw: bool,

    /// Commit to inspect; give twice (newer, older) for a range
    #[arg(short = 'h', long = "hash", value_name = "HASH", action = ArgAction::Append)]
    pub hashes: Vec<String>,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl SearchArgs {
    pub fn needle(&self) -> String {
        self.string.join(" ")
    }
}

#[derive(ClapArgs, Debug)]
pub struct LogArgs {
    /// String whose occurrences changed
    #[arg(value_name = "STRING", required = true)]
    pub string: String,
}

#[derive(ClapArgs, Debug)]
pub struct DocArgs {
    /// Document title
    #[arg(long = "title", value_name = "T", default_value = crate::docs::DEFAULT_TITLE)]
    pub title: String,

    /// Include a table of contents
    #[arg(long = "toc", default_value_t = false)]
    pub toc: bool,

    /// Write to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}
