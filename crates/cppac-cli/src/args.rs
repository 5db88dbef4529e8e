use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::io::IsTerminal;
use std::path::PathBuf;

use cppac_common::HostPosition;

/// CLI arguments for the cppac binary.
#[derive(Parser, Debug)]
#[command(
    name = "cppac",
    version,
    about = "Semantic identifier and member completion for C and C++ sources"
)]
pub struct CliArgs {
    /// Project root. Relative paths and `"..."` includes resolve against it.
    /// Defaults to the current directory.
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Path to a config file. Defaults to `cppac.json` in the project root,
    /// when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory `<...>` includes resolve against. Overrides the config file.
    #[arg(long = "include-root", global = true)]
    pub include_root: Option<String>,

    /// When to color output.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print completion suggestions for a caret.
    Complete {
        file: String,

        /// 1-based line of the caret.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        line: u32,

        /// Caret column: the number of characters to the left of the caret.
        #[arg(long)]
        column: u32,

        /// Print suggestions as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the syntax tree outline and include directives of a document.
    Dump { file: String },

    /// Print the include tree of a document.
    Includes {
        file: String,

        /// Print the tree as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        }
    }
}

/// A caret in a file, as given on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaretLocation {
    pub file: String,
    /// 1-based.
    pub line: u32,
    pub column: u32,
}

impl CaretLocation {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        CaretLocation {
            file: file.into(),
            line,
            column,
        }
    }

    pub fn host_position(&self) -> HostPosition {
        HostPosition::new(self.line.saturating_sub(1), self.column)
    }
}

impl fmt::Display for CaretLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[cfg(test)]
#[path = "../tests/args_tests.rs"]
mod args_tests;
