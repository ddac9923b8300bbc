//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Excise - remove a marked block from a text file into a new file
#[derive(Parser, Debug)]
#[command(name = "excise")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run an excision described by a recipe file
    ///
    /// The recipe format follows the extension: .toml, .json, .yaml or .yml.
    ///
    /// Examples:
    ///   excise run recipe.toml
    ///   excise run recipe.toml --dry-run --diff
    Run {
        /// Path to the recipe
        recipe: PathBuf,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Remove the block around literal anchors
    ///
    /// Examples:
    ///   excise anchors page.tsx -s "Unique heading" -e "{/* Next */}" --keep-end
    ///   excise anchors page.tsx -s "Unique heading" -b "<motion.h3" -b "{/* Title */}" -e "</section>"
    Anchors {
        /// File to edit
        input: PathBuf,

        /// Literal that occurs inside the block
        #[arg(short, long)]
        start: String,

        /// Literal searched backwards from the start to widen the block (repeatable)
        #[arg(short, long = "boundary")]
        boundaries: Vec<String>,

        /// Literal that closes the block
        #[arg(short, long)]
        end: String,

        /// Keep the end marker instead of removing it
        #[arg(long)]
        keep_end: bool,

        /// Widen the block to whole lines
        #[arg(long)]
        lines: bool,

        #[command(flatten)]
        replacement: ReplacementArgs,

        /// Output file (default: <INPUT>.new)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Replace every match of a spanning regular expression
    ///
    /// `.` matches newlines, so `start.*?end` spans lines.
    ///
    /// Examples:
    ///   excise pattern page.tsx --regex '\{/\* Banner \*/\}.*?</div>'
    ///   excise pattern page.tsx --regex '<aside>.*?</aside>' --limit 1
    Pattern {
        /// File to edit
        input: PathBuf,

        /// Regular expression to replace
        #[arg(long)]
        regex: String,

        /// Replace at most this many matches
        #[arg(long)]
        limit: Option<usize>,

        /// Expand $1 / ${name} capture references in the replacement
        #[arg(long)]
        expand: bool,

        #[command(flatten)]
        replacement: ReplacementArgs,

        /// Output file (default: <INPUT>.new)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   excise completions bash > ~/.local/share/bash-completion/completions/excise
    ///   excise completions zsh > ~/.zfunc/_excise
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where the replacement text comes from. Neither means remove the block.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementArgs {
    /// Replacement text
    #[arg(short, long, conflicts_with = "replacement_file")]
    pub replacement: Option<String>,

    /// File whose contents replace the block
    #[arg(long)]
    pub replacement_file: Option<PathBuf>,
}

/// Controls for how the result is written.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteArgs {
    /// Resolve and report without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Print a unified diff of the change
    #[arg(long)]
    pub diff: bool,

    /// Fail if the output file already exists
    #[arg(long)]
    pub no_clobber: bool,
}
