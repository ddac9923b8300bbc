//! A fully resolved excision job and its execution

use colored::Colorize;
use excise_core::{Anchors, Pattern, Region, SubstituteOptions, excise, substitute};
use excise_fs::{io, path};
use std::path::PathBuf;
use tracing::info;

use super::diff;
use crate::cli::WriteArgs;
use crate::error::Result;

/// How the block is found.
#[derive(Debug, Clone)]
pub enum Mode {
    Anchors(Anchors),
    Pattern {
        pattern: Pattern,
        options: SubstituteOptions,
    },
}

/// Everything needed for one run.
#[derive(Debug, Clone)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub replacement: String,
    pub mode: Mode,
}

/// What a run changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Excised { region: Region },
    Substituted { count: usize },
}

/// Execute `job`: read, transform, and (unless dry-run) write the output.
///
/// Nothing is written when any anchor fails to resolve or a pattern
/// matches nothing.
pub fn execute(job: &Job, write: WriteArgs) -> Result<Outcome> {
    path::ensure_distinct(&job.input, &job.output)?;
    if write.no_clobber && !write.dry_run {
        path::ensure_absent(&job.output)?;
    }

    let document = io::read_text(&job.input)?;

    let (text, outcome) = match &job.mode {
        Mode::Anchors(anchors) => {
            let excision = excise(&document, anchors, &job.replacement)?;
            (
                excision.text,
                Outcome::Excised {
                    region: excision.region,
                },
            )
        }
        Mode::Pattern { pattern, options } => {
            let substitution =
                substitute(&document, pattern, &job.replacement, *options).require_match()?;
            (
                substitution.text,
                Outcome::Substituted {
                    count: substitution.count,
                },
            )
        }
    };

    if write.diff {
        print!(
            "{}",
            diff::render(
                &document,
                &text,
                &job.input.display().to_string(),
                &job.output.display().to_string(),
            )
        );
    }

    if write.dry_run {
        report(job, &outcome, false);
        return Ok(outcome);
    }

    io::write_text(&job.output, &text)?;
    info!(output = %job.output.display(), "output written");
    report(job, &outcome, true);
    Ok(outcome)
}

fn report(job: &Job, outcome: &Outcome, written: bool) {
    let what = match outcome {
        Outcome::Excised { region } => format!("excised {region}"),
        Outcome::Substituted { count } => format!(
            "replaced {count} match{}",
            if *count == 1 { "" } else { "es" }
        ),
    };
    if written {
        println!(
            "{} {} from {} -> {}",
            "✓".green().bold(),
            what,
            job.input.display(),
            job.output.display().to_string().cyan()
        );
    } else {
        println!(
            "{} would have {} from {} (dry run, nothing written)",
            "○".yellow().bold(),
            what,
            job.input.display()
        );
    }
}
