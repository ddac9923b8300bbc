//! Excision from command-line arguments instead of a recipe

use excise_core::{Alignment, Anchors, EndMode, Pattern, SubstituteOptions};
use excise_fs::{io, path};
use std::path::{Path, PathBuf};

use super::job::{Job, Mode, Outcome, execute};
use crate::cli::{ReplacementArgs, WriteArgs};
use crate::error::Result;

/// Arguments of the `anchors` command.
#[derive(Debug, Clone, Default)]
pub struct AnchorArgs {
    pub start: String,
    pub boundaries: Vec<String>,
    pub end: String,
    pub keep_end: bool,
    pub lines: bool,
}

impl AnchorArgs {
    fn to_anchors(&self) -> Result<Anchors> {
        let end_mode = if self.keep_end {
            EndMode::Before
        } else {
            EndMode::Through
        };
        let alignment = if self.lines {
            Alignment::Lines
        } else {
            Alignment::Exact
        };
        let mut anchors = Anchors::new(self.start.as_str(), self.end.as_str())?
            .end_mode(end_mode)
            .alignment(alignment);
        for boundary in &self.boundaries {
            anchors = anchors.with_boundary(boundary.as_str())?;
        }
        Ok(anchors)
    }
}

impl ReplacementArgs {
    /// The replacement text; empty when neither source is given.
    pub fn load(&self) -> Result<String> {
        match (&self.replacement, &self.replacement_file) {
            (_, Some(file)) => Ok(io::read_text(file)?),
            (Some(text), None) => Ok(text.clone()),
            (None, None) => Ok(String::new()),
        }
    }
}

fn output_for(input: &Path, output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| path::default_output(input))
}

/// Run the `anchors` command.
pub fn run_anchors(
    input: PathBuf,
    anchors: &AnchorArgs,
    replacement: &ReplacementArgs,
    output: Option<PathBuf>,
    write: WriteArgs,
) -> Result<Outcome> {
    let job = Job {
        output: output_for(&input, output),
        input,
        replacement: replacement.load()?,
        mode: Mode::Anchors(anchors.to_anchors()?),
    };
    execute(&job, write)
}

/// Run the `pattern` command.
pub fn run_pattern(
    input: PathBuf,
    regex: &str,
    options: SubstituteOptions,
    replacement: &ReplacementArgs,
    output: Option<PathBuf>,
    write: WriteArgs,
) -> Result<Outcome> {
    let job = Job {
        output: output_for(&input, output),
        input,
        replacement: replacement.load()?,
        mode: Mode::Pattern {
            pattern: Pattern::new(regex)?,
            options,
        },
    };
    execute(&job, write)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_modes() {
        let args = AnchorArgs {
            start: "s".into(),
            end: "e".into(),
            keep_end: true,
            lines: true,
            boundaries: vec!["b".into()],
        };

        let anchors = args.to_anchors().unwrap();

        assert_eq!(anchors.get_end_mode(), EndMode::Before);
        assert_eq!(anchors.get_alignment(), Alignment::Lines);
        assert_eq!(anchors.boundaries().len(), 1);
    }

    #[test]
    fn missing_replacement_means_removal() {
        assert_eq!(ReplacementArgs::default().load().unwrap(), "");
    }

    #[test]
    fn default_output_appends_new() {
        assert_eq!(
            output_for(Path::new("page.tsx"), None),
            PathBuf::from("page.tsx.new")
        );
        assert_eq!(
            output_for(Path::new("page.tsx"), Some(PathBuf::from("fixed.tsx"))),
            PathBuf::from("fixed.tsx")
        );
    }
}
