//! Recipe-driven excision

use excise_fs::{Operation, Recipe, load_recipe};
use std::path::Path;
use tracing::debug;

use super::job::{Job, Mode, Outcome, execute};
use crate::cli::WriteArgs;
use crate::error::{CliError, Result};

/// Build the job a recipe describes.
pub fn job_from_recipe(recipe: &Recipe) -> Result<Job> {
    let mode = match recipe.operation()? {
        Operation::Anchors(spec) => Mode::Anchors(spec.to_anchors()?),
        Operation::Pattern(spec) => Mode::Pattern {
            pattern: spec.to_pattern()?,
            options: spec.options(),
        },
    };

    Ok(Job {
        input: recipe.input.clone(),
        output: recipe.output_path(),
        replacement: recipe.load_replacement()?,
        mode,
    })
}

/// Run the recipe at `recipe_path`.
pub fn run_recipe(recipe_path: &Path, write: WriteArgs) -> Result<Outcome> {
    if !recipe_path.is_file() {
        return Err(CliError::user(format!(
            "recipe not found: {}",
            recipe_path.display()
        )));
    }
    let recipe = load_recipe(recipe_path)?;
    let job = job_from_recipe(&recipe)?;
    debug!(input = %job.input.display(), output = %job.output.display(), "running recipe");
    execute(&job, write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn recipe_with_replacement_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("page.tsx"),
            "<main>\n  {/* Old */}\n  <Old />\n  {/* Next */}\n</main>\n",
        )
        .unwrap();
        fs::write(dir.path().join("section.jsx"), "{/* New */}\n  <New />\n  ").unwrap();
        fs::write(
            dir.path().join("recipe.toml"),
            r#"
input = "page.tsx"
replacement_file = "section.jsx"

[anchors]
start = "{/* Old */}"
end = "{/* Next */}"
end_mode = "before"
"#,
        )
        .unwrap();

        let outcome = run_recipe(&dir.path().join("recipe.toml"), WriteArgs::default()).unwrap();

        assert!(matches!(outcome, Outcome::Excised { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join("page.tsx.new")).unwrap(),
            "<main>\n  {/* New */}\n  <New />\n  {/* Next */}\n</main>\n"
        );
    }

    #[test]
    fn missing_recipe_is_a_user_error() {
        let dir = TempDir::new().unwrap();

        let err = run_recipe(&dir.path().join("nope.toml"), WriteArgs::default()).unwrap_err();

        assert!(matches!(err, CliError::User { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn pattern_recipe_counts_matches() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("page.tsx"), "a<i>1</i>b<i>2</i>c").unwrap();
        fs::write(
            dir.path().join("recipe.json"),
            r#"{ "input": "page.tsx", "output": "page_fixed.tsx", "pattern": { "regex": "<i>.*?</i>" } }"#,
        )
        .unwrap();

        let outcome = run_recipe(&dir.path().join("recipe.json"), WriteArgs::default()).unwrap();

        assert_eq!(outcome, Outcome::Substituted { count: 2 });
        assert_eq!(
            fs::read_to_string(dir.path().join("page_fixed.tsx")).unwrap(),
            "abc"
        );
    }
}
