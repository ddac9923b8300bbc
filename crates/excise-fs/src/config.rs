//! Recipe loading
//!
//! A recipe describes one excision run. Format is detected from the file
//! extension (`.toml`, `.json`, `.yaml`/`.yml`); relative paths inside it
//! resolve against the directory holding the recipe.

use excise_core::{Alignment, Anchors, EndMode, Pattern, SubstituteOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{Error, Result, io, path};

/// One excision run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    /// Document to edit
    pub input: PathBuf,
    /// Where to write the result (default: `<input>.new`)
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Inline replacement text
    #[serde(default)]
    pub replacement: Option<String>,
    /// File whose contents replace the block
    #[serde(default)]
    pub replacement_file: Option<PathBuf>,
    #[serde(default)]
    pub anchors: Option<AnchorSpec>,
    #[serde(default)]
    pub pattern: Option<PatternSpec>,
}

/// Literal anchors for anchor mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnchorSpec {
    pub start: String,
    #[serde(default)]
    pub boundaries: Vec<String>,
    pub end: String,
    #[serde(default)]
    pub end_mode: EndMode,
    #[serde(default)]
    pub align: Alignment,
}

impl AnchorSpec {
    pub fn to_anchors(&self) -> Result<Anchors> {
        let mut anchors = Anchors::new(self.start.as_str(), self.end.as_str())?
            .end_mode(self.end_mode)
            .alignment(self.align);
        for boundary in &self.boundaries {
            anchors = anchors.with_boundary(boundary.as_str())?;
        }
        Ok(anchors)
    }
}

/// A spanning regular expression for pattern mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternSpec {
    pub regex: String,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub expand: bool,
}

impl PatternSpec {
    pub fn to_pattern(&self) -> Result<Pattern> {
        Ok(Pattern::new(&self.regex)?)
    }

    pub fn options(&self) -> SubstituteOptions {
        SubstituteOptions {
            limit: self.limit,
            expand: self.expand,
        }
    }
}

/// The marker kind a recipe selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    Anchors(&'a AnchorSpec),
    Pattern(&'a PatternSpec),
}

impl Recipe {
    /// The single operation this recipe describes.
    ///
    /// # Errors
    /// Returns `Error::InvalidRecipe` unless exactly one of `anchors` and
    /// `pattern` is set.
    pub fn operation(&self) -> Result<Operation<'_>> {
        match (&self.anchors, &self.pattern) {
            (Some(anchors), None) => Ok(Operation::Anchors(anchors)),
            (None, Some(pattern)) => Ok(Operation::Pattern(pattern)),
            (Some(_), Some(_)) => Err(Error::invalid_recipe(
                "set either [anchors] or [pattern], not both",
            )),
            (None, None) => Err(Error::invalid_recipe("missing [anchors] or [pattern]")),
        }
    }

    /// Check that the recipe is internally consistent.
    pub fn validate(&self) -> Result<()> {
        self.operation()?;
        if self.replacement.is_some() && self.replacement_file.is_some() {
            return Err(Error::invalid_recipe(
                "set either replacement or replacement_file, not both",
            ));
        }
        Ok(())
    }

    /// The output path, defaulting to `<input>.new`.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| path::default_output(&self.input))
    }

    /// The replacement text, reading `replacement_file` if set.
    /// No replacement at all means the block is removed.
    pub fn load_replacement(&self) -> Result<String> {
        match (&self.replacement, &self.replacement_file) {
            (_, Some(file)) => io::read_text(file),
            (Some(text), None) => Ok(text.clone()),
            (None, None) => Ok(String::new()),
        }
    }

    /// Make every relative path absolute with respect to `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        self.input = path::resolve_against(base, &self.input);
        if let Some(output) = &self.output {
            self.output = Some(path::resolve_against(base, output));
        }
        if let Some(file) = &self.replacement_file {
            self.replacement_file = Some(path::resolve_against(base, file));
        }
    }
}

/// Parse a recipe from text in the given format (`toml`, `json`, `yaml`).
pub fn parse_recipe(content: &str, format: &str, origin: &Path) -> Result<Recipe> {
    let parse_error = |format: &str, message: String| Error::ConfigParse {
        path: origin.to_path_buf(),
        format: format.into(),
        message,
    };

    let recipe: Recipe = match format.to_lowercase().as_str() {
        "toml" => toml::from_str(content).map_err(|e| parse_error("TOML", e.to_string()))?,
        "json" => {
            serde_json::from_str(content).map_err(|e| parse_error("JSON", e.to_string()))?
        }
        "yaml" | "yml" => {
            serde_yaml::from_str(content).map_err(|e| parse_error("YAML", e.to_string()))?
        }
        _ => {
            return Err(Error::UnsupportedFormat {
                extension: format.to_string(),
            });
        }
    };

    recipe.validate()?;
    Ok(recipe)
}

/// Load and validate a recipe from `path`.
pub fn load_recipe(path: &Path) -> Result<Recipe> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    let content = io::read_text(path)?;
    let mut recipe = parse_recipe(&content, extension, path)?;

    if let Some(base) = path.parent() {
        recipe.resolve_paths(base);
    }
    debug!(recipe = %path.display(), input = %recipe.input.display(), "loaded recipe");
    Ok(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_toml_recipe() {
        let recipe = parse_recipe(
            r#"
input = "page.tsx"

[anchors]
start = "S"
end = "E"
"#,
            "toml",
            Path::new("recipe.toml"),
        )
        .unwrap();

        assert_eq!(recipe.output_path(), PathBuf::from("page.tsx.new"));
        assert_eq!(recipe.load_replacement().unwrap(), "");
        assert!(matches!(recipe.operation().unwrap(), Operation::Anchors(_)));
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let err = parse_recipe("", "ini", Path::new("recipe.ini")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }
}
