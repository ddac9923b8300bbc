//! Literal anchors and the options that shape a region.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::{AnchorRole, Error, Result};

/// A literal substring used to anchor a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    literal: String,
}

impl Anchor {
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.literal
    }

    /// First match at or after `from`.
    pub fn find_from(&self, document: &str, from: usize) -> Option<Range<usize>> {
        document
            .get(from..)?
            .find(&self.literal)
            .map(|pos| from + pos..from + pos + self.literal.len())
    }

    /// Last match lying entirely before `before`.
    pub fn rfind_before(&self, document: &str, before: usize) -> Option<Range<usize>> {
        document
            .get(..before)?
            .rfind(&self.literal)
            .map(|pos| pos..pos + self.literal.len())
    }

    /// Length of the line break the literal ends with, if any.
    pub(crate) fn trailing_line_break(&self) -> usize {
        if self.literal.ends_with("\r\n") {
            2
        } else if self.literal.ends_with('\n') {
            1
        } else {
            0
        }
    }
}

/// Where the region stops relative to the end anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndMode {
    /// Remove the end marker along with the block. A line break the end
    /// literal ends with is kept.
    #[default]
    Through,
    /// Stop in front of the end marker and keep it.
    Before,
}

/// How resolved offsets are widened before splicing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Use the byte offsets as resolved.
    #[default]
    Exact,
    /// Widen to whole lines.
    Lines,
}

/// The full set of anchors describing one block.
///
/// ```
/// use excise_core::{Anchors, EndMode};
///
/// let anchors = Anchors::new("Feature grid", "{/* Testimonials */}")
///     .unwrap()
///     .with_boundary("<section")
///     .unwrap()
///     .end_mode(EndMode::Before);
/// assert_eq!(anchors.boundaries().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchors {
    start: Anchor,
    boundaries: Vec<Anchor>,
    end: Anchor,
    end_mode: EndMode,
    alignment: Alignment,
}

impl Anchors {
    /// Create anchors from a start and an end literal.
    ///
    /// # Errors
    /// Returns `Error::EmptyAnchor` if either literal is empty.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        let start = start.into();
        let end = end.into();
        if start.is_empty() {
            return Err(Error::EmptyAnchor(AnchorRole::Start { literal: start }));
        }
        if end.is_empty() {
            return Err(Error::EmptyAnchor(AnchorRole::End { literal: end }));
        }
        Ok(Self {
            start: Anchor::new(start),
            boundaries: Vec::new(),
            end: Anchor::new(end),
            end_mode: EndMode::default(),
            alignment: Alignment::default(),
        })
    }

    /// Append a backward boundary. Boundaries are searched in the order
    /// they were added, each one before the previous resolved offset.
    pub fn with_boundary(mut self, literal: impl Into<String>) -> Result<Self> {
        let literal = literal.into();
        if literal.is_empty() {
            return Err(Error::EmptyAnchor(AnchorRole::Boundary {
                index: self.boundaries.len() + 1,
                literal,
            }));
        }
        self.boundaries.push(Anchor::new(literal));
        Ok(self)
    }

    pub fn end_mode(mut self, end_mode: EndMode) -> Self {
        self.end_mode = end_mode;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn start(&self) -> &Anchor {
        &self.start
    }

    pub fn boundaries(&self) -> &[Anchor] {
        &self.boundaries
    }

    pub fn end(&self) -> &Anchor {
        &self.end
    }

    pub fn get_end_mode(&self) -> EndMode {
        self.end_mode
    }

    pub fn get_alignment(&self) -> Alignment {
        self.alignment
    }

    pub(crate) fn start_role(&self) -> AnchorRole {
        AnchorRole::Start {
            literal: self.start.literal.clone(),
        }
    }

    pub(crate) fn boundary_role(&self, index: usize) -> AnchorRole {
        AnchorRole::Boundary {
            index: index + 1,
            literal: self.boundaries[index].literal.clone(),
        }
    }

    pub(crate) fn end_role(&self) -> AnchorRole {
        AnchorRole::End {
            literal: self.end.literal.clone(),
        }
    }
}
