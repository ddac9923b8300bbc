//! Anchor-mode excision: locate a region and splice in a replacement.

use tracing::debug;

use crate::anchor::{Alignment, Anchors, EndMode};
use crate::error::{Error, Result};
use crate::region::{self, Region};

/// The outcome of a successful excision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excision {
    /// The edited document
    pub text: String,
    /// Region of the original document that was replaced
    pub region: Region,
    /// The text that was removed
    pub removed: String,
}

/// Resolve the region described by `anchors` without modifying anything.
///
/// Resolution order:
/// 1. the first occurrence of the start anchor;
/// 2. each boundary anchor, searched backwards from the current start;
/// 3. the first occurrence of the end anchor at or after the start anchor,
///    which must begin strictly after it;
/// 4. end mode and alignment adjustments.
///
/// # Errors
/// Returns `Error::NotFound` naming the first anchor that could not be
/// resolved.
pub fn locate(document: &str, anchors: &Anchors) -> Result<Region> {
    let primary = anchors
        .start()
        .find_from(document, 0)
        .ok_or_else(|| Error::NotFound(anchors.start_role()))?;
    debug!(offset = primary.start, "start anchor resolved");

    let mut start = primary.start;
    for (index, boundary) in anchors.boundaries().iter().enumerate() {
        let found = boundary
            .rfind_before(document, start)
            .ok_or_else(|| Error::NotFound(anchors.boundary_role(index)))?;
        debug!(index = index + 1, offset = found.start, "boundary anchor resolved");
        start = found.start;
    }

    let end_match = anchors
        .end()
        .find_from(document, primary.start)
        .filter(|found| found.start > primary.start)
        .ok_or_else(|| Error::NotFound(anchors.end_role()))?;
    debug!(offset = end_match.start, "end anchor resolved");

    let mut end = match anchors.get_end_mode() {
        EndMode::Through => end_match.end - anchors.end().trailing_line_break(),
        EndMode::Before => end_match.start,
    };

    if anchors.get_alignment() == Alignment::Lines {
        start = region::line_start(document, start);
        end = match anchors.get_end_mode() {
            EndMode::Through => region::next_line_start(document, end),
            // The end marker's whole line is kept.
            EndMode::Before => region::line_start(document, end).max(start),
        };
    }

    Ok(Region::new(document, start..end))
}

/// Replace the block described by `anchors` with `replacement`.
///
/// Everything outside the resolved region is preserved byte-for-byte.
///
/// # Example
/// ```
/// use excise_core::{Anchors, excise};
///
/// let doc = "A\n<!--start-->\nTARGET\n<!--end-->\nB\n";
/// let anchors = Anchors::new("<!--start-->", "<!--end-->\n").unwrap();
/// let excision = excise(doc, &anchors, "").unwrap();
/// assert_eq!(excision.text, "A\n\nB\n");
/// ```
pub fn excise(document: &str, anchors: &Anchors, replacement: &str) -> Result<Excision> {
    let region = locate(document, anchors)?;
    let text = splice(document, &region, replacement);
    let removed = region.slice(document).to_string();
    debug!(
        removed = removed.len(),
        inserted = replacement.len(),
        "region replaced"
    );
    Ok(Excision {
        text,
        region,
        removed,
    })
}

fn splice(document: &str, region: &Region, replacement: &str) -> String {
    let prefix = &document[..region.span.start];
    let suffix = &document[region.span.end..];
    let mut result = String::with_capacity(prefix.len() + replacement.len() + suffix.len());
    result.push_str(prefix);
    result.push_str(replacement);
    result.push_str(suffix);
    result
}
