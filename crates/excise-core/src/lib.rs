//! Marker-delimited block excision.
//!
//! Removes a clearly marked block from a text document, or replaces it with
//! a smaller placeholder. The document is treated as opaque text.
//!
//! # Two Marker Kinds
//!
//! ## 1. Anchors (`anchor` + `excise` modules)
//!
//! A literal start anchor found inside the block, optional boundary anchors
//! searched backwards from it to reach the block's real opening, and a
//! literal end anchor found after it:
//!
//! ```text
//! {/* Separator Title */}       <- boundary #2
//! <motion.h3 ...>               <- boundary #1
//!   Unique heading text         <- start
//! ...
//! {/* --- Next Section --- */}  <- end
//! ```
//!
//! Every anchor that cannot be resolved fails with `Error::NotFound` naming
//! that anchor, so running an excision twice fails the second time.
//!
//! ## 2. Pattern (`pattern` module)
//!
//! One regular expression spanning the whole block, with `.` matching
//! newlines. Every match (or the first `limit`) is replaced and the count is
//! reported; zero matches is only an error once the caller asks for it.

pub mod anchor;
pub mod error;
pub mod excise;
pub mod pattern;
pub mod region;

pub use anchor::{Alignment, Anchor, Anchors, EndMode};
pub use error::{AnchorRole, Error, Result};
pub use excise::{Excision, excise, locate};
pub use pattern::{Pattern, SubstituteOptions, Substitution, substitute};
pub use region::Region;
