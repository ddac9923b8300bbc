//! Filesystem glue for excise
//!
//! Reads the document, guards and writes the output, and loads recipes.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::{AnchorSpec, Operation, PatternSpec, Recipe, load_recipe, parse_recipe};
pub use error::{Error, Result};
