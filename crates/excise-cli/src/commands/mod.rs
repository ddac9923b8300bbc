//! Command implementations

pub mod adhoc;
pub mod diff;
pub mod job;
pub mod run;

pub use adhoc::{run_anchors, run_pattern};
pub use run::run_recipe;
