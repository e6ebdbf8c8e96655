//! CLI command implementations

pub mod check;
pub mod configure;
mod context;
pub mod style;
mod terminal;

pub use check::{CheckOptions, run_check};
pub use configure::{ConfigureOptions, run_configure};
