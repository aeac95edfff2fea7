//! CLI command implementations.

pub mod args;
pub mod output;

pub mod normalize;
pub mod show;

pub use args::{Cli, Commands};
pub use output::Output;
