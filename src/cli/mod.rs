//! Command line argument parsing.

mod args;

pub use args::{parse_args, CliConfig};
