//! Subcommand modules for the `parsel` binary.

pub mod assign;
pub mod extract;
pub mod glue;
