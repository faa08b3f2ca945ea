//! The `termcal` command-line tool.

pub mod cli;
pub mod error;
pub mod logging;
pub mod run;
