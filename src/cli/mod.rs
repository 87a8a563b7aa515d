//! Command-line front end helpers used by the `lgraph` binary.

pub mod commands;
