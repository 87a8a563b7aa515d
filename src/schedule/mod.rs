//! Splitting a graph's nodes into two conflict-free groups.

pub mod partition;
pub mod solver;

pub use partition::{Group, Schedule};
pub use solver::{check_validity, find_schedule};
