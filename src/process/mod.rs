//! Subprocess launching behind a swappable trait.

pub mod runner;

#[cfg(test)]
pub(crate) mod fake;

pub use runner::{CapturedOutput, ProcessRunner, SystemRunner};
