//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod dispatch;
pub mod run_sample;
pub mod summarize;

#[cfg(test)]
mod testing;
