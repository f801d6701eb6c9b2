//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelVariant`] - the model tiers a sample can be drawn from
//! - [`question::Question`] - a validated yes/no question
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod model;
pub mod question;
