//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod burn;

pub use burn::{BurnReport, BurnService};
