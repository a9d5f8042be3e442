//! Application layer: demonstration scenarios and the burn service
//!
//! This layer orchestrates domain logic; it does not print.

pub mod error;
pub mod scenarios;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use scenarios::{Scenario, ScenarioTree};
pub use services::{BurnReport, BurnService};
