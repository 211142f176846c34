//! Full enumeration of qudit benchmark problems.
//!
//! Evaluates a [`ProblemInstance`](qmoo_core::ProblemInstance) at every point
//! of its search space and persists the result as a text table:
//!
//! - [`States`]: every assignment, last variable fastest
//! - [`enumerate`]: the level-and-objective table
//! - [`ObjectiveRange`]: observed per-objective extremes
//! - [`write_table`], [`output_path`]: the on-disk layout

mod config;
mod error;
mod range;
mod states;
mod table;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use range::ObjectiveRange;
pub use states::States;
pub use table::{enumerate, output_path, write_table};
