//! Multi-objective benchmark problems over qudit search spaces.
//!
//! A search point assigns each of `n` variables a level in `{0, …, d_i - 1}`.
//! Each registered [`Family`] turns a [`QuditConfig`] and a seed into a fixed
//! number of quadratic cost functions, each scaled by analytic bounds into
//! `[0, 1]` over the lattice so the all-ones [reference point](reference_point)
//! dominates the objective vectors. The bounds are not tight, and a few
//! draws escape them (chains of three or fewer variables, some seeds on `7x4`).
//!
//! - [`RandomStream`]: the seeded Mersenne Twister all draws come from
//! - [`correlated_rand`]: draws a vector correlated with a base value
//! - [`ObjectiveSpec`], [`cost_linear`], [`cost_quadratic`]: cost evaluation
//! - [`Family`], [`ProblemInstance`]: generation
//!
//! # Example
//!
//! ```
//! use qmoo_core::{Family, ProblemInstance, QuditConfig};
//!
//! let qudits = QuditConfig::uniform(3, 8).unwrap();
//! let instance = ProblemInstance::generate(Family::FmAfmTwoObjs, qudits, 7).unwrap();
//!
//! let values = instance.evaluate(&[2; 8]).unwrap();
//! assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
//! ```

mod correlated;
mod error;
mod family;
mod instance;
mod objective;
mod qudits;
mod stream;

pub use correlated::{Base, correlated_rand};
pub use error::Error;
pub use family::{Family, reference_point};
pub use instance::ProblemInstance;
pub use objective::{ObjectiveSpec, cost_linear, cost_quadratic};
pub use qudits::QuditConfig;
pub use stream::RandomStream;
