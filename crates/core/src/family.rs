//! The five registered benchmark families.
//!
//! Every generator follows the same protocol:
//!
//! 1. **Validate** the qudit configuration. All families except
//!    [`Family::LinearCorr05`] require a homogeneous alphabet over at least
//!    two variables, since their bounds are derived for that case.
//! 2. **Reseed** the random stream, so the draws depend on the seed alone.
//! 3. **Draw** linear fields and coupling matrices. Couplings are
//!    symmetrized as `(J + Jᵀ)/2`; coupled objectives have a zero diagonal,
//!    curvature objectives a diagonal-only `J`.
//! 4. **Bound and normalize**: closed-form bounds `A ≥ f ≥ B` of the raw
//!    objective over the lattice give `J/(A-B)`, `(c - 2·J·m)/(A-B)`, and
//!    `-B/(A-B)`, so every normalized value lies in `[0, 1]` and the all-ones
//!    reference point dominates the objective space.

mod bounds;
mod coupling;
mod fm_afm_three;
mod fm_afm_two;
mod linear;
mod quadratic_afm_two;
mod quadratic_five;

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{Error, ObjectiveSpec, QuditConfig, RandomStream};

/// Prefix shared by the canonical family names.
const NAME_PREFIX: &str = "problem_";

/// A registered problem family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Family {
    /// Two anti-correlated linear objectives.
    LinearCorr05,
    /// Antiferromagnetic vs. ferromagnetic all-to-all coupling.
    FmAfmTwoObjs,
    /// Antiferromagnetic all-to-all coupling vs. a per-variable parabola.
    QuadraticAfmTwoObjs,
    /// Antiferromagnetic and ferromagnetic rings plus a per-variable parabola.
    FmAfmThreeObjs,
    /// The three-objective family plus two sign-split rings.
    QuadraticFiveObjs,
}

impl Family {
    /// Every registered family, in canonical order.
    pub const ALL: [Self; 5] = [
        Self::LinearCorr05,
        Self::FmAfmTwoObjs,
        Self::QuadraticAfmTwoObjs,
        Self::FmAfmThreeObjs,
        Self::QuadraticFiveObjs,
    ];

    /// Returns the canonical name, such as `problem_FM_AFM_two_objs`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::LinearCorr05 => "problem_linear_corr-0.5",
            Self::FmAfmTwoObjs => "problem_FM_AFM_two_objs",
            Self::QuadraticAfmTwoObjs => "problem_quadratic_AFM_two_objs",
            Self::FmAfmThreeObjs => "problem_FM_AFM_three_objs",
            Self::QuadraticFiveObjs => "problem_quadratic_five_objs",
        }
    }

    /// Returns the number of objectives the family generates.
    #[must_use]
    pub fn objective_count(self) -> usize {
        match self {
            Self::LinearCorr05 | Self::FmAfmTwoObjs | Self::QuadraticAfmTwoObjs => 2,
            Self::FmAfmThreeObjs => 3,
            Self::QuadraticFiveObjs => 5,
        }
    }

    /// Returns `true` if the family's bounds require equal level counts.
    #[must_use]
    pub fn requires_homogeneous(self) -> bool {
        !matches!(self, Self::LinearCorr05)
    }

    /// Returns the reference point, one `1.0` per objective.
    #[must_use]
    pub fn reference_point(self) -> Vec<f64> {
        vec![1.0; self.objective_count()]
    }

    /// Generates the normalized objectives for `qudits` and `seed`.
    ///
    /// Same inputs always give bit-identical objectives.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedConfiguration`] if the family cannot
    /// normalize objectives over `qudits`.
    pub fn generate(self, qudits: &QuditConfig, seed: u32) -> Result<Vec<ObjectiveSpec>, Error> {
        let mut stream = RandomStream::seeded(seed);
        self.generate_with(qudits, seed, &mut stream)
    }

    /// Generates the normalized objectives using a caller-owned stream.
    ///
    /// The stream is reseeded with `seed` after validation, so its prior
    /// state does not affect the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedConfiguration`] if the family cannot
    /// normalize objectives over `qudits`.
    pub fn generate_with(
        self,
        qudits: &QuditConfig,
        seed: u32,
        stream: &mut RandomStream,
    ) -> Result<Vec<ObjectiveSpec>, Error> {
        match self {
            Self::LinearCorr05 => linear::generate(qudits, seed, stream),
            Self::FmAfmTwoObjs => fm_afm_two::generate(qudits, seed, stream),
            Self::QuadraticAfmTwoObjs => quadratic_afm_two::generate(qudits, seed, stream),
            Self::FmAfmThreeObjs => fm_afm_three::generate(qudits, seed, stream),
            Self::QuadraticFiveObjs => quadratic_five::generate(qudits, seed, stream),
        }
    }
}

/// Logs a generated instance with the span `A - B` of each raw objective.
fn report(family: Family, qudits: &QuditConfig, seed: u32, spans: &[f64]) {
    debug!(
        family = family.name(),
        n = qudits.len(),
        seed,
        ?spans,
        "generated problem"
    );
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = Error;

    /// Parses a canonical name, with or without the `problem_` prefix.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let short = name.strip_prefix(NAME_PREFIX).unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|family| &family.name()[NAME_PREFIX.len()..] == short)
            .ok_or_else(|| Error::UnknownFamily(name.to_owned()))
    }
}

impl TryFrom<String> for Family {
    type Error = Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<Family> for String {
    fn from(family: Family) -> Self {
        family.name().to_owned()
    }
}

/// Returns the reference point of the family called `name`.
///
/// # Errors
///
/// Returns [`Error::UnknownFamily`] if `name` is not a registered family.
/// Reserved names without a generator, such as
/// `problem_leading_trailing_two_objs`, are not registered.
pub fn reference_point(name: &str) -> Result<Vec<f64>, Error> {
    Ok(name.parse::<Family>()?.reference_point())
}
