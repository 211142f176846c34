use crate::{Error, Family, ObjectiveSpec, QuditConfig};

/// A generated benchmark: one family, one qudit configuration, one seed.
///
/// Instances are immutable. Regenerating with the same family, qudits, and
/// seed yields an identical instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProblemInstance {
    family: Family,
    qudits: QuditConfig,
    seed: u32,
    objectives: Vec<ObjectiveSpec>,
}

impl ProblemInstance {
    /// Generates the instance of `family` for `qudits` and `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedConfiguration`] if the family cannot
    /// normalize objectives over `qudits`.
    pub fn generate(family: Family, qudits: QuditConfig, seed: u32) -> Result<Self, Error> {
        let objectives = family.generate(&qudits, seed)?;
        Ok(Self {
            family,
            qudits,
            seed,
            objectives,
        })
    }

    /// Returns the family the instance was generated from.
    #[must_use]
    pub fn family(&self) -> Family {
        self.family
    }

    /// Returns the qudit configuration of the search space.
    #[must_use]
    pub fn qudits(&self) -> &QuditConfig {
        &self.qudits
    }

    /// Returns the seed the coefficients were drawn with.
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns the objectives in family order.
    #[must_use]
    pub fn objectives(&self) -> &[ObjectiveSpec] {
        &self.objectives
    }

    /// Returns the family's reference point.
    #[must_use]
    pub fn reference_point(&self) -> Vec<f64> {
        self.family.reference_point()
    }

    /// Evaluates every objective at `assignment`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] or [`Error::InvalidArgument`] if
    /// `assignment` is not a point of the instance's search space.
    pub fn evaluate(&self, assignment: &[usize]) -> Result<Vec<f64>, Error> {
        self.qudits.check_assignment(assignment)?;
        self.objectives
            .iter()
            .map(|objective| objective.evaluate(assignment))
            .collect()
    }
}
