use std::fmt;

use ndarray::Array1;

use crate::Error;

/// The number of levels of each search variable.
///
/// A `QuditConfig` is never empty and every qudit has at least two levels.
/// A variable with `d` levels takes the values `0, 1, …, d - 1`.
///
/// # Example
///
/// ```
/// use qmoo_core::QuditConfig;
///
/// let qudits = QuditConfig::uniform(3, 8).unwrap();
/// assert_eq!(qudits.len(), 8);
/// assert_eq!(qudits.state_count(), Some(6561));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct QuditConfig(Vec<usize>);

impl QuditConfig {
    /// Creates a configuration from per-variable level counts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `levels` is empty or any entry
    /// is smaller than two.
    pub fn new(levels: impl Into<Vec<usize>>) -> Result<Self, Error> {
        let levels = levels.into();

        if levels.is_empty() {
            return Err(Error::InvalidArgument(
                "qudit configuration must not be empty".into(),
            ));
        }
        if let Some((i, d)) = levels.iter().enumerate().find(|&(_, &d)| d < 2) {
            return Err(Error::InvalidArgument(format!(
                "qudit {i} has {d} levels, at least 2 are required"
            )));
        }

        Ok(Self(levels))
    }

    /// Creates a homogeneous configuration of `count` qudits with `levels` each.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `count` is zero or `levels < 2`.
    pub fn uniform(levels: usize, count: usize) -> Result<Self, Error> {
        Self::new(vec![levels; count])
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the per-variable level counts.
    #[must_use]
    pub fn levels(&self) -> &[usize] {
        &self.0
    }

    /// Returns `true` if every qudit has the same number of levels.
    #[must_use]
    pub fn is_homogeneous(&self) -> bool {
        self.0.windows(2).all(|w| w[0] == w[1])
    }

    /// Returns the spin-centering offsets `(d_i - 1) / 2`.
    ///
    /// Subtracting these from an assignment maps each level range
    /// `[0, d - 1]` onto the symmetric range `[-(d - 1)/2, (d - 1)/2]`.
    #[must_use]
    pub fn centers(&self) -> Array1<f64> {
        self.0.iter().map(|&d| 0.5 * (d as f64 - 1.0)).collect()
    }

    /// Returns the largest attainable level sum, `Σ (d_i - 1)`.
    #[must_use]
    pub fn max_level_sum(&self) -> f64 {
        self.0.iter().map(|&d| d as f64 - 1.0).sum()
    }

    /// Returns the number of points in the search space, `∏ d_i`.
    ///
    /// Returns `None` if the product overflows `usize`.
    #[must_use]
    pub fn state_count(&self) -> Option<usize> {
        self.0.iter().try_fold(1_usize, |acc, &d| acc.checked_mul(d))
    }

    /// Checks that `assignment` is a point of this search space.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the lengths differ, or
    /// [`Error::InvalidArgument`] if a level is out of range.
    pub fn check_assignment(&self, assignment: &[usize]) -> Result<(), Error> {
        if assignment.len() != self.len() {
            return Err(Error::ShapeMismatch {
                expected: self.len(),
                found: assignment.len(),
            });
        }

        for (i, (&x, &d)) in assignment.iter().zip(&self.0).enumerate() {
            if x >= d {
                return Err(Error::InvalidArgument(format!(
                    "level {x} of qudit {i} is outside [0, {}]",
                    d - 1
                )));
            }
        }

        Ok(())
    }

    /// Returns the common level count minus one, `d - 1`.
    ///
    /// Used by the coupled families, whose bound derivations assume a
    /// homogeneous alphabet over a chain of at least two variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedConfiguration`] if the alphabet is
    /// heterogeneous or there are fewer than two variables.
    pub(crate) fn require_homogeneous(&self, family: &str) -> Result<f64, Error> {
        if !self.is_homogeneous() {
            return Err(Error::UnsupportedConfiguration(format!(
                "{family} requires a homogeneous qudit system, got {self}"
            )));
        }
        if self.len() < 2 {
            return Err(Error::UnsupportedConfiguration(format!(
                "{family} requires at least two qudits, got {self}"
            )));
        }

        Ok(self.0[0] as f64 - 1.0)
    }
}

impl fmt::Display for QuditConfig {
    /// Formats as `[d0 d1 …]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}

impl TryFrom<Vec<usize>> for QuditConfig {
    type Error = Error;

    fn try_from(levels: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(levels)
    }
}

impl From<QuditConfig> for Vec<usize> {
    fn from(qudits: QuditConfig) -> Self {
        qudits.0
    }
}

impl AsRef<[usize]> for QuditConfig {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_empty_and_single_level_qudits() {
        assert!(matches!(
            QuditConfig::new(Vec::new()),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            QuditConfig::new(vec![2, 1, 2]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn centers_map_levels_to_symmetric_spins() {
        let qudits = QuditConfig::new(vec![2, 3, 5]).unwrap();
        let centers = qudits.centers();

        assert_relative_eq!(centers[0], 0.5);
        assert_relative_eq!(centers[1], 1.0);
        assert_relative_eq!(centers[2], 2.0);
        assert_relative_eq!(qudits.max_level_sum(), 7.0);
    }

    #[test]
    fn homogeneity_compares_every_entry() {
        assert!(QuditConfig::uniform(4, 6).unwrap().is_homogeneous());
        // Equal level sums must not pass as homogeneous.
        assert!(!QuditConfig::new(vec![3, 2, 4]).unwrap().is_homogeneous());
    }

    #[test]
    fn require_homogeneous_rejects_short_and_mixed_chains() {
        let mixed = QuditConfig::new(vec![2, 3]).unwrap();
        let single = QuditConfig::new(vec![4]).unwrap();
        let chain = QuditConfig::uniform(5, 5).unwrap();

        assert!(matches!(
            mixed.require_homogeneous("test"),
            Err(Error::UnsupportedConfiguration(_))
        ));
        assert!(matches!(
            single.require_homogeneous("test"),
            Err(Error::UnsupportedConfiguration(_))
        ));
        assert_relative_eq!(chain.require_homogeneous("test").unwrap(), 4.0);
    }

    #[test]
    fn state_count_detects_overflow() {
        assert_eq!(QuditConfig::uniform(2, 12).unwrap().state_count(), Some(4096));
        assert_eq!(QuditConfig::uniform(7, 200).unwrap().state_count(), None);
    }

    #[test]
    fn check_assignment_validates_length_and_levels() {
        let qudits = QuditConfig::new(vec![2, 3]).unwrap();

        assert!(qudits.check_assignment(&[1, 2]).is_ok());
        assert_eq!(
            qudits.check_assignment(&[1]),
            Err(Error::ShapeMismatch {
                expected: 2,
                found: 1
            })
        );
        assert!(matches!(
            qudits.check_assignment(&[2, 0]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn displays_like_a_level_list() {
        let qudits = QuditConfig::uniform(2, 3).unwrap();
        assert_eq!(qudits.to_string(), "[2 2 2]");
    }
}
