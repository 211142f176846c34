//! Closed-form ranges of the raw cost functions and the normalization that
//! maps them onto `[0, 1]`.
//!
//! Coupled objectives are drawn in centered spins, `s_i = x_i - m_i` with
//! `m_i = (d - 1)/2`, as `s·(c + J·s)`. Expanding in qudit levels gives
//! `x·(c - 2·J·m + J·x)` up to a constant, which is the form handed to the
//! evaluators. For a homogeneous chain every spin lies in `[-d₁/2, d₁/2]`
//! with `d₁ = d - 1`, which makes the worst-case sign patterns easy to
//! write down:
//!
//! - all `n² - n` ordered pairs aligned contribute at most `(n² - n)·J·d₁²/4`
//! - a field bounded by `c_max` contributes at most `2·c_max·Σ m_i`
//! - the interplay of field and coupling is bounded by `c_a·c_b·n / (J·(n - 1))`
//!   times a family-specific factor
//!
//! The resulting `A` (upper) and `B` (lower) enclose every lattice value, but
//! they are not always attained.

use ndarray::{Array1, Array2};
use tracing::trace;

use crate::{Error, ObjectiveSpec, QuditConfig};

/// An enclosing range `[lower, upper]` of an un-normalized objective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bounds {
    /// `A`, an upper bound over the whole lattice.
    pub(crate) upper: f64,

    /// `B`, a lower bound over the whole lattice.
    pub(crate) lower: f64,
}

impl Bounds {
    pub(crate) fn new(upper: f64, lower: f64) -> Self {
        Self { upper, lower }
    }

    /// Returns `A - B`.
    pub(crate) fn span(&self) -> f64 {
        self.upper - self.lower
    }

    /// Normalizes a coupled objective `s·(c + J·s)` drawn in centered spins.
    ///
    /// Returns the level form `J/(A-B)`, `(c - 2·J·m)/(A-B)`, and `-B/(A-B)`,
    /// where `m` holds the spin-centering offsets.
    pub(crate) fn normalize_coupled(
        &self,
        coupling: Array2<f64>,
        field: &Array1<f64>,
        centers: &Array1<f64>,
    ) -> Result<ObjectiveSpec, Error> {
        let span = self.span();
        trace!(upper = self.upper, lower = self.lower, "normalizing coupled objective");

        let linear = (field - &(coupling.dot(centers) * 2.0)) / span;
        ObjectiveSpec::quadratic(coupling / span, linear, -self.lower / span)
    }

    /// Normalizes a curvature objective `Σ w_i·(x_i² - 2·t_i·x_i)`.
    pub(crate) fn normalize_curvature(
        &self,
        weights: &Array1<f64>,
        targets: &Array1<f64>,
    ) -> Result<ObjectiveSpec, Error> {
        let span = self.span();
        trace!(upper = self.upper, lower = self.lower, "normalizing curvature objective");

        let linear = weights * targets * -2.0 / span;
        ObjectiveSpec::quadratic(
            Array2::from_diag(weights) / span,
            linear,
            -self.lower / span,
        )
    }
}

/// The quantities of a homogeneous chain that enter the bound formulas.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Chain {
    n: f64,
    d1: f64,
    center_sum: f64,
}

impl Chain {
    /// Describes `qudits`, whose common level count minus one is `d1`.
    pub(crate) fn new(qudits: &QuditConfig, d1: f64) -> Self {
        Self {
            n: qudits.len() as f64,
            d1,
            center_sum: qudits.centers().sum(),
        }
    }

    /// `(n² - n)·j·d₁²/4`, the pair energy with every spin at full magnitude.
    pub(crate) fn aligned_pairs(&self, j: f64) -> f64 {
        (self.n * self.n - self.n) * j * self.d1 * self.d1 * 0.25
    }

    /// `2·c·Σ m_i`, the largest field contribution for `|c_i| ≤ c`.
    pub(crate) fn field_swing(&self, c: f64) -> f64 {
        2.0 * c * self.center_sum
    }

    /// `c_a·c_b·n / (j·(n - 1))`, the field–coupling interplay term.
    pub(crate) fn interplay(&self, c_a: f64, c_b: f64, j: f64) -> f64 {
        c_a * c_b * self.n / (j * (self.n - 1.0))
    }

    /// Range of an objective with positive (antiferromagnetic) coupling up to
    /// `j` and a field bounded by `c`.
    pub(crate) fn antiferromagnetic(&self, c: f64, j: f64) -> Bounds {
        Bounds::new(
            self.field_swing(c),
            -self.aligned_pairs(j) - self.field_swing(c) - 0.25 * self.interplay(c, c, j),
        )
    }

    /// Range of an objective with negative (ferromagnetic) coupling down to
    /// `-j` and a field bounded by `c`.
    pub(crate) fn ferromagnetic(&self, c: f64, j: f64) -> Bounds {
        Bounds::new(
            self.aligned_pairs(j) + self.field_swing(c) + 0.75 * self.interplay(c, c, j),
            -self.field_swing(c),
        )
    }

    /// `w·n·(d₁² - 2·t·d₁)`, the curvature energy with every qudit at its top level.
    pub(crate) fn curvature_at_top(&self, w: f64, t: f64) -> f64 {
        self.d1 * self.d1 * w * self.n - 2.0 * w * self.n * self.d1 * t
    }

    /// `-n·w·t²`, the curvature energy with every qudit at the target `t`.
    pub(crate) fn curvature_floor(&self, w: f64, t: f64) -> f64 {
        -(self.n * w) * (t * t)
    }

    /// Range of `w·Σ(x_i² - 2·t·x_i)` over the three candidate extremes:
    /// all qudits at zero, at the top level, or at the target.
    pub(crate) fn curvature(&self, w: f64, t: f64) -> Bounds {
        let top = self.curvature_at_top(w, t);
        let floor = self.curvature_floor(w, t);
        Bounds::new(0_f64.max(top).max(floor), 0_f64.min(top).min(floor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    fn chain(levels: usize, count: usize) -> Chain {
        let qudits = QuditConfig::uniform(levels, count).unwrap();
        Chain::new(&qudits, levels as f64 - 1.0)
    }

    #[test]
    fn chain_terms_for_eight_qutrits() {
        // n = 8, d₁ = 2, Σm = 8.
        let chain = chain(3, 8);

        assert_relative_eq!(chain.aligned_pairs(1.0), 56.0);
        assert_relative_eq!(chain.field_swing(0.5), 8.0);
        assert_relative_eq!(chain.interplay(2.0, 3.0, 4.0), 6.0 * 8.0 / 28.0, epsilon = 1e-12);
    }

    #[test]
    fn antiferromagnetic_and_ferromagnetic_ranges() {
        let chain = chain(2, 4);
        // n = 4, d₁ = 1, Σm = 2, pairs = 12.
        let afm = chain.antiferromagnetic(2.0, 4.0);
        assert_relative_eq!(afm.upper, 8.0);
        assert_relative_eq!(afm.lower, -12.0 - 8.0 - 0.25 * 16.0 / 12.0, epsilon = 1e-12);

        let fm = chain.ferromagnetic(0.1, 5.0);
        assert_relative_eq!(fm.upper, 15.0 + 0.4 + 0.75 * 0.04 / 15.0, epsilon = 1e-12);
        assert_relative_eq!(fm.lower, -0.4, epsilon = 1e-12);
    }

    #[test]
    fn curvature_range_covers_zero_top_and_target() {
        // d = 5, target 3.2: top = 5·(16 - 25.6) < 0, floor = -5·10.24.
        let chain = chain(5, 5);
        let bounds = chain.curvature(1.0, 3.2);

        assert_relative_eq!(bounds.upper, 0.0);
        assert_relative_eq!(bounds.lower, -51.2, epsilon = 1e-12);
        assert_relative_eq!(bounds.span(), 51.2, epsilon = 1e-12);
    }

    #[test]
    fn coupled_normalization_maps_bounds_to_unit_interval() {
        // Single edge between two qubits; raw f = x·c + 2·J01·x0·x1.
        let coupling = array![[0.0, 1.0], [1.0, 0.0]];
        let field = array![0.5, -0.5];
        let qudits = QuditConfig::uniform(2, 2).unwrap();
        let bounds = Bounds::new(2.0, -1.0);

        let spec = bounds
            .normalize_coupled(coupling, &field, &qudits.centers())
            .unwrap();

        // Linear part absorbs the centering: c - 2·J·m = (0.5 - 1, -0.5 - 1).
        assert_relative_eq!(spec.linear_coefficients()[0], -0.5 / 3.0);
        assert_relative_eq!(spec.linear_coefficients()[1], -1.5 / 3.0);
        assert_relative_eq!(spec.offset(), 1.0 / 3.0);
    }

    #[test]
    fn curvature_normalization_builds_diagonal_coupling() {
        let weights = array![1.0, 2.0];
        let targets = array![0.5, 1.5];
        let bounds = Bounds::new(4.0, -2.0);

        let spec = bounds.normalize_curvature(&weights, &targets).unwrap();
        let coupling = spec.coupling().unwrap();

        assert_relative_eq!(coupling[[0, 0]], 1.0 / 6.0);
        assert_relative_eq!(coupling[[1, 1]], 2.0 / 6.0);
        assert_relative_eq!(coupling[[0, 1]], 0.0);
        assert_relative_eq!(spec.linear_coefficients()[1], -6.0 / 6.0);
        assert_relative_eq!(spec.offset(), 2.0 / 6.0);
    }
}
