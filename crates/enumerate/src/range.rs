use ndarray::{Array2, Axis};

/// Observed minimum and maximum of each objective over an enumeration table.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveRange {
    min: Vec<f64>,
    max: Vec<f64>,
}

impl ObjectiveRange {
    /// Collects the range of every objective column of `table`.
    ///
    /// The first `n_params` columns hold levels and are skipped. An empty
    /// table yields `+∞` minima and `-∞` maxima.
    #[must_use]
    pub fn from_table(table: &Array2<f64>, n_params: usize) -> Self {
        let (min, max) = table
            .axis_iter(Axis(1))
            .skip(n_params)
            .map(|column| {
                column.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                    (lo.min(v), hi.max(v))
                })
            })
            .unzip();

        Self { min, max }
    }

    #[must_use]
    pub fn min(&self) -> &[f64] {
        &self.min
    }

    #[must_use]
    pub fn max(&self) -> &[f64] {
        &self.max
    }

    /// Returns `true` if `reference` weakly dominates the table: every
    /// observed maximum is at most the matching coordinate of `reference`.
    ///
    /// A reference point of the wrong length dominates nothing.
    #[must_use]
    pub fn is_dominated_by(&self, reference: &[f64]) -> bool {
        reference.len() == self.max.len()
            && self.max.iter().zip(reference).all(|(&hi, &r)| hi <= r)
    }

    /// Returns `true` if every objective stays within `[-tol, 1 + tol]`.
    #[must_use]
    pub fn within_unit_interval(&self, tol: f64) -> bool {
        self.min.iter().all(|&lo| lo >= -tol) && self.max.iter().all(|&hi| hi <= 1.0 + tol)
    }
}
