use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::Error;

/// One normalized cost function, `f(x) = x·(c + J·x) + m`.
///
/// The coupling matrix `J` is absent for linear objectives.
/// Generators produce specs whose values lie in `[0, 1]` over the whole
/// search space of the qudit configuration they were built for.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawObjective"))]
pub struct ObjectiveSpec {
    coupling: Option<Array2<f64>>,
    linear: Array1<f64>,
    offset: f64,
}

/// Unchecked wire form of an [`ObjectiveSpec`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawObjective {
    coupling: Option<Array2<f64>>,
    linear: Array1<f64>,
    offset: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawObjective> for ObjectiveSpec {
    type Error = Error;

    fn try_from(raw: RawObjective) -> Result<Self, Self::Error> {
        match raw.coupling {
            Some(coupling) => Self::quadratic(coupling, raw.linear, raw.offset),
            None => Ok(Self::linear(raw.linear, raw.offset)),
        }
    }
}

impl ObjectiveSpec {
    /// Creates a linear objective `x·c + m`.
    #[must_use]
    pub fn linear(linear: Array1<f64>, offset: f64) -> Self {
        Self {
            coupling: None,
            linear,
            offset,
        }
    }

    /// Creates a quadratic objective `x·(c + J·x) + m`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `coupling` is not square with the
    /// same dimension as `linear`.
    pub fn quadratic(
        coupling: Array2<f64>,
        linear: Array1<f64>,
        offset: f64,
    ) -> Result<Self, Error> {
        let n = linear.len();
        let (rows, cols) = coupling.dim();
        if rows != n || cols != n {
            return Err(Error::ShapeMismatch {
                expected: n * n,
                found: rows * cols,
            });
        }

        Ok(Self {
            coupling: Some(coupling),
            linear,
            offset,
        })
    }

    /// Returns the coupling matrix `J`, if the objective is quadratic.
    #[must_use]
    pub fn coupling(&self) -> Option<&Array2<f64>> {
        self.coupling.as_ref()
    }

    /// Returns the linear coefficients `c`.
    #[must_use]
    pub fn linear_coefficients(&self) -> &Array1<f64> {
        &self.linear
    }

    /// Returns the constant offset `m`.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns the number of variables the objective is defined over.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.linear.len()
    }

    /// Evaluates the objective at an assignment of qudit levels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the assignment length differs from
    /// [`ObjectiveSpec::dim`].
    pub fn evaluate(&self, assignment: &[usize]) -> Result<f64, Error> {
        let x: Array1<f64> = assignment.iter().map(|&level| level as f64).collect();
        self.evaluate_at(x.view())
    }

    /// Evaluates the objective at a real-valued point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `x.len()` differs from
    /// [`ObjectiveSpec::dim`].
    pub fn evaluate_at(&self, x: ArrayView1<'_, f64>) -> Result<f64, Error> {
        match &self.coupling {
            Some(coupling) => {
                cost_quadratic(x, coupling.view(), self.linear.view(), self.offset)
            }
            None => cost_linear(x, self.linear.view(), self.offset),
        }
    }
}

/// Computes the linear cost `x·c + m`.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if `x` and `c` differ in length.
pub fn cost_linear(x: ArrayView1<'_, f64>, c: ArrayView1<'_, f64>, m: f64) -> Result<f64, Error> {
    check_len(c.len(), x.len())?;
    Ok(x.dot(&c) + m)
}

/// Computes the quadratic cost `x·(c + J·x) + m`.
///
/// `J` is used as given; symmetry is a property of the generators,
/// not something this function checks.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if the dimensions of `x`, `J`, and `c`
/// do not agree.
pub fn cost_quadratic(
    x: ArrayView1<'_, f64>,
    j: ArrayView2<'_, f64>,
    c: ArrayView1<'_, f64>,
    m: f64,
) -> Result<f64, Error> {
    let n = x.len();
    check_len(c.len(), n)?;
    let (rows, cols) = j.dim();
    if rows != n || cols != n {
        return Err(Error::ShapeMismatch {
            expected: n * n,
            found: rows * cols,
        });
    }

    let field = &c + &j.dot(&x);
    Ok(x.dot(&field) + m)
}

fn check_len(expected: usize, found: usize) -> Result<(), Error> {
    if expected == found {
        Ok(())
    } else {
        Err(Error::ShapeMismatch { expected, found })
    }
}
