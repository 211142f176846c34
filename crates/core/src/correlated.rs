use ndarray::{Array1, ArrayView1};

use crate::{Error, RandomStream};

/// The value a correlated draw is built from.
#[derive(Debug, Clone, Copy)]
pub enum Base<'a> {
    /// A single value; the draw is a length-one vector.
    Scalar(f64),
    /// One value per entry.
    Vector(ArrayView1<'a, f64>),
}

impl From<f64> for Base<'_> {
    fn from(value: f64) -> Self {
        Base::Scalar(value)
    }
}

impl<'a> From<&'a Array1<f64>> for Base<'a> {
    fn from(values: &'a Array1<f64>) -> Self {
        Base::Vector(values.view())
    }
}

impl<'a> From<ArrayView1<'a, f64>> for Base<'a> {
    fn from(values: ArrayView1<'a, f64>) -> Self {
        Base::Vector(values)
    }
}

/// Returns `corr·x + (1 - |corr|)·scale·u` with `u` drawn from `U[-1, 1]`.
///
/// One uniform value is drawn per entry of `x`. A negative `corr` produces a
/// vector anti-correlated with `x`; the magnitude of every entry stays below
/// `|corr|·max|x| + (1 - |corr|)·scale`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `corr` is not finite or `|corr| > 1`.
pub fn correlated_rand<'a>(
    x: impl Into<Base<'a>>,
    corr: f64,
    scale: f64,
    stream: &mut RandomStream,
) -> Result<Array1<f64>, Error> {
    if !corr.is_finite() || corr.abs() > 1.0 {
        return Err(Error::InvalidArgument(format!(
            "correlation must lie in [-1, 1], got {corr}"
        )));
    }

    let noise = (1.0 - corr.abs()) * scale;
    let correlated = match x.into() {
        Base::Scalar(x) => {
            Array1::from_elem(1, corr * x + noise * stream.uniform(-1.0, 1.0))
        }
        Base::Vector(x) => {
            let u = stream.uniform_vector(-1.0, 1.0, x.len());
            &x * corr + &u * noise
        }
    };

    Ok(correlated)
}
