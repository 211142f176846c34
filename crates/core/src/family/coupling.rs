use ndarray::Array2;

/// Returns `(J + Jᵀ) / 2`.
///
/// The result is exactly symmetric: both mirrored entries are computed from
/// the same pair of summands.
pub(crate) fn symmetrize(coupling: &Array2<f64>) -> Array2<f64> {
    (coupling + &coupling.t()) * 0.5
}

/// Clears self-coupling on the diagonal.
pub(crate) fn zero_diagonal(coupling: &mut Array2<f64>) {
    coupling.diag_mut().fill(0.0);
}

/// Returns the next variable on a ring of `n` variables.
pub(crate) fn ring_neighbor(i: usize, n: usize) -> usize {
    (i + 1) % n
}
