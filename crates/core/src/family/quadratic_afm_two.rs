use ndarray::Array1;

use crate::{Error, ObjectiveSpec, QuditConfig, RandomStream};

use super::{
    Family,
    bounds::Chain,
    coupling::{symmetrize, zero_diagonal},
    report,
};

const C1_MAX: f64 = 0.5;
const J1_MIN: f64 = 0.1;
const J1_MAX: f64 = 1.1;

/// Range of the per-variable curvature weights.
const JQ_MIN: f64 = 0.5;
const JQ_MAX: f64 = 2.0;

/// Distance of the curvature target below the level count.
const TARGET_OFFSET: f64 = 1.8;

/// Antiferromagnetic all-to-all coupling vs. a per-variable parabola.
///
/// - Objective 1: couplings in `[0.1, 1.1]`, field in `[-0.5, 0.5]`.
/// - Objective 2: `Σ w_i·(x_i - t)²` up to a constant, with `t = d - 1.8` and
///   weights `w_i` drawn from `[0.5, 2]`.
pub(crate) fn generate(
    qudits: &QuditConfig,
    seed: u32,
    stream: &mut RandomStream,
) -> Result<Vec<ObjectiveSpec>, Error> {
    let d1 = qudits.require_homogeneous(Family::QuadraticAfmTwoObjs.name())?;
    let n = qudits.len();
    let chain = Chain::new(qudits, d1);
    let centers = qudits.centers();

    let targets: Array1<f64> = qudits
        .levels()
        .iter()
        .map(|&d| d as f64 - TARGET_OFFSET)
        .collect();

    let afm = chain.antiferromagnetic(C1_MAX, J1_MAX);
    let parabola = chain.curvature(JQ_MAX, targets[0]);

    stream.reseed(seed);
    let cost_1 = stream.uniform_vector(-1.0, 1.0, n) * C1_MAX;
    let mut j_1 = stream.uniform_matrix(J1_MIN, J1_MAX, n);
    zero_diagonal(&mut j_1);
    let weights = stream.uniform_vector(JQ_MIN, JQ_MAX, n);

    report(
        Family::QuadraticAfmTwoObjs,
        qudits,
        seed,
        &[afm.span(), parabola.span()],
    );
    Ok(vec![
        afm.normalize_coupled(symmetrize(&j_1), &cost_1, &centers)?,
        parabola.normalize_curvature(&weights, &targets)?,
    ])
}
