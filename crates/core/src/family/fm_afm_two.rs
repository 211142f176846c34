use crate::{Error, ObjectiveSpec, QuditConfig, RandomStream};

use super::{
    Family,
    bounds::Chain,
    report,
    coupling::{symmetrize, zero_diagonal},
};

const C1_MAX: f64 = 2.0;
const C2_MAX: f64 = 0.1;
const J1_MAX: f64 = 4.0;
const J2_MAX: f64 = 5.0;

/// Smallest coupling magnitude of either objective.
const J_MIN: f64 = 0.2;

/// Antiferromagnetic vs. ferromagnetic all-to-all coupling.
///
/// - Objective 1: couplings in `[0.2, 4]`, field in `[-2, 2]`.
/// - Objective 2: couplings in `[-5, -0.2]`, field in `[-0.1, 0.1]`.
pub(crate) fn generate(
    qudits: &QuditConfig,
    seed: u32,
    stream: &mut RandomStream,
) -> Result<Vec<ObjectiveSpec>, Error> {
    let d1 = qudits.require_homogeneous(Family::FmAfmTwoObjs.name())?;
    let n = qudits.len();
    let chain = Chain::new(qudits, d1);
    let centers = qudits.centers();

    let afm = chain.antiferromagnetic(C1_MAX, J1_MAX);
    let fm = chain.ferromagnetic(C2_MAX, J2_MAX);

    stream.reseed(seed);
    let cost_1 = stream.uniform_vector(-1.0, 1.0, n) * C1_MAX;
    let cost_2 = stream.uniform_vector(-1.0, 1.0, n) * C2_MAX;
    let mut j_1 = stream.uniform_matrix(J_MIN, J1_MAX, n);
    let mut j_2 = stream.uniform_matrix(-J2_MAX, -J_MIN, n);
    zero_diagonal(&mut j_1);
    zero_diagonal(&mut j_2);

    report(Family::FmAfmTwoObjs, qudits, seed, &[afm.span(), fm.span()]);
    Ok(vec![
        afm.normalize_coupled(symmetrize(&j_1), &cost_1, &centers)?,
        fm.normalize_coupled(symmetrize(&j_2), &cost_2, &centers)?,
    ])
}
