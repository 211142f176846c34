use ndarray::Array2;

use crate::{Error, ObjectiveSpec, QuditConfig, RandomStream, correlated_rand};

use super::{
    Family,
    bounds::{Bounds, Chain},
    coupling::{ring_neighbor, symmetrize},
    fm_afm_three::{AFM_EDGE, C1_MAX, Fields, RingBounds, afm_edge, fm_edge, mixed_ferromagnetic},
    report,
};

const C4_MAX: f64 = 1.0;
const C5_MAX: f64 = 1.0;

/// Correlation of the split-ring fields with the fields they are derived from.
const CORRELATION: f64 = -0.5;

/// The three ring objectives plus two rings whose coupling sign flips at the
/// middle of the chain.
///
/// - Objectives 1–3: as in the three-objective family.
/// - Objective 4: antiferromagnetic couplings on the first half of the ring,
///   ferromagnetic on the second; field anti-correlated with objective 2's.
/// - Objective 5: the mirror image of objective 4; field anti-correlated with
///   objective 1's.
///
/// Split-ring coupling magnitudes are drawn from `[0.2, 1]` per edge.
pub(crate) fn generate(
    qudits: &QuditConfig,
    seed: u32,
    stream: &mut RandomStream,
) -> Result<Vec<ObjectiveSpec>, Error> {
    let d1 = qudits.require_homogeneous(Family::QuadraticFiveObjs.name())?;
    let n = qudits.len();
    let chain = Chain::new(qudits, d1);
    let ring = RingBounds::new(qudits, &chain);
    let split = split_ring(&chain);
    let mirrored = mixed_ferromagnetic(&chain, C5_MAX);

    stream.reseed(seed);
    let fields = Fields::draw(qudits, stream);
    let cost_4 = correlated_rand(&fields.cost_2, CORRELATION, 1.0, stream)?;
    let cost_5 = correlated_rand(&fields.cost_1, CORRELATION, 1.0, stream)?;

    let mut j_1 = Array2::zeros((n, n));
    let mut j_2 = Array2::zeros((n, n));
    let mut j_4 = Array2::zeros((n, n));
    let mut j_5 = Array2::zeros((n, n));
    for i in 0..n {
        let k = ring_neighbor(i, n);
        j_1[[i, k]] = afm_edge(stream);
        j_2[[i, k]] = fm_edge(stream);

        let sign = if 2 * i > n - 1 { -1.0 } else { 1.0 };
        j_4[[i, k]] = sign * stream.uniform(AFM_EDGE.0, AFM_EDGE.1);
        j_5[[i, k]] = -sign * stream.uniform(AFM_EDGE.0, AFM_EDGE.1);
    }

    let [afm, fm, curvature] = ring.spans();
    report(
        Family::QuadraticFiveObjs,
        qudits,
        seed,
        &[afm, fm, curvature, split.span(), mirrored.span()],
    );

    let centers = qudits.centers();
    let mut objectives = ring.normalize(&fields, &j_1, &j_2, &centers)?;
    objectives.push(split.normalize_coupled(symmetrize(&j_4), &cost_4, &centers)?);
    objectives.push(mirrored.normalize_coupled(symmetrize(&j_5), &cost_5, &centers)?);

    Ok(objectives)
}

/// Range of objective 4.
///
/// The interplay term pairs the split-ring field bound with objective 1's
/// field bound, as in the published benchmark data.
fn split_ring(chain: &Chain) -> Bounds {
    let swing = chain.field_swing(C4_MAX);
    let aligned = -chain.aligned_pairs(1.0) - swing - 0.25 * chain.interplay(C4_MAX, C1_MAX, 1.0);
    Bounds::new(swing, (-swing).min(aligned))
}
