use ndarray::{Array1, Array2};

use crate::{Error, ObjectiveSpec, QuditConfig, RandomStream};

use super::{
    Family,
    bounds::{Bounds, Chain},
    coupling::{ring_neighbor, symmetrize},
    report,
};

pub(super) const C1_MAX: f64 = 0.2;
pub(super) const C2_MAX: f64 = 0.1;

/// Edge couplings of the antiferromagnetic ring.
pub(super) const AFM_EDGE: (f64, f64) = (0.2, 1.0);

/// Edge couplings of the ferromagnetic ring; mostly negative with a small
/// positive tail.
const FM_EDGE: (f64, f64) = (-1.0, 0.2);

/// Lowest curvature target considered by the bound.
const TARGET_LOW: f64 = 0.0;

/// Linear fields and curvature targets, drawn before any coupling.
pub(super) struct Fields {
    pub(super) cost_1: Array1<f64>,
    pub(super) cost_2: Array1<f64>,
    pub(super) targets: Array1<f64>,
}

impl Fields {
    /// Draws both fields, then one curvature target per qudit.
    ///
    /// Targets are drawn between `d - 0.5` and `1`, so they lie in
    /// `(1, d - 0.5]` for every `d ≥ 2`.
    pub(super) fn draw(qudits: &QuditConfig, stream: &mut RandomStream) -> Self {
        let n = qudits.len();
        let cost_1 = stream.uniform_vector(-1.0, 1.0, n) * C1_MAX;
        let cost_2 = stream.uniform_vector(-1.0, 1.0, n) * C2_MAX;
        let targets = qudits
            .levels()
            .iter()
            .map(|&d| stream.uniform(d as f64 - 0.5, 1.0))
            .collect();

        Self {
            cost_1,
            cost_2,
            targets,
        }
    }
}

/// Bounds of the three ring objectives shared with the five-objective family.
pub(super) struct RingBounds {
    afm: Bounds,
    fm: Bounds,
    curvature: Bounds,
}

impl RingBounds {
    pub(super) fn new(qudits: &QuditConfig, chain: &Chain) -> Self {
        let top_target = qudits.levels()[0] as f64 - 0.5;

        let t31 = chain.curvature_at_top(1.0, top_target);
        let t31a = chain.curvature_at_top(1.0, TARGET_LOW);
        let t32 = chain.curvature_floor(1.0, top_target);

        Self {
            afm: chain.antiferromagnetic(C1_MAX, AFM_EDGE.1),
            fm: mixed_ferromagnetic(chain, C2_MAX),
            // The lower bound keeps the nesting of the published benchmark
            // data, which is not the plain minimum of the candidates.
            curvature: Bounds::new(
                0_f64.max(t31).max(t32).max(t31a),
                0_f64.min(t31).max(t32).min(t31a),
            ),
        }
    }

    /// Returns `A - B` of the antiferromagnetic, ferromagnetic, and curvature
    /// objectives.
    pub(super) fn spans(&self) -> [f64; 3] {
        [self.afm.span(), self.fm.span(), self.curvature.span()]
    }

    /// Normalizes the antiferromagnetic, ferromagnetic, and curvature objectives.
    pub(super) fn normalize(
        &self,
        fields: &Fields,
        j_1: &Array2<f64>,
        j_2: &Array2<f64>,
        centers: &Array1<f64>,
    ) -> Result<Vec<ObjectiveSpec>, Error> {
        let unit = Array1::ones(fields.targets.len());

        Ok(vec![
            self.afm
                .normalize_coupled(symmetrize(j_1), &fields.cost_1, centers)?,
            self.fm
                .normalize_coupled(symmetrize(j_2), &fields.cost_2, centers)?,
            self.curvature.normalize_curvature(&unit, &fields.targets)?,
        ])
    }
}

/// Range of a ring whose couplings reach down to `-1` but may be slightly
/// positive: the ferromagnetic upper bound, and the lower of the
/// ferromagnetic bound and a weak (`0.2`) antiferromagnetic one.
pub(super) fn mixed_ferromagnetic(chain: &Chain, c: f64) -> Bounds {
    let fm = chain.ferromagnetic(c, 1.0);
    let weak_afm = chain.antiferromagnetic(c, FM_EDGE.1);
    Bounds::new(fm.upper, fm.lower.min(weak_afm.lower))
}

/// Draws the antiferromagnetic coupling of an edge.
pub(super) fn afm_edge(stream: &mut RandomStream) -> f64 {
    stream.uniform(AFM_EDGE.0, AFM_EDGE.1)
}

/// Draws the ferromagnetic coupling of an edge.
pub(super) fn fm_edge(stream: &mut RandomStream) -> f64 {
    stream.uniform(FM_EDGE.0, FM_EDGE.1)
}

/// Antiferromagnetic vs. ferromagnetic nearest-neighbor rings plus a
/// per-variable parabola.
///
/// - Objective 1: ring couplings in `[0.2, 1]`, field in `[-0.2, 0.2]`.
/// - Objective 2: ring couplings in `[-1, 0.2]`, field in `[-0.1, 0.1]`.
/// - Objective 3: `Σ (x_i - t_i)²` up to a constant, with random targets `t_i`.
pub(crate) fn generate(
    qudits: &QuditConfig,
    seed: u32,
    stream: &mut RandomStream,
) -> Result<Vec<ObjectiveSpec>, Error> {
    let d1 = qudits.require_homogeneous(Family::FmAfmThreeObjs.name())?;
    let n = qudits.len();
    let chain = Chain::new(qudits, d1);
    let bounds = RingBounds::new(qudits, &chain);

    stream.reseed(seed);
    let fields = Fields::draw(qudits, stream);

    let mut j_1 = Array2::zeros((n, n));
    let mut j_2 = Array2::zeros((n, n));
    for i in 0..n {
        let k = ring_neighbor(i, n);
        j_1[[i, k]] = afm_edge(stream);
        j_2[[i, k]] = fm_edge(stream);
    }

    report(Family::FmAfmThreeObjs, qudits, seed, &bounds.spans());
    bounds.normalize(&fields, &j_1, &j_2, &qudits.centers())
}
