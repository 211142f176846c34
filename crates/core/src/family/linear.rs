use crate::{Error, ObjectiveSpec, QuditConfig, RandomStream, correlated_rand};

use super::{Family, report};

/// Correlation of the second objective's coefficients with the first.
const CORRELATION: f64 = -0.5;

/// Two anti-correlated linear objectives.
///
/// Coefficients of the first objective are drawn from `U[-1, 1]`; the second
/// is [`correlated_rand`] of the first with correlation `-0.5`. Both are scaled
/// by `0.5 / Σ(d_i - 1)` and offset by `0.5`, so `|x·c| ≤ 0.5` keeps every
/// value in `[0, 1]`. Heterogeneous alphabets are supported.
pub(crate) fn generate(
    qudits: &QuditConfig,
    seed: u32,
    stream: &mut RandomStream,
) -> Result<Vec<ObjectiveSpec>, Error> {
    stream.reseed(seed);

    let cost_1 = stream.uniform_vector(-1.0, 1.0, qudits.len());
    let cost_2 = correlated_rand(&cost_1, CORRELATION, 1.0, stream)?;

    // Raw values lie in [-Σ(d_i - 1), Σ(d_i - 1)].
    let scale = qudits.max_level_sum();
    report(Family::LinearCorr05, qudits, seed, &[2.0 * scale; 2]);

    Ok(vec![
        ObjectiveSpec::linear(cost_1 * 0.5 / scale, 0.5),
        ObjectiveSpec::linear(cost_2 * 0.5 / scale, 0.5),
    ])
}
