use approx::assert_abs_diff_eq;
use qmoo_core::{Family, ProblemInstance, QuditConfig};
use qmoo_enumerate::{Config, Error, ObjectiveRange, States, enumerate, write_table};

const TOLERANCE: f64 = 1e-9;

/// Driver configurations small enough to enumerate quickly.
fn sweep() -> Vec<QuditConfig> {
    [(2, 12), (3, 8), (4, 6), (5, 5), (7, 4)]
        .into_iter()
        .map(|(levels, count)| QuditConfig::uniform(levels, count).unwrap())
        .collect()
}

/// Seeds 0–2 are enclosed on every configuration of the sweep; see the
/// tests below for draws that are not.
#[test]
fn objectives_stay_in_unit_interval() {
    let config = Config::default();
    for qudits in sweep() {
        for family in Family::ALL {
            for seed in 0..3 {
                let instance = ProblemInstance::generate(family, qudits.clone(), seed).unwrap();
                let table = enumerate(&instance, &config).unwrap();
                let range = ObjectiveRange::from_table(&table, qudits.len());

                assert!(
                    range.within_unit_interval(TOLERANCE),
                    "{family} on {qudits} seed {seed}: {:?} .. {:?}",
                    range.min(),
                    range.max()
                );
            }
        }
    }
}

fn range_of(family: Family, qudits: QuditConfig, seed: u32) -> ObjectiveRange {
    let n = qudits.len();
    let instance = ProblemInstance::generate(family, qudits, seed).unwrap();
    let table = enumerate(&instance, &Config::default()).unwrap();
    ObjectiveRange::from_table(&table, n)
}

#[test]
fn split_ring_bound_is_exceeded_on_four_septits() {
    // Objective 4 of the five-objective family escapes its bound on 7x4 for
    // some seeds.
    let range = range_of(Family::QuadraticFiveObjs, QuditConfig::uniform(7, 4).unwrap(), 3);

    assert_abs_diff_eq!(range.max()[3], 1.021902687674251, epsilon = TOLERANCE);
    assert_abs_diff_eq!(range.min()[3], 0.7211382706654345, epsilon = TOLERANCE);
    assert!(!range.is_dominated_by(&[1.0; 5]));
    assert!(!range.within_unit_interval(TOLERANCE));
}

#[test]
fn ring_bounds_do_not_enclose_two_variable_chains() {
    let range = range_of(Family::FmAfmThreeObjs, QuditConfig::uniform(3, 2).unwrap(), 12);

    assert_abs_diff_eq!(range.min()[0], -0.3394840968849915, epsilon = TOLERANCE);
    assert_abs_diff_eq!(range.max()[1], 1.3669697406772556, epsilon = TOLERANCE);
    assert!(!range.within_unit_interval(TOLERANCE));
    assert!(!range.is_dominated_by(&[1.0; 3]));
}

#[test]
fn reference_point_dominates_enumerated_objectives() {
    let qudits = QuditConfig::uniform(2, 12).unwrap();
    let config = Config::default();
    for family in Family::ALL {
        for seed in 0..3 {
            let instance = ProblemInstance::generate(family, qudits.clone(), seed).unwrap();
            let table = enumerate(&instance, &config).unwrap();
            let range = ObjectiveRange::from_table(&table, qudits.len());

            assert!(
                range.is_dominated_by(&instance.reference_point()),
                "{family} seed {seed}: {:?}",
                range.max()
            );
        }
    }
}

#[test]
fn table_rows_follow_state_order() {
    let qudits = QuditConfig::new(vec![2, 3, 2]).unwrap();
    let instance = ProblemInstance::generate(Family::LinearCorr05, qudits.clone(), 4).unwrap();
    let table = enumerate(&instance, &Config::default()).unwrap();

    assert_eq!(table.dim(), (12, 5));
    for (row, state) in table.rows().into_iter().zip(States::new(&qudits)) {
        let values = instance.evaluate(&state).unwrap();
        for (k, &level) in state.iter().enumerate() {
            assert_abs_diff_eq!(row[k], level as f64);
        }
        for (k, value) in values.into_iter().enumerate() {
            assert_abs_diff_eq!(row[3 + k], value);
        }
    }
}

#[test]
fn refuses_search_spaces_over_the_limit() {
    let qudits = QuditConfig::uniform(3, 8).unwrap();
    let instance = ProblemInstance::generate(Family::FmAfmTwoObjs, qudits, 0).unwrap();
    let config = Config::new(1000).unwrap();

    assert!(matches!(
        enumerate(&instance, &config),
        Err(Error::TooManyStates {
            states: Some(6561),
            limit: 1000
        })
    ));
}

#[test]
fn written_table_has_one_line_per_state() {
    let qudits = QuditConfig::uniform(3, 4).unwrap();
    let instance = ProblemInstance::generate(Family::FmAfmThreeObjs, qudits, 1).unwrap();
    let table = enumerate(&instance, &Config::default()).unwrap();

    let mut out = Vec::new();
    write_table(&mut out, &table, 4).unwrap();
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();

    assert_eq!(lines.next(), Some("# q0 q1 q2 q3 obj0 obj1 obj2"));
    let rows: Vec<Vec<f64>> = lines
        .map(|line| line.split(' ').map(|v| v.parse().unwrap()).collect())
        .collect();
    assert_eq!(rows.len(), 81);
    assert!(rows.iter().all(|row| row.len() == 7));

    // Values survive the text round trip to within the printed precision.
    for (row, parsed) in table.rows().into_iter().zip(&rows) {
        for (&want, &got) in row.iter().zip(parsed) {
            assert_abs_diff_eq!(want, got, epsilon = 1e-15);
        }
    }
}
