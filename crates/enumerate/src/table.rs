use std::{
    io::Write,
    path::{Path, PathBuf},
};

use ndarray::Array2;
use qmoo_core::{Family, ProblemInstance, QuditConfig};
use tracing::debug;

use crate::{Config, Error, States};

/// Evaluates every objective at every state of the instance's search space.
///
/// Returns a table with one row per state, in [`States`] order. The first
/// `n` columns hold the levels, the remaining columns the objective values.
///
/// # Errors
///
/// Returns [`Error::TooManyStates`] if the search space is larger than
/// [`Config::max_states`].
pub fn enumerate(instance: &ProblemInstance, config: &Config) -> Result<Array2<f64>, Error> {
    let qudits = instance.qudits();
    let limit = config.max_states();
    let states = match qudits.state_count() {
        Some(states) if states <= limit => states,
        states => return Err(Error::TooManyStates { states, limit }),
    };

    let n = qudits.len();
    let width = n + instance.objectives().len();
    debug!(family = %instance.family(), %qudits, states, width, "enumerating");

    let mut table = Array2::zeros((states, width));
    for (mut row, state) in table.rows_mut().into_iter().zip(States::new(qudits)) {
        let values = instance.evaluate(&state)?;
        for (cell, level) in row.iter_mut().zip(&state) {
            *cell = *level as f64;
        }
        for (cell, value) in row.iter_mut().skip(n).zip(values) {
            *cell = value;
        }
    }

    Ok(table)
}

/// Writes an enumeration table as whitespace-separated text.
///
/// The first line is a `#`-prefixed header naming the columns
/// `q0 … q{n-1} obj0 … obj{k-1}`. Every value is written in scientific
/// notation with 18 fractional digits and an explicit exponent sign, such as
/// `1.000000000000000000e+00`, so the output loads with any reader of numpy
/// text tables.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn write_table<W: Write>(
    mut writer: W,
    table: &Array2<f64>,
    n_params: usize,
) -> Result<(), Error> {
    let columns = table.ncols();
    let header = (0..columns)
        .map(|i| {
            if i < n_params {
                format!("q{i}")
            } else {
                format!("obj{}", i - n_params)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(writer, "# {header}")?;

    for row in table.rows() {
        let line = row
            .iter()
            .map(|&value| scientific(value))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Returns the path of an instance's table below `out_dir`.
///
/// `<out_dir>/<family>_normalized_<levels>/<family>_qudits_<levels>_seed<seed>_all_energies.dat`,
/// where `<levels>` joins the level counts with underscores.
#[must_use]
pub fn output_path(out_dir: &Path, family: Family, qudits: &QuditConfig, seed: u32) -> PathBuf {
    let levels = qudits
        .levels()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("_");

    out_dir
        .join(format!("{family}_normalized_{levels}"))
        .join(format!("{family}_qudits_{levels}_seed{seed}_all_energies.dat"))
}

/// Formats like C's `%.18e`.
fn scientific(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }

    let formatted = format!("{value:.18e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn scientific_matches_printf() {
        assert_eq!(scientific(1.0), "1.000000000000000000e+00");
        assert_eq!(scientific(0.0), "0.000000000000000000e+00");
        assert_eq!(scientific(-0.25), "-2.500000000000000000e-01");
        assert_eq!(scientific(12345.0), "1.234500000000000000e+04");
        assert_eq!(scientific(1e-120), "9.999999999999999786e-121");
        assert_eq!(scientific(2f64.powi(-400)), "3.872591914849318273e-121");
        assert_eq!(scientific(f64::NAN), "nan");
    }

    #[test]
    fn writes_header_and_rows() {
        let table = array![[0.0, 1.0, 0.5], [1.0, 0.0, 0.25]];
        let mut out = Vec::new();
        write_table(&mut out, &table, 2).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "# q0 q1 obj0");
        assert_eq!(
            lines[1],
            "0.000000000000000000e+00 1.000000000000000000e+00 5.000000000000000000e-01"
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn output_path_joins_levels() {
        let qudits = QuditConfig::new(vec![3, 3, 2]).unwrap();
        let path = output_path(Path::new("setup_data"), Family::FmAfmTwoObjs, &qudits, 4);

        assert_eq!(
            path,
            Path::new("setup_data")
                .join("problem_FM_AFM_two_objs_normalized_3_3_2")
                .join("problem_FM_AFM_two_objs_qudits_3_3_2_seed4_all_energies.dat")
        );
    }
}
