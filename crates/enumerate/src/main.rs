//! Generates benchmark instances and writes their fully enumerated tables.
//!
//! Usage: `qmoo-generate [--seeds N] [--problem NAME]... [--qudits SPEC]...`

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use qmoo_core::{Family, ProblemInstance, QuditConfig};
use qmoo_enumerate::{Config, ObjectiveRange, enumerate, output_path, write_table};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Configurations generated when no `--qudits` is given.
const DEFAULT_SWEEP: [(usize, usize); 7] = [
    (2, 12),
    (2, 13),
    (2, 14),
    (3, 8),
    (4, 6),
    (5, 5),
    (7, 4),
];

/// Tolerance of the unit-interval check on enumerated objectives.
const RANGE_TOLERANCE: f64 = 1e-9;

#[derive(Parser)]
#[command(
    name = "qmoo-generate",
    about = "Generate normalized qudit benchmark instances and enumerate their objective values"
)]
struct Cli {
    /// Number of seeds per family and configuration
    #[arg(long, default_value_t = 20)]
    seeds: u32,

    /// First seed of the sweep
    #[arg(long, default_value_t = 0)]
    first_seed: u32,

    /// Problem family, with or without the `problem_` prefix (default: all)
    #[arg(long = "problem")]
    problems: Vec<Family>,

    /// Qudit configuration, as `DxN` (e.g. `2x12`) or a comma list (e.g. `3,3,2`)
    #[arg(long = "qudits", value_parser = parse_qudits)]
    qudits: Vec<QuditConfig>,

    /// Directory the tables are written below
    #[arg(long, default_value = "setup_data")]
    out_dir: PathBuf,

    /// Refuse to enumerate search spaces with more states than this
    #[arg(long)]
    max_states: Option<usize>,

    /// Also write each instance's coefficients as JSON next to its table
    #[arg(long)]
    coefficients: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match cli.max_states {
        Some(limit) => Config::new(limit)?,
        None => Config::default(),
    };

    let problems = if cli.problems.is_empty() {
        Family::ALL.to_vec()
    } else {
        cli.problems.clone()
    };
    let sweep = if cli.qudits.is_empty() {
        DEFAULT_SWEEP
            .iter()
            .map(|&(levels, count)| QuditConfig::uniform(levels, count))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        cli.qudits.clone()
    };

    let last_seed = cli
        .first_seed
        .checked_add(cli.seeds)
        .context("seed range overflows u32")?;

    for seed in cli.first_seed..last_seed {
        for &family in &problems {
            for qudits in &sweep {
                info!(seed, %family, %qudits, "generating");
                run(&cli, &config, family, qudits.clone(), seed)?;
            }
        }
    }

    Ok(())
}

/// Generates, enumerates, and writes one instance.
///
/// Configurations the family does not support are skipped with a warning.
fn run(cli: &Cli, config: &Config, family: Family, qudits: QuditConfig, seed: u32) -> Result<()> {
    let path = output_path(&cli.out_dir, family, &qudits, seed);
    let Some(instance) = generate(family, qudits, seed)? else {
        return Ok(());
    };

    let table = enumerate(&instance, config)?;
    let n_params = instance.qudits().len();

    let range = ObjectiveRange::from_table(&table, n_params);
    info!(min = ?range.min(), max = ?range.max(), "objective range");
    check_range(&instance, &range);

    // Pareto-front extraction would read the objective columns of `table` here.

    create_parent(&path)?;
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    write_table(BufWriter::new(file), &table, n_params)?;

    if cli.coefficients {
        let json_path = path.with_extension("json");
        let file = File::create(&json_path)
            .with_context(|| format!("creating {}", json_path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &instance)?;
    }

    Ok(())
}

/// Generates an instance, or returns `None` if `family` cannot normalize
/// objectives over `qudits`.
fn generate(family: Family, qudits: QuditConfig, seed: u32) -> Result<Option<ProblemInstance>> {
    match ProblemInstance::generate(family, qudits, seed) {
        Ok(instance) => Ok(Some(instance)),
        Err(qmoo_core::Error::UnsupportedConfiguration(reason)) => {
            warn!(%family, seed, %reason, "skipping unsupported configuration");
            Ok(None)
        }
        Err(err) => Err(err).with_context(|| format!("generating {family} with seed {seed}")),
    }
}

/// Warns if the enumerated objectives leave `[0, 1]` or escape the
/// reference point. Returns `true` if neither happens.
fn check_range(instance: &ProblemInstance, range: &ObjectiveRange) -> bool {
    let family = instance.family();
    let qudits = instance.qudits();
    let seed = instance.seed();

    if !range.within_unit_interval(RANGE_TOLERANCE) {
        warn!(
            %family,
            %qudits,
            seed,
            min = ?range.min(),
            max = ?range.max(),
            "objective values leave the unit interval"
        );
        return false;
    }
    if !range.is_dominated_by(&instance.reference_point()) {
        warn!(
            %family,
            %qudits,
            seed,
            max = ?range.max(),
            "reference point does not dominate the enumerated objectives"
        );
        return false;
    }

    true
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    Ok(())
}

/// Parses `DxN` or a comma-separated list of level counts.
fn parse_qudits(spec: &str) -> Result<QuditConfig> {
    let levels = match spec.split_once('x') {
        Some((levels, count)) => {
            let levels: usize = levels.trim().parse().context("invalid level count")?;
            let count: usize = count.trim().parse().context("invalid qudit count")?;
            vec![levels; count]
        }
        None => spec
            .split(',')
            .map(|d| d.trim().parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .context("invalid level list")?,
    };

    Ok(QuditConfig::new(levels)?)
}
