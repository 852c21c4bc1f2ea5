use std::{num::NonZeroUsize, path::PathBuf, process};

use anyhow::{anyhow, Context};
use clap::Parser;
use log::info;

use linear_regression::{
    data::{Dataset, ThetaStore, DEFAULT_DATASET_PATH, DEFAULT_THETAS_PATH},
    Trainer, TrainingConfig,
};

/// Fits `price = theta1 * km + theta0` to a dataset and stores the coefficients.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Dataset CSV with a `km,price` header
    #[arg(default_value = DEFAULT_DATASET_PATH)]
    dataset: PathBuf,

    /// Where the trained coefficients are written
    #[arg(long, default_value = DEFAULT_THETAS_PATH)]
    thetas: PathBuf,

    /// JSON file with `iterations` and/or `learning_rate`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the configured amount of iterations
    #[arg(long)]
    iterations: Option<NonZeroUsize>,

    /// Overrides the configured initial learning rate
    #[arg(long)]
    learning_rate: Option<f64>,

    /// Also export the per-iteration history for charting
    #[arg(long)]
    bonus: bool,

    /// Where the history is written with `--bonus`
    #[arg(long, default_value = "history.json")]
    history: PathBuf,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => TrainingConfig::from_json_file(path).map_err(|e| anyhow!(e))?,
        None => TrainingConfig::default(),
    };

    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    if let Some(learning_rate) = args.learning_rate {
        config.learning_rate = learning_rate;
    }
    config.validate()?;

    let dataset = Dataset::load(&args.dataset)
        .with_context(|| format!("data file '{}' is corrupted", args.dataset.display()))?;
    let (km, price) = dataset.normalized().context("cannot normalize the dataset")?;

    info!("training model");
    let fit = Trainer::new(config)
        .record_history(args.bonus)
        .fit(&km, &price)?;

    let store = ThetaStore::new(&args.thetas);
    store
        .save(fit.thetas)
        .with_context(|| format!("cannot save thetas to '{}'", store.path().display()))?;

    println!("Final thetas value:");
    println!("   - theta0: {}", fit.thetas.theta0);
    println!("   - theta1: {}", fit.thetas.theta1);

    if let Some(history) = &fit.history {
        history
            .write_json(&args.history)
            .with_context(|| format!("cannot write history to '{}'", args.history.display()))?;
        println!("History written to {}", args.history.display());
    }

    Ok(())
}
