use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
};

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use log::warn;

use linear_regression::{
    data::{Dataset, ThetaStore, DEFAULT_DATASET_PATH, DEFAULT_THETAS_PATH},
    precision, predict,
};

/// Predicts the price of a car from its mileage with previously trained coefficients.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Coefficients CSV with a `theta0,theta1` header
    #[arg(default_value = DEFAULT_THETAS_PATH)]
    thetas: PathBuf,

    /// The dataset the coefficients were trained on
    #[arg(long, default_value = DEFAULT_DATASET_PATH)]
    data: PathBuf,

    /// Mileage to predict for, asked on stdin if missing
    #[arg(long)]
    km: Option<f64>,

    /// Also report the model's precision over the dataset
    #[arg(long)]
    bonus: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let store = ThetaStore::new(&args.thetas);
    let coefficients = store
        .load()
        .with_context(|| format!("thetas file '{}' is corrupted", store.path().display()))?;

    let km = match args.km {
        Some(km) => km,
        None => ask_km()?,
    };
    if !km.is_finite() {
        bail!("mileage must be a number");
    }
    if km < 0.0 {
        bail!("mileage cannot be negative");
    }

    // Without coefficients there is nothing to denormalize against.
    let dataset = if coefficients.thetas().is_some() {
        let dataset = Dataset::load(&args.data)
            .with_context(|| format!("data file '{}' is corrupted", args.data.display()))?;
        Some(dataset)
    } else {
        None
    };
    let (ref_km, ref_price): (&[f64], &[f64]) = match &dataset {
        Some(dataset) => (dataset.km(), dataset.price()),
        None => (&[], &[]),
    };

    let price = predict(&coefficients, ref_km, ref_price, km)?;
    if price.is_default() {
        warn!("no trained coefficients, using the default price");
    }
    println!("Final price: {:.2} €", price.value());

    if args.bonus {
        let mae = precision(&coefficients, ref_km, ref_price)?;
        println!("Precision: {:.2} €", mae.value());
    }

    Ok(())
}

fn ask_km() -> anyhow::Result<f64> {
    print!("Enter a mileage (in km): ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("mileage must be a number");
    }

    line.trim()
        .parse()
        .map_err(|_| anyhow!("mileage must be a number"))
}
