use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use log::info;

use super::{table::read_columns, DataErr, Result};
use crate::{error::RegressionErr, normalization::normalize_list};

/// Where the dataset is looked for when no path is given.
pub const DEFAULT_DATASET_PATH: &str = "data.csv";

const COLUMNS: &[&str; 2] = &["km", "price"];
const MIN_ROWS: usize = 2;

/// The training samples: mileages and their prices, paired by index.
///
/// A `Dataset` always holds at least two samples, all of them finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    km: Vec<f64>,
    price: Vec<f64>,
}

impl Dataset {
    /// Loads the dataset from a CSV file with a `km,price` header.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.is_dir() {
            return Err(DataErr::IsADirectory(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|source| DataErr::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_reader(BufReader::new(file))?;
        info!("loaded {} samples from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Reads the dataset from any CSV source with a `km,price` header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let [km, price] = read_columns(reader, COLUMNS)?;
        Self::new(km, price)
    }

    /// Builds a dataset from already parsed columns, validating them.
    ///
    /// # Errors
    /// `NotEnoughRows` with fewer than two samples, `NanValue` or `NegativeValue` on a bad
    /// sample and `Regression(SizeMismatch)` if the columns differ in length.
    pub fn new(km: Vec<f64>, price: Vec<f64>) -> Result<Self> {
        if km.len() != price.len() {
            return Err(RegressionErr::SizeMismatch {
                a: "km",
                b: "price",
                got: price.len(),
                expected: km.len(),
            }
            .into());
        }

        if km.len() < MIN_ROWS {
            return Err(DataErr::NotEnoughRows {
                got: km.len(),
                min: MIN_ROWS,
            });
        }

        for (&column, values) in COLUMNS.iter().zip([&km, &price]) {
            validate_column(column, values)?;
        }

        Ok(Self { km, price })
    }

    pub fn km(&self) -> &[f64] {
        &self.km
    }

    pub fn price(&self) -> &[f64] {
        &self.price
    }

    pub fn len(&self) -> usize {
        self.km.len()
    }

    /// Always false, a dataset holds at least two samples.
    pub fn is_empty(&self) -> bool {
        self.km.is_empty()
    }

    /// Both columns rescaled to `[0, 1]`.
    ///
    /// # Errors
    /// `DegenerateRange` if every mileage or every price is the same.
    pub fn normalized(&self) -> crate::error::Result<(Vec<f64>, Vec<f64>)> {
        Ok((normalize_list(&self.km)?, normalize_list(&self.price)?))
    }
}

fn validate_column(column: &'static str, values: &[f64]) -> Result<()> {
    for (i, &value) in values.iter().enumerate() {
        let row = i + 1;

        if value.is_nan() {
            return Err(DataErr::NanValue { row, column });
        }

        if value < 0.0 {
            return Err(DataErr::NegativeValue { row, column, value });
        }
    }

    Ok(())
}
