use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use log::{info, warn};

use super::{table::read_columns, DataErr, Result};
use crate::model::{Coefficients, Thetas};

/// Where the coefficients are kept when no path is given.
pub const DEFAULT_THETAS_PATH: &str = "thetas.csv";

const COLUMNS: &[&str; 2] = &["theta0", "theta1"];

/// Persists trained coefficients as a one-row `theta0,theta1` CSV file.
#[derive(Debug, Clone)]
pub struct ThetaStore {
    path: PathBuf,
}

impl Default for ThetaStore {
    fn default() -> Self {
        Self::new(DEFAULT_THETAS_PATH)
    }
}

impl ThetaStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored coefficients.
    ///
    /// # Returns
    /// `Coefficients::Unavailable` if the file doesn't exist, the coefficients if the file holds
    /// exactly one row of finite values, an error otherwise.
    pub fn load(&self) -> Result<Coefficients> {
        if self.path.is_dir() {
            return Err(DataErr::IsADirectory(self.path.clone()));
        }

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(
                    "{} not found, predictions will default to 0, train beforehand to avoid this",
                    self.path.display()
                );
                return Ok(Coefficients::Unavailable);
            }
            Err(source) => {
                return Err(DataErr::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let [theta0, theta1] = read_columns(BufReader::new(file), COLUMNS)?;
        let thetas = match (theta0.as_slice(), theta1.as_slice()) {
            ([theta0], [theta1]) => Thetas::new(*theta0, *theta1),
            ([], _) => return Err(DataErr::NotEnoughRows { got: 0, min: 1 }),
            _ => {
                return Err(DataErr::TooManyRows {
                    got: theta0.len(),
                    max: 1,
                })
            }
        };

        info!("loaded coefficients from {}", self.path.display());
        Ok(Coefficients::Available(thetas))
    }

    /// Writes `thetas`, replacing whatever the file held.
    pub fn save(&self, thetas: Thetas) -> Result<()> {
        let io_err = |source: io::Error| DataErr::Io {
            path: self.path.clone(),
            source,
        };

        let file = File::create(&self.path).map_err(io_err)?;
        let mut writer = csv::Writer::from_writer(file);
        writer.serialize(thetas)?;
        writer.flush().map_err(io_err)?;

        info!("saved coefficients to {}", self.path.display());
        Ok(())
    }
}
