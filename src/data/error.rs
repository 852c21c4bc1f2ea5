use std::{error::Error, fmt, io, path::PathBuf};

use crate::error::RegressionErr;

/// The data module's result type.
pub type Result<T> = std::result::Result<T, DataErr>;

/// Failures while reading or writing the dataset and coefficient files.
#[derive(Debug)]
pub enum DataErr {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    IsADirectory(PathBuf),
    Csv(csv::Error),
    /// The header doesn't have the expected amount of columns.
    ColumnCount {
        got: usize,
        expected: usize,
    },
    /// The header has the right amount of columns but not the expected names.
    WrongColumns {
        got: Vec<String>,
        expected: &'static [&'static str],
    },
    /// Fewer rows than required.
    NotEnoughRows {
        got: usize,
        min: usize,
    },
    /// More rows than allowed.
    TooManyRows {
        got: usize,
        max: usize,
    },
    MissingValue {
        row: usize,
        column: &'static str,
    },
    /// A row with more fields than the header.
    ExtraValues {
        row: usize,
        got: usize,
        expected: usize,
    },
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
    NanValue {
        row: usize,
        column: &'static str,
    },
    NegativeValue {
        row: usize,
        column: &'static str,
        value: f64,
    },
    Regression(RegressionErr),
}

impl fmt::Display for DataErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataErr::Io { path, source } => {
                write!(f, "cannot access '{}': {source}", path.display())
            }
            DataErr::IsADirectory(path) => write!(f, "'{}' is a directory", path.display()),
            DataErr::Csv(e) => write!(f, "csv error: {e}"),
            DataErr::ColumnCount { got, expected } if got > expected => {
                write!(f, "unnecessary column(s): got {got}, expected {expected}")
            }
            DataErr::ColumnCount { got, expected } => {
                write!(f, "missing column(s): got {got}, expected {expected}")
            }
            DataErr::WrongColumns { got, expected } => write!(
                f,
                "wrong column(s): got {}, expected {}",
                got.join(","),
                expected.join(",")
            ),
            DataErr::NotEnoughRows { got, min } => {
                write!(f, "not enough data: got {got} row(s), need at least {min}")
            }
            DataErr::TooManyRows { got, max } => {
                write!(f, "too many rows: got {got}, expected at most {max}")
            }
            DataErr::MissingValue { row, column } => {
                write!(f, "row {row}: missing value for '{column}'")
            }
            DataErr::ExtraValues { row, got, expected } => {
                write!(f, "row {row}: unnecessary value(s), got {got}, expected {expected}")
            }
            DataErr::InvalidValue { row, column, value } => {
                write!(f, "row {row}: '{value}' is not a number (column '{column}')")
            }
            DataErr::NanValue { row, column } => write!(f, "row {row}: NaN value for '{column}'"),
            DataErr::NegativeValue { row, column, value } => {
                write!(f, "row {row}: negative value {value} for '{column}'")
            }
            DataErr::Regression(e) => write!(f, "{e}"),
        }
    }
}

impl Error for DataErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DataErr::Io { source, .. } => Some(source),
            DataErr::Csv(e) => Some(e),
            DataErr::Regression(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for DataErr {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<RegressionErr> for DataErr {
    fn from(value: RegressionErr) -> Self {
        Self::Regression(value)
    }
}
