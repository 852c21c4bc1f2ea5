use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire regression core.
pub type Result<T> = std::result::Result<T, RegressionErr>;

/// The regression core's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionErr {
    /// Normalization was attempted against a list whose minimum equals its maximum.
    DegenerateRange { what: &'static str, value: f64 },
    /// A computation over samples was given no samples at all.
    EmptyInput { what: &'static str },
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    InvalidInput(&'static str),
}

impl Display for RegressionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionErr::DegenerateRange { what, value } => write!(
                f,
                "cannot normalize against {what}: every value equals {value}, the range is empty"
            ),
            RegressionErr::EmptyInput { what } => write!(f, "{what} must not be empty"),
            RegressionErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "there's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            RegressionErr::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for RegressionErr {}

/// Checks that two paired sample sequences can be zipped together and are not empty.
pub(crate) fn check_paired(
    a: &'static str,
    b: &'static str,
    xs: &[f64],
    ys: &[f64],
) -> Result<usize> {
    if xs.len() != ys.len() {
        return Err(RegressionErr::SizeMismatch {
            a,
            b,
            got: ys.len(),
            expected: xs.len(),
        });
    }

    if xs.is_empty() {
        return Err(RegressionErr::EmptyInput { what: a });
    }

    Ok(xs.len())
}
