use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::{DataErr, Result};

/// Reads a headed CSV table made of exactly the named numeric `columns`, in any order.
///
/// Rows shorter than the header fail on the first missing value, longer rows are rejected whole.
///
/// # Returns
/// One vector per requested column, in the order of `columns`, with rows in file order.
pub(super) fn read_columns<R: Read, const N: usize>(
    reader: R,
    columns: &'static [&'static str; N],
) -> Result<[Vec<f64>; N]> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let index = column_index(&headers, columns)?;
    let mut values: [Vec<f64>; N] = std::array::from_fn(|_| Vec::new());

    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1;

        if record.len() > N {
            return Err(DataErr::ExtraValues {
                row,
                got: record.len(),
                expected: N,
            });
        }

        for ((&column, &idx), column_values) in columns.iter().zip(&index).zip(&mut values) {
            column_values.push(parse_field(row, column, record.get(idx))?);
        }
    }

    Ok(values)
}

fn column_index<const N: usize>(
    headers: &StringRecord,
    columns: &'static [&'static str; N],
) -> Result<[usize; N]> {
    if headers.len() != N {
        return Err(DataErr::ColumnCount {
            got: headers.len(),
            expected: N,
        });
    }

    let mut index = [0; N];
    for (idx, column) in index.iter_mut().zip(columns) {
        *idx = headers
            .iter()
            .position(|h| h == *column)
            .ok_or_else(|| DataErr::WrongColumns {
                got: headers.iter().map(String::from).collect(),
                expected: columns,
            })?;
    }

    Ok(index)
}

fn parse_field(row: usize, column: &'static str, field: Option<&str>) -> Result<f64> {
    let field = match field {
        Some(field) if !field.is_empty() => field,
        _ => return Err(DataErr::MissingValue { row, column }),
    };

    let value: f64 = field.parse().map_err(|_| DataErr::InvalidValue {
        row,
        column,
        value: field.to_string(),
    })?;

    if value.is_nan() {
        return Err(DataErr::NanValue { row, column });
    }

    if value.is_infinite() {
        return Err(DataErr::InvalidValue {
            row,
            column,
            value: field.to_string(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[&str; 2] = &["a", "b"];

    #[test]
    fn columns_come_back_in_requested_order() {
        let [a, b] = read_columns("b,a\n1,2\n3,4\n".as_bytes(), COLUMNS).unwrap();
        assert_eq!(a, [2.0, 4.0]);
        assert_eq!(b, [1.0, 3.0]);
    }

    #[test]
    fn whitespace_around_fields_is_ignored() {
        let [a, b] = read_columns(" a , b \n 1.5 , 2e3 \n".as_bytes(), COLUMNS).unwrap();
        assert_eq!(a, [1.5]);
        assert_eq!(b, [2000.0]);
    }

    #[test]
    fn extra_column() {
        let err = read_columns("a,b,c\n1,2,3\n".as_bytes(), COLUMNS).unwrap_err();
        assert!(matches!(err, DataErr::ColumnCount { got: 3, expected: 2 }));
        assert!(err.to_string().starts_with("unnecessary"));
    }

    #[test]
    fn missing_column() {
        let err = read_columns("a\n1\n".as_bytes(), COLUMNS).unwrap_err();
        assert!(matches!(err, DataErr::ColumnCount { got: 1, expected: 2 }));
        assert!(err.to_string().starts_with("missing"));
    }

    #[test]
    fn wrong_column_name() {
        let err = read_columns("a,c\n1,2\n".as_bytes(), COLUMNS).unwrap_err();
        assert!(matches!(err, DataErr::WrongColumns { .. }));
    }

    #[test]
    fn empty_field() {
        let err = read_columns("a,b\n1,2\n3,\n".as_bytes(), COLUMNS).unwrap_err();
        assert!(matches!(err, DataErr::MissingValue { row: 2, column: "b" }));
    }

    #[test]
    fn short_row() {
        let err = read_columns("a,b\n1\n".as_bytes(), COLUMNS).unwrap_err();
        assert!(matches!(err, DataErr::MissingValue { row: 1, column: "b" }));
    }

    #[test]
    fn long_row() {
        let err = read_columns("a,b\n1,2,3\n".as_bytes(), COLUMNS).unwrap_err();
        assert!(matches!(
            err,
            DataErr::ExtraValues {
                row: 1,
                got: 3,
                expected: 2
            }
        ));
        assert!(err.to_string().contains("unnecessary"));
    }

    #[test]
    fn trailing_empty_field_is_still_extra() {
        let err = read_columns("a,b\n1,2\n3,4,\n".as_bytes(), COLUMNS).unwrap_err();
        assert!(matches!(err, DataErr::ExtraValues { row: 2, .. }));
    }

    #[test]
    fn not_a_number() {
        let err = read_columns("a,b\n1,two\n".as_bytes(), COLUMNS).unwrap_err();
        assert!(matches!(err, DataErr::InvalidValue { row: 1, column: "b", .. }));
    }

    #[test]
    fn nan_and_infinity() {
        let err = read_columns("a,b\nNaN,1\n".as_bytes(), COLUMNS).unwrap_err();
        assert!(matches!(err, DataErr::NanValue { row: 1, column: "a" }));

        let err = read_columns("a,b\n1,inf\n".as_bytes(), COLUMNS).unwrap_err();
        assert!(matches!(err, DataErr::InvalidValue { column: "b", .. }));
    }
}
