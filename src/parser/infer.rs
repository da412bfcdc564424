//! Per-column type inference

use crate::model::{CellType, CellValue};

/// Classify each of `width` columns from the raw tokens of all rows.
///
/// A column is integer when every token parses as an integer, float when
/// every token parses as a float, and text otherwise. The pass runs over
/// whole columns, never single cells, so every cell of a column carries the
/// same type. A column with no rows is text.
pub fn classify_columns(rows: &[Vec<String>], width: usize) -> Vec<CellType> {
    (0..width)
        .map(|col| {
            if rows.is_empty() {
                CellType::Text
            } else if rows.iter().all(|row| row[col].parse::<i64>().is_ok()) {
                CellType::Int
            } else if rows.iter().all(|row| row[col].parse::<f64>().is_ok()) {
                CellType::Float
            } else {
                CellType::Text
            }
        })
        .collect()
}

/// Convert one raw token to a value of the column's classified type
pub fn coerce(token: &str, cell_type: CellType) -> CellValue {
    match cell_type {
        CellType::Int => token
            .parse::<i64>()
            .map(CellValue::Int)
            .unwrap_or_else(|_| CellValue::Text(token.to_string())),
        CellType::Float => token
            .parse::<f64>()
            .map(CellValue::Float)
            .unwrap_or_else(|_| CellValue::Text(token.to_string())),
        CellType::Text => CellValue::Text(token.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_all_ints_classify_as_int() {
        let rows = rows(&[&["23"], &["21"], &["22"], &["21"]]);
        assert_eq!(classify_columns(&rows, 1), vec![CellType::Int]);
    }

    #[test]
    fn test_int_float_mix_classifies_as_float() {
        let rows = rows(&[&["1.0"], &["2"], &["3.5"]]);
        assert_eq!(classify_columns(&rows, 1), vec![CellType::Float]);
    }

    #[test]
    fn test_any_unparseable_token_classifies_as_text() {
        let rows = rows(&[&["23.5"], &["21"], &["x"]]);
        assert_eq!(classify_columns(&rows, 1), vec![CellType::Text]);
    }

    #[test]
    fn test_empty_column_defaults_to_text() {
        assert_eq!(classify_columns(&[], 2), vec![CellType::Text, CellType::Text]);
    }

    #[test]
    fn test_coerce_follows_column_type() {
        assert_eq!(coerce("42", CellType::Int), CellValue::Int(42));
        assert_eq!(coerce("2", CellType::Float), CellValue::Float(2.0));
        assert_eq!(
            coerce("42", CellType::Text),
            CellValue::Text("42".to_string())
        );
    }
}
