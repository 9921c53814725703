//! Packed text encoding for integer vectors and matrices.
//!
//! A vector is its decimal elements joined by `,`; a matrix is its rows
//! joined by `|`. Empty tokens inside a vector are skipped on decode, so
//! `"1,,2"` reads as `[1, 2]` and `""` as `[]`. Matrix segments are kept even
//! when empty: `"1|"` reads as `[[1], []]`.
//!
//! `[[]]` and `[]` both encode to `""`, which decodes to `[]`.

use crate::PackError;

const ARRAY_DELIMITER: char = ',';
const ARRAYS_DELIMITER: char = '|';

pub fn encode_ints(values: &[i32]) -> String {
    let mut out = String::new();
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            out.push(ARRAY_DELIMITER);
        }
        out.push_str(&value.to_string());
    }
    out
}

pub fn encode_int_matrix(rows: &[Vec<i32>]) -> String {
    let mut out = String::new();
    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            out.push(ARRAYS_DELIMITER);
        }
        out.push_str(&encode_ints(row));
    }
    out
}

pub fn decode_ints(text: &str) -> Result<Vec<i32>, PackError> {
    text.split(ARRAY_DELIMITER)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|_| PackError::MalformedInt(token.to_owned()))
        })
        .collect()
}

pub fn decode_int_matrix(text: &str) -> Result<Vec<Vec<i32>>, PackError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(ARRAYS_DELIMITER).map(decode_ints).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_vectors_and_matrices() {
        assert_eq!(encode_ints(&[]), "");
        assert_eq!(encode_ints(&[1, -2, 300]), "1,-2,300");
        assert_eq!(encode_int_matrix(&[vec![1, 2], vec![-3]]), "1,2|-3");
    }

    #[test]
    fn decode_skips_empty_tokens() {
        assert_eq!(decode_ints("").unwrap(), Vec::<i32>::new());
        assert_eq!(decode_ints(",1,,2,").unwrap(), vec![1, 2]);
    }

    #[test]
    fn decode_keeps_empty_rows() {
        assert_eq!(decode_int_matrix("").unwrap(), Vec::<Vec<i32>>::new());
        assert_eq!(
            decode_int_matrix("1,2||3").unwrap(),
            vec![vec![1, 2], vec![], vec![3]]
        );
        assert_eq!(decode_int_matrix("1|").unwrap(), vec![vec![1], vec![]]);
        assert_eq!(
            decode_int_matrix("|").unwrap(),
            vec![Vec::<i32>::new(), Vec::new()]
        );
        assert_eq!(encode_int_matrix(&[vec![16842910], vec![]]), "16842910|");
    }

    #[test]
    fn decode_rejects_non_numeric_tokens() {
        assert_eq!(decode_ints("1,x"), Err(PackError::MalformedInt("x".into())));
        assert_eq!(
            decode_int_matrix("1|2,9999999999"),
            Err(PackError::MalformedInt("9999999999".into()))
        );
    }
}
