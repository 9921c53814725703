//! JSON number grammar helpers.

/// Returns the length of the longest JSON number prefix of `data`, or `None`
/// when `data` does not start with a valid number.
pub(crate) fn scan_number(data: &[u8]) -> Option<usize> {
    let mut end = 0;
    if data.first() == Some(&b'-') {
        end += 1;
    }
    match data.get(end) {
        Some(b'0') => end += 1,
        Some(b'1'..=b'9') => {
            while matches!(data.get(end), Some(b'0'..=b'9')) {
                end += 1;
            }
        }
        _ => return None,
    }
    if data.get(end) == Some(&b'.') {
        end += 1;
        let start = end;
        while matches!(data.get(end), Some(b'0'..=b'9')) {
            end += 1;
        }
        if end == start {
            return None;
        }
    }
    if matches!(data.get(end), Some(b'e' | b'E')) {
        end += 1;
        if matches!(data.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let start = end;
        while matches!(data.get(end), Some(b'0'..=b'9')) {
            end += 1;
        }
        if end == start {
            return None;
        }
    }
    Some(end)
}

/// Returns `true` when `text` is exactly one JSON number.
pub fn is_json_number(text: &str) -> bool {
    scan_number(text.as_bytes()) == Some(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_grammar_matrix() {
        for ok in ["0", "-0", "12", "-12.5", "1e9", "1.0E-3", "123456789012345678901234567890"] {
            assert!(is_json_number(ok), "{ok}");
        }
        for bad in ["", "-", "01", "1.", ".5", "1e", "+1", "1.5x", "NaN"] {
            assert!(!is_json_number(bad), "{bad}");
        }
    }
}
