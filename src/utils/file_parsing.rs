#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Splits one line of delimited text into trimmed fields.
///
/// Spreadsheet exports sometimes quote numeric cells, so a field wrapped in
/// matching single or double quotes is unwrapped. A trailing delimiter yields
/// a final empty field, which callers treat as malformed.
pub fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    line.trim_end_matches(['\r', '\n'])
        .split(delimiter)
        .map(|field| strip_surrounding_quotes(field.trim()).trim())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quotes_works() {
        assert_eq!(strip_surrounding_quotes("'12.5'"), "12.5");
        assert_eq!(strip_surrounding_quotes(r#""-3""#), "-3");
        assert_eq!(strip_surrounding_quotes("7"), "7");
        assert_eq!(strip_surrounding_quotes("\"7'"), "\"7'");
    }

    #[test]
    fn splits_and_trims() {
        let got = split_fields(" 50, 60 ,\"40\",'-5'\r\n", ',');
        assert_eq!(got, vec!["50", "60", "40", "-5"]);
    }

    #[test]
    fn trailing_delimiter_leaves_empty_field() {
        assert_eq!(split_fields("1,2,", ','), vec!["1", "2", ""]);
    }

    #[test]
    fn alternative_delimiter() {
        assert_eq!(split_fields("1\t2\t3", '\t'), vec!["1", "2", "3"]);
    }
}
