use std::num::ParseIntError;

/// A line of the form `<digits><whitespace><key>`, with the key borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataLine<'a> {
    pub value: i64,
    pub key: &'a str,
}

/// Classify a single line.
///
/// Returns `Ok(None)` for anything that is not a data line: blank lines, decoration,
/// lines starting with something other than a digit, or digits followed by a single
/// whitespace character and nothing else. The key is everything after the first
/// whitespace run, verbatim. When the line ends in that run and the run is longer than
/// one character, its last character is the key, as `^[0-9]+\s+.+$` would capture it.
/// The only error is a digit prefix too large for an `i64`.
pub fn match_line(line: &str) -> Result<Option<DataLine<'_>>, ParseIntError> {
    // Leading run of ASCII digits; these are single bytes so the index is a char boundary
    let digits_end = line.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(line.len());
    if digits_end == 0 {
        return Ok(None);
    }
    let (digits, rest) = line.split_at(digits_end);
    // At least one whitespace character must separate the number from the key
    let mut key = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let separator_len = rest.len() - key.len();
    if separator_len == 0 {
        return Ok(None);
    }
    if key.is_empty() {
        // The run is ASCII, so its last byte is a whole char
        if separator_len < 2 {
            return Ok(None);
        }
        key = &rest[separator_len - 1..];
    }
    Ok(Some(DataLine { value: digits.parse()?, key }))
}
