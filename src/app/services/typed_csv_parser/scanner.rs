//! Line and value splitting for typed-CSV text

use crate::constants::typed_csv::{QUOTE, VALUE_DELIMITER};

/// Split text on `\n` / `\r\n`, dropping blank and whitespace-only lines
pub fn logical_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n')
        .map(|line| {
            line.strip_suffix("\r\n")
                .or_else(|| line.strip_suffix('\n'))
                .unwrap_or(line)
        })
        .filter(|line| !line.trim().is_empty())
}

/// Split a data row on commas outside double quotes
///
/// Each quote toggles the in-quotes state and stays part of the value.
/// There is no escape sequence. Values are not trimmed.
pub fn split_values(line: &str) -> Vec<&str> {
    let mut values = Vec::new();
    let mut inside_quotes = false;
    let mut start = 0;

    for (index, ch) in line.char_indices() {
        if ch == QUOTE {
            inside_quotes = !inside_quotes;
        } else if ch == VALUE_DELIMITER && !inside_quotes {
            values.push(&line[start..index]);
            start = index + ch.len_utf8();
        }
    }

    values.push(&line[start..]);
    values
}
