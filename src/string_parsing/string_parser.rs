use crate::util::misc_extension_traits::PopChar;
use std::fmt::{Display, Formatter};

#[derive(Debug, Eq, PartialOrd, PartialEq, Ord, Hash, Clone)]
pub enum StringParseErrorCode {
    StringWithoutOpeningQuote,
    InvalidString,
    EmptyString,
    StringWithoutClosingQuote,
}

use StringParseErrorCode::*;

impl Display for StringParseErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", string_parse_error_to_string(self))
    }
}

fn string_parse_error_to_string(err: &StringParseErrorCode) -> &'static str {
    match err {
        StringWithoutOpeningQuote => "The string did not start with an opening quote.",
        InvalidString => "The string consisted of only an opening quote and nothing else.",
        EmptyString => "The string was empty. Config keys and values may not be empty.",
        StringWithoutClosingQuote => "The string did not contain a closing quote.",
    }
}

/// Parses one double-quoted string off the front of `slice`, skipping leading
/// whitespace, and advances `slice` past the closing quote. `\"` inside the
/// string yields a literal quote.
pub fn parse_string(slice: &mut &str) -> Result<String, StringParseErrorCode> {
    *slice = slice.trim_start();
    if slice.pop_char() != Some('"') {
        return Err(StringWithoutOpeningQuote);
    }
    if slice.is_empty() {
        return Err(InvalidString);
    }

    let mut ret = String::new();
    let mut backslashes_in_a_row: usize = 0;
    loop {
        let Some(current_char) = slice.pop_char() else {
            return Err(StringWithoutClosingQuote);
        };
        if current_char == '"' {
            // An odd run of backslashes escapes the quote.
            if backslashes_in_a_row % 2 == 0 {
                break;
            }
            ret.pop();
        }
        if current_char == '\\' {
            backslashes_in_a_row += 1;
        } else {
            backslashes_in_a_row = 0;
        }
        ret.push(current_char);
    }

    if ret.is_empty() {
        return Err(EmptyString);
    }
    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_without_opening_quote() {
        assert_eq!(
            parse_string(&mut "level\"trace\""),
            Err(StringWithoutOpeningQuote)
        );
    }

    #[test]
    fn test_successful_string_parse() {
        assert_eq!(
            parse_string(&mut "\"level\" = \"trace\""),
            Ok("level".to_string())
        );
    }

    #[test]
    fn test_parse_string() {
        assert_eq!(parse_string(&mut "\"colors\""), Ok("colors".to_string()));
        assert_eq!(
            parse_string(&mut "\"co\\\"lors\""),
            Ok("co\"lors".to_string())
        );
        assert_eq!(parse_string(&mut "\"utc"), Err(StringWithoutClosingQuote));
        assert_eq!(parse_string(&mut "\""), Err(InvalidString));
        assert_eq!(parse_string(&mut "\"\""), Err(EmptyString));
        assert_eq!(parse_string(&mut ""), Err(StringWithoutOpeningQuote));

        util("\"trace\"", "", Ok("trace".into()));
        util("   \"trace\" = \"x\"", " = \"x\"", Ok("trace".into()));
        util("\"a\\\\\"rest", "rest", Ok("a\\\\".into()));
    }

    fn util(
        input: &'static str,
        expected_slice_at_end: &'static str,
        expected_result: Result<String, StringParseErrorCode>,
    ) {
        let string = String::from(input);
        let slice = &mut string.as_str();
        let parsed = parse_string(slice);
        assert_eq!(parsed, expected_result);
        assert_eq!(slice, &expected_slice_at_end);
    }
}
