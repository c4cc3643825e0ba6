//! Bidirectional mapping between small integers and their word form.
//!
//! The CSS framework spells grid widths and column counts as words (`three wide column`), while
//! authors write `3`, `"3"` or `"three"` interchangeably.

use sui_contract::{format_number, PropValue};

use crate::NumeralError;

/// Largest supported numeral.
pub const MAX_NUMERAL: u8 = 16;

const WORDS: [&str; MAX_NUMERAL as usize] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
];

/// Word form of `n`.
///
/// # Errors
///
/// Returns [`NumeralError::OutOfRange`] unless `1 <= n <= MAX_NUMERAL`.
pub fn word_for(n: u32) -> Result<&'static str, NumeralError> {
    usize::try_from(n)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| WORDS.get(index).copied())
        .ok_or_else(|| NumeralError::OutOfRange {
            value: n.to_string(),
            max: MAX_NUMERAL,
        })
}

/// Number for a numeral word.
///
/// # Errors
///
/// Returns [`NumeralError::UnknownWord`] for anything outside the vocabulary.
pub fn number_for(word: &str) -> Result<u8, NumeralError> {
    WORDS
        .iter()
        .position(|candidate| *candidate == word)
        .and_then(|index| u8::try_from(index + 1).ok())
        .ok_or_else(|| NumeralError::UnknownWord(word.to_string()))
}

/// Parses a number, numeric string or numeral word.
///
/// # Errors
///
/// Fails for out-of-range or non-integral numbers, unknown words, and non-string/number values.
pub fn parse_numeral(value: &PropValue) -> Result<u8, NumeralError> {
    match value {
        PropValue::Number(n) => number_in_range(*n).ok_or_else(|| NumeralError::OutOfRange {
            value: format_number(*n),
            max: MAX_NUMERAL,
        }),
        PropValue::String(raw) => match raw.trim().parse::<f64>() {
            Ok(n) => number_in_range(n).ok_or_else(|| NumeralError::OutOfRange {
                value: raw.clone(),
                max: MAX_NUMERAL,
            }),
            Err(_) => number_for(raw),
        },
        other => Err(NumeralError::UnsupportedKind(other.kind())),
    }
}

fn number_in_range(n: f64) -> Option<u8> {
    (n.fract() == 0.0 && n >= 1.0 && n <= f64::from(MAX_NUMERAL)).then_some(n as u8)
}

/// Lenient word form used by class builders.
///
/// Supported numbers and numeric strings map to their word; any other string passes through
/// unchanged; other kinds produce `None`.
pub fn number_to_word(value: &PropValue) -> Option<String> {
    match value {
        PropValue::Number(_) | PropValue::String(_) => Some(match parse_numeral(value) {
            Ok(n) => WORDS[usize::from(n) - 1].to_string(),
            Err(_) => value.to_token()?,
        }),
        _ => None,
    }
}

/// Every accepted width spelling: numeric strings, numbers and words.
pub fn widths() -> Vec<PropValue> {
    let numbers = 1..=u32::from(MAX_NUMERAL);
    numbers
        .clone()
        .map(|n| PropValue::String(n.to_string()))
        .chain(numbers.map(PropValue::from))
        .chain(WORDS.iter().map(|word| PropValue::from(*word)))
        .collect()
}

/// Returns `true` when `value` names a supported width.
///
/// Accepts exactly what [`parse_numeral`] accepts, so every spelling in [`widths`] and any
/// numeric string that parses into range.
pub fn is_width(value: &PropValue) -> bool {
    parse_numeral(value).is_ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn words_round_trip_over_the_vocabulary() {
        for n in 1..=u32::from(MAX_NUMERAL) {
            let word = word_for(n).expect("in range");
            assert_eq!(u32::from(number_for(word).expect("known word")), n);
        }
        assert_eq!(word_for(3), Ok("three"));
    }

    #[test]
    fn out_of_range_numbers_fail() {
        assert_eq!(
            word_for(0),
            Err(NumeralError::OutOfRange {
                value: "0".to_string(),
                max: MAX_NUMERAL
            })
        );
        assert!(word_for(17).is_err());
        assert!(parse_numeral(&PropValue::from(2.5)).is_err());
        assert_eq!(
            number_for("zero"),
            Err(NumeralError::UnknownWord("zero".to_string()))
        );
    }

    #[test]
    fn number_string_and_word_are_interchangeable() {
        for value in [PropValue::from(3), PropValue::from("3"), PropValue::from("three")] {
            assert_eq!(parse_numeral(&value), Ok(3));
            assert_eq!(number_to_word(&value).as_deref(), Some("three"));
        }
    }

    #[test]
    fn lenient_word_passes_unknown_strings_through() {
        assert_eq!(number_to_word(&PropValue::from("equal")).as_deref(), Some("equal"));
        assert_eq!(number_to_word(&PropValue::from(true)), None);
    }

    #[test]
    fn width_list_is_the_union_of_spellings() {
        let widths = widths();
        assert_eq!(widths.len(), usize::from(MAX_NUMERAL) * 3);
        assert!(widths.contains(&PropValue::from("16")));
        assert!(widths.contains(&PropValue::from(16)));
        assert!(widths.contains(&PropValue::from("sixteen")));
        assert!(is_width(&PropValue::from("four")));
        assert!(is_width(&PropValue::from(4)));
        assert!(!is_width(&PropValue::from("17")));
        assert!(!is_width(&PropValue::from(true)));
    }

    #[test]
    fn width_check_agrees_with_parsing() {
        for raw in ["3.0", " 3", "04", "three", "3"] {
            let value = PropValue::from(raw);
            assert_eq!(parse_numeral(&value), Ok(if raw == "04" { 4 } else { 3 }));
            assert!(is_width(&value), "{raw:?} should be a width");
        }
        for raw in ["3.5", "0", "seventeen", ""] {
            let value = PropValue::from(raw);
            assert!(parse_numeral(&value).is_err());
            assert!(!is_width(&value), "{raw:?} should not be a width");
        }
    }
}
