//! Client-side validation of the `x0` parameter.
//!
//! The value is gated on the client only, through the browser's native
//! constraint mechanism: the shell calls [`constraint_message`] on every
//! `input` event and passes the result to `setCustomValidity`. The raw string
//! is sent to the service untransformed.

use thiserror::Error;

/// Largest integer exactly representable by the platform's number type
/// (2^53 − 1). Values of `x0` above this are rejected.
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum X0Error {
    #[error("Please enter a valid integer")]
    NotAnInteger,
    #[error("Value must be a non-negative integer less than {MAX_SAFE_INTEGER}")]
    OutOfRange,
}

/// Parse a raw `x0` field value as a non-negative integer within
/// `[0, MAX_SAFE_INTEGER]`.
///
/// A string of digits too long for the intermediate parse type is still an
/// integer, just an enormous one, so it takes the range branch rather than
/// the parse-failure branch.
pub fn validate_x0(raw: &str) -> Result<u64, X0Error> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(X0Error::NotAnInteger);
    }
    if negative {
        return Err(X0Error::OutOfRange);
    }

    match digits.parse::<u64>() {
        Ok(value) if value <= MAX_SAFE_INTEGER => Ok(value),
        // parse overflow or value above the safe bound
        _ => Err(X0Error::OutOfRange),
    }
}

/// The field-level constraint message for a raw `x0` value, or `None` when
/// the value is acceptable (empty message clears the constraint).
pub fn constraint_message(raw: &str) -> Option<String> {
    validate_x0(raw).err().map(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integers_in_range_are_valid() {
        for raw in ["0", "5", "42", "1000000", "9007199254740991"] {
            assert_eq!(constraint_message(raw), None, "expected {raw:?} to pass");
        }
        assert_eq!(validate_x0("5"), Ok(5));
        assert_eq!(validate_x0(" 7 "), Ok(7));
        assert_eq!(validate_x0("+12"), Ok(12));
    }

    #[test]
    fn non_integer_strings_get_the_invalid_integer_message() {
        for raw in ["", "abc", "12.5", "1e6", "--3", "0x10", "twelve"] {
            let msg = constraint_message(raw).expect("should be rejected");
            assert!(msg.contains("valid integer"), "message for {raw:?}: {msg}");
        }
    }

    #[test]
    fn out_of_range_message_names_the_bound() {
        for raw in ["-1", "-9007199254740991", "9007199254740992"] {
            let msg = constraint_message(raw).expect("should be rejected");
            assert!(
                msg.contains("9007199254740991"),
                "message for {raw:?}: {msg}"
            );
        }
    }

    #[test]
    fn digit_strings_beyond_u64_take_the_range_branch() {
        let msg = constraint_message("99999999999999999999999999999999").unwrap();
        assert!(msg.contains("9007199254740991"));
    }

    #[test]
    fn message_is_empty_iff_value_in_safe_range() {
        assert_eq!(constraint_message("9007199254740991"), None);
        assert!(constraint_message("9007199254740992").is_some());
        assert_eq!(constraint_message("0"), None);
        assert!(constraint_message("-1").is_some());
    }
}
