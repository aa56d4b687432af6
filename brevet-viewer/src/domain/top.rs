//! Top-K row limit type.

use std::fmt;

/// Error returned when parsing an invalid top value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid top value: {reason}")]
pub struct InvalidTopK {
    reason: &'static str,
}

/// An optional limit on the number of result rows, between 1 and 50.
///
/// This type guarantees the value is numeric and in range by
/// construction, so only a digits-only `top=N` query parameter can ever
/// reach the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopK(u8);

impl TopK {
    /// Smallest accepted limit.
    pub const MIN: u8 = 1;
    /// Largest accepted limit.
    pub const MAX: u8 = 50;

    /// Validate a numeric limit.
    pub fn new(n: u8) -> Result<Self, InvalidTopK> {
        if !(Self::MIN..=Self::MAX).contains(&n) {
            return Err(InvalidTopK {
                reason: "must be between 1 and 50",
            });
        }
        Ok(TopK(n))
    }

    /// Parse a limit from a query-string value.
    ///
    /// Only digits are accepted; `u8::from_str` would also take a
    /// leading `+`, which we do not want in a pass-through parameter.
    pub fn parse(s: &str) -> Result<Self, InvalidTopK> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidTopK {
                reason: "must be a whole number between 1 and 50",
            });
        }
        let n: u8 = s.parse().map_err(|_| InvalidTopK {
            reason: "must be between 1 and 50",
        })?;
        Self::new(n)
    }

    /// Returns the numeric limit.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for TopK {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every in-range value parses and round-trips through Display.
        #[test]
        fn in_range_roundtrip(n in 1u8..=50) {
            let top = TopK::parse(&n.to_string()).unwrap();
            prop_assert_eq!(top.get(), n);
            prop_assert_eq!(top.to_string(), n.to_string());
        }

        /// Strings with any non-digit character are always rejected.
        #[test]
        fn non_digits_rejected(s in ".*".prop_filter("has non-digit", |s| {
            !s.is_empty() && s.chars().any(|c| !c.is_ascii_digit())
        })) {
            prop_assert!(TopK::parse(&s).is_err());
        }
    }
}
