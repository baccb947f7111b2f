//! Select option maps and `<option>` serialization.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::pairs::PairList;

/// Ordered option value → display text map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectOptions(PairList);

impl SelectOptions {
    /// Create an empty option map.
    pub fn new() -> Self {
        Self(PairList::new())
    }

    /// Insert or replace an option, returning the previous display text.
    pub fn insert(&mut self, value: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.0.insert(value.into(), text.into())
    }

    /// Builder-style insert.
    pub fn option(mut self, value: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(value, text);
        self
    }

    /// Display text for an option value.
    pub fn get(&self, value: &str) -> Option<&str> {
        self.0.get(value)
    }

    /// Iterate over `(value, text)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SelectOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for SelectOptions {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Serialize options into a run of `<option>` tags.
///
/// The option whose value matches `selected` (see [`option_matches`]) gets
/// the `selected` keyword; every other option keeps the space where the
/// keyword would go, e.g. `<option value='female' >Female</option>`.
pub fn options_to_string(options: &SelectOptions, selected: &str) -> String {
    let selected = normalize_option_value(selected);
    let mut out = String::new();
    for (value, text) in options.iter() {
        let marker = if normalize_option_value(value) == selected {
            "selected"
        } else {
            ""
        };
        out.push_str(&format!("<option value='{value}' {marker}>{text}</option>"));
    }
    out
}

/// Whether an option value matches the selected value.
pub fn option_matches(value: &str, selected: &str) -> bool {
    normalize_option_value(value) == normalize_option_value(selected)
}

/// Normalize an option value for comparison.
///
/// Numeric literals (surrounding whitespace ignored) become a canonical
/// form so they compare by value:
///
/// - integer literals (optional sign, digits) lose the `+` sign and leading
///   zeros, and `-0` becomes `0`. They are compared digit for digit, so ids
///   beyond `f64` precision stay distinct;
/// - literals with a fraction or exponent become the rendering of their
///   `f64` value, so `"1.0"` normalizes to `"1"` and `"1e1"` to `"10"`.
///
/// Every other string is returned unchanged and compares exactly.
pub fn normalize_option_value(value: &str) -> Cow<'_, str> {
    match parse_numeric(value) {
        Some(Numeric::Integer { negative, digits }) => {
            let digits = digits.trim_start_matches('0');
            match (digits.is_empty(), negative) {
                (true, _) => Cow::Borrowed("0"),
                (false, true) => Cow::Owned(format!("-{digits}")),
                (false, false) => Cow::Owned(digits.to_string()),
            }
        }
        // Collapse -0 into 0.
        Some(Numeric::Float(n)) if n == 0.0 => Cow::Borrowed("0"),
        Some(Numeric::Float(n)) => Cow::Owned(n.to_string()),
        None => Cow::Borrowed(value),
    }
}

enum Numeric<'a> {
    Integer { negative: bool, digits: &'a str },
    Float(f64),
}

fn is_numeric_padding(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn parse_numeric(value: &str) -> Option<Numeric<'_>> {
    let trimmed = value.trim_matches(is_numeric_padding);
    let bytes = trimmed.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let integer_start = i;
    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if digits > 0 && i == bytes.len() {
        return Some(Numeric::Integer {
            negative: bytes[0] == b'-',
            digits: &trimmed[integer_start..],
        });
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exponent_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exponent_start {
            return None;
        }
    }
    if i != bytes.len() {
        return None;
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Numeric::Float)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn gender() -> SelectOptions {
        SelectOptions::from([("male", "Male"), ("female", "Female")])
    }

    #[test]
    fn test_selected_option() {
        assert_eq!(
            options_to_string(&gender(), "male"),
            "<option value='male' selected>Male</option><option value='female' >Female</option>"
        );
    }

    #[test]
    fn test_no_option_selected() {
        assert_eq!(
            options_to_string(&gender(), "other"),
            "<option value='male' >Male</option><option value='female' >Female</option>"
        );
    }

    #[test]
    fn test_empty_options() {
        assert_eq!(options_to_string(&SelectOptions::new(), "x"), "");
    }

    #[test]
    fn test_numeric_values_match_loosely() {
        let options = SelectOptions::from([("01", "One"), ("2", "Two")]);
        assert_eq!(
            options_to_string(&options, "1"),
            "<option value='01' selected>One</option><option value='2' >Two</option>"
        );
        assert!(option_matches("1.0", "1"));
        assert!(option_matches("10", "1e1"));
        assert!(option_matches(" 3", "3"));
        assert!(option_matches("-0", "0"));
    }

    #[test]
    fn test_non_numeric_values_match_exactly() {
        assert!(!option_matches("0", ""));
        assert!(!option_matches("Male", "male"));
        assert!(!option_matches("1a", "1"));
        assert!(!option_matches("inf", "inf "));
        assert!(option_matches("inf", "inf"));
    }

    #[test]
    fn test_large_integer_ids_stay_distinct() {
        let users = SelectOptions::from([
            ("1234567890123456789", "A"),
            ("1234567890123456788", "B"),
        ]);
        let html = options_to_string(&users, "1234567890123456789");

        assert_eq!(html.matches("selected").count(), 1);
        assert_eq!(
            html,
            "<option value='1234567890123456789' selected>A</option><option value='1234567890123456788' >B</option>"
        );
        assert!(!option_matches("99999999999999999999999", "99999999999999999999998"));
        assert!(option_matches("0099999999999999999999999", "99999999999999999999999"));
    }

    #[test]
    fn test_normalize_option_value() {
        assert_eq!(normalize_option_value("007"), "7");
        assert_eq!(normalize_option_value("2.50"), "2.5");
        assert_eq!(normalize_option_value("+4"), "4");
        assert_eq!(normalize_option_value("-007"), "-7");
        assert_eq!(normalize_option_value("-000"), "0");
        assert_eq!(normalize_option_value("+"), "+");
        assert_eq!(normalize_option_value("."), ".");
        assert_eq!(normalize_option_value("1e"), "1e");
        assert_eq!(normalize_option_value("abc"), "abc");
    }
}
