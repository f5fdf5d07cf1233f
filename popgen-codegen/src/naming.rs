//! Synthetic variable naming for generated code.

use crate::config::DEFAULT_VAR_PREFIX;

/// Lower-cases a name and upper-cases its first letter.
///
/// Only an ASCII `a`..=`z` in the first position is upper-cased; the rest of
/// the name stays lower-case.
#[must_use]
pub fn to_title(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let mut result = name.to_lowercase();
    if let Some(first) = result.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    result
}

/// Returns the synthetic variable name for a field, e.g. `_recId` for `ID`.
#[must_use]
pub fn var_name(name: &str) -> String {
    prefixed_var_name(DEFAULT_VAR_PREFIX, name)
}

/// Returns the synthetic variable name for a field using a custom prefix.
#[must_use]
pub fn prefixed_var_name(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, to_title(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_title() {
        assert_eq!(to_title(""), "");
        assert_eq!(to_title("abc"), "Abc");
        assert_eq!(to_title("ABC"), "Abc");
        assert_eq!(to_title("orderId"), "Orderid");
        assert_eq!(to_title("a"), "A");
    }

    #[test]
    fn test_to_title_non_letter_first() {
        assert_eq!(to_title("_Field"), "_field");
        assert_eq!(to_title("9Lives"), "9lives");
    }

    #[test]
    fn test_to_title_non_ascii_first() {
        // Lower-cased, but not re-capitalised.
        assert_eq!(to_title("Éclair"), "éclair");
        assert_eq!(to_title("über"), "über");
    }

    #[test]
    fn test_var_name() {
        assert_eq!(var_name("ID"), "_recId");
        assert_eq!(var_name("id"), "_recId");
        assert_eq!(var_name("userName"), "_recUsername");
        assert_eq!(var_name(""), "_rec");
    }

    #[test]
    fn test_prefixed_var_name() {
        assert_eq!(prefixed_var_name("_in", "count"), "_inCount");
        assert_eq!(prefixed_var_name("", "count"), "Count");
        assert_eq!(prefixed_var_name("_in", ""), "_in");
    }
}
