//! Boolean conversion

use crate::options::LogicalOptions;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Case-fold, strip diacritics and trim.
pub(crate) fn normalize_token(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Display text for a boolean; `None` gives the blank text.
pub fn logical_to(value: Option<bool>, options: &LogicalOptions) -> String {
    let logical = options.resolve();
    match value {
        Some(true) => logical.true_text,
        Some(false) => logical.false_text,
        None => logical.blank,
    }
}

/// Interpret text as a boolean.
///
/// True tokens are checked before false tokens. Text matching neither is not
/// an error: it gives `None`.
///
/// # Examples
///
/// ```
/// use hform_core::{LogicalOptions, logical_from};
///
/// let options = LogicalOptions::new().true_text("Yes").false_text("No");
/// assert_eq!(logical_from(" yes ", &options), Some(true));
/// assert_eq!(logical_from("maybe", &options), None);
/// ```
pub fn logical_from(text: &str, options: &LogicalOptions) -> Option<bool> {
    let logical = options.resolve();
    let text = normalize_token(text);
    if text.is_empty() {
        return None;
    }

    let matches = |tokens: &[String]| tokens.iter().any(|t| normalize_token(t) == text);
    if matches(&logical.trues) {
        Some(true)
    } else if matches(&logical.falses) {
        Some(false)
    } else {
        hform_log::trace!("{:?} is neither true nor false", text);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hform_locale::Locale;

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("  Sí "), "si");
        assert_eq!(normalize_token("VRAI"), "vrai");
        assert_eq!(normalize_token("Ｊａ"), "ja");
    }

    #[test]
    fn test_logical_to() {
        let options = LogicalOptions::new().locale(Locale::de()).blank("?");
        assert_eq!(logical_to(Some(true), &options), "Ja");
        assert_eq!(logical_to(Some(false), &options), "Nein");
        assert_eq!(logical_to(None, &options), "?");
    }

    #[test]
    fn test_logical_from_explicit_tokens() {
        let options = LogicalOptions::new().true_text("Yes").false_text("No");
        assert_eq!(logical_from("Yes", &options), Some(true));
        assert_eq!(logical_from("NO", &options), Some(false));
        assert_eq!(logical_from("maybe", &options), None);
        assert_eq!(logical_from("", &options), None);
    }

    #[test]
    fn test_logical_from_locale_sets() {
        let es = LogicalOptions::new().locale(Locale::es());
        assert_eq!(logical_from("sí", &es), Some(true));
        assert_eq!(logical_from("SI", &es), Some(true));
        assert_eq!(logical_from("falso", &es), Some(false));

        let fr = LogicalOptions::new().locale(Locale::fr());
        assert_eq!(logical_from("Oui", &fr), Some(true));
        assert_eq!(logical_from("non", &fr), Some(false));
    }

    #[test]
    fn test_true_set_wins() {
        let options = LogicalOptions::new().trues(["x"]).falses(["x"]);
        assert_eq!(logical_from("x", &options), Some(true));
    }
}
