//! Locale identifiers
//!
//! A locale only selects which format table applies; hform does not negotiate
//! locales or translate messages.

use crate::{LocaleError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents a locale (language + optional script and region).
///
/// # Examples
///
/// ```
/// use hform_locale::Locale;
///
/// let es = Locale::new("es", None::<&str>);
/// let es_ar: Locale = "es-AR".parse().unwrap();
/// assert_eq!(es_ar.language_only(), es);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    /// Language code (ISO 639-1, e.g., "en", "fr", "de")
    pub language: String,
    /// Optional region code (ISO 3166-1, e.g., "US", "GB", "FR")
    pub region: Option<String>,
    /// Optional script (e.g., "Latn", "Hans")
    pub script: Option<String>,
}

impl Locale {
    /// Create a new locale.
    pub fn new(language: impl Into<String>, region: Option<impl Into<String>>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            region: region.map(|r| r.into().to_uppercase()),
            script: None,
        }
    }

    /// Parse from a BCP 47 style tag (`en`, `es-AR`, `zh-Hans-CN`, `pt_BR`).
    pub fn parse(tag: &str) -> Result<Self> {
        let mut parts = tag.trim().split(['-', '_']);

        let language = parts.next().unwrap_or_default().to_lowercase();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(LocaleError::InvalidLocale(tag.to_string()));
        }

        let mut script = None;
        let mut region = None;

        for part in parts {
            let alpha = part.chars().all(|c| c.is_ascii_alphabetic());
            match part.len() {
                4 if alpha => {
                    let mut chars = part.chars();
                    script = chars.next().map(|first| {
                        first
                            .to_uppercase()
                            .chain(chars.flat_map(|c| c.to_lowercase()))
                            .collect()
                    });
                }
                2 if alpha => region = Some(part.to_uppercase()),
                3 if part.chars().all(|c| c.is_ascii_digit()) => region = Some(part.to_string()),
                _ => return Err(LocaleError::InvalidLocale(tag.to_string())),
            }
        }

        Ok(Self {
            language,
            region,
            script,
        })
    }

    /// Get the language tag (e.g., "en-US").
    pub fn tag(&self) -> String {
        let mut tag = self.language.clone();
        if let Some(ref script) = self.script {
            tag.push('-');
            tag.push_str(script);
        }
        if let Some(ref region) = self.region {
            tag.push('-');
            tag.push_str(region);
        }
        tag
    }

    /// Get language-only locale (strips script and region).
    pub fn language_only(&self) -> Self {
        Self {
            language: self.language.clone(),
            script: None,
            region: None,
        }
    }

    /// Tags to try, most specific first, when looking up a format table.
    pub fn lookup_chain(&self) -> Vec<String> {
        let mut chain = vec![self.tag()];
        if self.script.is_some() && self.region.is_some() {
            chain.push(format!(
                "{}-{}",
                self.language,
                self.region.as_deref().unwrap_or_default()
            ));
        }
        if self.script.is_some() || self.region.is_some() {
            chain.push(self.language.clone());
        }
        chain
    }

    /// English (no region)
    pub fn en() -> Self {
        Self::new("en", None::<&str>)
    }

    /// English (US)
    pub fn en_us() -> Self {
        Self::new("en", Some("US"))
    }

    /// Spanish (no region)
    pub fn es() -> Self {
        Self::new("es", None::<&str>)
    }

    /// German (no region)
    pub fn de() -> Self {
        Self::new("de", None::<&str>)
    }

    /// French (no region)
    pub fn fr() -> Self {
        Self::new("fr", None::<&str>)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self> {
        Locale::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self> {
        Locale::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        let en = Locale::parse("en").unwrap();
        assert_eq!(en.language, "en");
        assert!(en.region.is_none());

        let pt_br = Locale::parse("pt_BR").unwrap();
        assert_eq!(pt_br.region.as_deref(), Some("BR"));

        let zh = Locale::parse("zh-hans-cn").unwrap();
        assert_eq!(zh.script.as_deref(), Some("Hans"));
        assert_eq!(zh.tag(), "zh-Hans-CN");

        let es_419 = Locale::parse("es-419").unwrap();
        assert_eq!(es_419.region.as_deref(), Some("419"));
    }

    #[test]
    fn test_locale_parse_rejects_garbage() {
        assert!(Locale::parse("").is_err());
        assert!(Locale::parse("english").is_err());
        assert!(Locale::parse("en-!!").is_err());
    }

    #[test]
    fn test_lookup_chain() {
        assert_eq!(Locale::es().lookup_chain(), vec!["es"]);
        assert_eq!(Locale::parse("es-AR").unwrap().lookup_chain(), vec!["es-AR", "es"]);
        assert_eq!(
            Locale::parse("zh-Hans-CN").unwrap().lookup_chain(),
            vec!["zh-Hans-CN", "zh-CN", "zh"]
        );
    }

    #[test]
    fn test_serde_as_tag() {
        let locale: Locale = serde_json::from_str("\"de-AT\"").unwrap();
        assert_eq!(locale, Locale::new("de", Some("AT")));
        assert_eq!(serde_json::to_string(&locale).unwrap(), "\"de-AT\"");
    }
}
