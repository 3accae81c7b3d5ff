//! The locale format provider seam
//!
//! Converters never hold on to a format table: every call asks the provider
//! again, so swapping the provider or the default locale takes effect on the
//! next conversion.

use crate::builtin;
use crate::{
    DateFormats, DmsFormat, Locale, LocaleFormats, LocalizedNames, LogicalFormat, NumberFormat,
    Temporal, TemporalKind,
};
use chrono::Datelike;
use std::fmt::Write;
use std::sync::Arc;

/// Supplies per-locale format tables.
///
/// Implementors only need [`lookup`](LocaleFormatProvider::lookup); the other
/// methods walk the locale fallback chain and project single tables out of
/// the result.
pub trait LocaleFormatProvider: Send + Sync {
    /// Table registered under exactly this tag, if any.
    fn lookup(&self, tag: &str) -> Option<Arc<LocaleFormats>>;

    /// Table for a locale: `lang-Script-REGION`, `lang-REGION`, `lang`, then `en`.
    fn formats(&self, locale: &Locale) -> Arc<LocaleFormats> {
        locale
            .lookup_chain()
            .iter()
            .find_map(|tag| self.lookup(tag))
            .or_else(|| self.lookup("en"))
            .unwrap_or_else(|| {
                hform_log::trace!("no format table for {}, using defaults", locale);
                Arc::new(LocaleFormats::default())
            })
    }

    fn number_format(&self, locale: &Locale) -> NumberFormat {
        self.formats(locale).number.clone()
    }

    fn logical_format(&self, locale: &Locale) -> LogicalFormat {
        self.formats(locale).logical.clone()
    }

    fn dms_format(&self, locale: &Locale) -> DmsFormat {
        self.formats(locale).dms.clone()
    }

    fn date_formats(&self, locale: &Locale) -> DateFormats {
        self.formats(locale).dates.clone()
    }

    /// Input templates for one temporal kind, in the order they are tried.
    fn date_input_formats(&self, kind: TemporalKind, locale: &Locale) -> Vec<String> {
        self.formats(locale).dates.templates(kind).input.clone()
    }

    fn localized_names(&self, locale: &Locale) -> LocalizedNames {
        self.formats(locale).names.clone()
    }

    /// Render a temporal value with the locale's output template for `kind`,
    /// or with `template` when given.
    fn render_localized(
        &self,
        value: &Temporal,
        kind: TemporalKind,
        template: Option<&str>,
        locale: &Locale,
    ) -> String {
        let formats = self.formats(locale);
        let default_template = &formats.dates.templates(kind).output;
        let template = template.unwrap_or(default_template);

        render(value, template, &formats.names)
            .or_else(|| {
                hform_log::debug!("template {:?} cannot render {:?}", template, value);
                render(value, &DateFormats::default().templates(value.kind()).output, &formats.names)
            })
            .unwrap_or_default()
    }
}

/// Format `value` with a strftime template, substituting localized month and
/// weekday names for `%B`, `%b`, `%A` and `%a`.
///
/// Returns `None` when the template asks for a field the value does not have.
pub fn render(value: &Temporal, template: &str, names: &LocalizedNames) -> Option<String> {
    let date = match value {
        Temporal::Date(d) => Some(*d),
        Temporal::DateTime(dt) => Some(dt.date()),
        Temporal::Time(_) => None,
    };

    let mut localized = String::with_capacity(template.len());
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            localized.push(c);
            continue;
        }
        let Some(directive) = chars.next() else {
            localized.push('%');
            break;
        };
        let name = date.and_then(|d| {
            let (list, index) = match directive {
                'B' => (&names.month_names, d.month0() as usize),
                'b' => (&names.abbr_month_names, d.month0() as usize),
                'A' => (&names.day_names, d.weekday().num_days_from_sunday() as usize),
                'a' => (&names.abbr_day_names, d.weekday().num_days_from_sunday() as usize),
                _ => return None,
            };
            list.get(index)
        });
        match name {
            Some(name) => localized.push_str(&name.replace('%', "%%")),
            None => {
                localized.push('%');
                localized.push(directive);
            }
        }
    }

    let mut out = String::new();
    let written = match value {
        Temporal::Date(d) => write!(out, "{}", d.format(&localized)),
        Temporal::Time(t) => write!(out, "{}", t.format(&localized)),
        Temporal::DateTime(dt) => write!(out, "{}", dt.format(&localized)),
    };
    written.ok().map(|_| out)
}

/// Provider backed by the tables compiled into the crate (`en`, `es`, `de`, `fr`).
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider;

impl LocaleFormatProvider for BuiltinProvider {
    fn lookup(&self, tag: &str) -> Option<Arc<LocaleFormats>> {
        builtin::table(tag)
    }
}
