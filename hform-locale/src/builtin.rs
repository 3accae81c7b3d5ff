//! Format tables compiled into the crate

use crate::{DateFormats, DmsFormat, LocaleFormats, LocalizedNames, LogicalFormat, NumberFormat};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

static TABLES: Lazy<HashMap<&'static str, Arc<LocaleFormats>>> = Lazy::new(|| {
    let mut tables = HashMap::new();
    tables.insert("en", Arc::new(english()));
    tables.insert("es", Arc::new(spanish()));
    tables.insert("de", Arc::new(german()));
    tables.insert("fr", Arc::new(french()));
    tables
});

/// Built-in table registered under exactly `tag`.
pub(crate) fn table(tag: &str) -> Option<Arc<LocaleFormats>> {
    TABLES.get(tag).cloned()
}

/// Tags with a built-in table.
pub fn builtin_tags() -> Vec<&'static str> {
    let mut tags: Vec<_> = TABLES.keys().copied().collect();
    tags.sort_unstable();
    tags
}

fn tokens(list: &[&str]) -> Option<Vec<String>> {
    Some(list.iter().map(|s| s.to_string()).collect())
}

fn logical(yes: &str, no: &str, trues: &[&str], falses: &[&str]) -> LogicalFormat {
    LogicalFormat {
        true_text: yes.to_string(),
        false_text: no.to_string(),
        trues: tokens(trues),
        falses: tokens(falses),
        blank: None,
    }
}

fn english() -> LocaleFormats {
    LocaleFormats {
        number: NumberFormat::default(),
        logical: logical(
            "Yes",
            "No",
            &["yes", "y", "true", "t", "1"],
            &["no", "n", "false", "f", "0"],
        ),
        dms: DmsFormat::default(),
        dates: DateFormats::new(
            (
                "%m/%d/%Y",
                &["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d %b %Y"],
            ),
            ("%H:%M:%S", &["%H:%M:%S", "%H:%M"]),
            (
                "%m/%d/%Y %H:%M:%S",
                &[
                    "%Y-%m-%d %H:%M:%S",
                    "%Y-%m-%d %H:%M",
                    "%m/%d/%Y %H:%M:%S",
                    "%m/%d/%Y %H:%M",
                ],
            ),
        ),
        names: LocalizedNames::english(),
    }
}

fn spanish() -> LocaleFormats {
    LocaleFormats {
        number: NumberFormat {
            separator: ',',
            delimiter: Some('.'),
            ..NumberFormat::default()
        },
        logical: logical("Sí", "No", &["si", "s", "verdadero", "1"], &["no", "n", "falso", "0"]),
        dms: DmsFormat {
            west: "O".to_string(),
            ..DmsFormat::default()
        },
        dates: DateFormats::new(
            (
                "%d/%m/%Y",
                &["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d", "%d de %B de %Y", "%d %B %Y", "%d %b %Y"],
            ),
            ("%H:%M:%S", &["%H:%M:%S", "%H:%M"]),
            (
                "%d/%m/%Y %H:%M:%S",
                &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"],
            ),
        ),
        names: LocalizedNames::new(
            &[
                "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
                "septiembre", "octubre", "noviembre", "diciembre",
            ],
            &[
                "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
            ],
            &[
                "domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado",
            ],
            &["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
        ),
    }
}

fn german() -> LocaleFormats {
    LocaleFormats {
        number: NumberFormat {
            separator: ',',
            delimiter: Some('.'),
            ..NumberFormat::default()
        },
        logical: logical("Ja", "Nein", &["ja", "j", "wahr", "1"], &["nein", "n", "falsch", "0"]),
        dms: DmsFormat {
            east: "O".to_string(),
            ..DmsFormat::default()
        },
        dates: DateFormats::new(
            (
                "%d.%m.%Y",
                &["%d.%m.%Y", "%Y-%m-%d", "%d. %B %Y", "%d %B %Y", "%d. %b %Y"],
            ),
            ("%H:%M:%S", &["%H:%M:%S", "%H:%M"]),
            (
                "%d.%m.%Y %H:%M:%S",
                &["%d.%m.%Y %H:%M:%S", "%d.%m.%Y %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"],
            ),
        ),
        names: LocalizedNames::new(
            &[
                "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
                "September", "Oktober", "November", "Dezember",
            ],
            &[
                "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
            ],
            &[
                "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
            ],
            &["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
        ),
    }
}

fn french() -> LocaleFormats {
    LocaleFormats {
        number: NumberFormat {
            separator: ',',
            delimiter: Some(' '),
            ..NumberFormat::default()
        },
        logical: logical("Oui", "Non", &["oui", "o", "vrai", "1"], &["non", "n", "faux", "0"]),
        dms: DmsFormat {
            west: "O".to_string(),
            ..DmsFormat::default()
        },
        dates: DateFormats::new(
            (
                "%d/%m/%Y",
                &["%d/%m/%Y", "%Y-%m-%d", "%d %B %Y", "%d %b %Y"],
            ),
            ("%H:%M:%S", &["%H:%M:%S", "%H:%M"]),
            (
                "%d/%m/%Y %H:%M:%S",
                &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"],
            ),
        ),
        names: LocalizedNames::new(
            &[
                "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
                "septembre", "octobre", "novembre", "décembre",
            ],
            &[
                "janv", "févr", "mars", "avr", "mai", "juin", "juil", "août", "sept", "oct", "nov",
                "déc",
            ],
            &[
                "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
            ],
            &["dim", "lun", "mar", "mer", "jeu", "ven", "sam"],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tags() {
        assert_eq!(builtin_tags(), vec!["de", "en", "es", "fr"]);
    }

    #[test]
    fn test_separator_and_delimiter_differ() {
        for tag in builtin_tags() {
            let formats = table(tag).unwrap();
            assert_ne!(Some(formats.number.separator), formats.number.delimiter, "{tag}");
        }
    }

    #[test]
    fn test_name_tables_are_complete() {
        for tag in builtin_tags() {
            let names = &table(tag).unwrap().names;
            assert_eq!(names.month_names.len(), 12, "{tag}");
            assert_eq!(names.abbr_month_names.len(), 12, "{tag}");
            assert_eq!(names.day_names.len(), 7, "{tag}");
            assert_eq!(names.abbr_day_names.len(), 7, "{tag}");
        }
    }
}
