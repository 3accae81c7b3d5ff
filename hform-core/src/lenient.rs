//! Heuristic date/time parsing used when no input template matches
//!
//! Picks out a time of day, an ISO or numeric date, or a month name with
//! optional day and year, then fills whatever is missing from a reference
//! date. Expects month and weekday names already translated to English.

use chrono::{Datelike, NaiveDate, NaiveTime};
use hform_locale::{LocalizedNames, Temporal, TemporalKind};
use once_cell::sync::Lazy;
use regex::Regex;

static TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2}):(\d{2})(?::(\d{2}))?(?:\s*([aApP])\.?[mM]\b\.?)?").unwrap()
});

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})").unwrap());

static NUMERIC_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2})[/.\-](\d{1,2})(?:[/.\-](\d{4}|\d{2}))?\b").unwrap()
});

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4})\b").unwrap());

static DAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{1,2})(?:st|nd|rd|th)?\b").unwrap());

static MONTH_NAME: Lazy<Regex> = Lazy::new(|| {
    let english = LocalizedNames::english();
    names_regex(english.month_names.iter().chain(&english.abbr_month_names))
});

static WEEKDAY_NAME: Lazy<Regex> = Lazy::new(|| {
    let english = LocalizedNames::english();
    names_regex(english.day_names.iter().chain(&english.abbr_day_names))
});

/// Words that may be left over around the recognised fragments.
const FILLER: [&str; 4] = ["t", "at", "of", "the"];

fn names_regex<'a>(names: impl Iterator<Item = &'a String>) -> Regex {
    let mut names: Vec<&String> = names.collect();
    names.sort_by_key(|n| std::cmp::Reverse(n.len()));
    let alternation: Vec<String> = names.iter().map(|n| regex::escape(n)).collect();
    Regex::new(&format!(r"(?i)\b({})\b\.?", alternation.join("|"))).unwrap()
}

fn month_number(name: &str) -> Option<u32> {
    let english = LocalizedNames::english();
    let name = name.to_lowercase();
    english
        .month_names
        .iter()
        .position(|m| m.to_lowercase() == name)
        .or_else(|| {
            english
                .abbr_month_names
                .iter()
                .position(|m| m.to_lowercase() == name)
        })
        .map(|i| i as u32 + 1)
}

fn blank_out(text: &mut String, range: std::ops::Range<usize>) {
    text.replace_range(range.clone(), &" ".repeat(range.len()));
}

fn expand_year(year: i32, digits: usize) -> i32 {
    match digits {
        2 if year < 70 => 2000 + year,
        2 => 1900 + year,
        _ => year,
    }
}

/// Parse `text` heuristically. `day_first` decides `03/04` style dates.
pub(crate) fn parse(
    text: &str,
    kind: TemporalKind,
    reference: NaiveDate,
    day_first: bool,
) -> Option<Temporal> {
    let mut rest = text.to_string();
    let mut time = None;
    let (mut year, mut month, mut day) = (None, None, None);

    if let Some(caps) = TIME.captures(text) {
        let mut hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;
        let second: u32 = caps.get(3).map_or(Some(0), |s| s.as_str().parse().ok())?;
        if let Some(meridian) = caps.get(4) {
            hour %= 12;
            if meridian.as_str().eq_ignore_ascii_case("p") {
                hour += 12;
            }
        }
        time = Some(NaiveTime::from_hms_opt(hour, minute, second)?);
        blank_out(&mut rest, caps.get(0)?.range());
    }

    let scan = rest.clone();
    if let Some(caps) = ISO_DATE.captures(&scan) {
        year = caps[1].parse().ok();
        month = caps[2].parse().ok();
        day = caps[3].parse().ok();
        blank_out(&mut rest, caps.get(0)?.range());
    } else if let Some(caps) = NUMERIC_DATE.captures(&scan) {
        let (d, m) = if day_first { (&caps[1], &caps[2]) } else { (&caps[2], &caps[1]) };
        day = d.parse().ok();
        month = m.parse().ok();
        if let Some(y) = caps.get(3) {
            year = Some(expand_year(y.as_str().parse().ok()?, y.len()));
        }
        blank_out(&mut rest, caps.get(0)?.range());
    } else if let Some(found) = MONTH_NAME.find(&scan) {
        month = month_number(found.as_str().trim_end_matches('.'));
        blank_out(&mut rest, found.range());

        let scan = rest.clone();
        if let Some(caps) = YEAR.captures(&scan) {
            year = caps[1].parse().ok();
            blank_out(&mut rest, caps.get(0)?.range());
        }
        let scan = rest.clone();
        if let Some(caps) = DAY.captures(&scan) {
            day = caps[1].parse().ok();
            blank_out(&mut rest, caps.get(0)?.range());
        }
    }

    if time.is_none() && month.is_none() {
        return None;
    }

    let rest = WEEKDAY_NAME.replace_all(&rest, " ");
    let leftover = rest
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .any(|w| !FILLER.contains(&w.to_lowercase().as_str()));
    if leftover {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(
        year.unwrap_or(reference.year()),
        month.unwrap_or(reference.month()),
        day.unwrap_or(reference.day()),
    )?;

    Some(match kind {
        TemporalKind::Date => Temporal::Date(date),
        TemporalKind::Time => Temporal::Time(time.unwrap_or(NaiveTime::MIN)),
        TemporalKind::DateTime => Temporal::DateTime(date.and_time(time.unwrap_or(NaiveTime::MIN))),
    })
}
