//! Date/time values as seen by the locale layer

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of temporal value a template or conversion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemporalKind {
    /// Calendar date
    #[default]
    Date,
    /// Time of day
    Time,
    /// Date with time of day
    DateTime,
}

impl fmt::Display for TemporalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TemporalKind::Date => "date",
            TemporalKind::Time => "time",
            TemporalKind::DateTime => "datetime",
        })
    }
}

/// A date, time or datetime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Temporal {
    /// Calendar date
    Date(NaiveDate),
    /// Time of day
    Time(NaiveTime),
    /// Date with time of day
    DateTime(NaiveDateTime),
}

impl Temporal {
    /// Kind tag of this value.
    pub fn kind(&self) -> TemporalKind {
        match self {
            Temporal::Date(_) => TemporalKind::Date,
            Temporal::Time(_) => TemporalKind::Time,
            Temporal::DateTime(_) => TemporalKind::DateTime,
        }
    }

    /// Convert to another kind. Converting to `Date` drops the time of day;
    /// a bare time gets `fallback_date` when a date part is needed.
    pub fn into_kind(self, kind: TemporalKind, fallback_date: NaiveDate) -> Temporal {
        match (self, kind) {
            (Temporal::Date(d), TemporalKind::Date) => Temporal::Date(d),
            (Temporal::Date(_), TemporalKind::Time) => Temporal::Time(NaiveTime::MIN),
            (Temporal::Date(d), TemporalKind::DateTime) => {
                Temporal::DateTime(d.and_time(NaiveTime::MIN))
            }
            (Temporal::Time(_), TemporalKind::Date) => Temporal::Date(fallback_date),
            (Temporal::Time(t), TemporalKind::Time) => Temporal::Time(t),
            (Temporal::Time(t), TemporalKind::DateTime) => {
                Temporal::DateTime(fallback_date.and_time(t))
            }
            (Temporal::DateTime(dt), TemporalKind::Date) => Temporal::Date(dt.date()),
            (Temporal::DateTime(dt), TemporalKind::Time) => Temporal::Time(dt.time()),
            (Temporal::DateTime(dt), TemporalKind::DateTime) => Temporal::DateTime(dt),
        }
    }
}

impl From<NaiveDate> for Temporal {
    fn from(value: NaiveDate) -> Self {
        Temporal::Date(value)
    }
}

impl From<NaiveTime> for Temporal {
    fn from(value: NaiveTime) -> Self {
        Temporal::Time(value)
    }
}

impl From<NaiveDateTime> for Temporal {
    fn from(value: NaiveDateTime) -> Self {
        Temporal::DateTime(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_kind_truncates_time_of_day() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let today = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();

        assert_eq!(
            Temporal::DateTime(dt).into_kind(TemporalKind::Date, today),
            Temporal::Date(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
        );
        assert_eq!(
            Temporal::Time(dt.time()).into_kind(TemporalKind::DateTime, today),
            Temporal::DateTime(today.and_hms_opt(14, 30, 0).unwrap())
        );
    }
}
