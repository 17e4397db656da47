//! When a tactic was last done.
//!
//! `Done` is calendar-precision: a tactic is either never done, done on a
//! date nobody remembers, or done on a specific day. Anything that needs the
//! current moment takes it as a parameter.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::{ParseError, ParseResult};

/// Format of a specific `done` date in goal files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Label rendered for a date that lies after "now".
pub const FUTURE_LABEL: &str = "in the future";

/// Last completion of a tactic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Done {
    /// No completion recorded.
    #[default]
    Never,
    /// Done, but the date is not known.
    Unknown,
    /// Done on this calendar day.
    On(NaiveDate),
}

impl Done {
    /// Parse a `done` token from a goal file.
    ///
    /// Accepted forms:
    /// - `""`, `"null"`, `"never"` → `Never`
    /// - `"unknown"` → `Unknown`
    /// - `"YYYY-MM-DD"` → `On(date)`; the zero date `0001-01-01` reads as `Never`
    ///
    /// Surrounding whitespace and double quotes are ignored.
    pub fn parse(token: &str) -> ParseResult<Self> {
        let value = token.trim().trim_matches('"').trim();
        match value {
            "" | "null" | "never" => Ok(Self::Never),
            "unknown" => Ok(Self::Unknown),
            _ => {
                let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
                    ParseError::InvalidDate {
                        token: token.to_string(),
                    }
                })?;
                if Some(date) == NaiveDate::from_ymd_opt(1, 1, 1) {
                    Ok(Self::Never)
                } else {
                    Ok(Self::On(date))
                }
            }
        }
    }

    /// The completion date, if one is known.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::On(date) => Some(*date),
            Self::Never | Self::Unknown => None,
        }
    }

    /// Time elapsed between the start of the completion day and `now`.
    pub fn elapsed(&self, now: NaiveDateTime) -> Option<TimeDelta> {
        self.date()
            .map(|date| now.signed_duration_since(date.and_time(NaiveTime::MIN)))
    }

    /// Whole days between the completion day and the day of `now`.
    ///
    /// Negative for dates after `now`.
    pub fn days_since(&self, now: NaiveDateTime) -> Option<i64> {
        self.date()
            .map(|date| now.date().signed_duration_since(date).num_days())
    }

    /// Short human label relative to `now`: `never`, `unknown`, `3d ago`.
    pub fn label(&self, now: NaiveDateTime) -> String {
        match self {
            Self::Never => "never".into(),
            Self::Unknown => "unknown".into(),
            Self::On(_) => match self.days_since(now) {
                Some(days) if days >= 0 => format!("{days}d ago"),
                _ => FUTURE_LABEL.into(),
            },
        }
    }
}

impl FromStr for Done {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        Self::parse(s)
    }
}

/// Renders the stored value itself (`never`, `unknown`, `2023-04-25`),
/// not the relative label.
impl fmt::Display for Done {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Never => f.write_str("never"),
            Self::Unknown => f.write_str("unknown"),
            Self::On(date) => write!(f, "{}", date.format(DATE_FORMAT)),
        }
    }
}
