//! Recurrence interval of a tactic.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;

use crate::error::{ParseError, ParseResult};

/// How long a completion keeps a tactic satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interval {
    /// Done once, done for good.
    #[default]
    Once,
    Daily,
    Weekly,
    /// Approximated as 30 days, not a calendar month.
    Monthly,
}

impl Interval {
    pub const ALL: [Interval; 4] = [Self::Once, Self::Daily, Self::Weekly, Self::Monthly];

    /// Parse an `interval` token. The empty token means `once`.
    pub fn parse(token: &str) -> ParseResult<Self> {
        match token.trim().trim_matches('"').to_lowercase().as_str() {
            "" | "once" => Ok(Self::Once),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(ParseError::UnknownInterval {
                token: token.to_string(),
            }),
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Once => "once",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// How long a completion stays valid; `None` means forever.
    pub fn window(&self) -> Option<TimeDelta> {
        match self {
            Self::Once => None,
            Self::Daily => Some(TimeDelta::days(1)),
            Self::Weekly => Some(TimeDelta::days(7)),
            Self::Monthly => Some(TimeDelta::days(30)),
        }
    }
}

impl FromStr for Interval {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}
