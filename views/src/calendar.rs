//! Calendar day used by the reservations page.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::error::ParseError;

/// Days shown before the selected day in the week strip.
const WEEK_LEAD_DAYS: usize = 3;
const WEEK_LEN: usize = 7;

const ISO_DAY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A `YYYY-MM-DD` calendar date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(Date);

impl CalendarDay {
    /// Current UTC date.
    #[must_use]
    pub fn today() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    #[must_use]
    pub fn date(self) -> Date {
        self.0
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.next_day().map(Self)
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.0.previous_day().map(Self)
    }

    /// Seven consecutive days starting three days before `self`.
    ///
    /// Days that fall outside the representable range are dropped.
    #[must_use]
    pub fn week_around(self) -> Vec<Self> {
        let mut start = self;
        for _ in 0..WEEK_LEAD_DAYS {
            match start.previous() {
                Some(day) => start = day,
                None => break,
            }
        }
        std::iter::successors(Some(start), |d| d.next()).take(WEEK_LEN).collect()
    }

    /// Short weekday name, e.g. `Mon`.
    #[must_use]
    pub fn weekday_short(self) -> &'static str {
        match self.0.weekday() {
            time::Weekday::Monday => "Mon",
            time::Weekday::Tuesday => "Tue",
            time::Weekday::Wednesday => "Wed",
            time::Weekday::Thursday => "Thu",
            time::Weekday::Friday => "Fri",
            time::Weekday::Saturday => "Sat",
            time::Weekday::Sunday => "Sun",
        }
    }
}

impl From<Date> for CalendarDay {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.format(ISO_DAY).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for CalendarDay {
    type Err = ParseError;

    /// Strict `YYYY-MM-DD`. `[year]` tolerates a sign, so signed input is
    /// refused before parsing.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidDate(raw.to_owned());
        if raw.starts_with(['+', '-']) {
            return Err(invalid());
        }
        Date::parse(raw, ISO_DAY).map(Self).map_err(|_| invalid())
    }
}

impl Serialize for CalendarDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
