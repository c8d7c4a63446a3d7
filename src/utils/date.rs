//! Calendar dates for feed generation and the article index.
//!
//! Articles carry a machine-readable `YYYY-MM-DD` publication date alongside
//! their display date. The feed needs that as RFC 2822; nothing here deals
//! with time zones because all dates are treated as UTC midnight.

use anyhow::{Result, bail};
use regex::Regex;
use std::sync::LazyLock;

static RE_YMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<y>\d{4})-(?P<m>\d{2})-(?P<d>\d{2})$").unwrap());

/// A UTC calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parse a `YYYY-MM-DD` string, rejecting impossible dates.
    pub fn parse(s: &str) -> Result<Self> {
        let Some(caps) = RE_YMD.captures(s) else {
            bail!("not a YYYY-MM-DD date: `{s}`");
        };

        // The regex guarantees the digits, so the parses cannot fail
        let date = Self::new(
            caps["y"].parse()?,
            caps["m"].parse()?,
            caps["d"].parse()?,
        );
        date.validate()?;
        Ok(date)
    }

    pub fn validate(&self) -> Result<()> {
        let Self { year, month, day } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }
        if day == 0 || day > days_in_month(year, month) {
            bail!("day is invalid: {day}");
        }

        Ok(())
    }

    /// Format as RFC 2822 at midnight UTC, e.g. `Thu, 01 May 2025 00:00:00 GMT`.
    pub fn to_rfc2822(self) -> String {
        const WEEKDAYS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];

        format!(
            "{}, {:02} {} {:04} 00:00:00 GMT",
            WEEKDAYS[self.weekday_index()],
            self.day,
            MONTHS[(self.month - 1) as usize],
            self.year,
        )
    }

    // Zeller's congruence
    fn weekday_index(self) -> usize {
        let (y, m) = if self.month < 3 {
            (i32::from(self.year) - 1, i32::from(self.month) + 12)
        } else {
            (i32::from(self.year), i32::from(self.month))
        };
        let d = i32::from(self.day);
        ((d + (13 * (m + 1)) / 5 + y + y / 4 - y / 100 + y / 400) % 7) as usize
    }
}

fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
