//! Civil (Gregorian) dates backed by Julian day numbers.
//!
//! Every date in the crate is a [`SolarDay`]: a single `i64` JDN, so day
//! arithmetic, ordering and sexagenary math are plain integer operations.
//! Year/month/day views are decoded on demand.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::Datelike;

use super::CalendarError;

/// A Gregorian calendar date, stored as its Julian day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolarDay(i64);

impl SolarDay {
    /// Build from year/month/day, rejecting dates that do not exist in the
    /// Gregorian calendar (and years before its adoption).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1583..=9999).contains(&year)
            || !(1..=12).contains(&month)
            || day == 0
            || day > days_in_month(year, month)
        {
            return Err(CalendarError::Nonexistent(year, month, day));
        }
        Ok(Self(jdn_from_ymd(year as i64, month as i64, day as i64)))
    }

    pub fn from_jdn(jdn: i64) -> Self {
        Self(jdn)
    }

    /// Today according to the local clock.
    pub fn today() -> Self {
        let now = chrono::Local::now().date_naive();
        Self(jdn_from_ymd(
            now.year() as i64,
            now.month() as i64,
            now.day() as i64,
        ))
    }

    pub fn jdn(&self) -> i64 {
        self.0
    }

    pub fn ymd(&self) -> (i32, u32, u32) {
        ymd_from_jdn(self.0)
    }

    pub fn year(&self) -> i32 {
        self.ymd().0
    }

    pub fn month(&self) -> u32 {
        self.ymd().1
    }

    pub fn day(&self) -> u32 {
        self.ymd().2
    }

    /// Day of week, 0 = Sunday through 6 = Saturday.
    pub fn weekday_index(&self) -> usize {
        (self.0 + 1).rem_euclid(7) as usize
    }

    /// Western zodiac sign (Chinese name, 座 suffix).
    pub fn constellation(&self) -> &'static str {
        const SIGNS: [&str; 12] = [
            "摩羯座", "水瓶座", "双鱼座", "白羊座", "金牛座", "双子座",
            "巨蟹座", "狮子座", "处女座", "天秤座", "天蝎座", "射手座",
        ];
        // First day of the sign that begins inside each month.
        const CUTOVERS: [u32; 12] = [20, 19, 21, 20, 21, 22, 23, 23, 23, 24, 23, 22];
        let (_, m, d) = self.ymd();
        let m = m as usize;
        if d >= CUTOVERS[m - 1] {
            SIGNS[m % 12]
        } else {
            SIGNS[m - 1]
        }
    }

    /// Fixed-date Gregorian festivals falling on this day.
    pub fn festivals(&self) -> Vec<&'static str> {
        const TABLE: [(u32, u32, &str); 12] = [
            (1, 1, "元旦"),
            (2, 14, "情人节"),
            (3, 8, "妇女节"),
            (3, 12, "植树节"),
            (5, 1, "劳动节"),
            (5, 4, "青年节"),
            (6, 1, "儿童节"),
            (8, 1, "建军节"),
            (9, 10, "教师节"),
            (10, 1, "国庆节"),
            (12, 24, "平安夜"),
            (12, 25, "圣诞节"),
        ];
        let (_, m, d) = self.ymd();
        TABLE
            .iter()
            .filter(|&&(fm, fd, _)| fm == m && fd == d)
            .map(|&(_, _, name)| name)
            .collect()
    }
}

impl fmt::Display for SolarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl FromStr for SolarDay {
    type Err = CalendarError;

    /// Strict `YYYY-MM-DD` only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CalendarError::Unparseable(s.to_string());
        let mut parts = s.split('-');
        let (y, m, d) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d), None)
                if y.len() == 4 && m.len() == 2 && d.len() == 2 =>
            {
                (y, m, d)
            }
            _ => return Err(malformed()),
        };
        let year: i32 = y.parse().map_err(|_| malformed())?;
        let month: u32 = m.parse().map_err(|_| malformed())?;
        let day: u32 = d.parse().map_err(|_| malformed())?;
        Self::from_ymd(year, month, day)
    }
}

/// True when `s` has the `YYYY-MM-DD` shape, digit for digit. Shape only;
/// the values may still name a nonexistent date.
pub fn looks_like_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9].iter().all(|&i| b[i].is_ascii_digit())
}

impl Add<i64> for SolarDay {
    type Output = SolarDay;

    fn add(self, days: i64) -> SolarDay {
        SolarDay(self.0 + days)
    }
}

impl Sub<i64> for SolarDay {
    type Output = SolarDay;

    fn sub(self, days: i64) -> SolarDay {
        SolarDay(self.0 - days)
    }
}

impl Sub for SolarDay {
    type Output = i64;

    /// Signed number of days from `rhs` to `self`.
    fn sub(self, rhs: SolarDay) -> i64 {
        self.0 - rhs.0
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

// Fliegel & Van Flandern, proleptic Gregorian.
fn jdn_from_ymd(y: i64, m: i64, d: i64) -> i64 {
    let a = (14 - m) / 12;
    let y = y + 4800 - a;
    let m = m + 12 * a - 3;
    d + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

fn ymd_from_jdn(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146097;
    let c = a - 146097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year as i32, month as u32, day as u32)
}
