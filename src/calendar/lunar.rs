//! Solar-to-lunar conversion and the Chinese names of lunar dates.

use super::data;
use super::solar::SolarDay;
use super::CalendarError;

const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// A date in the lunisolar calendar. `year` is the lunar year, the one
/// opened by the Chinese New Year on or before the underlying solar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDay {
    year: i32,
    month: u32,
    day: u32,
    leap: bool,
    month_len: u32,
}

impl LunarDay {
    pub fn from_solar(day: SolarDay) -> Result<Self, CalendarError> {
        let out_of_range = || CalendarError::OutOfRange(day);
        if day.year() > data::LAST_YEAR {
            return Err(out_of_range());
        }
        let mut lunar_year = day.year();
        let mut start = new_year(lunar_year).ok_or_else(out_of_range)?;
        if day < start {
            lunar_year -= 1;
            start = new_year(lunar_year).ok_or_else(out_of_range)?;
        }
        let row = data::year_row(lunar_year).ok_or_else(out_of_range)?;
        let mut left = day - start;
        for slot in 0..row.month_count() {
            let len = row.month_len(slot);
            if left < len {
                let (month, leap) = label_slot(slot, row.leap_month);
                return Ok(Self {
                    year: lunar_year,
                    month,
                    day: (left + 1) as u32,
                    leap,
                    month_len: len as u32,
                });
            }
            left -= len;
        }
        Err(out_of_range())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Year spelled digit by digit: 1990 is 一九九〇.
    pub fn year_cn(&self) -> String {
        const DIGITS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];
        self.year
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10).map(|d| DIGITS[d as usize]))
            .collect()
    }

    /// Month number 1-12, ignoring the leap flag.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn is_leap_month(&self) -> bool {
        self.leap
    }

    /// Month name without the 月 suffix: 正, 二 … 冬, 腊, with a 闰 prefix
    /// in a leap month.
    pub fn month_cn(&self) -> String {
        let name = MONTH_NAMES[(self.month - 1) as usize];
        if self.leap {
            format!("闰{name}")
        } else {
            name.to_string()
        }
    }

    pub fn day_cn(&self) -> &'static str {
        DAY_NAMES[(self.day - 1) as usize]
    }

    /// Traditional festivals on this lunar date. 除夕 is the last day of the
    /// twelfth month whatever its length; leap months carry no festivals.
    pub fn festivals(&self) -> Vec<&'static str> {
        const TABLE: [(u32, u32, &str); 10] = [
            (1, 1, "春节"),
            (1, 15, "元宵节"),
            (2, 2, "龙抬头"),
            (5, 5, "端午节"),
            (7, 7, "七夕"),
            (7, 15, "中元节"),
            (8, 15, "中秋节"),
            (9, 9, "重阳节"),
            (12, 8, "腊八节"),
            (12, 23, "小年"),
        ];
        let mut found = Vec::new();
        if self.leap {
            return found;
        }
        for &(m, d, name) in &TABLE {
            if m == self.month && d == self.day {
                found.push(name);
            }
        }
        if self.month == 12 && self.day == self.month_len {
            found.push("除夕");
        }
        found
    }
}

/// Chinese New Year of lunar year `year`, when the tables cover it.
pub fn new_year(year: i32) -> Option<SolarDay> {
    let row = data::year_row(year)?;
    Some(SolarDay::from_ymd(year, 1, 21).ok()? + row.new_year_offset as i64)
}

fn label_slot(slot: usize, leap_month: u8) -> (u32, bool) {
    let leap = leap_month as usize;
    if leap == 0 || slot < leap {
        (slot as u32 + 1, false)
    } else if slot == leap {
        (leap as u32, true)
    } else {
        (slot as u32, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunar(s: &str) -> LunarDay {
        LunarDay::from_solar(s.parse().unwrap()).unwrap()
    }

    fn summary(l: &LunarDay) -> String {
        format!("{}年{}月{}", l.year(), l.month_cn(), l.day_cn())
    }

    #[test]
    fn conversion_anchors() {
        assert_eq!(summary(&lunar("2026-02-14")), "2025年腊月廿七");
        assert_eq!(summary(&lunar("1990-05-15")), "1990年四月廿一");
        assert_eq!(summary(&lunar("2000-01-01")), "1999年冬月廿五");
        assert_eq!(summary(&lunar("2024-02-10")), "2024年正月初一");
        assert_eq!(summary(&lunar("1900-02-01")), "1900年正月初二");
        assert_eq!(summary(&lunar("2100-12-31")), "2100年腊月初一");
        assert_eq!(summary(&lunar("2025-07-01")), "2025年六月初七");
        assert_eq!(summary(&lunar("2026-08-23")), "2026年七月十一");
    }

    #[test]
    fn chinese_digit_years() {
        assert_eq!(lunar("1990-05-15").year_cn(), "一九九〇");
        assert_eq!(lunar("2025-07-01").year_cn(), "二〇二五");
        assert_eq!(lunar("2000-01-01").year_cn(), "一九九九");
    }

    #[test]
    fn leap_months_are_flagged() {
        let l = lunar("2025-08-01");
        assert_eq!(l.month_cn(), "闰六");
        assert!(l.is_leap_month());
        assert_eq!(l.day_cn(), "初八");

        // The famous leap eleventh month.
        let l = lunar("2033-12-25");
        assert_eq!(summary(&l), "2033年闰冬月初四");
        assert!(l.is_leap_month());

        assert!(!lunar("2025-07-01").is_leap_month());
    }

    #[test]
    fn new_year_boundary_assigns_lunar_year() {
        assert_eq!(lunar("2026-02-16").year(), 2025);
        assert_eq!(lunar("2026-02-17").year(), 2026);
        assert_eq!(lunar("2026-02-17").month_cn(), "正");
        assert_eq!(lunar("2026-02-17").day_cn(), "初一");
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(LunarDay::from_solar("1900-01-30".parse().unwrap()).is_err());
        assert!(LunarDay::from_solar("2101-01-01".parse().unwrap()).is_err());
        assert!(LunarDay::from_solar("1900-01-31".parse().unwrap()).is_ok());
        assert!(LunarDay::from_solar("2100-12-31".parse().unwrap()).is_ok());
    }

    #[test]
    fn lunar_festival_table() {
        assert_eq!(lunar("2024-02-10").festivals(), vec!["春节"]);
        assert_eq!(lunar("2025-10-06").festivals(), vec!["中秋节"]);
        // Lunar 2025 has no 年三十, so New Year's Eve is 腊月廿九.
        let eve = lunar("2026-02-16");
        assert_eq!(eve.day_cn(), "廿九");
        assert_eq!(eve.festivals(), vec!["除夕"]);
        assert!(lunar("2026-08-23").festivals().is_empty());
    }

    #[test]
    fn roundtrip_against_month_lengths() {
        // Walk an entire lunar year day by day and check the day counter
        // resets exactly at month boundaries.
        let start = new_year(2025).unwrap();
        let end = new_year(2026).unwrap();
        let mut d = start;
        let mut prev = lunar("2025-01-28"); // last day of lunar 2024
        assert_eq!(prev.year(), 2024);
        while d < end {
            let cur = LunarDay::from_solar(d).unwrap();
            assert_eq!(cur.year(), 2025, "on {d}");
            if cur.day() == 1 {
                assert!(matches!(prev.day(), 29 | 30), "month break on {d}");
            } else {
                assert_eq!(cur.day(), prev.day() + 1, "on {d}");
            }
            prev = cur;
            d = d + 1;
        }
    }
}
