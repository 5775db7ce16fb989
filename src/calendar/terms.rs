//! The 24 solar terms (节气) and the jie-month grid they define.
//!
//! Terms alternate 节 (month-opening) and 中气. The 节 grid is what the
//! month pillar and Da Yun distances are measured against: 立春 opens the
//! 寅 month and also flips the sexagenary year for chart purposes.

use super::data;
use super::solar::SolarDay;

/// One of the 24 solar terms, in calendar order from the two January terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarTerm {
    Xiaohan,
    Dahan,
    Lichun,
    Yushui,
    Jingzhe,
    Chunfen,
    Qingming,
    Guyu,
    Lixia,
    Xiaoman,
    Mangzhong,
    Xiazhi,
    Xiaoshu,
    Dashu,
    Liqiu,
    Chushu,
    Bailu,
    Qiufen,
    Hanlu,
    Shuangjiang,
    Lidong,
    Xiaoxue,
    Daxue,
    Dongzhi,
}

impl SolarTerm {
    pub const ALL: [SolarTerm; 24] = [
        SolarTerm::Xiaohan,
        SolarTerm::Dahan,
        SolarTerm::Lichun,
        SolarTerm::Yushui,
        SolarTerm::Jingzhe,
        SolarTerm::Chunfen,
        SolarTerm::Qingming,
        SolarTerm::Guyu,
        SolarTerm::Lixia,
        SolarTerm::Xiaoman,
        SolarTerm::Mangzhong,
        SolarTerm::Xiazhi,
        SolarTerm::Xiaoshu,
        SolarTerm::Dashu,
        SolarTerm::Liqiu,
        SolarTerm::Chushu,
        SolarTerm::Bailu,
        SolarTerm::Qiufen,
        SolarTerm::Hanlu,
        SolarTerm::Shuangjiang,
        SolarTerm::Lidong,
        SolarTerm::Xiaoxue,
        SolarTerm::Daxue,
        SolarTerm::Dongzhi,
    ];

    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % 24]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn cn(&self) -> &'static str {
        [
            "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨",
            "立夏", "小满", "芒种", "夏至", "小暑", "大暑", "立秋", "处暑",
            "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
        ][self.index()]
    }

    /// True for the twelve month-opening terms (节), false for 中气.
    pub fn is_jie(&self) -> bool {
        self.index() % 2 == 0
    }

    /// Date of this term in `year`, when the tables cover it.
    pub fn date_in(&self, year: i32) -> Option<SolarDay> {
        let day = data::term_day(year, self.index())?;
        SolarDay::from_ymd(year, (self.index() / 2 + 1) as u32, day as u32).ok()
    }
}

/// The term falling exactly on `day`, if any.
pub fn term_on(day: SolarDay) -> Option<SolarTerm> {
    let (y, m, d) = day.ymd();
    let first = (m as usize - 1) * 2;
    [first, first + 1].into_iter().find_map(|k| {
        (data::term_day(y, k) == Some(d as u8)).then(|| SolarTerm::from_index(k))
    })
}

/// Most recent term strictly before `day`.
pub fn prev_term(day: SolarDay) -> Option<(SolarTerm, SolarDay)> {
    scan_back(day, |_| true)
}

/// First term strictly after `day`.
pub fn next_term(day: SolarDay) -> Option<(SolarTerm, SolarDay)> {
    scan_forward(day, |_| true)
}

/// Most recent 节 on or before `day` (a 节 day belongs to the month it
/// opens).
pub fn prev_jie(day: SolarDay) -> Option<(SolarTerm, SolarDay)> {
    if let Some(t) = term_on(day) {
        if t.is_jie() {
            return Some((t, day));
        }
    }
    scan_back(day, SolarTerm::is_jie)
}

/// First 节 strictly after `day`.
pub fn next_jie(day: SolarDay) -> Option<(SolarTerm, SolarDay)> {
    scan_forward(day, SolarTerm::is_jie)
}

/// Jie-month ordinal (0 = the 寅 month opened by 立春) together with the
/// Gregorian year whose 立春 governs the sexagenary year at `day`.
pub fn jie_month(day: SolarDay) -> Option<(usize, i32)> {
    let (jie, _) = prev_jie(day)?;
    let month = (jie.index() / 2 + 11) % 12;
    let y = day.year();
    let lichun = SolarTerm::Lichun.date_in(y)?;
    let lichun_year = if day >= lichun { y } else { y - 1 };
    Some((month, lichun_year))
}

fn scan_back(day: SolarDay, keep: impl Fn(&SolarTerm) -> bool) -> Option<(SolarTerm, SolarDay)> {
    for year in [day.year(), day.year() - 1] {
        for k in (0..24).rev() {
            let term = SolarTerm::from_index(k);
            if !keep(&term) {
                continue;
            }
            if let Some(date) = term.date_in(year) {
                if date < day {
                    return Some((term, date));
                }
            }
        }
    }
    None
}

fn scan_forward(day: SolarDay, keep: impl Fn(&SolarTerm) -> bool) -> Option<(SolarTerm, SolarDay)> {
    for year in [day.year(), day.year() + 1] {
        for k in 0..24 {
            let term = SolarTerm::from_index(k);
            if !keep(&term) {
                continue;
            }
            if let Some(date) = term.date_in(year) {
                if date > day {
                    return Some((term, date));
                }
            }
        }
    }
    None
}
