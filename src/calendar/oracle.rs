//! The oracle seam: one resolved bundle per civil day (almanac) or per
//! birth moment (chart), behind a trait so consumers can be tested with
//! fixture data.

use super::cycle::StemBranch;
use super::gods::{self, Position};
use super::lunar::LunarDay;
use super::officers::Officer;
use super::solar::SolarDay;
use super::terms::{self, SolarTerm};
use super::CalendarError;

/// Everything the almanac needs for one day, fully resolved.
///
/// `year_pillar` follows the Chinese-New-Year boundary (it labels the lunar
/// year), while `month_pillar` follows the 节 grid with the 立春-bounded
/// year stem, as printed almanacs do. The hour pillar is the 子 hour of the
/// day itself, matching a date-only query taken at midnight.
#[derive(Debug, Clone)]
pub struct DaySheet {
    pub solar: SolarDay,
    pub lunar: LunarDay,
    pub year_pillar: StemBranch,
    pub month_pillar: StemBranch,
    pub day_pillar: StemBranch,
    pub hour_pillar: StemBranch,
    pub officer: Officer,
    pub joy: Position,
    pub wealth: Position,
    pub fortune: Position,
    pub clash: StemBranch,
    pub sha: &'static str,
    pub term_today: Option<SolarTerm>,
    pub prev_term: Option<(SolarTerm, SolarDay)>,
    pub next_term: Option<(SolarTerm, SolarDay)>,
    pub pengzu_stem: &'static str,
    pub pengzu_branch: &'static str,
    pub lunar_festivals: Vec<&'static str>,
    pub solar_festivals: Vec<&'static str>,
}

/// The eight characters of a birth moment plus the raw Da Yun distances.
///
/// Unlike [`DaySheet`], the year pillar here flips at 立春, the convention
/// for charts. The jie distances are `None` only at the edge of the data
/// tables.
#[derive(Debug, Clone)]
pub struct BirthSheet {
    pub solar: SolarDay,
    pub lunar: LunarDay,
    pub year_pillar: StemBranch,
    pub month_pillar: StemBranch,
    pub day_pillar: StemBranch,
    pub hour_pillar: StemBranch,
    pub days_to_next_jie: Option<i64>,
    pub days_from_prev_jie: Option<i64>,
}

/// The calendar engine as consumers see it.
pub trait Oracle {
    fn day_sheet(&self, day: SolarDay) -> Result<DaySheet, CalendarError>;

    fn birth_sheet(&self, day: SolarDay, hour: u32, minute: u32)
        -> Result<BirthSheet, CalendarError>;
}

/// The table-driven implementation covering 1900-01-31 to 2100-12-31.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lunisolar;

impl Oracle for Lunisolar {
    fn day_sheet(&self, day: SolarDay) -> Result<DaySheet, CalendarError> {
        let lunar = LunarDay::from_solar(day)?;
        let (jie_month, lichun_year) =
            terms::jie_month(day).ok_or(CalendarError::OutOfRange(day))?;
        let day_pillar = StemBranch::for_jdn(day.jdn());
        let stem = day_pillar.stem();
        Ok(DaySheet {
            solar: day,
            lunar,
            year_pillar: StemBranch::for_year(lunar.year()),
            month_pillar: StemBranch::month_of(StemBranch::for_year(lichun_year), jie_month),
            day_pillar,
            hour_pillar: StemBranch::hour_of(day_pillar, 0),
            officer: Officer::of_day(day_pillar.branch(), jie_month),
            joy: gods::joy_position(stem),
            wealth: gods::wealth_position(stem),
            fortune: gods::fortune_position(stem),
            clash: gods::clash(day_pillar),
            sha: gods::sha_direction(day_pillar.branch()),
            term_today: terms::term_on(day),
            prev_term: terms::prev_term(day),
            next_term: terms::next_term(day),
            pengzu_stem: gods::pengzu_stem(stem),
            pengzu_branch: gods::pengzu_branch(day_pillar.branch()),
            lunar_festivals: lunar.festivals(),
            solar_festivals: day.festivals(),
        })
    }

    fn birth_sheet(
        &self,
        day: SolarDay,
        hour: u32,
        _minute: u32,
    ) -> Result<BirthSheet, CalendarError> {
        let lunar = LunarDay::from_solar(day)?;
        let (jie_month, lichun_year) =
            terms::jie_month(day).ok_or(CalendarError::OutOfRange(day))?;
        let year_pillar = StemBranch::for_year(lichun_year);
        let day_pillar = StemBranch::for_jdn(day.jdn());
        Ok(BirthSheet {
            solar: day,
            lunar,
            year_pillar,
            month_pillar: StemBranch::month_of(year_pillar, jie_month),
            day_pillar,
            hour_pillar: StemBranch::hour_of(day_pillar, hour),
            days_to_next_jie: terms::next_jie(day).map(|(_, d)| d - day),
            days_from_prev_jie: terms::prev_jie(day).map(|(_, d)| day - d),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> SolarDay {
        s.parse().unwrap()
    }

    #[test]
    fn day_sheet_resolves_a_full_day() {
        let sheet = Lunisolar.day_sheet(day("2026-02-14")).unwrap();
        assert_eq!(sheet.year_pillar.name(), "乙巳");
        assert_eq!(sheet.month_pillar.name(), "庚寅");
        assert_eq!(sheet.day_pillar.name(), "己未");
        assert_eq!(sheet.hour_pillar.name(), "甲子");
        assert_eq!(sheet.officer, Officer::Zhi);
        assert_eq!(sheet.joy.compass, "东北");
        assert_eq!(sheet.wealth.compass, "正北");
        assert_eq!(sheet.clash.name(), "癸丑");
        assert_eq!(sheet.sha, "西");
        assert_eq!(sheet.term_today, None);
        assert_eq!(sheet.prev_term, Some((SolarTerm::Lichun, day("2026-02-04"))));
        assert_eq!(sheet.next_term, Some((SolarTerm::Yushui, day("2026-02-18"))));
        assert_eq!(sheet.pengzu_stem, "己不破券二比并亡");
        assert_eq!(sheet.pengzu_branch, "未不服药毒气入肠");
        assert_eq!(sheet.solar_festivals, vec!["情人节"]);
        assert!(sheet.lunar_festivals.is_empty());
    }

    #[test]
    fn birth_sheet_for_the_reference_chart() {
        let sheet = Lunisolar.birth_sheet(day("1990-05-15"), 14, 30).unwrap();
        assert_eq!(sheet.year_pillar.name(), "庚午");
        assert_eq!(sheet.month_pillar.name(), "辛巳");
        assert_eq!(sheet.day_pillar.name(), "庚辰");
        assert_eq!(sheet.hour_pillar.name(), "癸未");
        assert_eq!(sheet.days_to_next_jie, Some(22));
        assert_eq!(sheet.days_from_prev_jie, Some(9));
    }

    #[test]
    fn year_boundary_differs_between_sheets() {
        // Between 立春 (Feb 4) and Chinese New Year (Feb 17) of 2026 the
        // chart year has switched to 丙午 while the almanac still labels
        // the lunar year 乙巳.
        let d = day("2026-02-10");
        let day_sheet = Lunisolar.day_sheet(d).unwrap();
        let birth_sheet = Lunisolar.birth_sheet(d, 12, 0).unwrap();
        assert_eq!(day_sheet.year_pillar.name(), "乙巳");
        assert_eq!(birth_sheet.year_pillar.name(), "丙午");
        assert_eq!(day_sheet.month_pillar, birth_sheet.month_pillar);
    }

    #[test]
    fn officer_repeats_every_twelve_days_inside_a_jie_month() {
        // Feb 14 and Feb 26 both fall between 立春 and 惊蛰 of 2026.
        let a = Lunisolar.day_sheet(day("2026-02-14")).unwrap();
        let b = Lunisolar.day_sheet(day("2026-02-26")).unwrap();
        assert_eq!(b.day_pillar.name(), "辛未");
        assert_eq!(a.officer, b.officer);
        let next = Lunisolar.day_sheet(day("2026-02-15")).unwrap();
        assert_eq!(next.officer, Officer::Po);
    }

    #[test]
    fn term_day_reports_current() {
        let sheet = Lunisolar.day_sheet(day("2026-02-04")).unwrap();
        assert_eq!(sheet.term_today, Some(SolarTerm::Lichun));
        assert_eq!(sheet.prev_term.unwrap().0, SolarTerm::Dahan);
    }

    #[test]
    fn out_of_range_days_fail() {
        assert!(Lunisolar.day_sheet(day("1900-01-30")).is_err());
        assert!(Lunisolar.birth_sheet(day("2101-03-01"), 12, 0).is_err());
        assert!(Lunisolar.day_sheet(day("1900-01-31")).is_ok());
    }
}
