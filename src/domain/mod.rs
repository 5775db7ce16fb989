//! Domain records assembled from the calendar engine.
//!
//! The almanac record, the Four Pillars chart, and the scans built on top of
//! them. Everything here is pure assembly: the cycle arithmetic lives in
//! `calendar`, the presentation in `render`.

mod translate;
mod almanac;
mod bazi;
mod query;

pub use almanac::{
    almanac_for, ActivitiesSection, AlmanacRecord, ClashSection, ElementsSection,
    FestivalsSection, GodPosition, GodsSection, LunarSection, PengZuSection, SolarSection,
    SolarTermsSection,
};
pub use bazi::{
    chart_for, parse_hhmm, BirthInput, BranchDetail, DayMaster, ElementTally, FourPillars,
    FourPillarsChart, Gender, LifeCycle, Pillar, StemDetail,
};
pub use query::{almanac_range, find_auspicious_dates, AuspiciousDate};
pub use translate::{activity_en, direction_en, weekday_cn, weekday_en};
