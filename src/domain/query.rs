//! Scans over consecutive almanac days: date ranges and auspicious-day
//! search for a named activity.

use serde::Serialize;

use crate::calendar::{CalendarError, Oracle, SolarDay};

use super::almanac::{almanac_for, AlmanacRecord};

/// Records for every day from `start` through `end` inclusive, ascending.
/// Empty when `end` precedes `start`.
pub fn almanac_range(
    oracle: &impl Oracle,
    start: SolarDay,
    end: SolarDay,
) -> Result<Vec<AlmanacRecord>, CalendarError> {
    let mut records = Vec::new();
    let mut day = start;
    while day <= end {
        records.push(almanac_for(oracle, day)?);
        day = day + 1;
    }
    Ok(records)
}

/// A day whose yi list carries the sought activity.
#[derive(Debug, Clone, Serialize)]
pub struct AuspiciousDate {
    pub date: String,
    /// Lunar month and day, e.g. 腊月十八.
    pub lunar: String,
    pub element: String,
    pub yi: Vec<String>,
    pub clash: String,
}

/// Scan exactly `days` consecutive days starting at `start` and keep those
/// whose yi list contains `activity` verbatim. Matching is by the Chinese
/// term; English glosses never match.
pub fn find_auspicious_dates(
    oracle: &impl Oracle,
    activity: &str,
    days: u32,
    start: SolarDay,
) -> Result<Vec<AuspiciousDate>, CalendarError> {
    let mut hits = Vec::new();
    for offset in 0..i64::from(days) {
        let record = almanac_for(oracle, start + offset)?;
        if record.activities.yi.iter().any(|yi| yi == activity) {
            hits.push(AuspiciousDate {
                date: record.solar.date,
                lunar: format!("{}月{}", record.lunar.month_cn, record.lunar.day_cn),
                element: record.elements.day_element,
                yi: record.activities.yi,
                clash: record.clash.chong_desc,
            });
        }
    }
    Ok(hits)
}
