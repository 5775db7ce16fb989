//! # Almanac record
//!
//! One solar day fully annotated for the 黄历 surfaces: civil fields, the
//! lunisolar conversion, the four ganzhi labels with their na-yin, the day
//! officer's yi/ji guidance, auspicious god positions, clash and sha, the
//! surrounding solar terms, Peng Zu admonitions and festivals.
//!
//! The record serializes straight to the JSON the HTTP API serves; the
//! terminal, social and image presenters all read the same struct, so every
//! surface agrees on the numbers by construction.

use serde::Serialize;

use crate::calendar::{CalendarError, DaySheet, Element, Oracle, SolarDay};

use super::translate::{activity_en, direction_en, weekday_cn, weekday_en};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlmanacRecord {
    pub solar: SolarSection,
    pub lunar: LunarSection,
    pub elements: ElementsSection,
    pub activities: ActivitiesSection,
    pub gods: GodsSection,
    pub clash: ClashSection,
    pub solar_terms: SolarTermsSection,
    pub peng_zu: PengZuSection,
    pub festivals: FestivalsSection,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarSection {
    pub date: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Single weekday character, 日 through 六.
    pub weekday: String,
    pub weekday_en: String,
    pub constellation: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarSection {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub month_cn: String,
    pub day_cn: String,
    pub gan_zhi_year: String,
    pub gan_zhi_month: String,
    pub gan_zhi_day: String,
    pub gan_zhi_hour: String,
    pub zodiac: String,
    pub zodiac_en: String,
    pub is_leap_month: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementsSection {
    pub year_na_yin: String,
    pub year_na_yin_element: String,
    pub month_na_yin: String,
    pub month_na_yin_element: String,
    pub day_na_yin: String,
    pub day_na_yin_element: String,
    pub day_stem: String,
    pub day_element: String,
    pub day_element_cn: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitiesSection {
    pub yi: Vec<String>,
    pub ji: Vec<String>,
    pub yi_en: Vec<String>,
    pub ji_en: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GodsSection {
    pub xi_shen: GodPosition,
    pub fu_shen: GodPosition,
    pub cai_shen: GodPosition,
}

/// Where a god sits today: the bagua trigram, the compass reading of that
/// trigram, and the trigram's English gloss.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GodPosition {
    pub direction: String,
    pub desc: String,
    pub direction_en: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClashSection {
    /// Branch character of the clashed day.
    pub chong: String,
    /// Full reading, e.g. `(癸丑)牛`.
    pub chong_desc: String,
    pub sha: String,
    pub sha_en: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarTermsSection {
    /// Term falling on this very day, if any.
    pub current: Option<String>,
    pub prev: Option<String>,
    pub prev_date: Option<String>,
    pub next: Option<String>,
    pub next_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PengZuSection {
    pub gan: String,
    pub zhi: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalsSection {
    pub lunar: Vec<String>,
    pub solar: Vec<String>,
}

/// Build the full almanac record for a day.
pub fn almanac_for(oracle: &impl Oracle, day: SolarDay) -> Result<AlmanacRecord, CalendarError> {
    Ok(record_from_sheet(&oracle.day_sheet(day)?))
}

fn record_from_sheet(sheet: &DaySheet) -> AlmanacRecord {
    let (year, month, day) = sheet.solar.ymd();
    let weekday = sheet.solar.weekday_index();
    let year_branch = sheet.year_pillar.branch();

    let yi: Vec<String> = sheet.officer.yi().iter().map(|s| s.to_string()).collect();
    let ji: Vec<String> = sheet.officer.ji().iter().map(|s| s.to_string()).collect();
    let yi_en = yi.iter().map(|s| activity_en(s).to_string()).collect();
    let ji_en = ji.iter().map(|s| activity_en(s).to_string()).collect();

    let day_stem = sheet.day_pillar.stem();

    AlmanacRecord {
        solar: SolarSection {
            date: sheet.solar.to_string(),
            year,
            month,
            day,
            weekday: weekday_cn(weekday).to_string(),
            weekday_en: weekday_en(weekday).to_string(),
            constellation: sheet.solar.constellation().to_string(),
        },
        lunar: LunarSection {
            year: sheet.lunar.year(),
            month: sheet.lunar.month(),
            day: sheet.lunar.day(),
            month_cn: sheet.lunar.month_cn(),
            day_cn: sheet.lunar.day_cn().to_string(),
            gan_zhi_year: sheet.year_pillar.name(),
            gan_zhi_month: sheet.month_pillar.name(),
            gan_zhi_day: sheet.day_pillar.name(),
            gan_zhi_hour: sheet.hour_pillar.name(),
            zodiac: year_branch.animal_cn().to_string(),
            zodiac_en: year_branch.animal_en().to_string(),
            is_leap_month: sheet.lunar.is_leap_month(),
        },
        elements: ElementsSection {
            year_na_yin: sheet.year_pillar.nayin().to_string(),
            year_na_yin_element: extract_element(sheet.year_pillar.nayin()).to_string(),
            month_na_yin: sheet.month_pillar.nayin().to_string(),
            month_na_yin_element: extract_element(sheet.month_pillar.nayin()).to_string(),
            day_na_yin: sheet.day_pillar.nayin().to_string(),
            day_na_yin_element: extract_element(sheet.day_pillar.nayin()).to_string(),
            day_stem: day_stem.cn().to_string(),
            day_element: day_stem.element().en().to_string(),
            day_element_cn: day_stem.element().cn().to_string(),
        },
        activities: ActivitiesSection { yi, ji, yi_en, ji_en },
        gods: GodsSection {
            xi_shen: god_position(sheet.joy.trigram, sheet.joy.compass),
            fu_shen: god_position(sheet.fortune.trigram, sheet.fortune.compass),
            cai_shen: god_position(sheet.wealth.trigram, sheet.wealth.compass),
        },
        clash: ClashSection {
            chong: sheet.clash.branch().cn().to_string(),
            chong_desc: format!("({}){}", sheet.clash.name(), sheet.clash.branch().animal_cn()),
            sha: sheet.sha.to_string(),
            sha_en: direction_en(sheet.sha).to_string(),
        },
        solar_terms: SolarTermsSection {
            current: sheet.term_today.map(|t| t.cn().to_string()),
            prev: sheet.prev_term.map(|(t, _)| t.cn().to_string()),
            prev_date: sheet.prev_term.map(|(_, d)| d.to_string()),
            next: sheet.next_term.map(|(t, _)| t.cn().to_string()),
            next_date: sheet.next_term.map(|(_, d)| d.to_string()),
        },
        peng_zu: PengZuSection {
            gan: sheet.pengzu_stem.to_string(),
            zhi: sheet.pengzu_branch.to_string(),
        },
        festivals: FestivalsSection {
            lunar: sheet.lunar_festivals.iter().map(|s| s.to_string()).collect(),
            solar: sheet.solar_festivals.iter().map(|s| s.to_string()).collect(),
        },
    }
}

fn god_position(trigram: &str, compass: &str) -> GodPosition {
    GodPosition {
        direction: trigram.to_string(),
        desc: compass.to_string(),
        direction_en: direction_en(trigram).to_string(),
    }
}

/// The element named inside a na-yin, e.g. 覆灯火 is Fire. Falls back to the
/// na-yin itself should a name ever carry no element character.
fn extract_element(nayin: &str) -> &str {
    for e in Element::ALL {
        if nayin.contains(e.cn()) {
            return e.en();
        }
    }
    nayin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Lunisolar;

    fn record(s: &str) -> AlmanacRecord {
        almanac_for(&Lunisolar, s.parse().unwrap()).unwrap()
    }

    #[test]
    fn valentines_2026_record() {
        let r = record("2026-02-14");

        assert_eq!(r.solar.date, "2026-02-14");
        assert_eq!(r.solar.year, 2026);
        assert_eq!(r.solar.month, 2);
        assert_eq!(r.solar.day, 14);
        assert_eq!(r.solar.weekday, "六");
        assert_eq!(r.solar.weekday_en, "Saturday");
        assert_eq!(r.solar.constellation, "水瓶座");

        assert_eq!(r.lunar.year, 2025);
        assert_eq!(r.lunar.month, 12);
        assert_eq!(r.lunar.day, 27);
        assert_eq!(r.lunar.month_cn, "腊");
        assert_eq!(r.lunar.day_cn, "廿七");
        assert_eq!(r.lunar.gan_zhi_year, "乙巳");
        assert_eq!(r.lunar.gan_zhi_month, "庚寅");
        assert_eq!(r.lunar.gan_zhi_day, "己未");
        assert_eq!(r.lunar.gan_zhi_hour, "甲子");
        assert_eq!(r.lunar.zodiac, "蛇");
        assert_eq!(r.lunar.zodiac_en, "Snake");
        assert!(!r.lunar.is_leap_month);

        assert_eq!(r.elements.year_na_yin, "覆灯火");
        assert_eq!(r.elements.year_na_yin_element, "Fire");
        assert_eq!(r.elements.month_na_yin, "松柏木");
        assert_eq!(r.elements.month_na_yin_element, "Wood");
        assert_eq!(r.elements.day_na_yin, "天上火");
        assert_eq!(r.elements.day_na_yin_element, "Fire");
        assert_eq!(r.elements.day_stem, "己");
        assert_eq!(r.elements.day_element, "Earth");
        assert_eq!(r.elements.day_element_cn, "土");

        assert_eq!(r.activities.yi, vec!["纳采", "捕捉", "修造", "动土"]);
        assert_eq!(r.activities.ji, vec!["开市", "出行", "移徙"]);
        assert_eq!(
            r.activities.yi_en,
            vec!["Proposing Marriage", "Hunting/Trapping", "Renovating", "Starting Construction"]
        );
        assert_eq!(
            r.activities.ji_en,
            vec!["Opening Business", "Traveling", "Moving/Relocating"]
        );

        assert_eq!(r.gods.xi_shen.direction, "艮");
        assert_eq!(r.gods.xi_shen.desc, "东北");
        assert_eq!(r.gods.xi_shen.direction_en, "Northeast (Gen)");
        assert_eq!(r.gods.cai_shen.direction, "坎");
        assert_eq!(r.gods.cai_shen.desc, "正北");
        assert_eq!(r.gods.cai_shen.direction_en, "North (Kan)");
        assert_eq!(r.gods.fu_shen.direction, "坎");

        assert_eq!(r.clash.chong, "丑");
        assert_eq!(r.clash.chong_desc, "(癸丑)牛");
        assert_eq!(r.clash.sha, "西");
        assert_eq!(r.clash.sha_en, "West");

        assert_eq!(r.solar_terms.current, None);
        assert_eq!(r.solar_terms.prev.as_deref(), Some("立春"));
        assert_eq!(r.solar_terms.prev_date.as_deref(), Some("2026-02-04"));
        assert_eq!(r.solar_terms.next.as_deref(), Some("雨水"));
        assert_eq!(r.solar_terms.next_date.as_deref(), Some("2026-02-18"));

        assert_eq!(r.peng_zu.gan, "己不破券二比并亡");
        assert_eq!(r.peng_zu.zhi, "未不服药毒气入肠");

        assert!(r.festivals.lunar.is_empty());
        assert_eq!(r.festivals.solar, vec!["情人节"]);
    }

    #[test]
    fn record_is_deterministic() {
        let a = serde_json::to_string(&record("1990-05-15")).unwrap();
        let b = serde_json::to_string(&record("1990-05-15")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn wire_keys_are_camel_case() {
        let json = serde_json::to_value(record("2026-02-14")).unwrap();
        assert!(json["lunar"]["ganZhiYear"].is_string());
        assert!(json["lunar"]["isLeapMonth"].is_boolean());
        assert!(json["elements"]["dayNaYinElement"].is_string());
        assert!(json["activities"]["yiEn"].is_array());
        assert!(json["gods"]["xiShen"]["directionEn"].is_string());
        assert!(json["clash"]["chongDesc"].is_string());
        assert!(json["solarTerms"]["prevDate"].is_string());
        assert!(json["pengZu"]["gan"].is_string());
        // A term-less day serializes an explicit null, not a missing key.
        assert!(json["solarTerms"]["current"].is_null());
    }

    #[test]
    fn term_day_fills_current() {
        let r = record("2026-02-04");
        assert_eq!(r.solar_terms.current.as_deref(), Some("立春"));
        assert_eq!(r.solar_terms.prev.as_deref(), Some("大寒"));
    }

    #[test]
    fn leap_month_is_flagged_with_positive_month() {
        let r = record("2025-08-01");
        assert!(r.lunar.is_leap_month);
        assert_eq!(r.lunar.month, 6);
        assert_eq!(r.lunar.month_cn, "闰六");
    }

    #[test]
    fn nayin_element_extraction() {
        assert_eq!(extract_element("海中金"), "Metal");
        assert_eq!(extract_element("大海水"), "Water");
        assert_eq!(extract_element("金箔金"), "Metal");
        assert_eq!(extract_element("平地木"), "Wood");
        // Unknown strings surface unchanged rather than guessing.
        assert_eq!(extract_element("未知"), "未知");
    }
}
