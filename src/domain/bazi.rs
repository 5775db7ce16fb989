//! # Four Pillars chart
//!
//! 八字: the year, month, day and hour pillars of a birth moment, the day
//! master read from the day stem, the five-element distribution across the
//! eight characters, and up to eight ten-year luck cycles (大运).
//!
//! Chart years turn at 立春, not at Chinese New Year, so between the two
//! boundaries a birth carries a different year pillar than the almanac page
//! for the same date. Luck cycles run forward when the year stem is yang and
//! backward when it is yin; the `gender` argument is echoed into the output
//! but takes no part in the computation, which matches the behavior this
//! tool has always shipped with.

use serde::Serialize;
use tracing::debug;

use crate::calendar::{
    BirthSheet, CalendarError, EarthlyBranch, Element, HeavenlyStem, Oracle, SolarDay, StemBranch,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Lenient parse: anything that is not "female" reads as male.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("female") {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

/// Parse a birth time like `14:30` or a bare `14`. A trailing colon means
/// minute zero. Hours run 0..=24 (24 reads as the end of the day), minutes
/// 0..=59; anything else is `None`.
pub fn parse_hhmm(s: &str) -> Option<(u32, u32)> {
    let (h, m) = match s.split_once(':') {
        Some((h, m)) => (h, m),
        None => (s, ""),
    };
    let hour: u32 = h.parse().ok()?;
    let minute: u32 = if m.is_empty() { 0 } else { m.parse().ok()? };
    (hour <= 24 && minute <= 59).then_some((hour, minute))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FourPillarsChart {
    pub input: BirthInput,
    pub solar_date: String,
    /// Lunar birthday with the year spelled digit by digit: 一九九〇年四月廿一.
    pub lunar_date: String,
    /// Year-branch animal in English, on the 立春 boundary.
    pub zodiac: String,
    pub four_pillars: FourPillars,
    pub day_master: DayMaster,
    pub elements: ElementTally,
    pub lucky_elements: Vec<String>,
    pub unlucky_elements: Vec<String>,
    pub life_cycles: Vec<LifeCycle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub gender: Gender,
}

#[derive(Debug, Clone, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

#[derive(Debug, Clone, Serialize)]
pub struct Pillar {
    pub chinese: String,
    pub stem: StemDetail,
    pub branch: BranchDetail,
}

#[derive(Debug, Clone, Serialize)]
pub struct StemDetail {
    pub chinese: String,
    pub pinyin: String,
    pub element: String,
    pub yin: bool,
    pub english: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BranchDetail {
    pub chinese: String,
    pub pinyin: String,
    pub animal: String,
    pub element: String,
    pub yin: bool,
    pub hours: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayMaster {
    pub chinese: String,
    pub element: String,
    pub english: String,
    pub nature: String,
    pub traits: Vec<String>,
    pub description: String,
}

/// How often each element appears among the eight characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElementTally {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl ElementTally {
    fn bump(&mut self, element: Element) {
        match element {
            Element::Wood => self.wood += 1,
            Element::Fire => self.fire += 1,
            Element::Earth => self.earth += 1,
            Element::Metal => self.metal += 1,
            Element::Water => self.water += 1,
        }
    }

    pub fn get(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub fn total(&self) -> u32 {
        self.entries().iter().map(|&(_, n)| u32::from(n)).sum()
    }

    /// Counts in the traditional 木火土金水 presentation order.
    pub fn entries(&self) -> [(Element, u8); 5] {
        [
            (Element::Wood, self.wood),
            (Element::Fire, self.fire),
            (Element::Earth, self.earth),
            (Element::Metal, self.metal),
            (Element::Water, self.water),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeCycle {
    pub start_age: u32,
    pub end_age: u32,
    pub gan_zhi: String,
    pub stem: String,
    pub branch: String,
}

struct TraitProfile {
    nature: &'static str,
    traits: [&'static str; 4],
    description: &'static str,
}

/// Day-master readings, one per heavenly stem in 甲..癸 order.
const DAY_MASTER_TRAITS: [TraitProfile; 10] = [
    TraitProfile {
        nature: "The Towering Tree",
        traits: ["Leader", "Ambitious", "Straightforward", "Stubborn"],
        description: "Strong, principled, and growth-oriented. Natural leaders who stand tall like great trees.",
    },
    TraitProfile {
        nature: "The Flexible Vine",
        traits: ["Adaptable", "Diplomatic", "Gentle", "Persistent"],
        description: "Graceful and resilient. Bends but doesn't break, finding paths around obstacles.",
    },
    TraitProfile {
        nature: "The Blazing Sun",
        traits: ["Charismatic", "Generous", "Optimistic", "Impatient"],
        description: "Radiates warmth and energy. Natural entertainers who light up any room.",
    },
    TraitProfile {
        nature: "The Candlelight",
        traits: ["Thoughtful", "Creative", "Intuitive", "Sensitive"],
        description: "Illuminates details others miss. Artistic souls with deep emotional intelligence.",
    },
    TraitProfile {
        nature: "The Mountain",
        traits: ["Reliable", "Patient", "Nurturing", "Stubborn"],
        description: "Solid and dependable. Creates stability and provides a foundation for others.",
    },
    TraitProfile {
        nature: "The Garden Soil",
        traits: ["Nurturing", "Detail-oriented", "Humble", "Anxious"],
        description: "Supports growth in others. Practical minds who cultivate success quietly.",
    },
    TraitProfile {
        nature: "The Sword",
        traits: ["Decisive", "Direct", "Justice-minded", "Harsh"],
        description: "Sharp and commanding. Warriors who cut through problems with decisive action.",
    },
    TraitProfile {
        nature: "The Jewel",
        traits: ["Refined", "Perfectionist", "Principled", "Sensitive"],
        description: "Values beauty and quality. Discerning minds that seek perfection in all things.",
    },
    TraitProfile {
        nature: "The Ocean",
        traits: ["Wise", "Adventurous", "Philosophical", "Restless"],
        description: "Deep and far-reaching. Intellectual explorers with vast inner worlds.",
    },
    TraitProfile {
        nature: "The Rain",
        traits: ["Intuitive", "Nurturing", "Imaginative", "Moody"],
        description: "Brings life and nourishment. Deeply empathetic souls who sense unseen currents.",
    },
];

// 子 reads yin in this chart vocabulary, unlike strict index parity.
const BRANCH_YIN: [bool; 12] = [
    true, true, false, true, false, true, false, true, false, true, false, true,
];

/// Build the Four Pillars chart for a birth moment. `hour` 12 with `minute`
/// 0 is the conventional stand-in for an unknown birth time.
pub fn chart_for(
    oracle: &impl Oracle,
    day: SolarDay,
    hour: u32,
    minute: u32,
    gender: Gender,
) -> Result<FourPillarsChart, CalendarError> {
    let sheet = oracle.birth_sheet(day, hour, minute)?;
    let (year, month, day_of_month) = sheet.solar.ymd();

    let mut elements = ElementTally::default();
    for sb in [
        sheet.year_pillar,
        sheet.month_pillar,
        sheet.day_pillar,
        sheet.hour_pillar,
    ] {
        elements.bump(sb.stem().element());
        elements.bump(sb.branch().element());
    }

    let day_stem = sheet.day_pillar.stem();
    let day_element = day_stem.element();
    let profile = &DAY_MASTER_TRAITS[day_stem.index()];

    let mut lucky_elements = vec![
        day_element.produces().en().to_string(),
        day_element.produced_by().en().to_string(),
    ];
    lucky_elements.dedup();
    let unlucky_elements = vec![day_element.controlled_by().en().to_string()];

    Ok(FourPillarsChart {
        input: BirthInput {
            year,
            month,
            day: day_of_month,
            hour,
            minute,
            gender,
        },
        solar_date: sheet.solar.to_string(),
        lunar_date: format!(
            "{}年{}月{}",
            sheet.lunar.year_cn(),
            sheet.lunar.month_cn(),
            sheet.lunar.day_cn()
        ),
        zodiac: sheet.year_pillar.branch().animal_en().to_string(),
        four_pillars: FourPillars {
            year: pillar(sheet.year_pillar),
            month: pillar(sheet.month_pillar),
            day: pillar(sheet.day_pillar),
            hour: pillar(sheet.hour_pillar),
        },
        day_master: DayMaster {
            chinese: day_stem.cn().to_string(),
            element: day_element.en().to_string(),
            english: day_stem.english().to_string(),
            nature: profile.nature.to_string(),
            traits: profile.traits.iter().map(|s| s.to_string()).collect(),
            description: profile.description.to_string(),
        },
        elements,
        lucky_elements,
        unlucky_elements,
        life_cycles: life_cycles(&sheet),
    })
}

fn pillar(sb: StemBranch) -> Pillar {
    Pillar {
        chinese: sb.name(),
        stem: stem_detail(sb.stem()),
        branch: branch_detail(sb.branch()),
    }
}

fn stem_detail(stem: HeavenlyStem) -> StemDetail {
    StemDetail {
        chinese: stem.cn().to_string(),
        pinyin: stem.pinyin().to_string(),
        element: stem.element().en().to_string(),
        yin: !stem.is_yang(),
        english: stem.english().to_string(),
    }
}

fn branch_detail(branch: EarthlyBranch) -> BranchDetail {
    BranchDetail {
        chinese: branch.cn().to_string(),
        pinyin: branch.pinyin().to_string(),
        animal: branch.animal_en().to_string(),
        element: branch.element().en().to_string(),
        yin: BRANCH_YIN[branch.index()],
        hours: branch.hours().to_string(),
    }
}

/// Ten-year luck cycles stepped off the month pillar. Three days to the
/// pivot jie count as one year of age; a birth on the jie itself still
/// starts at one.
fn life_cycles(sheet: &BirthSheet) -> Vec<LifeCycle> {
    let forward = sheet.year_pillar.stem().is_yang();
    let days = if forward {
        sheet.days_to_next_jie
    } else {
        sheet.days_from_prev_jie
    };
    let Some(days) = days else {
        debug!(solar = %sheet.solar, "luck cycles skipped, term table exhausted");
        return Vec::new();
    };

    let start_age = ((2 * days + 3) / 6).max(1) as u32;
    let step: i64 = if forward { 1 } else { -1 };

    (0..8u32)
        .map(|i| {
            let gan_zhi = sheet.month_pillar.nth_after(step * (i64::from(i) + 1));
            let start = start_age + 10 * i;
            LifeCycle {
                start_age: start,
                end_age: start + 9,
                gan_zhi: gan_zhi.name(),
                stem: gan_zhi.stem().cn().to_string(),
                branch: gan_zhi.branch().cn().to_string(),
            }
        })
        .collect()
}
