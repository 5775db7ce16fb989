//! # Sexagenary cycle
//!
//! The ten Heavenly Stems (天干) and twelve Earthly Branches (地支) combine
//! into the 60-term ganzhi cycle that labels years, months, days and hours.
//! Element relations follow the two classical cycles:
//!
//! | relation | order |
//! |----------|-------|
//! | produces (生) | 木 → 火 → 土 → 金 → 水 → 木 |
//! | controls (克) | 木 → 土 → 水 → 火 → 金 → 木 |
//!
//! Anchors: day 甲子 is chosen so 1970-01-01 is 辛巳 and 2000-01-01 is 戊午;
//! year 1984 is 甲子. Months follow the five-tigers rule from the year stem,
//! hours the five-rats rule from the day stem.

use std::fmt;

/// 五行.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    pub fn cn(&self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    pub fn en(&self) -> &'static str {
        match self {
            Element::Wood => "Wood",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Metal => "Metal",
            Element::Water => "Water",
        }
    }

    pub fn from_cn(c: char) -> Option<Element> {
        match c {
            '木' => Some(Element::Wood),
            '火' => Some(Element::Fire),
            '土' => Some(Element::Earth),
            '金' => Some(Element::Metal),
            '水' => Some(Element::Water),
            _ => None,
        }
    }

    /// The element this one generates (生).
    pub fn produces(&self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// The element that generates this one.
    pub fn produced_by(&self) -> Element {
        match self {
            Element::Wood => Element::Water,
            Element::Fire => Element::Wood,
            Element::Earth => Element::Fire,
            Element::Metal => Element::Earth,
            Element::Water => Element::Metal,
        }
    }

    /// The element this one overcomes (克).
    pub fn controls(&self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
        }
    }

    /// The element that overcomes this one.
    pub fn controlled_by(&self) -> Element {
        match self {
            Element::Earth => Element::Wood,
            Element::Water => Element::Earth,
            Element::Fire => Element::Water,
            Element::Metal => Element::Fire,
            Element::Wood => Element::Metal,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.en())
    }
}

/// 天干.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl HeavenlyStem {
    pub const ALL: [HeavenlyStem; 10] = [
        HeavenlyStem::Jia,
        HeavenlyStem::Yi,
        HeavenlyStem::Bing,
        HeavenlyStem::Ding,
        HeavenlyStem::Wu,
        HeavenlyStem::Ji,
        HeavenlyStem::Geng,
        HeavenlyStem::Xin,
        HeavenlyStem::Ren,
        HeavenlyStem::Gui,
    ];

    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % 10]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn cn(&self) -> &'static str {
        ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"][self.index()]
    }

    pub fn pinyin(&self) -> &'static str {
        ["Jiǎ", "Yǐ", "Bǐng", "Dīng", "Wù", "Jǐ", "Gēng", "Xīn", "Rén", "Guǐ"][self.index()]
    }

    pub fn element(&self) -> Element {
        Element::ALL[self.index() / 2]
    }

    /// Stems alternate yang/yin starting from yang 甲.
    pub fn is_yang(&self) -> bool {
        self.index() % 2 == 0
    }

    pub fn english(&self) -> &'static str {
        [
            "Yang Wood", "Yin Wood", "Yang Fire", "Yin Fire", "Yang Earth",
            "Yin Earth", "Yang Metal", "Yin Metal", "Yang Water", "Yin Water",
        ][self.index()]
    }
}

impl fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cn())
    }
}

/// 地支.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl EarthlyBranch {
    pub const ALL: [EarthlyBranch; 12] = [
        EarthlyBranch::Zi,
        EarthlyBranch::Chou,
        EarthlyBranch::Yin,
        EarthlyBranch::Mao,
        EarthlyBranch::Chen,
        EarthlyBranch::Si,
        EarthlyBranch::Wu,
        EarthlyBranch::Wei,
        EarthlyBranch::Shen,
        EarthlyBranch::You,
        EarthlyBranch::Xu,
        EarthlyBranch::Hai,
    ];

    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % 12]
    }

    /// Branch of the two-hour window containing `hour` (0-23; 24 is folded
    /// back into the 23:00 子 window). 23:00-00:59 is 子.
    pub fn of_hour(hour: u32) -> Self {
        let h = hour.min(23);
        Self::from_index(((h + 1) / 2) as usize % 12)
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn cn(&self) -> &'static str {
        ["子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥"][self.index()]
    }

    pub fn pinyin(&self) -> &'static str {
        ["Zǐ", "Chǒu", "Yín", "Mǎo", "Chén", "Sì", "Wǔ", "Wèi", "Shēn", "Yǒu", "Xū", "Hài"]
            [self.index()]
    }

    pub fn animal_cn(&self) -> &'static str {
        ["鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪"][self.index()]
    }

    pub fn animal_en(&self) -> &'static str {
        [
            "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey",
            "Rooster", "Dog", "Pig",
        ][self.index()]
    }

    pub fn element(&self) -> Element {
        use Element::*;
        [
            Water, Earth, Wood, Wood, Earth, Fire, Fire, Earth, Metal, Metal, Earth, Water,
        ][self.index()]
    }

    /// The double-hour window, e.g. 子 is "23:00-01:00".
    pub fn hours(&self) -> &'static str {
        [
            "23:00-01:00",
            "01:00-03:00",
            "03:00-05:00",
            "05:00-07:00",
            "07:00-09:00",
            "09:00-11:00",
            "11:00-13:00",
            "13:00-15:00",
            "15:00-17:00",
            "17:00-19:00",
            "19:00-21:00",
            "21:00-23:00",
        ][self.index()]
    }
}

impl fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cn())
    }
}

/// The thirty na-yin names, one per consecutive stem-branch pair.
const NAYIN: [&str; 30] = [
    "海中金", "炉中火", "大林木", "路旁土", "剑锋金", "山头火", "涧下水", "城头土",
    "白蜡金", "杨柳木", "泉中水", "屋上土", "霹雳火", "松柏木", "长流水", "沙中金",
    "山下火", "平地木", "壁上土", "金箔金", "覆灯火", "天河水", "大驿土", "钗钏金",
    "桑柘木", "大溪水", "沙中土", "天上火", "石榴木", "大海水",
];

/// A position in the 60-term ganzhi cycle (0 = 甲子 … 59 = 癸亥).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch(u8);

impl StemBranch {
    pub fn from_index(i: i64) -> Self {
        Self(i.rem_euclid(60) as u8)
    }

    /// Day pillar for a Julian day number.
    pub fn for_jdn(jdn: i64) -> Self {
        Self::from_index(jdn + 49)
    }

    /// Sexagenary year (1984 is 甲子). Whether the boundary is Chinese New
    /// Year or 立春 is the caller's concern.
    pub fn for_year(year: i32) -> Self {
        Self::from_index(year as i64 - 1984)
    }

    /// Month pillar by the five-tigers rule: `jie_month` is 0 for the 寅
    /// month opened by 立春, counting up through the eleven following 节.
    pub fn month_of(year: StemBranch, jie_month: usize) -> Self {
        let stem = (year.stem().index() * 2 + 2 + jie_month) % 10;
        let branch = (2 + jie_month) % 12;
        Self::from_parts(stem, branch)
    }

    /// Hour pillar by the five-rats rule.
    pub fn hour_of(day: StemBranch, hour: u32) -> Self {
        let branch = EarthlyBranch::of_hour(hour);
        let stem = (day.stem().index() % 5) * 2 + branch.index();
        Self::from_parts(stem % 10, branch.index())
    }

    fn from_parts(stem: usize, branch: usize) -> Self {
        for k in 0..6 {
            let i = stem + 10 * k;
            if i % 12 == branch % 12 {
                return Self((i % 60) as u8);
            }
        }
        // stem/branch parity always matches when derived by cycle arithmetic
        Self((stem % 60) as u8)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn stem(&self) -> HeavenlyStem {
        HeavenlyStem::from_index(self.index())
    }

    pub fn branch(&self) -> EarthlyBranch {
        EarthlyBranch::from_index(self.index())
    }

    pub fn name(&self) -> String {
        format!("{}{}", self.stem().cn(), self.branch().cn())
    }

    pub fn nth_after(&self, n: i64) -> Self {
        Self::from_index(self.0 as i64 + n)
    }

    /// Na-yin (纳音) of the pair this position belongs to.
    pub fn nayin(&self) -> &'static str {
        NAYIN[self.index() / 2]
    }
}

impl fmt::Display for StemBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem().cn(), self.branch().cn())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_cycles_are_inverses() {
        for e in Element::ALL {
            assert_eq!(e.produces().produced_by(), e);
            assert_eq!(e.controls().controlled_by(), e);
        }
    }

    #[test]
    fn production_cycle_order() {
        assert_eq!(Element::Wood.produces(), Element::Fire);
        assert_eq!(Element::Metal.produces(), Element::Water);
        assert_eq!(Element::Water.controls(), Element::Fire);
        assert_eq!(Element::Metal.controlled_by(), Element::Fire);
    }

    #[test]
    fn stem_tables() {
        assert_eq!(HeavenlyStem::Jia.cn(), "甲");
        assert_eq!(HeavenlyStem::Gui.cn(), "癸");
        assert_eq!(HeavenlyStem::Geng.element(), Element::Metal);
        assert_eq!(HeavenlyStem::Geng.english(), "Yang Metal");
        assert!(HeavenlyStem::Geng.is_yang());
        assert!(!HeavenlyStem::Xin.is_yang());
        assert_eq!(HeavenlyStem::from_index(17), HeavenlyStem::Xin);
    }

    #[test]
    fn branch_tables() {
        assert_eq!(EarthlyBranch::Zi.animal_cn(), "鼠");
        assert_eq!(EarthlyBranch::Si.animal_en(), "Snake");
        assert_eq!(EarthlyBranch::Wei.element(), Element::Earth);
        assert_eq!(EarthlyBranch::Hai.element(), Element::Water);
        assert_eq!(EarthlyBranch::Zi.hours(), "23:00-01:00");
        assert_eq!(EarthlyBranch::Wei.hours(), "13:00-15:00");
    }

    #[test]
    fn hour_branch_windows() {
        let cases = [
            (0, EarthlyBranch::Zi),
            (1, EarthlyBranch::Chou),
            (2, EarthlyBranch::Chou),
            (3, EarthlyBranch::Yin),
            (11, EarthlyBranch::Wu),
            (12, EarthlyBranch::Wu),
            (14, EarthlyBranch::Wei),
            (22, EarthlyBranch::Hai),
            (23, EarthlyBranch::Zi),
            (24, EarthlyBranch::Zi),
        ];
        for (hour, branch) in cases {
            assert_eq!(EarthlyBranch::of_hour(hour), branch, "hour {hour}");
        }
    }

    #[test]
    fn day_pillar_anchors() {
        // 1970-01-01 and 2000-01-01 as JDNs.
        assert_eq!(StemBranch::for_jdn(2_440_588).name(), "辛巳");
        assert_eq!(StemBranch::for_jdn(2_451_545).name(), "戊午");
        assert_eq!(StemBranch::for_jdn(2_460_351).name(), "甲辰"); // 2024-02-10
    }

    #[test]
    fn year_pillar_anchors() {
        assert_eq!(StemBranch::for_year(1984).name(), "甲子");
        assert_eq!(StemBranch::for_year(1990).name(), "庚午");
        assert_eq!(StemBranch::for_year(2026).name(), "丙午");
        assert_eq!(StemBranch::for_year(1900).name(), "庚子");
    }

    #[test]
    fn five_tigers_months() {
        let jia_year = StemBranch::for_year(1984);
        assert_eq!(StemBranch::month_of(jia_year, 0).name(), "丙寅");
        let geng_year = StemBranch::for_year(1990);
        assert_eq!(StemBranch::month_of(geng_year, 3).name(), "辛巳");
        let bing_year = StemBranch::for_year(2026);
        assert_eq!(StemBranch::month_of(bing_year, 0).name(), "庚寅");
    }

    #[test]
    fn five_rats_hours() {
        let geng_day = StemBranch::from_index(16); // 庚辰
        assert_eq!(StemBranch::hour_of(geng_day, 14).name(), "癸未");
        let jia_day = StemBranch::from_index(0);
        assert_eq!(StemBranch::hour_of(jia_day, 0).name(), "甲子");
        let ji_day = StemBranch::from_index(5); // 己巳
        assert_eq!(StemBranch::hour_of(ji_day, 23).name(), "甲子");
    }

    #[test]
    fn nayin_pairs() {
        assert_eq!(StemBranch::from_index(0).nayin(), "海中金"); // 甲子
        assert_eq!(StemBranch::from_index(41).nayin(), "覆灯火"); // 乙巳
        assert_eq!(StemBranch::from_index(55).nayin(), "天上火"); // 己未
        assert_eq!(StemBranch::from_index(16).nayin(), "白蜡金"); // 庚辰
        assert_eq!(StemBranch::from_index(59).nayin(), "大海水"); // 癸亥
    }

    #[test]
    fn cycle_wraps() {
        assert_eq!(StemBranch::from_index(60), StemBranch::from_index(0));
        assert_eq!(StemBranch::from_index(-1).name(), "癸亥");
        assert_eq!(StemBranch::from_index(17).nth_after(1).name(), "壬午");
        assert_eq!(StemBranch::from_index(0).nth_after(-1).name(), "癸亥");
    }
}
