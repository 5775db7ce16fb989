//! Day-quality lore driven by the day pillar: where the auspicious gods
//! sit, which animal the day clashes with, the 煞 direction, and the Peng
//! Zu admonitions.

use super::cycle::{EarthlyBranch, HeavenlyStem, StemBranch};

/// A god's seat: the trigram token and its compass reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub trigram: &'static str,
    pub compass: &'static str,
}

fn position(trigram: &'static str) -> Position {
    let compass = match trigram {
        "艮" => "东北",
        "乾" => "西北",
        "坤" => "西南",
        "巽" => "东南",
        "坎" => "正北",
        "离" => "正南",
        "震" => "正东",
        "兑" => "正西",
        _ => trigram,
    };
    Position { trigram, compass }
}

/// 喜神 by day stem: 甲己 share a seat, as do 乙庚, 丙辛, 丁壬, 戊癸.
pub fn joy_position(stem: HeavenlyStem) -> Position {
    position(["艮", "乾", "坤", "离", "巽"][stem.index() % 5])
}

/// 财神 by day-stem pair.
pub fn wealth_position(stem: HeavenlyStem) -> Position {
    position(["艮", "坤", "坎", "震", "离"][stem.index() / 2])
}

/// 福神 by day-stem pair.
pub fn fortune_position(stem: HeavenlyStem) -> Position {
    position(["巽", "震", "坎", "兑", "坤"][stem.index() / 2])
}

/// The day the pillar clashes with: stem + 4, branch + 6, which is a single
/// step of 54 in the 60-cycle.
pub fn clash(day: StemBranch) -> StemBranch {
    day.nth_after(54)
}

/// 煞 direction by the day branch's trine.
pub fn sha_direction(branch: EarthlyBranch) -> &'static str {
    ["南", "东", "北", "西"][branch.index() % 4]
}

const PENGZU_STEM: [&str; 10] = [
    "甲不开仓财物耗散",
    "乙不栽植千株不长",
    "丙不修灶必见灾殃",
    "丁不剃头头必生疮",
    "戊不受田田主不祥",
    "己不破券二比并亡",
    "庚不经络织机虚张",
    "辛不合酱主人不尝",
    "壬不汲水更难提防",
    "癸不词讼理弱敌强",
];

const PENGZU_BRANCH: [&str; 12] = [
    "子不问卜自惹祸殃",
    "丑不冠带主不还乡",
    "寅不祭祀神鬼不尝",
    "卯不穿井水泉不香",
    "辰不哭泣必主重丧",
    "巳不远行财物伏藏",
    "午不苫盖屋主更张",
    "未不服药毒气入肠",
    "申不安床鬼祟入房",
    "酉不会客醉坐颠狂",
    "戌不吃犬作怪上床",
    "亥不嫁娶不利新郎",
];

pub fn pengzu_stem(stem: HeavenlyStem) -> &'static str {
    PENGZU_STEM[stem.index()]
}

pub fn pengzu_branch(branch: EarthlyBranch) -> &'static str {
    PENGZU_BRANCH[branch.index()]
}
