//! # Twelve Day Officers (建除十二神)
//!
//! The officer of a day is the offset of the day branch from the branch of
//! the current jie month, cycling 建除满平定执破危成收开闭. Each officer
//! carries a fixed reading of favorable (宜) and unfavorable (忌)
//! undertakings, which is where the almanac's activity lists come from.

use super::cycle::EarthlyBranch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Officer {
    Jian,
    Chu,
    Man,
    Ping,
    Ding,
    Zhi,
    Po,
    Wei,
    Cheng,
    Shou,
    Kai,
    Bi,
}

/// Officer name, favorable activities, unfavorable activities.
const GUIDANCE: [(&str, &[&str], &[&str]); 12] = [
    (
        "建",
        &["出行", "赴任", "祭祀", "祈福", "会亲友"],
        &["动土", "开仓", "安葬"],
    ),
    (
        "除",
        &["扫舍", "求医", "祭祀", "沐浴", "解除"],
        &["嫁娶", "出行", "安葬"],
    ),
    (
        "满",
        &["祭祀", "祈福", "纳财", "开市", "交易"],
        &["安葬", "栽种"],
    ),
    (
        "平",
        &["修造", "动土", "安床", "栽种"],
        &["祈福", "求嗣", "开市"],
    ),
    (
        "定",
        &["嫁娶", "纳采", "祭祀", "祈福", "安床", "会亲友"],
        &["出行", "词讼", "求医"],
    ),
    (
        "执",
        &["纳采", "捕捉", "修造", "动土"],
        &["开市", "出行", "移徙"],
    ),
    (
        "破",
        &["破屋", "求医", "拆卸", "馀事勿取"],
        &["嫁娶", "开市", "出行", "入宅", "安葬"],
    ),
    (
        "危",
        &["祭祀", "祈福", "安床"],
        &["出行", "登高", "行船"],
    ),
    (
        "成",
        &["嫁娶", "开市", "交易", "入宅", "移徙", "栽种", "安葬"],
        &["词讼", "破土"],
    ),
    (
        "收",
        &["纳财", "进人口", "栽种", "祭祀", "捕捉"],
        &["开市", "出行", "安葬"],
    ),
    (
        "开",
        &["开市", "交易", "出行", "修造", "动土", "会亲友"],
        &["安葬", "破土"],
    ),
    (
        "闭",
        &["安葬", "破土", "修坟"],
        &["开市", "出行", "嫁娶", "入宅"],
    ),
];

impl Officer {
    pub const ALL: [Officer; 12] = [
        Officer::Jian,
        Officer::Chu,
        Officer::Man,
        Officer::Ping,
        Officer::Ding,
        Officer::Zhi,
        Officer::Po,
        Officer::Wei,
        Officer::Cheng,
        Officer::Shou,
        Officer::Kai,
        Officer::Bi,
    ];

    /// Officer for a day branch inside the jie month with ordinal
    /// `jie_month` (0 = the 寅 month).
    pub fn of_day(day_branch: EarthlyBranch, jie_month: usize) -> Self {
        let month_branch = (jie_month + 2) % 12;
        Self::ALL[(day_branch.index() + 12 - month_branch) % 12]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn cn(&self) -> &'static str {
        GUIDANCE[self.index()].0
    }

    pub fn yi(&self) -> &'static [&'static str] {
        GUIDANCE[self.index()].1
    }

    pub fn ji(&self) -> &'static [&'static str] {
        GUIDANCE[self.index()].2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn officer_anchors() {
        // Day branch and jie month checked elsewhere; these pin the offset.
        assert_eq!(Officer::of_day(EarthlyBranch::Wei, 0), Officer::Zhi); // 2026-02-14
        assert_eq!(Officer::of_day(EarthlyBranch::Chen, 3), Officer::Bi); // 1990-05-15
        assert_eq!(Officer::of_day(EarthlyBranch::Wu, 10), Officer::Po); // 2000-01-01
        assert_eq!(Officer::of_day(EarthlyBranch::Chen, 0), Officer::Man); // 2024-02-10
        assert_eq!(Officer::of_day(EarthlyBranch::Wei, 4), Officer::Chu); // 2025-07-01
    }

    #[test]
    fn jian_opens_every_month() {
        // The day whose branch equals the month branch is always 建.
        for m in 0..12 {
            let branch = EarthlyBranch::from_index((m + 2) % 12);
            assert_eq!(Officer::of_day(branch, m), Officer::Jian);
        }
    }

    #[test]
    fn guidance_lists_are_non_empty_and_disjoint() {
        for o in Officer::ALL {
            assert!(!o.yi().is_empty(), "{} yi", o.cn());
            assert!(!o.ji().is_empty(), "{} ji", o.cn());
            for t in o.yi() {
                assert!(!o.ji().contains(t), "{} lists {t} both ways", o.cn());
            }
        }
    }

    #[test]
    fn po_days_advise_little_else() {
        assert!(Officer::Po.yi().contains(&"馀事勿取"));
        assert!(Officer::Po.ji().contains(&"嫁娶"));
    }
}
