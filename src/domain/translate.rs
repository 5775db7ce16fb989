//! English renderings for almanac vocabulary.
//!
//! Chinese strings are the source of truth throughout the crate; English is
//! attached at the presentation edge. Unknown terms pass through untranslated
//! so new vocabulary degrades visibly instead of failing.

/// English gloss for a yi/ji activity term. Unrecognized terms come back
/// unchanged.
pub fn activity_en(activity: &str) -> &str {
    match activity {
        "沐浴" => "Bathing/Grooming",
        "理发" => "Haircut",
        "安葬" => "Burial",
        "破土" => "Breaking Ground",
        "入殓" => "Placing in Coffin",
        "除服" => "Ending Mourning",
        "成服" => "Wearing Mourning",
        "修坟" => "Repairing Grave",
        "启钻" => "Opening Grave",
        "立碑" => "Erecting Monument",
        "谢土" => "Thanking Earth",
        "捕捉" => "Hunting/Trapping",
        "畋猎" => "Hunting",
        "整手足甲" => "Nail Care",
        "祭祀" => "Sacrifices/Worship",
        "祈福" => "Praying",
        "求嗣" => "Seeking Children",
        "开光" => "Consecration",
        "出行" => "Traveling",
        "解除" => "Removing Obstacles",
        "安床" => "Installing Bed",
        "纳畜" => "Acquiring Livestock",
        "入宅" => "Moving In",
        "移徙" => "Moving/Relocating",
        "动土" => "Starting Construction",
        "纳财" => "Collecting Money",
        "开市" => "Opening Business",
        "交易" => "Trading",
        "立券" => "Signing Contracts",
        "栽种" => "Planting",
        "安门" => "Installing Door",
        "修造" => "Renovating",
        "嫁娶" => "Wedding",
        "纳采" => "Proposing Marriage",
        "订盟" => "Engagement",
        "上梁" => "Raising Beam",
        "斋醮" => "Fasting/Rituals",
        "盖屋" => "Building House",
        "求医" => "Seeing a Doctor",
        "赴任" => "Taking Office",
        "会亲友" => "Meeting Friends",
        "扫舍" => "House Cleaning",
        "破屋" => "Demolition",
        "拆卸" => "Dismantling",
        "馀事勿取" => "Avoid Other Affairs",
        "词讼" => "Lawsuits",
        "登高" => "Climbing Heights",
        "行船" => "Boating",
        "进人口" => "Adding Family Members",
        "开仓" => "Opening Storehouse",
        _ => activity,
    }
}

/// English gloss for a compass direction or bagua trigram character.
pub fn direction_en(direction: &str) -> &str {
    match direction {
        "东" => "East",
        "南" => "South",
        "西" => "West",
        "北" => "North",
        "东北" => "Northeast",
        "东南" => "Southeast",
        "西北" => "Northwest",
        "西南" => "Southwest",
        "坤" => "Southwest (Kun)",
        "乾" => "Northwest (Qian)",
        "艮" => "Northeast (Gen)",
        "巽" => "Southeast (Xun)",
        "坎" => "North (Kan)",
        "离" => "South (Li)",
        "震" => "East (Zhen)",
        "兑" => "West (Dui)",
        _ => direction,
    }
}

/// 星期 suffix character for a weekday index, 0 = Sunday.
pub fn weekday_cn(index: usize) -> &'static str {
    ["日", "一", "二", "三", "四", "五", "六"][index % 7]
}

pub fn weekday_en(index: usize) -> &'static str {
    [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ][index % 7]
}
