//! Social copy in three shapes: the classic platform post, a compact short
//! post, and a humanized markdown forecast.

use crate::domain::{direction_en, AlmanacRecord};

/// Route a platform token to its post shape. `short` and `forecast` pick
/// the compact and humanized variants; every other token gets the classic
/// post with that token's hashtag treatment.
pub fn post_for_platform(r: &AlmanacRecord, platform: &str) -> String {
    match platform {
        "short" => short_post(r),
        "forecast" => forecast_post(r),
        _ => social_post(r, platform),
    }
}

/// Ready-to-paste social copy. `platform` only matters for the hashtag tail,
/// which twitter and x get.
pub fn social_post(r: &AlmanacRecord, platform: &str) -> String {
    let mut lines = vec![
        format!(
            "📅 {} | 农历{}月{}",
            r.solar.date, r.lunar.month_cn, r.lunar.day_cn
        ),
        format!("🐲 {}年 {}日", r.lunar.gan_zhi_year, r.lunar.gan_zhi_day),
        format!(
            "🔥 Element: {} ({})",
            r.elements.day_element, r.elements.day_na_yin
        ),
        String::new(),
        format!("✅ Auspicious: {}", join_first(&r.activities.yi, 3, "、")),
        format!("❌ Avoid: {}", join_first(&r.activities.ji, 3, "、")),
        String::new(),
        format!("💰 Wealth Direction: {}", r.gods.cai_shen.desc),
        format!("⚠️ Clash: {}", r.clash.chong_desc),
    ];
    if matches!(platform, "twitter" | "x") {
        lines.push(String::new());
        lines.push("#ChineseAlmanac #FengShui #通胜 #黄历".to_string());
    }
    lines.join("\n")
}

/// Compact post that fits anywhere.
pub fn short_post(r: &AlmanacRecord) -> String {
    let vibe = vibe_for(&r.elements.day_na_yin_element);
    [
        format!(
            "{} {}.{}.{} | {} Day",
            vibe.emoji, r.solar.year, r.solar.month, r.solar.day, vibe.element
        ),
        String::new(),
        vibe.advice.to_string(),
        String::new(),
        format!("💰 Wealth: {}", compass_en(&r.gods.cai_shen.desc)),
        format!("✅ Good for: {}", join_first(&r.activities.yi, 2, ", ")),
        format!("❌ Avoid: {}", join_first(&r.activities.ji, 2, ", ")),
        String::new(),
        "#FengShui #ChineseAlmanac".to_string(),
    ]
    .join("\n")
}

/// Humanized bilingual forecast, markdown-flavored for chat surfaces. Reads
/// the day from the na-yin element rather than the day stem.
pub fn forecast_post(r: &AlmanacRecord) -> String {
    let vibe = vibe_for(&r.elements.day_na_yin_element);

    let mut lines = vec![
        format!(
            "✨ Happy {}! Here's your Feng Shui forecast for {}/{}:",
            r.solar.weekday_en, r.solar.month, r.solar.day
        ),
        String::new(),
        format!(
            "{} Today's Element: **{}** ({})",
            vibe.emoji, vibe.element, r.elements.day_na_yin
        ),
        format!("Energy: {}", vibe.energy),
        vibe.advice.to_string(),
        String::new(),
    ];

    let highlights: Vec<&str> = r
        .activities
        .yi
        .iter()
        .filter_map(|a| activity_advice(a).map(|(good, _)| good))
        .take(3)
        .collect();
    if !highlights.is_empty() {
        lines.push("🌟 **Today is favorable for:**".to_string());
        for h in highlights {
            lines.push(format!("• {}", strip_lead_emoji(h)));
        }
        lines.push(String::new());
    }

    let warnings: Vec<&str> = r
        .activities
        .ji
        .iter()
        .filter_map(|a| activity_advice(a).and_then(|(_, bad)| bad))
        .take(2)
        .collect();
    if !warnings.is_empty() {
        lines.push("⚠️ **Better to avoid:**".to_string());
        for w in warnings {
            lines.push(format!("• {}", strip_lead_emoji(w)));
        }
        lines.push(String::new());
    }

    lines.push(format!(
        "💰 Wealth Direction: Face **{}** for prosperity!",
        compass_en(&r.gods.cai_shen.desc)
    ));
    lines.push(format!(
        "🐀 Those born in {} year - take extra care today.",
        r.clash.chong_desc.replace(['(', ')'], "")
    ));

    lines.join("\n")
}

struct Vibe {
    element: &'static str,
    emoji: &'static str,
    energy: &'static str,
    advice: &'static str,
}

fn vibe_for(element: &str) -> Vibe {
    match element {
        "Metal" => Vibe {
            element: "Metal",
            emoji: "⚔️",
            energy: "clarity and precision",
            advice: "Good for decisive action and cutting through confusion.",
        },
        "Wood" => Vibe {
            element: "Wood",
            emoji: "🌱",
            energy: "growth and creativity",
            advice: "Plant seeds for future projects. Nurture what matters.",
        },
        "Water" => Vibe {
            element: "Water",
            emoji: "💧",
            energy: "wisdom and flow",
            advice: "Go with the flow. Adaptability is your superpower today.",
        },
        "Fire" => Vibe {
            element: "Fire",
            emoji: "🔥",
            energy: "passion and transformation",
            advice: "Bring energy and enthusiasm. Ignite positive change.",
        },
        // Earth, and anything unnamed.
        _ => Vibe {
            element: "Earth",
            emoji: "🏔️",
            energy: "stability and grounding",
            advice: "Focus on foundations. Build something lasting.",
        },
    }
}

/// Forecast copy per activity: (favorable line, unfavorable line). Not every
/// activity warrants a warning.
fn activity_advice(activity: &str) -> Option<(&'static str, Option<&'static str>)> {
    let advice = match activity {
        "嫁娶" => (
            "💍 Great day for weddings and romance!",
            Some("💔 Not ideal for wedding plans today."),
        ),
        "开市" => (
            "🏪 Excellent for launching or opening business!",
            Some("⏸️ Hold off on business launches."),
        ),
        "出行" => (
            "✈️ Favorable for travel!",
            Some("🏠 Better to stay local today."),
        ),
        "移徙" => (
            "📦 Good energy for moving homes!",
            Some("🏠 Not the best day to relocate."),
        ),
        "入宅" => ("🏡 Auspicious for moving into a new home!", None),
        "动土" => (
            "🚧 Good for breaking ground on construction!",
            Some("⚠️ Avoid starting construction."),
        ),
        "安床" => (
            "🛏️ Perfect for setting up your bed!",
            Some("💤 Hold off on bed positioning."),
        ),
        "祈福" => ("🙏 Ideal for prayers and blessings!", None),
        "沐浴" => ("🛁 Good day for self-care and cleansing!", None),
        "理发" => ("💇 Auspicious for haircuts!", Some("✂️ Skip the haircut today.")),
        "纳财" => ("💰 Favorable for receiving money!", None),
        "交易" => (
            "🤝 Good for business deals!",
            Some("⏳ Postpone major transactions."),
        ),
        _ => return None,
    };
    Some(advice)
}

/// Drop the leading emoji token so bullet lines read as plain sentences.
fn strip_lead_emoji(line: &str) -> &str {
    match line.split_once(' ') {
        Some((_, rest)) => rest,
        None => line,
    }
}

/// Compass readings translate after shedding a 正 prefix.
fn compass_en(desc: &str) -> &str {
    direction_en(desc.strip_prefix('正').unwrap_or(desc))
}

fn join_first(items: &[String], n: usize, sep: &str) -> String {
    items
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Lunisolar;
    use crate::domain::almanac_for;

    fn record(s: &str) -> AlmanacRecord {
        almanac_for(&Lunisolar, s.parse().unwrap()).unwrap()
    }

    #[test]
    fn general_post_reads_top_to_bottom() {
        let post = social_post(&record("2026-02-14"), "general");
        let expected = "📅 2026-02-14 | 农历腊月廿七\n\
                        🐲 乙巳年 己未日\n\
                        🔥 Element: Earth (天上火)\n\
                        \n\
                        ✅ Auspicious: 纳采、捕捉、修造\n\
                        ❌ Avoid: 开市、出行、移徙\n\
                        \n\
                        💰 Wealth Direction: 正北\n\
                        ⚠️ Clash: (癸丑)牛";
        assert_eq!(post, expected);
    }

    #[test]
    fn twitter_and_x_get_hashtags() {
        let r = record("2026-02-14");
        for platform in ["twitter", "x"] {
            let post = social_post(&r, platform);
            assert!(post.ends_with("#ChineseAlmanac #FengShui #通胜 #黄历"));
        }
        assert!(!social_post(&r, "instagram").contains('#'));
    }

    #[test]
    fn platform_token_picks_the_shape() {
        let r = record("2026-02-14");
        assert_eq!(post_for_platform(&r, "short"), short_post(&r));
        assert_eq!(post_for_platform(&r, "forecast"), forecast_post(&r));
        assert_eq!(post_for_platform(&r, "twitter"), social_post(&r, "twitter"));
        assert_eq!(post_for_platform(&r, "general"), social_post(&r, "general"));
    }

    #[test]
    fn short_post_for_a_fire_day() {
        let post = short_post(&record("2026-02-14"));
        let expected = "🔥 2026.2.14 | Fire Day\n\
                        \n\
                        Bring energy and enthusiasm. Ignite positive change.\n\
                        \n\
                        💰 Wealth: North\n\
                        ✅ Good for: 纳采, 捕捉\n\
                        ❌ Avoid: 开市, 出行\n\
                        \n\
                        #FengShui #ChineseAlmanac";
        assert_eq!(post, expected);
    }

    #[test]
    fn forecast_collects_advice_from_both_lists() {
        let post = forecast_post(&record("2026-02-14"));
        let expected = "✨ Happy Saturday! Here's your Feng Shui forecast for 2/14:\n\
                        \n\
                        🔥 Today's Element: **Fire** (天上火)\n\
                        Energy: passion and transformation\n\
                        Bring energy and enthusiasm. Ignite positive change.\n\
                        \n\
                        🌟 **Today is favorable for:**\n\
                        • Good for breaking ground on construction!\n\
                        \n\
                        ⚠️ **Better to avoid:**\n\
                        • Hold off on business launches.\n\
                        • Better to stay local today.\n\
                        \n\
                        💰 Wealth Direction: Face **North** for prosperity!\n\
                        🐀 Those born in 癸丑牛 year - take extra care today.";
        assert_eq!(post, expected);
    }

    #[test]
    fn forecast_omits_empty_sections() {
        // A 破 day recommends nothing the advice table knows.
        let post = forecast_post(&record("2026-02-02"));
        assert!(!post.contains("🌟"));
        assert!(post.contains("⚠️ **Better to avoid:**"));
    }

    #[test]
    fn emoji_prefixes_strip_cleanly() {
        assert_eq!(
            strip_lead_emoji("💍 Great day for weddings and romance!"),
            "Great day for weddings and romance!"
        );
        assert_eq!(strip_lead_emoji("no-emoji"), "no-emoji");
    }

    #[test]
    fn compass_translation_sheds_the_prefix() {
        assert_eq!(compass_en("正北"), "North");
        assert_eq!(compass_en("东北"), "Northeast");
        assert_eq!(compass_en("西南"), "Southwest");
    }
}
