//! Terminal renderings: the fixed-width almanac box and the colored Four
//! Pillars chart.

use crossterm::style::{Color, Stylize};

use crate::domain::{AlmanacRecord, FourPillarsChart};

/// Render the boxed almanac page.
///
/// Pad widths count UTF-16 code units, not chars or display columns, so the
/// two-unit emoji eat into their line's padding. The per-line widths are
/// deliberately uneven; together with double-width CJK rendering they keep
/// the right border visually straight in common terminals.
pub fn format_almanac(r: &AlmanacRecord) -> String {
    let top = format!("╔{}╗", "═".repeat(46));
    let div = format!("╠{}╣", "═".repeat(46));
    let bottom = format!("╚{}╝", "═".repeat(46));

    let mut lines = vec![
        top,
        pad(format!("║  📅 {} ({})", r.solar.date, r.solar.weekday_en), 47),
        pad(
            format!(
                "║  🌙 农历 {}年{}月{}",
                r.lunar.year, r.lunar.month_cn, r.lunar.day_cn
            ),
            44,
        ),
        div.clone(),
        pad(
            format!(
                "║  干支 {}年 {}月 {}日",
                r.lunar.gan_zhi_year, r.lunar.gan_zhi_month, r.lunar.gan_zhi_day
            ),
            42,
        ),
        pad(
            format!("║  生肖 {} (Year of the {})", r.lunar.zodiac, r.lunar.zodiac_en),
            45,
        ),
        div.clone(),
        pad(
            format!("║  🔥 日元素 Day Element: {}", r.elements.day_element),
            45,
        ),
        pad(format!("║  纳音: {}", r.elements.day_na_yin), 44),
        div.clone(),
        pad("║  ✅ 宜 (Auspicious):".to_string(), 47),
        pad(format!("║     {}", join_first(&r.activities.yi, 5)), 47),
        pad("║  ❌ 忌 (Avoid):".to_string(), 47),
        pad(format!("║     {}", join_first(&r.activities.ji, 5)), 47),
        div.clone(),
        pad(format!("║  😊 喜神 Joy God: {}", r.gods.xi_shen.desc), 45),
        pad(format!("║  💰 财神 Wealth God: {}", r.gods.cai_shen.desc), 45),
        pad(format!("║  🙏 福神 Fortune God: {}", r.gods.fu_shen.desc), 45),
        div.clone(),
        pad(format!("║  ⚠️  冲 Clash: {}", r.clash.chong_desc), 45),
        pad(format!("║  🧭 煞 Evil Direction: {}", r.clash.sha_en), 45),
    ];

    let festivals: Vec<&str> = r
        .festivals
        .lunar
        .iter()
        .chain(r.festivals.solar.iter())
        .map(String::as_str)
        .collect();
    if !festivals.is_empty() {
        lines.push(div);
        lines.push(pad(format!("║  🎉 {}", festivals.join(", ")), 47));
    }
    lines.push(bottom);

    lines.join("\n")
}

/// Pad to `width` UTF-16 units, then close with the right border. Lines
/// already at or past the width just get the border.
fn pad(mut line: String, width: usize) -> String {
    let mut units = line.encode_utf16().count();
    while units < width {
        line.push(' ');
        units += 1;
    }
    line.push('║');
    line
}

fn join_first(items: &[String], n: usize) -> String {
    items
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the Four Pillars chart with ANSI styling. Pillars read right to
/// left in the traditional order, so the columns run hour, day, month, year.
pub fn format_chart(c: &FourPillarsChart) -> String {
    let rule = "═".repeat(59);
    let mut out = String::from("\n");

    out.push_str(&format!("{}\n", rule.as_str().cyan().bold()));
    out.push_str(&format!(
        "{}\n",
        "              八 字 命 盘 · FOUR PILLARS OF DESTINY"
            .yellow()
            .bold()
    ));
    out.push_str(&format!("{}\n\n", rule.as_str().cyan()));

    out.push_str(&format!(
        "{} {} {:02}:{:02}\n",
        "Solar:".dim(),
        c.solar_date,
        c.input.hour,
        c.input.minute
    ));
    out.push_str(&format!("{} {}\n", "Lunar:".dim(), c.lunar_date));
    out.push_str(&format!("{} {}\n\n", "Zodiac:".dim(), c.zodiac));

    let pillars = [
        &c.four_pillars.hour,
        &c.four_pillars.day,
        &c.four_pillars.month,
        &c.four_pillars.year,
    ];

    out.push_str(&format!(
        "{}\n",
        "┌─────────┬─────────┬─────────┬─────────┐".bold()
    ));
    out.push_str(&format!(
        "{}\n",
        "│  HOUR   │   DAY   │  MONTH  │  YEAR   │".bold()
    ));
    out.push_str(&format!(
        "{}\n",
        "│  時柱   │  日柱   │  月柱   │  年柱   │".bold()
    ));
    out.push_str(&format!(
        "{}\n",
        "├─────────┼─────────┼─────────┼─────────┤".bold()
    ));

    out.push('│');
    for p in pillars {
        out.push_str(&format!(
            "  {}      │",
            p.stem.chinese.as_str().with(tint(&p.stem.element)).bold()
        ));
    }
    out.push('\n');

    out.push('│');
    for p in pillars {
        out.push_str(&format!(
            " {}│",
            format!("{:<7}", p.stem.element).with(tint(&p.stem.element))
        ));
    }
    out.push('\n');

    out.push_str(&format!(
        "{}\n",
        "├─────────┼─────────┼─────────┼─────────┤".bold()
    ));

    out.push('│');
    for p in pillars {
        out.push_str(&format!(
            "  {}      │",
            p.branch
                .chinese
                .as_str()
                .with(tint(&p.branch.element))
                .bold()
        ));
    }
    out.push('\n');

    out.push('│');
    for p in pillars {
        out.push_str(&format!(" {:<7}│", p.branch.animal));
    }
    out.push('\n');

    out.push_str(&format!(
        "{}\n\n",
        "└─────────┴─────────┴─────────┴─────────┘".bold()
    ));

    let dm = &c.day_master;
    out.push_str(&format!(
        "{}{}\n",
        "日主 DAY MASTER: ".yellow().bold(),
        format!("{} {}", dm.chinese, dm.english)
            .with(tint(&dm.element))
            .bold()
    ));
    out.push_str(&format!("{}\n", dm.nature.as_str().dim()));
    out.push_str(&format!("{}\n\n", dm.description));
    out.push_str(&format!("{} {}\n\n", "Traits:".dim(), dm.traits.join(" · ")));

    out.push_str(&format!("{}\n", "五行 FIVE ELEMENTS:".bold()));
    let entries = c.elements.entries();
    let max = entries.iter().map(|&(_, n)| n).max().unwrap_or(0);
    for (element, count) in entries {
        let bar = "█".repeat(usize::from(count) * 3) + &"░".repeat(usize::from(max - count) * 3);
        out.push_str(&format!(
            "{} {} {}\n",
            format!("{:<6}", element.en()).with(tint(element.en())),
            bar,
            count
        ));
    }
    out.push('\n');

    out.push_str(&format!(
        "{} {}\n",
        "✓ Lucky Elements:".green().bold(),
        c.lucky_elements.join(", ")
    ));
    out.push_str(&format!(
        "{} {}\n\n",
        "✗ Challenging:".red().bold(),
        c.unlucky_elements.join(", ")
    ));

    if !c.life_cycles.is_empty() {
        out.push_str(&format!("{}\n", "大運 MAJOR LIFE CYCLES:".bold()));
        for cycle in &c.life_cycles {
            out.push_str(&format!(
                "{} {}\n",
                format!("Age {:>2}-{:>2}:", cycle.start_age, cycle.end_age).dim(),
                cycle.gan_zhi
            ));
        }
        out.push('\n');
    }

    out.push_str(&format!("{}\n", rule.as_str().cyan()));
    out
}

/// Chart color for an element name; anything unrecognized stays unstyled.
fn tint(element: &str) -> Color {
    match element {
        "Wood" => Color::Green,
        "Fire" => Color::Red,
        "Earth" => Color::Yellow,
        "Metal" => Color::White,
        "Water" => Color::Blue,
        _ => Color::Reset,
    }
}
