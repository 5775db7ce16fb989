//! Main CLI application structure

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::calendar::{looks_like_date, Lunisolar, Oracle, SolarDay};
use crate::config::Config;
use crate::domain::{
    almanac_for, almanac_range, chart_for, find_auspicious_dates, parse_hhmm, Gender,
};
use crate::render::{format_almanac, format_chart, image_payload, post_for_platform};

#[derive(Parser)]
#[command(name = "tungshing")]
#[command(author, version, about = "Chinese almanac (通胜/黄历) and Four Pillars toolkit")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show today's almanac (default)
    #[command(alias = "almanac")]
    Today,

    /// Output almanac data as JSON
    Json,

    /// Generate social media post (twitter/x/short/forecast/general)
    Post {
        /// Platform the copy is shaped for
        platform: Option<String>,

        /// Date as YYYY-MM-DD (defaults to today)
        date: Option<String>,
    },

    /// Generate data for image creation
    Image {
        /// Date as YYYY-MM-DD (defaults to today)
        date: Option<String>,
    },

    /// Show almanac for specific date
    Date {
        /// Date as YYYY-MM-DD
        date: Option<String>,
    },

    /// Show almanac for date range
    Range {
        /// First day as YYYY-MM-DD
        start: Option<String>,

        /// Last day as YYYY-MM-DD, inclusive
        end: Option<String>,
    },

    /// Find upcoming days where an activity is auspicious
    Find {
        /// Activity by its Chinese name, e.g. 嫁娶
        activity: Option<String>,

        /// Days to scan
        days: Option<String>,
    },

    /// Calculate a Four Pillars of Destiny birth chart
    #[command(alias = "fourpillars", alias = "八字")]
    Bazi {
        /// [json] YYYY-MM-DD [HH:MM]
        args: Vec<String>,
    },

    /// Start the API server
    #[command(alias = "serve", alias = "api")]
    Server {
        /// Port to bind (default: 3888)
        #[arg(env = "PORT")]
        port: Option<u16>,
    },

    /// Rebuild the static web pages from their templates (cron use)
    #[command(name = "build-web", hide = true)]
    BuildWeb {
        /// Directory holding the page templates
        #[arg(long, default_value = "templates")]
        template_dir: PathBuf,

        /// Directory the built pages land in
        #[arg(long, default_value = "docs")]
        out_dir: PathBuf,
    },

    #[command(external_subcommand)]
    External(Vec<String>),
}

const USAGE: &str = "
tungshing - Chinese Almanac & Feng Shui Tool
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

Commands:
  today, almanac     Show today's almanac (default)
  json               Output almanac data as JSON
  post [platform]    Generate social media post (twitter/x/general)
  image              Generate data for image creation
  date YYYY-MM-DD    Show almanac for specific date
  range START END    Show almanac for date range
  find ACTIVITY [N]  Find next N days with auspicious activity
  bazi YYYY-MM-DD [HH:MM]   Calculate Four Pillars of Destiny
  bazi json YYYY-MM-DD [HH:MM]  BaZi as JSON
  server [port]      Start API server (default: 3888)
  help               Show this help

Examples:
  tungshing                  # Today's almanac
  tungshing json             # JSON output
  tungshing post twitter     # Twitter-ready post
  tungshing date 2026-02-14  # Valentine's Day almanac
  tungshing find 嫁娶 60     # Wedding dates in next 60 days
  tungshing bazi 1990-05-15 14:30  # Birth chart
  tungshing server 8080      # Start API on port 8080
";

/// Parse the command line and dispatch. No subcommand means `today`.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let oracle = Lunisolar;

    match cli.command {
        None | Some(Commands::Today) => show_today(&oracle),
        Some(Commands::Json) => show_json(&oracle),
        Some(Commands::Post { platform, date }) => show_post(
            &oracle,
            platform.as_deref().unwrap_or(&config.platform),
            date.as_deref(),
        ),
        Some(Commands::Image { date }) => show_image(&oracle, date.as_deref()),
        Some(Commands::Date { date }) => show_date(&oracle, date.as_deref()),
        Some(Commands::Range { start, end }) => {
            show_range(&oracle, start.as_deref(), end.as_deref())
        }
        Some(Commands::Find { activity, days }) => show_find(
            &oracle,
            activity.as_deref(),
            days.as_deref(),
            config.find_days,
        ),
        Some(Commands::Bazi { args }) => show_bazi(&oracle, &args),
        Some(Commands::Server { port }) => crate::server::serve(port.unwrap_or(config.port)),
        Some(Commands::BuildWeb {
            template_dir,
            out_dir,
        }) => build_web(&oracle, &template_dir, &out_dir),
        Some(Commands::External(args)) => dispatch_external(&oracle, &args),
    }
}

fn show_today(oracle: &impl Oracle) -> Result<()> {
    let record = almanac_for(oracle, SolarDay::today())?;
    println!("{}", format_almanac(&record));
    Ok(())
}

fn show_json(oracle: &impl Oracle) -> Result<()> {
    let record = almanac_for(oracle, SolarDay::today())?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn show_post(oracle: &impl Oracle, platform: &str, date: Option<&str>) -> Result<()> {
    let record = almanac_for(oracle, parse_date_arg(date)?)?;
    println!("{}", post_for_platform(&record, platform));
    Ok(())
}

fn show_image(oracle: &impl Oracle, date: Option<&str>) -> Result<()> {
    let record = almanac_for(oracle, parse_date_arg(date)?)?;
    println!("{}", serde_json::to_string_pretty(&image_payload(&record))?);
    Ok(())
}

fn show_date(oracle: &impl Oracle, date: Option<&str>) -> Result<()> {
    match date {
        Some(raw) if looks_like_date(raw) => {
            let record = almanac_for(oracle, raw.parse()?)?;
            println!("{}", format_almanac(&record));
        }
        _ => {
            println!("Usage: tungshing date YYYY-MM-DD");
            println!("Example: tungshing date 2026-02-14");
        }
    }
    Ok(())
}

fn show_range(oracle: &impl Oracle, start: Option<&str>, end: Option<&str>) -> Result<()> {
    let (Some(start), Some(end)) = (start, end) else {
        println!("Usage: tungshing range YYYY-MM-DD YYYY-MM-DD");
        return Ok(());
    };
    for record in almanac_range(oracle, start.parse()?, end.parse()?)? {
        println!("\n{}:", record.solar.date);
        println!("  Element: {}", record.elements.day_element);
        println!("  Yi: {}", join_first(&record.activities.yi, 3));
        println!("  Ji: {}", join_first(&record.activities.ji, 3));
    }
    Ok(())
}

fn show_find(
    oracle: &impl Oracle,
    activity: Option<&str>,
    days: Option<&str>,
    default_days: u32,
) -> Result<()> {
    let Some(activity) = activity else {
        println!("Usage: tungshing find ACTIVITY [DAYS]");
        println!("Example: tungshing find 嫁娶 60");
        println!("\nCommon activities:");
        println!("  嫁娶 (Wedding)   祈福 (Praying)   出行 (Traveling)");
        println!("  开市 (Business)  入宅 (Moving)    动土 (Construction)");
        return Ok(());
    };
    let days = requested_days(days, default_days);
    let window = days.clamp(0, i64::from(u32::MAX)) as u32;
    let found = find_auspicious_dates(oracle, activity, window, SolarDay::today())?;
    println!("\n🔍 Finding dates for: {activity}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━");
    if found.is_empty() {
        println!("No dates found in the next {days} days.");
    } else {
        for hit in &found {
            println!("\n📅 {} ({})", hit.date, hit.lunar);
            println!("   Element: {}", hit.element);
            println!("   Clash: {}", hit.clash);
        }
        println!("\nFound {} dates.", found.len());
    }
    Ok(())
}

fn show_bazi(oracle: &impl Oracle, args: &[String]) -> Result<()> {
    let json_mode = args.first().is_some_and(|a| a == "json");
    let rest = if json_mode { &args[1..] } else { args };

    let Some(date_arg) = rest.first() else {
        println!("Usage: tungshing bazi YYYY-MM-DD [HH:MM]");
        println!("       tungshing bazi json YYYY-MM-DD [HH:MM]");
        println!("Example: tungshing bazi 1990-05-15 14:30");
        return Ok(());
    };
    if !looks_like_date(date_arg) {
        bail!("Invalid date format. Use YYYY-MM-DD");
    }
    let day: SolarDay = date_arg.parse()?;
    let (hour, minute) = match rest.get(1) {
        Some(raw) => parse_hhmm(raw).ok_or_else(|| anyhow!("Invalid time format. Use HH:MM"))?,
        None => (12, 0),
    };
    let chart = chart_for(oracle, day, hour, minute, Gender::default())?;
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    } else {
        println!("{}", format_chart(&chart));
    }
    Ok(())
}

/// The catch-all: a bare `YYYY-MM-DD` prints that day's almanac, the way
/// `date` does; anything else gets the usage screen.
fn dispatch_external(oracle: &impl Oracle, args: &[String]) -> Result<()> {
    let token = args.first().map(String::as_str).unwrap_or_default();
    if looks_like_date(token) {
        let record = almanac_for(oracle, token.parse()?)?;
        println!("{}", format_almanac(&record));
    } else {
        println!("Unknown command: {token}");
        println!("{USAGE}");
    }
    Ok(())
}

fn build_web(oracle: &impl Oracle, template_dir: &Path, out_dir: &Path) -> Result<()> {
    println!("🔨 Building tungshing web pages...\n");
    let day = SolarDay::today();
    println!("📅 Fetching almanac for {day}...");
    let record = almanac_for(oracle, day)?;
    let json = serde_json::to_string_pretty(&record)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    for (file, placeholder) in [
        ("index.html", "ALMANAC_PLACEHOLDER"),
        ("widget.html", "WIDGET_PLACEHOLDER"),
    ] {
        let template_path = template_dir.join(file);
        let out_path = out_dir.join(file);
        let template = if template_path.exists() {
            fs::read_to_string(&template_path)
                .with_context(|| format!("Failed to read {}", template_path.display()))?
        } else {
            let page = fs::read_to_string(&out_path)
                .with_context(|| format!("Failed to read {}", out_path.display()))?;
            // First run against a placeholder page: keep it as the template.
            if page.contains(placeholder) {
                fs::create_dir_all(template_dir)
                    .with_context(|| format!("Failed to create {}", template_dir.display()))?;
                fs::write(&template_path, &page)
                    .with_context(|| format!("Failed to write {}", template_path.display()))?;
            }
            page
        };
        let built = template.replacen(placeholder, &json, 1);
        fs::write(&out_path, built)
            .with_context(|| format!("Failed to write {}", out_path.display()))?;
        println!("✅ Built: {}", out_path.display());
    }
    println!(
        "\n📊 Today's element: {} ({})",
        record.elements.day_element, record.elements.day_na_yin
    );
    println!(
        "🐲 Year: {} ({})",
        record.lunar.gan_zhi_year, record.lunar.zodiac_en
    );
    Ok(())
}

/// Dates default to today; a malformed or impossible one is a hard error.
fn parse_date_arg(date: Option<&str>) -> Result<SolarDay> {
    match date {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(SolarDay::today()),
    }
}

/// The find window: an unparseable or zero DAYS argument falls back to the
/// configured default, a negative one is kept (and scans nothing).
fn requested_days(raw: Option<&str>, default_days: u32) -> i64 {
    raw.and_then(|r| r.parse().ok())
        .filter(|&d| d != 0)
        .unwrap_or_else(|| i64::from(default_days))
}

fn join_first(items: &[String], n: usize) -> String {
    items
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_today() {
        let cli = Cli::try_parse_from(["tungshing"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn command_aliases() {
        for alias in ["today", "almanac"] {
            let cli = Cli::try_parse_from(["tungshing", alias]).unwrap();
            assert!(matches!(cli.command, Some(Commands::Today)), "{alias}");
        }
        for alias in ["bazi", "fourpillars", "八字"] {
            let cli = Cli::try_parse_from(["tungshing", alias, "1990-05-15"]).unwrap();
            match cli.command {
                Some(Commands::Bazi { args }) => assert_eq!(args, vec!["1990-05-15"]),
                _ => panic!("{alias} did not parse as bazi"),
            }
        }
        for alias in ["server", "serve", "api"] {
            let cli = Cli::try_parse_from(["tungshing", alias, "8080"]).unwrap();
            match cli.command {
                Some(Commands::Server { port }) => assert_eq!(port, Some(8080)),
                _ => panic!("{alias} did not parse as server"),
            }
        }
    }

    #[test]
    fn bazi_json_mode_keeps_argument_order() {
        let cli = Cli::try_parse_from(["tungshing", "bazi", "json", "1990-05-15", "14:30"]).unwrap();
        match cli.command {
            Some(Commands::Bazi { args }) => {
                assert_eq!(args, vec!["json", "1990-05-15", "14:30"]);
            }
            _ => panic!("not bazi"),
        }
    }

    #[test]
    fn bare_date_lands_in_the_catch_all() {
        let cli = Cli::try_parse_from(["tungshing", "2026-02-14"]).unwrap();
        match cli.command {
            Some(Commands::External(args)) => assert_eq!(args, vec!["2026-02-14"]),
            _ => panic!("not external"),
        }
    }

    #[test]
    fn find_window_fallbacks() {
        assert_eq!(requested_days(None, 30), 30);
        assert_eq!(requested_days(Some("60"), 30), 60);
        assert_eq!(requested_days(Some("abc"), 30), 30);
        assert_eq!(requested_days(Some("0"), 30), 30);
        assert_eq!(requested_days(Some("-5"), 30), -5);
        assert_eq!(requested_days(None, 45), 45);
    }

    #[test]
    fn join_first_caps_and_separates() {
        let items: Vec<String> = ["祭祀", "祈福", "嫁娶", "出行"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(join_first(&items, 3), "祭祀, 祈福, 嫁娶");
        assert_eq!(join_first(&items[..1], 3), "祭祀");
        assert_eq!(join_first(&[], 3), "");
    }

    #[test]
    fn date_arguments_parse_strictly() {
        assert_eq!(
            parse_date_arg(Some("1990-05-15")).unwrap().to_string(),
            "1990-05-15"
        );
        assert!(parse_date_arg(Some("1990-5-15")).is_err());
        assert!(parse_date_arg(Some("2026-99-99")).is_err());
        assert!(parse_date_arg(None).is_ok());
    }
}
