//! tungshing - A Chinese lunisolar almanac (通胜/黄历) toolkit
//!
//! Turns a civil date into the traditional day reading: lunar date, sexagenary
//! pillars, suitable and unsuitable activities, lucky-god directions, clashes,
//! solar terms and festivals. On top of that sit a Four Pillars of Destiny
//! (八字) chart builder, auspicious-day search, social/image output shapes,
//! and an HTTP JSON API serving the same records.

pub mod calendar;
pub mod cli;
pub mod config;
pub mod domain;
pub mod render;
pub mod server;

pub use calendar::{Lunisolar, Oracle, SolarDay};
pub use domain::{almanac_for, chart_for, find_auspicious_dates, AlmanacRecord, FourPillarsChart};
