//! # Command-Line Interface
//!
//! Argument parsing and command dispatch for the almanac tool.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Almanac | Day readings | `today`, `date`, `json` |
//! | Scans | Multi-day queries | `range`, `find` |
//! | Charts | Four Pillars of Destiny | `bazi`, `bazi json` |
//! | Publishing | Shareable output | `post`, `image`, `build-web` |
//! | Service | HTTP JSON API | `server` |
//!
//! A bare `YYYY-MM-DD` argument works like `date`; no argument at all means
//! `today`.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;

pub use app::{run, Cli, Commands};
