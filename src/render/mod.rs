//! # Presentation surfaces
//!
//! Everything that turns a domain record into something a person reads: the
//! boxed terminal almanac, the colored Four Pillars chart, three social post
//! shapes and the flat payload a card-image generator consumes. All of them
//! read the same structs the JSON API serves, so the surfaces cannot drift
//! apart.

mod image;
mod social;
mod terminal;

pub use image::{image_payload, ImagePayload};
pub use social::{forecast_post, post_for_platform, short_post, social_post};
pub use terminal::{format_almanac, format_chart};
