//! Presentation helpers for front ends.
//!
//! Pure formatting functions; nothing here touches storage.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use shelf_core::Price;

/// Format an amount in the shop currency, e.g. `﷼12.50`.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    Price::shop(amount).display()
}

/// Long date with time, e.g. `Jan 5, 2025, 02:30 PM`.
#[must_use]
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Date only, e.g. `Jan 5, 2025`.
#[must_use]
pub fn format_date_short(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Cut `text` to at most `max` characters, appending `...` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().nth(max).is_none() {
        return text.to_owned();
    }
    let head: String = text.chars().take(max).collect();
    format!("{head}...")
}

/// Five-star breakdown of a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.full {
            f.write_str("★")?;
        }
        if self.half {
            f.write_str("⯪")?;
        }
        for _ in 0..self.empty {
            f.write_str("☆")?;
        }
        Ok(())
    }
}

/// Split a 0-5 rating into full, half and empty stars.
///
/// A fractional part of one half or more shows a half star.
#[must_use]
pub fn star_rating(rating: f32) -> StarRating {
    let rating = if rating.is_finite() {
        rating.clamp(0.0, 5.0)
    } else {
        0.0
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0..=5
    let full = rating.floor() as u8;
    let half = full < 5 && rating - f32::from(full) >= 0.5;
    let empty = 5 - full - u8::from(half);
    StarRating { full, half, empty }
}
