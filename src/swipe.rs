//! Card gestures and timer display.

use crate::round::Intent;

/// Horizontal drag distance, in pixels, that commits a swipe.
pub const SWIPE_THRESHOLD: f64 = 100.0;

/// The clock is highlighted at or below this many seconds.
pub const LOW_TIME_SECONDS: u32 = 10;

/// Maps the horizontal offset at drag end to an intent: right is "Got It",
/// left is "Skip", anything shorter snaps the card back.
pub fn resolve_swipe(offset_x: f64) -> Option<Intent> {
    if offset_x > SWIPE_THRESHOLD {
        Some(Intent::Get)
    } else if offset_x < -SWIPE_THRESHOLD {
        Some(Intent::Skip)
    } else {
        None
    }
}

/// `MM:SS`
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
