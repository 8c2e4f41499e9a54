//! Splash screen progress timing.

#[cfg(test)]
#[path = "splash_test.rs"]
mod splash_test;

/// Interval between progress ticks.
pub const TICK_MS: u64 = 30;
/// Progress added per tick.
pub const STEP: u8 = 2;
/// Pause at 100% before the splash completes.
pub const HOLD_MS: u64 = 500;

/// Next progress value, saturating at 100.
#[must_use]
pub fn advance(progress: u8) -> u8 {
    progress.saturating_add(STEP).min(100)
}

#[must_use]
pub fn is_full(progress: u8) -> bool {
    progress >= 100
}

/// Inline width style for the progress bar.
#[must_use]
pub fn bar_width(progress: u8) -> String {
    format!("width: {}%", progress.min(100))
}
