use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose viewport/reveal logging while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// 0 reports every resize event as it arrives.
pub const RESIZE_DEBOUNCE_MS: u32 = 0;

/// Fraction of a section that must be visible before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shown when an image URL can't be turned into responsive variants.
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.svg";

/// Scroll offset (px) after which the header switches to its solid style.
pub const HEADER_SCROLL_THRESHOLD: i32 = 80;
