use log::Level;

/// localStorage key holding the JSON array of contact submissions.
pub const SUBMISSIONS_KEY: &str = "contact_submissions";

pub const BURST_LIFETIME_MS: u32 = 1700;
pub const BURST_PARTICLES: usize = 24;
pub const CAROUSEL_INTERVAL_MS: u32 = 5000;
pub const RIPPLE_LIFETIME_MS: u32 = 600;
pub const POP_LIFETIME_MS: u32 = 400;

pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const NAV_SCROLLED_OFFSET: i32 = 80;
// Fraction of the viewport height a section top must pass to count as active.
pub const ACTIVE_SECTION_RATIO: f64 = 0.35;
pub const MAX_TILT_DEG: f64 = 8.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
