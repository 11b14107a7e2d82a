use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Scroll offsets in CSS pixels
pub const NAV_SHADOW_OFFSET: f64 = 50.0;
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;

pub const NAV_SHADOW_RAISED: &str =
    "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)";
pub const NAV_SHADOW_FLAT: &str = "0 1px 2px 0 rgba(0, 0, 0, 0.05)";

// Scroll reveal is skipped on narrow viewports
pub const REVEAL_MIN_VIEWPORT_WIDTH: f64 = 768.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_DELAY_MS: u32 = 100;

pub const STATS_THRESHOLD: f64 = 0.5;
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_STEP_MS: u32 = 16;

pub const SUBMIT_DELAY_MS: u32 = 1500;
pub const SUCCESS_HIDE_MS: u32 = 10_000;
pub const COPY_RESET_MS: u32 = 2000;

pub const SEARCH_INPUT_SELECTOR: &str = "input[type=\"search\"]";
pub const FORM_MESSAGE_ID: &str = "formMessage";
