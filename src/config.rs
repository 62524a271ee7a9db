use log::Level;

/// Space reserved for the fixed header when scrolling to an anchor.
pub const HEADER_OFFSET: f64 = 80.0;

pub const HEADER_ELEVATE_AFTER: f64 = 20.0;
pub const HEADER_HIDE_AFTER: f64 = 100.0;

/// At or below this width the cursor is disabled and particles are reduced.
pub const COMPACT_BREAKPOINT: f64 = 968.0;
/// At or below this width the image stack runs horizontally.
pub const STACK_NARROW_BREAKPOINT: f64 = 768.0;

pub const MENU_SCROLL_DELAY_MS: u32 = 400;
pub const REVEAL_STAGGER_MS: u32 = 100;
pub const CAROUSEL_INTERVAL_MS: u32 = 6000;
pub const WIZARD_RESET_DELAY_MS: u32 = 2000;
pub const SCROLLING_IDLE_MS: u32 = 150;
/// Quiet time after the last scroll before a scrubbed section snaps.
pub const SNAP_DELAY_MS: u32 = 100;

/// How far scrubbed animations trail the scroll position.
pub const SCRUB_LAG_MS: f64 = 1000.0;

pub const CURSOR_SMOOTHING: f64 = 0.15;

pub const PARTICLE_COUNT: usize = 60;
pub const PARTICLE_TICK_MS: u32 = 100;

pub const STACK_FALLBACK_SPACING: f64 = 400.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
