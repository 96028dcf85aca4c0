//! Fixed tunables for the page behavior. Everything is compile-time; the
//! site carries no environment configuration.

/// Elements with this class start hidden and reveal when scrolled into view.
pub const REVEAL_SELECTOR: &str = ".reveal-on-scroll";

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Scroll depth in pixels past which the navbar switches to its solid preset.
pub const NAV_SOLID_AFTER_PX: f64 = 50.0;

/// Backdrop shift per scrolled pixel.
pub const PARALLAX_FACTOR: f64 = 0.5;

/// Simulated send duration before the contact form reports success.
pub const SEND_DELAY_MS: u32 = 1_500;

/// How long the success state lingers before the form resets.
pub const SENT_RESET_MS: u32 = 2_000;
