//! Scroll-position helpers shared by the navbar and the hero backdrop.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::config;

/// Navbar preset for the current scroll depth. Translucent while the hero is
/// on screen, solid with a drop shadow once scrolled past it.
pub fn nav_background(scroll_y: f64) -> &'static str {
    if scroll_y > config::NAV_SOLID_AFTER_PX {
        "background: rgba(26, 26, 26, 0.95); box-shadow: 0 2px 12px rgba(0, 0, 0, 0.4);"
    } else {
        "background: rgba(26, 26, 26, 0.45); box-shadow: none;"
    }
}

/// Backdrop shift for the current scroll depth.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * config::PARALLAX_FACTOR
}

/// Smoothly scroll the viewport to the element with `id`.
///
/// A missing target is a no-op.
pub fn smooth_scroll_to(id: &str) {
    let document = match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document,
        None => return,
    };
    if let Some(target) = document.get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_is_translucent_at_the_top() {
        let preset = nav_background(0.0);
        assert!(preset.contains("0.45"));
        assert!(preset.contains("box-shadow: none"));
    }

    #[test]
    fn navbar_turns_solid_past_the_hero() {
        let preset = nav_background(60.0);
        assert!(preset.contains("0.95"));
        assert!(preset.contains("box-shadow: 0 2px 12px"));
    }

    #[test]
    fn threshold_depth_keeps_the_translucent_preset() {
        assert_eq!(nav_background(config::NAV_SOLID_AFTER_PX), nav_background(0.0));
    }

    #[test]
    fn backdrop_moves_at_half_scroll_speed() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(300.0), 150.0);
    }
}
