// Copyright 2026 the Fieldwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session configuration.

/// Options fixed at configure time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SessionConfig {
    /// Dismiss the overlay when a tap lands on the container background.
    /// Taps inside scroll regions always pass through.
    pub dismiss_on_background_tap: bool,
    /// Advance focus to the next control when one finishes editing; when
    /// disabled, finishing editing dismisses the overlay instead.
    pub auto_advance_on_submit: bool,
    /// Assign submit affordances ("advance"/"finish") to single-line
    /// controls from the session's affordance provider.
    pub auto_assign_submit_affordance: bool,
    /// Extra space kept between the active control and the overlay.
    pub clearance_above_overlay: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dismiss_on_background_tap: true,
            auto_advance_on_submit: true,
            auto_assign_submit_affordance: true,
            clearance_above_overlay: 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_behavior() {
        let config = SessionConfig::default();
        assert!(config.dismiss_on_background_tap);
        assert!(config.auto_advance_on_submit);
        assert!(config.auto_assign_submit_affordance);
        assert_eq!(config.clearance_above_overlay, 20.0);
    }
}
