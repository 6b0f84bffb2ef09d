//! Easing used when a card becomes active.
//!
//! A terminal cell has no scale or shadow, so the "grow" of an active card is
//! drawn as a thick border whose color eases from the resting border color
//! to the card's accent.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Whether newly active cards ease in or snap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Entrance {
    None,
    #[default]
    Ease,
}

/// A running emphasis transition, restarted on every active-card change
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    started: Instant,
    duration: Duration,
}

impl Transition {
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self { started: now, duration }
    }

    /// Eased progress in `0.0..=1.0`
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        ease_out_cubic(t)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Linear blend between two RGB colors. Non-RGB colors snap at the midpoint.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(5.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_blend() {
        let from = Color::Rgb(0, 0, 0);
        let to = Color::Rgb(200, 100, 50);
        assert_eq!(blend(from, to, 0.0), from);
        assert_eq!(blend(from, to, 1.0), to);
        assert_eq!(blend(from, to, 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(blend(Color::Red, Color::Blue, 0.7), Color::Blue);
    }

    #[test]
    fn test_transition_progress() {
        let now = Instant::now();
        let transition = Transition::start(now, Duration::from_millis(200));
        assert_eq!(transition.progress(now), 0.0);
        assert!(!transition.is_finished(now + Duration::from_millis(100)));
        assert!(transition.is_finished(now + Duration::from_millis(200)));
        assert_eq!(transition.progress(now + Duration::from_secs(1)), 1.0);

        let instant = Transition::start(now, Duration::ZERO);
        assert_eq!(instant.progress(now), 1.0);
    }
}
