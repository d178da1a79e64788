// src/color/phase.rs

use nannou::color::{rgb8, Rgb8};

use crate::config::PhaseConfig;

/// Maps a channel phase plus a glyph shift to an 8-bit channel value.
pub fn channel_value(phase: f64, shift: f64) -> u8 {
    let unit = ((phase + shift).sin() + 1.0) / 2.0;
    (unit * 255.0) as u8
}

/// Sine phases of the three color channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPhase {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl ColorPhase {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    pub fn color_at(&self, shift: f64) -> Rgb8 {
        rgb8(
            channel_value(self.red, shift),
            channel_value(self.green, shift),
            channel_value(self.blue, shift),
        )
    }

    /// Moves every phase down by its channel speed.
    pub fn advance(&mut self, speed: &PhaseConfig) {
        self.red -= speed.red;
        self.green -= speed.green;
        self.blue -= speed.blue;
    }
}

impl From<PhaseConfig> for ColorPhase {
    fn from(config: PhaseConfig) -> Self {
        Self::new(config.red, config.green, config.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_channel_extremes() {
        assert_eq!(channel_value(FRAC_PI_2, 0.0), 255);
        assert_eq!(channel_value(-FRAC_PI_2, 0.0), 0);
        assert_eq!(channel_value(0.0, 0.0), 127);
        // shift and phase are interchangeable
        assert_eq!(channel_value(0.0, FRAC_PI_2), 255);
    }

    #[test]
    fn test_channel_range_and_period() {
        let mut phase = -10.0;
        while phase < 10.0 {
            let value = channel_value(phase, 0.3);
            let wrapped = channel_value(phase + TAU, 0.3);
            // truncation can land one step apart when sin is near a step boundary
            assert!(
                (value as i16 - wrapped as i16).abs() <= 1,
                "phase {} gave {} vs {}",
                phase,
                value,
                wrapped
            );
            phase += 0.01;
        }
    }

    #[test]
    fn test_color_at_uses_each_channel() {
        let phase = ColorPhase::new(FRAC_PI_2, -FRAC_PI_2, 0.0);
        let color = phase.color_at(0.0);
        assert_eq!((color.red, color.green, color.blue), (255, 0, 127));

        // a half turn of shift swaps red and green
        let color = phase.color_at(PI);
        assert_eq!(color.red, 0);
        assert_eq!(color.green, 255);
    }

    #[test]
    fn test_advance_moves_phases_down() {
        let mut phase = ColorPhase::new(-5.54, -4.3, -6.4);
        let speed = PhaseConfig {
            red: 0.0202,
            green: 0.0168,
            blue: 0.0227,
        };
        for _ in 0..100 {
            phase.advance(&speed);
        }
        assert!((phase.red - (-5.54 - 2.02)).abs() < 1e-9);
        assert!((phase.green - (-4.3 - 1.68)).abs() < 1e-9);
        assert!((phase.blue - (-6.4 - 2.27)).abs() < 1e-9);
    }
}
