//! Data-driven game balance
//!
//! Every constant the simulation reads lives here so a settings file can
//! override it. Units are pixels and frames.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Vertical band (as fractions of screen height) where the lower obstacle's
/// top edge may be placed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapBand {
    pub min_frac: f32,
    pub max_frac: f32,
}

impl GapBand {
    pub const fn new(min_frac: f32, max_frac: f32) -> Self {
        Self { min_frac, max_frac }
    }

    /// Inclusive integer pixel bounds for a given screen height
    pub fn bounds(&self, screen_height: f32) -> (i32, i32) {
        (
            (screen_height * self.min_frac) as i32,
            (screen_height * self.max_frac) as i32,
        )
    }
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub floor_width: f32,
    pub floor_height: f32,
    /// Floor scroll speed (pixels per frame, leftward)
    pub floor_speed: f32,

    // === Actor ===
    pub actor_width: f32,
    pub actor_height: f32,
    /// Horizontal position as a fraction of screen width
    pub actor_x_frac: f32,
    /// Added to vertical velocity every flying frame
    pub gravity: f32,
    /// Vertical velocity set on activation (negative = up)
    pub impulse: f32,
    /// Maximum downward speed
    pub max_fall_speed: f32,
    /// Rotation when a run starts (degrees, positive = head up)
    pub initial_rotation: f32,
    /// Rotation set on activation
    pub control_rotation: f32,
    /// Most head-down rotation while flying
    pub min_rotation: f32,
    /// Rotation lost per frame
    pub rotation_rate: f32,
    /// Forced rotation while falling dead
    pub dying_rotation: f32,
    /// Half-height of the menu bobbing band
    pub bob_amplitude: f32,
    /// Menu bobbing speed
    pub bob_speed: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    /// Number of pairs alive at any time
    pub pair_count: usize,
    /// Horizontal distance between consecutive pairs
    pub pair_spacing: f32,
    /// Vertical opening between the two halves of a pair
    pub gap_height: f32,
    /// Scroll speed (pixels per frame, leftward)
    pub obstacle_speed: f32,
    /// Gap band used when a run's track is first populated
    pub initial_gap_band: GapBand,
    /// Gap band used when an expired pair is recycled
    pub recycle_gap_band: GapBand,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            floor_width: FLOOR_WIDTH,
            floor_height: FLOOR_HEIGHT,
            floor_speed: 4.0,

            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            actor_x_frac: 0.2,
            gravity: 1.0,
            impulse: -10.0,
            max_fall_speed: 10.0,
            initial_rotation: 45.0,
            control_rotation: 45.0,
            min_rotation: -20.0,
            rotation_rate: 3.0,
            dying_rotation: -90.0,
            bob_amplitude: 8.0,
            bob_speed: 1.0,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            pair_count: 4,
            pair_spacing: 150.0,
            gap_height: 100.0,
            obstacle_speed: 4.0,
            // Recycling uses a wider band than the opening pairs
            initial_gap_band: GapBand::new(0.3, 0.6),
            recycle_gap_band: GapBand::new(0.3, 0.7),
        }
    }
}

impl Tuning {
    /// Top edge of the floor; the actor dies at or below it
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.screen_height - self.floor_height
    }

    /// Actor spawn position (top-left of its box)
    pub fn actor_start(&self) -> (f32, f32) {
        (
            self.screen_width * self.actor_x_frac,
            (self.screen_height - self.actor_height) / 2.0,
        )
    }

    /// Per-frame horizontal velocity of every pair
    #[inline]
    pub fn obstacle_velocity(&self) -> f32 {
        -self.obstacle_speed
    }

    /// How far the floor scrolls before wrapping back to 0
    #[inline]
    pub fn floor_wrap(&self) -> f32 {
        self.floor_width - self.screen_width
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("floor_height", self.floor_height),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
            ("pair_spacing", self.pair_spacing),
            ("gap_height", self.gap_height),
            ("obstacle_speed", self.obstacle_speed),
            ("max_fall_speed", self.max_fall_speed),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::invalid(field, format!("must be > 0, got {value}")));
            }
        }

        if self.pair_count == 0 {
            return Err(ConfigError::invalid("pair_count", "need at least one pair"));
        }
        if self.floor_width < self.screen_width {
            return Err(ConfigError::invalid(
                "floor_width",
                "floor must be at least as wide as the screen",
            ));
        }
        if self.floor_height >= self.screen_height {
            return Err(ConfigError::invalid(
                "floor_height",
                "floor covers the whole screen",
            ));
        }
        if self.min_rotation > self.control_rotation {
            return Err(ConfigError::invalid(
                "min_rotation",
                "must not exceed control_rotation",
            ));
        }

        for (field, band) in [
            ("initial_gap_band", self.initial_gap_band),
            ("recycle_gap_band", self.recycle_gap_band),
        ] {
            let (lo, hi) = band.bounds(self.screen_height);
            if lo > hi {
                return Err(ConfigError::invalid(field, "min_frac above max_frac"));
            }
            // Gap must open below the ceiling and close above the bottom
            if (lo as f32) - self.gap_height < 0.0 || hi as f32 > self.screen_height {
                return Err(ConfigError::invalid(
                    field,
                    format!("gap {lo}..={hi} does not fit on screen"),
                ));
            }
        }

        Ok(())
    }
}
