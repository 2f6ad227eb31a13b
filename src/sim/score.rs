//! Scoring
//!
//! A point is earned when the leftmost pair's center crosses the actor's
//! left edge. The test window is exactly one frame of pair displacement
//! wide, half-open on the far side, so each pair lands in it on exactly one
//! frame.

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::ObstacleTrack;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreKeeper {
    score: u32,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }

    /// Check the leftmost pair; returns true when a point was scored
    pub fn update(&mut self, actor: &Actor, track: &ObstacleTrack) -> bool {
        let Some(pair) = track.first() else {
            return false;
        };

        let edge = actor.left();
        let center = pair.center_x();
        if edge + pair.vel_x < center && center <= edge {
            self.score += 1;
            log::debug!("Passed pair {} (score {})", pair.id, self.score);
            true
        } else {
            false
        }
    }
}
