//! Collision detection
//!
//! Axis-aligned boxes only. Touching edges count as a hit, so a box that
//! ends exactly where an obstacle begins is dead.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::ObstacleTrack;

/// Axis-aligned rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Boundary-inclusive overlap test
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min, self.max());
        let (b_min, b_max) = (other.min, other.max());
        a_min.x <= b_max.x && b_min.x <= a_max.x && a_min.y <= b_max.y && b_min.y <= a_max.y
    }
}

/// What killed the actor (logged only; the run result does not keep it)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    Floor,
    Ceiling,
    Obstacle { pair_id: u32 },
}

/// Per-frame death check against screen bounds and every obstacle
#[derive(Debug, Clone, Copy)]
pub struct CollisionJudge {
    /// Floor top; reaching it is fatal
    pub floor_y: f32,
}

impl CollisionJudge {
    pub fn new(floor_y: f32) -> Self {
        Self { floor_y }
    }

    /// True when the actor is dead this frame
    pub fn check(&self, actor: &Actor, track: &ObstacleTrack) -> bool {
        self.impact(actor, track).is_some()
    }

    /// First impact found, bounds before obstacles
    pub fn impact(&self, actor: &Actor, track: &ObstacleTrack) -> Option<Impact> {
        if actor.pos.y >= self.floor_y {
            return Some(Impact::Floor);
        }
        if actor.pos.y <= 0.0 {
            return Some(Impact::Ceiling);
        }

        let body = actor.rect();
        track
            .pairs()
            .iter()
            .find(|pair| pair.obstacles().iter().any(|o| o.rect.intersects(&body)))
            .map(|pair| Impact::Obstacle { pair_id: pair.id })
    }
}
