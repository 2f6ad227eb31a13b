//! Scrolling obstacles
//!
//! A pair is two obstacles sharing one x: one hanging from the top, one
//! rising from the bottom, with a fixed gap between them. The track keeps
//! exactly N pairs at constant spacing by recycling the leftmost pair once
//! it has fully left the screen.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::{GapBand, Tuning};

/// Which way an obstacle's open end points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Rises from the bottom, opening upward
    Up,
    /// Hangs from the top, opening downward
    Down,
}

/// One half of a pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub facing: Facing,
    pub rect: Rect,
}

/// Two obstacles moving and expiring together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub id: u32,
    /// Left edge of both halves
    pub x: f32,
    /// Vertical center of the opening
    pub gap_center: f32,
    pub gap_height: f32,
    /// Size of one half
    pub size: Vec2,
    /// Horizontal velocity per frame (negative = leftward)
    pub vel_x: f32,
}

impl ObstaclePair {
    pub fn new(id: u32, x: f32, gap_center: f32, tuning: &Tuning) -> Self {
        Self {
            id,
            x,
            gap_center,
            gap_height: tuning.gap_height,
            size: Vec2::new(tuning.obstacle_width, tuning.obstacle_height),
            vel_x: tuning.obstacle_velocity(),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.size.x
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.size.x / 2.0
    }

    /// Top of the opening (bottom edge of the upper obstacle)
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_center - self.gap_height / 2.0
    }

    /// Bottom of the opening (top edge of the lower obstacle)
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_center + self.gap_height / 2.0
    }

    /// Upper then lower obstacle
    pub fn obstacles(&self) -> [Obstacle; 2] {
        [
            Obstacle {
                facing: Facing::Down,
                rect: Rect::new(Vec2::new(self.x, self.gap_top() - self.size.y), self.size),
            },
            Obstacle {
                facing: Facing::Up,
                rect: Rect::new(Vec2::new(self.x, self.gap_bottom()), self.size),
            },
        ]
    }

    /// Right edge has scrolled past the left side of the screen
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.right() < 0.0
    }

    pub fn advance(&mut self) {
        self.x += self.vel_x;
    }
}

/// Draw a gap center: the lower obstacle's top edge lands on an integer
/// inside `band`
fn random_gap_center<R: Rng + ?Sized>(rng: &mut R, band: GapBand, tuning: &Tuning) -> f32 {
    let (lo, hi) = band.bounds(tuning.screen_height);
    let edge = rng.random_range(lo..=hi);
    edge as f32 - tuning.gap_height / 2.0
}

/// Fixed-size, x-ordered collection of pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleTrack {
    pairs: Vec<ObstaclePair>,
    spacing: f32,
    next_id: u32,
}

impl ObstacleTrack {
    /// Populate a fresh track: `pair_count` pairs starting at the right edge
    /// of the screen, each with an independent gap from the initial band
    pub fn initialize<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Self {
        let start_x = tuning.screen_width;
        let pairs = (0..tuning.pair_count)
            .map(|i| {
                let x = start_x + i as f32 * tuning.pair_spacing;
                let gap_center = random_gap_center(rng, tuning.initial_gap_band, tuning);
                ObstaclePair::new(i as u32 + 1, x, gap_center, tuning)
            })
            .collect();

        Self::from_pairs(pairs, tuning.pair_spacing)
    }

    /// Build a track from explicit pairs, x-ordered at `spacing`
    pub fn from_pairs(pairs: Vec<ObstaclePair>, spacing: f32) -> Self {
        debug_assert!(
            pairs.windows(2).all(|w| w[1].x - w[0].x == spacing),
            "pairs must be x-ordered at constant spacing {spacing}"
        );
        let next_id = pairs.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            pairs,
            spacing,
            next_id,
        }
    }

    pub fn pairs(&self) -> &[ObstaclePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Leftmost pair (the only one scoring looks at)
    pub fn first(&self) -> Option<&ObstaclePair> {
        self.pairs.first()
    }

    /// One frame: recycle the leftmost pair if expired, then scroll all.
    ///
    /// Returns the id of the pair appended by recycling, if any.
    pub fn advance<R: Rng + ?Sized>(&mut self, tuning: &Tuning, rng: &mut R) -> Option<u32> {
        let recycled = self.recycle_expired(tuning, rng);
        for pair in &mut self.pairs {
            pair.advance();
        }
        recycled
    }

    fn recycle_expired<R: Rng + ?Sized>(&mut self, tuning: &Tuning, rng: &mut R) -> Option<u32> {
        if !self.pairs.first().is_some_and(ObstaclePair::is_expired) {
            return None;
        }
        let rightmost_x = self.pairs.last().map(|p| p.x)?;

        let expired = self.pairs.remove(0);
        let id = self.next_id;
        self.next_id += 1;

        let gap_center = random_gap_center(rng, tuning.recycle_gap_band, tuning);
        let mut pair = ObstaclePair::new(id, rightmost_x + self.spacing, gap_center, tuning);
        pair.vel_x = expired.vel_x;
        self.pairs.push(pair);

        log::debug!(
            "Recycled pair {} -> {} at x={} gap={}",
            expired.id,
            id,
            rightmost_x + self.spacing,
            gap_center
        );
        Some(id)
    }
}
