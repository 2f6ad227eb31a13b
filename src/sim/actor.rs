//! The player-controlled actor
//!
//! Integer-stepped physics: one call per frame, no dt. Gravity and impulse
//! act on vertical velocity only; x never changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::WING_SEQUENCE;
use crate::tuning::Tuning;

/// Actor lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorState {
    /// Bobbing on the menu screen
    Idle,
    /// Under gravity and player control
    Flying,
    /// Dead, falling to the floor
    Dying,
    /// Dead and resting; terminal
    Grounded,
}

/// Wing pose derived from the animation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WingPose {
    Up,
    Mid,
    Down,
}

/// Physics constants copied out of `Tuning` so the actor is self-contained
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightParams {
    pub gravity: f32,
    pub impulse: f32,
    pub max_fall_speed: f32,
    pub control_rotation: f32,
    pub min_rotation: f32,
    pub rotation_rate: f32,
    pub dying_rotation: f32,
    /// Lower bound (top) and upper bound of the menu bobbing band
    pub bob_band: (f32, f32),
    /// Floor top; dying stops here
    pub floor_y: f32,
}

impl FlightParams {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        let (_, start_y) = tuning.actor_start();
        Self {
            gravity: tuning.gravity,
            impulse: tuning.impulse,
            max_fall_speed: tuning.max_fall_speed,
            control_rotation: tuning.control_rotation,
            min_rotation: tuning.min_rotation,
            rotation_rate: tuning.rotation_rate,
            dying_rotation: tuning.dying_rotation,
            bob_band: (start_y - tuning.bob_amplitude, start_y + tuning.bob_amplitude),
            floor_y: tuning.floor_y(),
        }
    }
}

/// The flying character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left of the bounding box
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative = up)
    pub vel_y: f32,
    /// Tilt in degrees (positive = head up)
    pub rotation: f32,
    /// Index into `WING_SEQUENCE`
    pub wing_phase: usize,
    pub state: ActorState,
    pub params: FlightParams,
}

impl Actor {
    /// Spawn an idle actor at the tuning's start position
    pub fn new(tuning: &Tuning) -> Self {
        let (x, y) = tuning.actor_start();
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(tuning.actor_width, tuning.actor_height),
            vel_y: -tuning.bob_speed,
            rotation: tuning.initial_rotation,
            wing_phase: 0,
            state: ActorState::Idle,
            params: FlightParams::from_tuning(tuning),
        }
    }

    /// Leading (left) edge used by scoring
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn is_alive(&self) -> bool {
        matches!(self.state, ActorState::Idle | ActorState::Flying)
    }

    pub fn wing_pose(&self) -> WingPose {
        match WING_SEQUENCE[self.wing_phase % WING_SEQUENCE.len()] {
            0 => WingPose::Up,
            1 => WingPose::Mid,
            _ => WingPose::Down,
        }
    }

    /// Leave the menu: seed the opening upward velocity
    pub fn launch(&mut self) {
        self.vel_y = self.params.impulse;
        self.state = ActorState::Flying;
    }

    /// Gravity and impulse integration for one frame
    pub fn advance_flight(&mut self, activated: bool) {
        if activated {
            self.vel_y = self.params.impulse;
        }
        self.vel_y = (self.vel_y + self.params.gravity).min(self.params.max_fall_speed);
        self.pos.y += self.vel_y;
    }

    /// Tilt for one frame: snap head-up on activation, then sag
    pub fn advance_rotation(&mut self, activated: bool) {
        if activated {
            self.rotation = self.params.control_rotation;
        }
        self.rotation = (self.rotation - self.params.rotation_rate).max(self.params.min_rotation);
    }

    /// Menu bobbing inside a small band, ignoring gravity
    pub fn advance_idle_bob(&mut self) {
        let (lo, hi) = self.params.bob_band;
        self.pos.y += self.vel_y;
        if self.pos.y < lo || self.pos.y > hi {
            self.vel_y = -self.vel_y;
        }
    }

    pub fn advance_wing_animation(&mut self) {
        self.wing_phase = (self.wing_phase + 1) % WING_SEQUENCE.len();
    }

    /// Collision happened; start the death fall
    pub fn kill(&mut self) {
        self.state = ActorState::Dying;
    }

    /// One frame of the death fall. Returns true once grounded.
    ///
    /// An actor that died on the floor is already at rest and keeps its
    /// last tilt; anything above falls nose-down at full speed.
    pub fn enter_dying(&mut self) -> bool {
        match self.state {
            ActorState::Grounded => true,
            ActorState::Dying if self.pos.y < self.params.floor_y => {
                self.pos.y += self.params.max_fall_speed;
                self.rotation = self.params.dying_rotation;
                false
            }
            ActorState::Dying => {
                self.state = ActorState::Grounded;
                true
            }
            // Still alive: nothing to animate
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flying_actor() -> Actor {
        let mut actor = Actor::new(&Tuning::default());
        actor.state = ActorState::Flying;
        actor
    }

    #[test]
    fn test_free_fall_clamps_at_max_speed() {
        let mut actor = flying_actor();
        actor.pos.y = 100.0;
        actor.vel_y = 0.0;

        for _ in 0..15 {
            actor.advance_flight(false);
        }

        let expected: i32 = (1..=15).map(|i: i32| i.min(10)).sum();
        assert_eq!(actor.vel_y, 10.0);
        assert_eq!(actor.pos.y, 100.0 + expected as f32);
    }

    #[test]
    fn test_free_fall_from_spawn_velocity() {
        let mut actor = flying_actor();
        assert_eq!(actor.vel_y, -1.0);
        actor.pos.y = 100.0;

        for _ in 0..15 {
            actor.advance_flight(false);
        }

        // Velocities 0..=9 then five frames at the cap
        let expected: i32 = (1..15).map(|i: i32| i.min(10)).sum();
        assert_eq!(expected, 95);
        assert_eq!(actor.vel_y, 10.0);
        assert_eq!(actor.pos.y, 100.0 + expected as f32);
    }

    #[test]
    fn test_activation_applies_impulse_then_gravity() {
        let mut actor = flying_actor();
        actor.vel_y = 7.0;
        let y = actor.pos.y;

        actor.advance_flight(true);
        assert_eq!(actor.vel_y, -9.0);
        assert_eq!(actor.pos.y, y - 9.0);

        actor.advance_flight(false);
        assert_eq!(actor.vel_y, -8.0);
    }

    #[test]
    fn test_launch_seeds_impulse() {
        let mut actor = Actor::new(&Tuning::default());
        actor.launch();
        assert_eq!(actor.vel_y, -10.0);
        assert_eq!(actor.state, ActorState::Flying);

        actor.advance_flight(false);
        assert_eq!(actor.vel_y, -9.0);
    }

    #[test]
    fn test_rotation_snaps_and_sags() {
        let mut actor = flying_actor();
        actor.rotation = -20.0;

        actor.advance_rotation(true);
        assert_eq!(actor.rotation, 42.0);

        for _ in 0..100 {
            actor.advance_rotation(false);
        }
        assert_eq!(actor.rotation, -20.0);
    }

    #[test]
    fn test_idle_bob_stays_in_band() {
        let mut actor = Actor::new(&Tuning::default());
        let (lo, hi) = actor.params.bob_band;
        for _ in 0..200 {
            actor.advance_idle_bob();
            // One step of overshoot before reversing
            assert!(actor.pos.y >= lo - 1.0 && actor.pos.y <= hi + 1.0);
        }
    }

    #[test]
    fn test_wing_animation_cycles() {
        let mut actor = Actor::new(&Tuning::default());
        assert_eq!(actor.wing_pose(), WingPose::Up);
        for _ in 0..5 {
            actor.advance_wing_animation();
        }
        assert_eq!(actor.wing_pose(), WingPose::Mid);
        for _ in 0..5 {
            actor.advance_wing_animation();
        }
        assert_eq!(actor.wing_pose(), WingPose::Down);
        for _ in 0..10 {
            actor.advance_wing_animation();
        }
        assert_eq!(actor.wing_phase, 0);
    }

    #[test]
    fn test_dying_falls_to_floor() {
        let mut actor = flying_actor();
        actor.pos.y = 375.0;
        actor.kill();

        assert!(!actor.enter_dying());
        assert_eq!(actor.pos.y, 385.0);
        assert_eq!(actor.rotation, -90.0);
        assert!(!actor.enter_dying());
        assert!(!actor.enter_dying());
        assert_eq!(actor.pos.y, 405.0);
        assert!(actor.enter_dying());
        assert_eq!(actor.state, ActorState::Grounded);

        // Terminal: no further motion
        assert!(actor.enter_dying());
        assert_eq!(actor.pos.y, 405.0);
    }

    #[test]
    fn test_floor_death_keeps_tilt() {
        let mut actor = flying_actor();
        actor.pos.y = 400.0;
        actor.rotation = 12.0;
        actor.kill();

        assert!(actor.enter_dying());
        assert_eq!(actor.rotation, 12.0);
        assert_eq!(actor.pos.y, 400.0);
    }
}
