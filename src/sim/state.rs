//! Game state and screen types
//!
//! Everything a frame needs lives in `GameState`; there are no globals.
//! Per-run data (actor, track, score) is owned by the active `Screen` and
//! moves with it on transitions.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::collision::CollisionJudge;
use super::obstacle::ObstacleTrack;
use super::score::ScoreKeeper;
use crate::tuning::Tuning;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Actor bobbing, waiting for the first activation
    Menu,
    /// Active run
    Play,
    /// Run over: death fall, then wait for restart
    End,
}

/// Day or night backdrop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Background {
    Day,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorColor {
    Red,
    Blue,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleColor {
    Green,
    Red,
}

/// Per-run look, rolled when a menu is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmeticVariant {
    pub background: Background,
    pub actor_color: ActorColor,
}

impl CosmeticVariant {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let background = if rng.random_bool(0.5) {
            Background::Day
        } else {
            Background::Night
        };
        let actor_color = match rng.random_range(0..3) {
            0 => ActorColor::Red,
            1 => ActorColor::Blue,
            _ => ActorColor::Yellow,
        };
        Self {
            background,
            actor_color,
        }
    }

    /// Obstacles follow the background: green by day, red by night
    pub fn obstacle_color(&self) -> ObstacleColor {
        match self.background {
            Background::Day => ObstacleColor::Green,
            Background::Night => ObstacleColor::Red,
        }
    }
}

/// Horizontal offset of the scrolling floor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorScroll {
    pub offset: f32,
    speed: f32,
    wrap: f32,
}

impl FloorScroll {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            offset: 0.0,
            speed: tuning.floor_speed,
            wrap: tuning.floor_wrap(),
        }
    }

    pub fn advance(&mut self) {
        self.offset -= self.speed;
        if self.offset <= -self.wrap {
            self.offset = 0.0;
        }
    }
}

/// Snapshot taken at the moment of death, shown on the end screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub actor: Actor,
    pub track: ObstacleTrack,
    pub score: u32,
}

/// Active screen with the data it owns
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Menu {
        actor: Actor,
    },
    Play {
        actor: Actor,
        track: ObstacleTrack,
        score: ScoreKeeper,
    },
    End {
        result: RunResult,
    },
}

/// Things that happened this frame, for audio and the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A menu screen was entered
    MenuEntered,
    /// Menu confirmed, a run began
    RunStarted { run: u32 },
    /// Player activated during a run
    Flap,
    /// Actor struck a bound or obstacle
    Hit,
    /// Run over with this score
    Died { score: u32 },
    /// An obstacle pair was passed
    Scored { score: u32 },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub variant: CosmeticVariant,
    pub floor: FloorScroll,
    pub judge: CollisionJudge,
    pub screen: Screen,
    /// Frames simulated so far
    pub time_ticks: u64,
    /// Runs started so far
    pub runs: u32,
    /// Events queued since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start on the menu with a freshly rolled look
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let variant = CosmeticVariant::random(&mut rng);
        log::info!("New game (seed {seed}), variant {variant:?}");

        Self {
            floor: FloorScroll::new(&tuning),
            judge: CollisionJudge::new(tuning.floor_y()),
            screen: Screen::Menu {
                actor: Actor::new(&tuning),
            },
            tuning,
            seed,
            rng,
            variant,
            time_ticks: 0,
            runs: 0,
            events: vec![GameEvent::MenuEntered],
        }
    }

    pub fn phase(&self) -> GamePhase {
        match self.screen {
            Screen::Menu { .. } => GamePhase::Menu,
            Screen::Play { .. } => GamePhase::Play,
            Screen::End { .. } => GamePhase::End,
        }
    }

    /// Score shown on screen (0 on the menu)
    pub fn score(&self) -> u32 {
        match &self.screen {
            Screen::Menu { .. } => 0,
            Screen::Play { score, .. } => score.score(),
            Screen::End { result } => result.score,
        }
    }

    pub fn actor(&self) -> &Actor {
        match &self.screen {
            Screen::Menu { actor } | Screen::Play { actor, .. } => actor,
            Screen::End { result } => &result.actor,
        }
    }

    /// Live track in play, or the snapshot on the end screen
    pub fn track(&self) -> Option<&ObstacleTrack> {
        match &self.screen {
            Screen::Menu { .. } => None,
            Screen::Play { track, .. } => Some(track),
            Screen::End { result } => Some(&result.track),
        }
    }

    pub fn run_result(&self) -> Option<&RunResult> {
        match &self.screen {
            Screen::End { result } => Some(result),
            _ => None,
        }
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
