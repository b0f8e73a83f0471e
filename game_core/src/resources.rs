use crate::field::Field;
use crate::fsm::GameState;
use rand::Rng;

/// Which half of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Simulation context handed to every per-tick update
#[derive(Debug, Clone, Copy)]
pub struct SimContext {
    pub tick: u64,
    pub field: Field,
}

impl SimContext {
    pub fn new(field: Field) -> Self {
        Self { tick: 0, field }
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    /// A side wins once it reaches `win_score` with a lead of at least `margin`
    pub fn winner(&self, win_score: u32, margin: u32) -> Option<Side> {
        if self.left >= self.right + margin && self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= self.left + margin && self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform sample in [0, 1)
    pub fn unit(&mut self) -> f32 {
        self.0.gen::<f32>()
    }

    pub fn gen_range(&mut self, min: f32, max: f32) -> f32 {
        self.0.gen_range(min..max)
    }

    /// Either 1.0 or -1.0 with equal probability
    pub fn sign(&mut self) -> f32 {
        if self.0.gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Key levels polled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    pub confirm: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn any_paddle_key(&self) -> bool {
        self.left_up || self.left_down || self.right_up || self.right_down
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: u32,
    pub right_scored: u32,
    pub paddle_hits: u32,
    pub wall_hits: u32,
    pub powerups_collected: u32,
    pub balls_spawned: u32,
    pub powerups_spawned: u32,
    pub explosions: u32,
    pub match_reset: bool,
    pub state_change: Option<(GameState, GameState)>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Tick thresholds for the next ball and power-up spawns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnSchedule {
    pub next_ball: u64,
    pub next_powerup: u64,
}

impl SpawnSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a ball is due; moves the threshold forward by one interval
    pub fn ball_due(&mut self, tick: u64, interval: u64) -> bool {
        Self::due(&mut self.next_ball, tick, interval)
    }

    pub fn powerup_due(&mut self, tick: u64, interval: u64) -> bool {
        Self::due(&mut self.next_powerup, tick, interval)
    }

    fn due(next: &mut u64, tick: u64, interval: u64) -> bool {
        if tick > *next {
            *next += interval;
            true
        } else {
            false
        }
    }
}
