/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 1280.0;
    pub const FIELD_HEIGHT: f32 = 720.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 40.0;
    pub const PADDLE_HEIGHT: f32 = 200.0;
    pub const PADDLE_ACCELERATION: f32 = 2.0;
    pub const PADDLE_ACCELERATION_MIN: f32 = 0.3;
    pub const PADDLE_ACCELERATION_MAX: f32 = 5.0;
    pub const PADDLE_FRICTION: f32 = 0.95;
    pub const PADDLE_GROWTH_BONUS: f32 = 5.0;
    pub const PADDLE_INFLUENCE: f32 = 1.1; // Paddle velocity carried into a bounce

    // Ball
    pub const BALL_MAX_VELOCITY: f32 = 30.0;
    pub const BALL_MIN_SIZE: u32 = 10;
    pub const BALL_MAX_SIZE: u32 = 20; // exclusive
    pub const BALL_SERVE_VX_MIN: f32 = 6.0;
    pub const BALL_SERVE_VX_MAX: f32 = 11.0;
    pub const BALL_SERVE_VY_MAX: f32 = 5.0;

    // Power-ups
    pub const POWERUP_SIZE: f32 = 30.0;
    pub const SIZE_INCREASE_FACTOR: f32 = 1.2;
    pub const SIZE_DEBUFF_FACTOR: f32 = 0.8;
    pub const SPEED_INCREASE_DELTA: f32 = 0.1;
    pub const SPEED_DEBUFF_DELTA: f32 = -0.2;

    // Effects
    pub const BURST_BATCH: u32 = 10;
    pub const BURST_DURATION: i32 = 1;
    pub const BURST_LIFESPAN: u32 = 7;
    pub const EXPLOSION_VELOCITY_MIN: u32 = 200;
    pub const EXPLOSION_VELOCITY_MAX: u32 = 250; // exclusive
    pub const PARTICLE_MIN_SIZE: u32 = 30;
    pub const PARTICLE_MAX_SIZE: u32 = 40; // exclusive
    pub const TRAIL_DECAY: f32 = 2.0; // px per tick
    pub const TRAIL_DRIFT: f32 = 1.0;

    // Match
    pub const WIN_SCORE: u32 = 50;
    pub const WIN_MARGIN: u32 = 2;
    pub const BALL_SPAWN_INTERVAL: u64 = 200;
    pub const POWERUP_SPAWN_INTERVAL: u64 = 50;
    pub const MAX_BALLS: usize = 50;
    pub const MAX_POWERUPS: usize = 50;

    // Loop
    pub const TICK_MS: u64 = 20;
}
