//! Headless host: runs the simulation at its fixed tick rate with scripted
//! players and logs what happens.

use clap::Parser;
use game_core::{Config, GameState, InputState, Paddle, Pong};
use log::{info, warn};
use std::error::Error;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

/// Run a scripted Pong match without a window
#[derive(Parser)]
#[command(name = "pong-headless")]
#[command(about = "Run a scripted Pong match without a window")]
#[command(version)]
struct Args {
    /// TOML file overriding the default configuration
    config: Option<PathBuf>,

    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// Seed for the simulation's random source
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Run ticks back to back instead of at the configured rate
    #[arg(long)]
    fast: bool,
}

/// Plays both sides: waits in the menu for a while, starts a match, chases
/// the nearest ball with each paddle and confirms the game-over screen. The
/// next menu visit moves the selection from Play to Exit, so one match ends
/// the run.
struct Script {
    menu_ticks: u64,
    elapsed: u64,
}

impl Script {
    fn new(menu_ticks: u64) -> Self {
        Self {
            menu_ticks,
            elapsed: 0,
        }
    }

    fn next_input(&mut self, pong: &Pong) -> InputState {
        self.elapsed += 1;
        let mut input = InputState::new();
        match pong.state() {
            GameState::Menu => {
                if self.elapsed < self.menu_ticks {
                    return input;
                }
                // Help is selected on entry: step up to Play, release, activate
                match self.elapsed % 4 {
                    0 => input.left_up = true,
                    2 => input.right_down = true,
                    _ => {}
                }
            }
            GameState::Playing => {
                let (up, down) = Self::chase(&pong.paddles().left, pong);
                input.left_up = up;
                input.left_down = down;
                let (up, down) = Self::chase(&pong.paddles().right, pong);
                input.right_up = up;
                input.right_down = down;
            }
            GameState::GameOver => {
                if pong.explosion_queue().is_empty() {
                    input.confirm = true;
                    self.elapsed = 0;
                }
            }
        }
        input
    }

    fn chase(paddle: &Paddle, pong: &Pong) -> (bool, bool) {
        let center = paddle.bounds().center();
        let target = pong
            .balls()
            .iter()
            .map(|ball| ball.bounds().center())
            .min_by(|a, b| {
                (a.x - center.x)
                    .abs()
                    .total_cmp(&(b.x - center.x).abs())
            });
        match target {
            Some(t) if t.y < center.y - 10.0 => (true, false),
            Some(t) if t.y > center.y + 10.0 => (false, true),
            _ => (false, false),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.validate()?;

    let tick_duration = Duration::from_millis(config.tick_ms);
    info!(
        "starting {}x{} field, {} ms ticks, seed {}",
        config.field_width, config.field_height, config.tick_ms, args.seed
    );

    let mut pong = Pong::new(config, args.seed);
    let mut script = Script::new(150);
    let mut ticks: u64 = 0;

    loop {
        let started = Instant::now();

        let input = script.next_input(&pong);
        pong.tick(&input);
        ticks += 1;

        let events = pong.events();
        if events.left_scored > 0 || events.right_scored > 0 {
            let score = pong.score();
            info!("score {} - {}", score.left, score.right);
        }
        if ticks % 50 == 0 {
            info!(
                "tick={}, state={:?}, balls={}, powerups={}, drawables={}",
                ticks,
                pong.state(),
                pong.balls().len(),
                pong.powerups().len(),
                pong.registry().len()
            );
        }

        if pong.quit_requested() {
            info!("quit requested after {} ticks", ticks);
            break;
        }
        if args.ticks.is_some_and(|limit| ticks >= limit) {
            info!("tick limit reached");
            break;
        }

        if !args.fast {
            let spent = started.elapsed();
            match tick_duration.checked_sub(spent) {
                Some(rest) => thread::sleep(rest),
                None => warn!("tick {} overran by {:?}", ticks, spent - tick_duration),
            }
        }
    }

    Ok(())
}
