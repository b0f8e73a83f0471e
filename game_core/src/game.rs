//! Match controller
//!
//! `Pong` owns every collection of the simulation and advances it one fixed
//! tick at a time. Within a tick the entity hooks run first (paddles, balls,
//! generators, trail and particle decay), then the match logic, then the
//! branch for the current [`GameState`].

use crate::components::{Ball, Effect, Paddles, ParticleGenerator, PowerUp};
use crate::config::Config;
use crate::field::Field;
use crate::fsm::{GameAction, GameFsm, GameState, TransitionResult};
use crate::menu::{Menu, MenuCommand};
use crate::params::Params;
use crate::registry::{Registry, Rgb};
use crate::resources::{Events, GameRng, InputState, Score, Side, SimContext, SpawnSchedule};
use crate::systems::{
    self, collect_powerups, resolve_ball_collisions, retire_finished_generators, tick_generators,
    tick_particles, tick_trails, ExplosionQueue, ExplosionTarget,
};
use glam::Vec2;
use log::{debug, info, warn};
use rand::Rng;

pub struct Pong {
    config: Config,
    ctx: SimContext,
    registry: Registry,
    paddles: Paddles,
    balls: Vec<Ball>,
    powerups: Vec<PowerUp>,
    generators: Vec<ParticleGenerator>,
    score: Score,
    schedule: SpawnSchedule,
    fsm: GameFsm,
    menu: Menu,
    explosions: ExplosionQueue,
    events: Events,
    rng: GameRng,
    quit: bool,
}

impl Pong {
    /// A fresh match sitting in the menu with its idle demo. `config` is
    /// expected to have passed [`Config::validate`].
    pub fn new(config: Config, seed: u64) -> Self {
        let field = Field::new(config.field_width, config.field_height);
        let mut registry = Registry::new();
        let paddles = Paddles::new(
            config.paddle_width,
            config.paddle_height,
            &field,
            &mut registry,
        );

        let mut pong = Self {
            config,
            ctx: SimContext::new(field),
            registry,
            paddles,
            balls: Vec::new(),
            powerups: Vec::new(),
            generators: Vec::new(),
            score: Score::new(),
            schedule: SpawnSchedule::new(),
            fsm: GameFsm::new(),
            menu: Menu::new(),
            explosions: ExplosionQueue::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            quit: false,
        };
        pong.reset_game();
        pong
    }

    /// Advance the simulation by one fixed tick
    pub fn tick(&mut self, input: &InputState) {
        self.events.clear();
        self.ctx.advance();
        let field = self.ctx.field;

        // 1. Entity hooks
        for paddle in self.paddles.iter_mut() {
            paddle.advance(&field);
        }
        for ball in self.balls.iter_mut() {
            ball.advance();
        }
        tick_generators(&mut self.generators, &mut self.registry, &mut self.rng);
        tick_trails(&mut self.registry);
        tick_particles(&mut self.registry);

        // 2. Paddle and wall contact, trail emission
        resolve_ball_collisions(
            &mut self.balls,
            &self.paddles,
            &field,
            &mut self.registry,
            &mut self.rng,
            &mut self.events,
        );

        // 3. Scoring, pickups and finished bursts
        self.update_scoring();
        self.check_powerup_collision();

        // 4. Timed spawns
        if !self.fsm.is_game_over() {
            let tick = self.ctx.tick;
            if self
                .schedule
                .ball_due(tick, self.config.ball_spawn_interval)
            {
                self.add_new_ball();
            }
            if self
                .schedule
                .powerup_due(tick, self.config.powerup_spawn_interval)
            {
                self.add_new_powerup();
            }
        }

        // 5. State branch
        match self.state() {
            GameState::Menu => self.act_menu(input),
            GameState::Playing => self.act_playing(input),
            GameState::GameOver => self.act_game_over(input),
        }

        self.sync_sprites();
    }

    fn act_menu(&mut self, input: &InputState) {
        // The menu clock runs at double speed
        self.ctx.advance();

        match self.menu.process(input) {
            Some(MenuCommand::Play) => {
                self.reset_game();
                self.set_state_playing();
            }
            Some(MenuCommand::Exit) => {
                info!("exit requested from menu");
                self.quit = true;
            }
            None => {}
        }

        let field = self.ctx.field;
        self.paddles.left.idle(&self.balls, &field);
        self.paddles.right.idle(&self.balls, &field);
        self.check_for_win(true);
    }

    fn act_playing(&mut self, input: &InputState) {
        let field = self.ctx.field;
        if input.left_up {
            self.paddles.left.move_up();
        }
        if input.left_down {
            self.paddles.left.move_down(&field);
        }
        if input.right_up {
            self.paddles.right.move_up();
        }
        if input.right_down {
            self.paddles.right.move_down(&field);
        }
        self.check_for_win(false);
    }

    fn act_game_over(&mut self, input: &InputState) {
        if input.confirm {
            self.set_state_menu();
        }

        if self.explosions.is_empty() {
            self.clear_board();
        } else if let Some(target) = self.explosions.pop() {
            self.explode(target);
        }
    }

    /// Burst one recorded target. Targets that no longer exist are skipped.
    fn explode(&mut self, target: ExplosionTarget) {
        let (origin, color) = match target {
            ExplosionTarget::Ball(sprite) => {
                let Some(ball) = self.balls.iter_mut().find(|b| b.sprite() == sprite) else {
                    return;
                };
                let burst = (ball.pos, ball.color());
                ball.self_destruct();
                burst
            }
            ExplosionTarget::PowerUp(sprite) => {
                let Some(index) = self.powerups.iter().position(|p| p.sprite() == sprite) else {
                    return;
                };
                let powerup = self.powerups.remove(index);
                let burst = (powerup.pos(), powerup.color());
                powerup.retire(&mut self.registry);
                burst
            }
        };

        let velocity = self
            .rng
            .0
            .gen_range(Params::EXPLOSION_VELOCITY_MIN..Params::EXPLOSION_VELOCITY_MAX)
            as f32;
        self.add_new_particle_generator(
            origin,
            Params::BURST_DURATION,
            velocity,
            Params::BURST_LIFESPAN,
            color,
        );
        self.events.explosions += 1;
        debug!("explosion at ({:.0}, {:.0})", origin.x, origin.y);
    }

    fn clear_board(&mut self) {
        for ball in self.balls.drain(..) {
            ball.retire(&mut self.registry);
        }
        for powerup in self.powerups.drain(..) {
            powerup.retire(&mut self.registry);
        }
    }

    /// Remove every ball and power-up, zero the scores and the clock, and put
    /// the paddles back to their starting stats. Running bursts are left to
    /// finish on their own.
    pub fn reset_game(&mut self) {
        self.clear_board();
        self.explosions.clear();
        self.score = Score::new();
        self.schedule = SpawnSchedule::new();
        self.ctx.tick = 0;
        self.paddles.reset(&self.ctx.field);
        self.events.match_reset = true;
        info!("match reset");
    }

    /// Look for a winner. While idle (menu demo) a win just resets the
    /// match; during play it ends the game.
    pub fn check_for_win(&mut self, idle: bool) {
        let Some(winner) = self.score.winner(self.config.win_score, Params::WIN_MARGIN) else {
            return;
        };
        if idle {
            self.reset_game();
        } else {
            self.end_game(winner);
        }
    }

    /// Freeze every ball, queue the explosions and show the winner
    pub fn end_game(&mut self, winner: Side) {
        for ball in self.balls.iter_mut() {
            ball.set_vx(0.0);
            ball.set_vy(0.0);
        }
        self.explosions = ExplosionQueue::build(&self.balls, &self.powerups, &mut self.rng);
        self.menu.set_winner(winner);
        info!(
            "{:?} wins {} - {}, {} explosions queued",
            winner,
            self.score.left,
            self.score.right,
            self.explosions.len()
        );
        self.set_state_over();
    }

    pub fn update_scoring(&mut self) {
        let field = self.ctx.field;
        systems::update_scoring(
            &mut self.balls,
            &field,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
    }

    /// Consume power-ups touched by a ball, burst each at its center and
    /// apply deferred effects. Finished bursts are retired afterwards.
    pub fn check_powerup_collision(&mut self) {
        let field = self.ctx.field;
        let pickups = collect_powerups(
            &mut self.powerups,
            &self.balls,
            &mut self.paddles,
            &field,
            &mut self.registry,
        );

        for pickup in pickups {
            self.events.powerups_collected += 1;
            if pickup.effect == Some(Effect::ExtraBall) {
                self.add_new_ball();
            }
            self.add_new_particle_generator(
                pickup.center,
                Params::BURST_DURATION,
                pickup.ball_speed_sq,
                Params::BURST_LIFESPAN,
                pickup.color,
            );
        }

        self.check_generator_lifespan();
    }

    pub fn check_generator_lifespan(&mut self) {
        let retired = retire_finished_generators(&mut self.generators, &mut self.registry);
        if retired > 0 {
            debug!("{} particle generators finished", retired);
        }
    }

    /// Serve a new ball unless the cap is reached
    pub fn add_new_ball(&mut self) {
        if self.balls.len() >= self.config.max_balls {
            debug!("ball cap of {} reached", self.config.max_balls);
            return;
        }
        let ball = Ball::spawn(&self.ctx.field, &mut self.rng, &mut self.registry);
        self.balls.push(ball);
        self.events.balls_spawned += 1;
        debug!("ball spawned, {} in play", self.balls.len());
    }

    /// Drop a new power-up unless the cap is reached
    pub fn add_new_powerup(&mut self) {
        if self.powerups.len() >= self.config.max_powerups {
            debug!("power-up cap of {} reached", self.config.max_powerups);
            return;
        }
        let powerup = PowerUp::spawn(&self.ctx.field, &mut self.rng, &mut self.registry);
        debug!("{:?} spawned", powerup.kind());
        self.powerups.push(powerup);
        self.events.powerups_spawned += 1;
    }

    pub fn add_new_particle_generator(
        &mut self,
        origin: Vec2,
        duration: i32,
        velocity: f32,
        lifespan: u32,
        color: Rgb,
    ) {
        self.generators.push(ParticleGenerator::new(
            origin,
            duration,
            velocity,
            Params::BURST_BATCH,
            lifespan,
            color,
        ));
    }

    pub fn set_state_menu(&mut self) -> TransitionResult {
        self.apply(GameAction::ReturnToMenu)
    }

    pub fn set_state_playing(&mut self) -> TransitionResult {
        self.apply(GameAction::StartMatch)
    }

    pub fn set_state_over(&mut self) -> TransitionResult {
        self.apply(GameAction::MatchWon)
    }

    fn apply(&mut self, action: GameAction) -> TransitionResult {
        let result = self.fsm.transition(action);
        if result.success {
            info!("state {:?} -> {:?}", result.from_state, result.to_state);
            self.events.state_change = Some((result.from_state, result.to_state));
        } else {
            warn!("{:?} ignored in state {:?}", action, result.from_state);
        }
        result
    }

    fn sync_sprites(&mut self) {
        self.paddles.left.sync_sprite(&mut self.registry);
        self.paddles.right.sync_sprite(&mut self.registry);
        for ball in &self.balls {
            ball.sync_sprite(&mut self.registry);
        }
    }

    /// Resize the field; paddles and spawns pick it up on the next tick
    pub fn set_field(&mut self, field: Field) {
        self.ctx.field = field;
    }

    pub fn field(&self) -> Field {
        self.ctx.field
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    pub fn powerups(&self) -> &[PowerUp] {
        &self.powerups
    }

    pub fn generators(&self) -> &[ParticleGenerator] {
        &self.generators
    }

    pub fn paddles(&self) -> &Paddles {
        &self.paddles
    }

    pub fn paddles_mut(&mut self) -> &mut Paddles {
        &mut self.paddles
    }

    pub fn explosion_queue(&self) -> &ExplosionQueue {
        &self.explosions
    }

    /// Drawable registry for a renderer
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn tick_count(&self) -> u64 {
        self.ctx.tick
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}
