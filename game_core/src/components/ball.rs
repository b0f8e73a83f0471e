use super::sign;
use crate::components::{Paddle, Trail};
use crate::field::{Aabb, Field};
use crate::params::Params;
use crate::registry::{Registry, Rgb, Sprite};
use crate::resources::{GameRng, Side};
use glam::Vec2;
use hecs::Entity;
use log::trace;
use rand::Rng;
use std::collections::VecDeque;

/// Which paddle most recently touched a ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Owner {
    Left,
    Right,
    #[default]
    None,
}

impl Owner {
    pub fn side(self) -> Option<Side> {
        match self {
            Owner::Left => Some(Side::Left),
            Owner::Right => Some(Side::Right),
            Owner::None => None,
        }
    }

    pub fn ball_color(self) -> Rgb {
        match self {
            Owner::Left => Rgb(255, 0, 0),
            Owner::Right => Rgb(0, 0, 255),
            Owner::None => Rgb::WHITE,
        }
    }

    pub fn trail_color(self) -> Rgb {
        match self {
            Owner::Left => Rgb(200, 0, 0),
            Owner::Right => Rgb(0, 0, 200),
            Owner::None => Rgb(150, 150, 150),
        }
    }
}

impl From<Side> for Owner {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Owner::Left,
            Side::Right => Owner::Right,
        }
    }
}

/// How a ball met a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleHit {
    /// Came in from the open side: bounced back across the field
    Face,
    /// Came up from below the paddle's bottom edge
    BottomEdge,
    /// Came down onto the paddle's top edge
    TopEdge,
    /// Overlapping with none of the above; ownership changes, no bounce
    Glance,
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub size: Vec2,
    pub last_pos: Vec2,
    vel: Vec2,
    owner: Owner,
    alive: bool,
    trail: VecDeque<Entity>,
    sprite: Entity,
}

impl Ball {
    pub fn new(pos: Vec2, size: f32, vel: Vec2, registry: &mut Registry) -> Self {
        let size = Vec2::splat(size);
        let sprite = registry.register(Sprite::new(pos, size, Owner::None.ball_color()));
        let mut ball = Self {
            pos,
            size,
            last_pos: pos,
            vel: Vec2::ZERO,
            owner: Owner::None,
            alive: true,
            trail: VecDeque::new(),
            sprite,
        };
        ball.set_vx(vel.x);
        ball.set_vy(vel.y);
        ball
    }

    /// New ball of random size served from the center
    pub fn spawn(field: &Field, rng: &mut GameRng, registry: &mut Registry) -> Self {
        let size = rng.0.gen_range(Params::BALL_MIN_SIZE..Params::BALL_MAX_SIZE) as f32;
        let mut ball = Ball::new(Vec2::ZERO, size, Vec2::ZERO, registry);
        ball.reset_position(field, rng);
        ball.last_pos = ball.pos;
        ball
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn owner(&self) -> Owner {
        self.owner
    }

    pub fn set_owner(&mut self, owner: Owner) {
        self.owner = owner;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn sprite(&self) -> Entity {
        self.sprite
    }

    pub fn color(&self) -> Rgb {
        self.owner.ball_color()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn last_bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.last_pos, self.size)
    }

    pub fn set_vx(&mut self, vx: f32) {
        self.vel.x = sign(vx) * vx.abs().min(Params::BALL_MAX_VELOCITY);
    }

    pub fn set_vy(&mut self, vy: f32) {
        self.vel.y = sign(vy) * vy.abs().min(Params::BALL_MAX_VELOCITY);
    }

    /// Per-tick hook: remember where we were, then move
    pub fn advance(&mut self) {
        self.last_pos = self.pos;
        self.pos += self.vel;
    }

    pub fn check_vertical_collision(&mut self, field_height: f32) -> bool {
        if self.pos.y + self.size.y > field_height {
            self.vertical_bounce(field_height - self.size.y);
            true
        } else if self.pos.y < 0.0 {
            self.vertical_bounce(0.0);
            true
        } else {
            false
        }
    }

    /// Resolve contact with either paddle. The left paddle is tested first and
    /// only a ball moving toward a paddle can hit it. Any overlap claims the
    /// ball for that side, even when no bounce branch applies.
    pub fn check_paddle_collision(
        &mut self,
        left: &Paddle,
        right: &Paddle,
        rng: &mut GameRng,
    ) -> Option<(Side, PaddleHit)> {
        let bounds = self.bounds();
        let side = if self.vel.x < 0.0
            && self.pos.x <= left.pos.x + left.size.x
            && bounds.overlaps(&left.bounds())
        {
            Side::Left
        } else if self.vel.x > 0.0
            && self.pos.x + self.size.x > right.pos.x
            && bounds.overlaps(&right.bounds())
        {
            Side::Right
        } else {
            return None;
        };

        let paddle = match side {
            Side::Left => left,
            Side::Right => right,
        };
        let hit = self.strike(paddle, rng);
        self.owner = side.into();
        trace!("ball hit {:?} paddle: {:?}", side, hit);
        Some((side, hit))
    }

    // Direction is decided from where ball and paddle were on the previous
    // tick, in order: face, bottom edge, top edge.
    fn strike(&mut self, paddle: &Paddle, rng: &mut GameRng) -> PaddleHit {
        let paddle_last = paddle.last_bounds();
        let push = paddle.velocity() * Params::PADDLE_INFLUENCE;

        let (was_clear_of_face, face_x) = match paddle.side {
            Side::Left => (
                self.last_pos.x >= paddle_last.max.x,
                paddle.pos.x + paddle.size.x,
            ),
            Side::Right => (
                self.last_pos.x + self.size.x <= paddle_last.min.x,
                paddle.pos.x - self.size.x,
            ),
        };

        if was_clear_of_face {
            self.horizontal_bounce(face_x, rng);
            self.vertical_bounce_with(self.pos.y, self.vel.y + push);
            PaddleHit::Face
        } else if self.last_pos.y >= paddle_last.max.y {
            self.vertical_bounce_with(paddle.pos.y + paddle.size.y, push);
            PaddleHit::BottomEdge
        } else if self.last_pos.y + self.size.y <= paddle_last.min.y {
            self.vertical_bounce_with(paddle.pos.y - self.size.y, push);
            PaddleHit::TopEdge
        } else {
            PaddleHit::Glance
        }
    }

    /// Reverse horizontally at `new_x`, then re-randomize both speeds
    pub fn horizontal_bounce(&mut self, new_x: f32, rng: &mut GameRng) {
        self.last_pos.x = self.pos.x;
        self.pos.x = new_x;
        let vx = -self.vel.x;
        self.set_vx(vx * (1.0 + rng.unit() * 0.5));
        self.set_vy(self.vel.y * (rng.unit() + 0.5));
    }

    pub fn vertical_bounce(&mut self, new_y: f32) {
        self.last_pos.y = self.pos.y;
        self.pos.y = new_y;
        self.vel.y = -self.vel.y;
    }

    /// Vertical bounce whose resulting speed takes the sign of `new_vy` and
    /// is never slower than the plain bounce
    pub fn vertical_bounce_with(&mut self, new_y: f32, new_vy: f32) {
        self.vertical_bounce(new_y);
        self.set_vy(sign(new_vy) * new_vy.abs().max(self.vel.y.abs()));
    }

    /// Serve again from the center with a fresh random velocity
    pub fn reset_position(&mut self, field: &Field, rng: &mut GameRng) {
        let vx = rng.sign() * rng.gen_range(Params::BALL_SERVE_VX_MIN, Params::BALL_SERVE_VX_MAX);
        let vy = rng.sign() * rng.unit() * Params::BALL_SERVE_VY_MAX;
        self.set_vx(vx);
        self.set_vy(vy);
        self.pos = field.centered(self.size);
        self.owner = Owner::None;
    }

    /// Emit one trail segment while alive and retire the oldest once decayed
    pub fn update_trail(&mut self, registry: &mut Registry) {
        if self.alive {
            let segment = Trail::spawn(registry, self.pos, self.size.x, self.owner.trail_color());
            self.trail.push_back(segment);
        }

        if let Some(&oldest) = self.trail.front() {
            let spent = registry.get::<Trail>(oldest).map_or(true, |t| t.is_spent());
            if spent {
                self.trail.pop_front();
                registry.unregister(oldest);
            }
        }
    }

    /// Stop, vanish and stop emitting trail
    pub fn self_destruct(&mut self) {
        self.vel = Vec2::ZERO;
        self.size = Vec2::ZERO;
        self.alive = false;
    }

    /// Unregister the ball and whatever is left of its trail
    pub fn retire(self, registry: &mut Registry) {
        for segment in self.trail {
            registry.unregister(segment);
        }
        registry.unregister(self.sprite);
    }

    pub fn sync_sprite(&self, registry: &mut Registry) {
        registry.update_sprite(self.sprite, Sprite::new(self.pos, self.size, self.color()));
    }
}
