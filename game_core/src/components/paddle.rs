use crate::components::Ball;
use crate::field::{Aabb, Field};
use crate::params::Params;
use crate::registry::{Registry, Rgb, Sprite};
use crate::resources::Side;
use glam::Vec2;
use hecs::Entity;

/// Vertical actuator on one side of the field. Moves by velocity impulses
/// damped with friction; power-ups change its height and acceleration.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    pub last_pos: Vec2,
    velocity: f32,
    acceleration: f32,
    friction: f32,
    initial_size: Vec2,
    sprite: Entity,
}

impl Paddle {
    pub fn new(side: Side, width: f32, height: f32, field: &Field, registry: &mut Registry) -> Self {
        let size = Vec2::new(width, height);
        let sprite = registry.register(Sprite::new(Vec2::ZERO, size, Rgb::WHITE));
        let mut paddle = Self {
            side,
            pos: Vec2::ZERO,
            size,
            last_pos: Vec2::ZERO,
            velocity: 0.0,
            acceleration: Params::PADDLE_ACCELERATION,
            friction: Params::PADDLE_FRICTION,
            initial_size: size,
            sprite,
        };
        paddle.reset(field);
        paddle.last_pos = paddle.pos;
        paddle
    }

    /// Restore initial stats and center the paddle vertically
    pub fn reset(&mut self, field: &Field) {
        self.size = self.initial_size;
        self.acceleration = Params::PADDLE_ACCELERATION;
        self.friction = Params::PADDLE_FRICTION;
        self.velocity = 0.0;
        self.pos = Vec2::new(self.pinned_x(field), (field.height - self.size.y) / 2.0);
    }

    /// Horizontal position is fixed by side: a twentieth of the field width
    /// in from the paddle's own edge.
    pub fn pinned_x(&self, field: &Field) -> f32 {
        match self.side {
            Side::Left => field.width / 20.0,
            Side::Right => field.width - self.size.x - field.width / 20.0,
        }
    }

    /// Per-tick hook: pin x, apply velocity up to the boundary, apply friction
    pub fn advance(&mut self, field: &Field) {
        self.last_pos = self.pos;
        self.pos.x = self.pinned_x(field);

        let floor = field.height - self.size.y;
        if self.velocity > 0.0 && self.pos.y < floor {
            self.pos.y = (self.pos.y + self.velocity).min(floor);
        } else if self.velocity < 0.0 && self.pos.y > 0.0 {
            self.pos.y = (self.pos.y + self.velocity).max(0.0);
        }

        self.velocity *= self.friction;
    }

    pub fn move_up(&mut self) {
        self.velocity -= self.acceleration;
        if self.pos.y + self.velocity <= 0.0 {
            self.velocity = 0.0;
        }
    }

    pub fn move_down(&mut self, field: &Field) {
        self.velocity += self.acceleration;
        if self.pos.y + self.size.y + self.velocity >= field.height {
            self.velocity = 0.0;
        }
    }

    /// Track the nearest ball heading toward this side with a single impulse
    pub fn idle(&mut self, balls: &[Ball], field: &Field) {
        let center = self.bounds().center();
        let target = balls
            .iter()
            .filter(|ball| match self.side {
                Side::Left => ball.vel().x < 0.0,
                Side::Right => ball.vel().x > 0.0,
            })
            .map(|ball| (ball.bounds().center(), ball))
            .min_by(|(a, _), (b, _)| {
                a.distance_squared(center)
                    .total_cmp(&b.distance_squared(center))
            });

        let Some((ball_center, _)) = target else {
            return;
        };

        if ball_center.y > center.y {
            self.move_down(field);
        } else if ball_center.y < center.y {
            self.move_up();
        }
    }

    /// Scale the height, re-centered around the old center. Growth earns a
    /// small flat bonus.
    pub fn change_height(&mut self, factor: f32, field: &Field) {
        let old_height = self.size.y;
        let mut height = (old_height * factor).clamp(0.0, field.height);
        if factor > 1.0 {
            height = (height + Params::PADDLE_GROWTH_BONUS).min(field.height);
        }
        self.pos.y -= (height - old_height) / 2.0;
        self.size.y = height;
        self.pos.y = self.pos.y.clamp(0.0, field.height - height);
    }

    pub fn change_speed(&mut self, delta: f32) {
        self.acceleration = (self.acceleration + delta)
            .clamp(Params::PADDLE_ACCELERATION_MIN, Params::PADDLE_ACCELERATION_MAX);
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn acceleration(&self) -> f32 {
        self.acceleration
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Bounding box as of the previous tick
    pub fn last_bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.last_pos, self.size)
    }

    pub fn sprite(&self) -> Entity {
        self.sprite
    }

    pub fn sync_sprite(&self, registry: &mut Registry) {
        registry.update_sprite(self.sprite, Sprite::new(self.pos, self.size, Rgb::WHITE));
    }
}

/// The two paddles of a match
#[derive(Debug, Clone)]
pub struct Paddles {
    pub left: Paddle,
    pub right: Paddle,
}

impl Paddles {
    pub fn new(width: f32, height: f32, field: &Field, registry: &mut Registry) -> Self {
        Self {
            left: Paddle::new(Side::Left, width, height, field, registry),
            right: Paddle::new(Side::Right, width, height, field, registry),
        }
    }

    /// `(friendly, opponent)` as seen from `side`
    pub fn pair_mut(&mut self, side: Side) -> (&mut Paddle, &mut Paddle) {
        match side {
            Side::Left => (&mut self.left, &mut self.right),
            Side::Right => (&mut self.right, &mut self.left),
        }
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Paddle> {
        [&mut self.left, &mut self.right].into_iter()
    }

    pub fn reset(&mut self, field: &Field) {
        self.left.reset(field);
        self.right.reset(field);
    }
}
