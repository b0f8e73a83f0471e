use crate::components::{Ball, Owner, Paddle};
use crate::field::{Aabb, Field};
use crate::params::Params;
use crate::registry::{Registry, Rgb, Sprite};
use crate::resources::GameRng;
use glam::Vec2;
use hecs::Entity;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    SizeIncrease,
    SpeedIncrease,
    ExtraBall,
    SizeDebuff,
    SpeedDebuff,
}

/// What the controller still has to do after an effect was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    PaddleChanged,
    ExtraBall,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 5] = [
        PowerUpKind::SizeIncrease,
        PowerUpKind::SpeedIncrease,
        PowerUpKind::ExtraBall,
        PowerUpKind::SizeDebuff,
        PowerUpKind::SpeedDebuff,
    ];

    pub fn random(rng: &mut GameRng) -> Self {
        Self::ALL[rng.0.gen_range(0..Self::ALL.len())]
    }

    pub fn color(self) -> Rgb {
        match self {
            PowerUpKind::SizeIncrease | PowerUpKind::SpeedIncrease => Rgb(180, 255, 0),
            PowerUpKind::SizeDebuff | PowerUpKind::SpeedDebuff => Rgb(255, 165, 0),
            PowerUpKind::ExtraBall => Rgb(255, 223, 12),
        }
    }

    pub fn apply(self, friendly: &mut Paddle, opponent: &mut Paddle, field: &Field) -> Effect {
        match self {
            PowerUpKind::SizeIncrease => {
                friendly.change_height(Params::SIZE_INCREASE_FACTOR, field);
                Effect::PaddleChanged
            }
            PowerUpKind::SizeDebuff => {
                opponent.change_height(Params::SIZE_DEBUFF_FACTOR, field);
                Effect::PaddleChanged
            }
            PowerUpKind::SpeedIncrease => {
                friendly.change_speed(Params::SPEED_INCREASE_DELTA);
                Effect::PaddleChanged
            }
            PowerUpKind::SpeedDebuff => {
                opponent.change_speed(Params::SPEED_DEBUFF_DELTA);
                Effect::PaddleChanged
            }
            PowerUpKind::ExtraBall => Effect::ExtraBall,
        }
    }
}

/// Stationary pickup
#[derive(Debug, Clone)]
pub struct PowerUp {
    kind: PowerUpKind,
    pos: Vec2,
    size: Vec2,
    sprite: Entity,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, pos: Vec2, registry: &mut Registry) -> Self {
        let size = Vec2::splat(Params::POWERUP_SIZE);
        let sprite = registry.register(Sprite::new(pos, size, kind.color()));
        Self {
            kind,
            pos,
            size,
            sprite,
        }
    }

    /// Random kind, placed anywhere vertically but clear of the outer tenth
    /// of the field on either side
    pub fn spawn(field: &Field, rng: &mut GameRng, registry: &mut Registry) -> Self {
        let kind = PowerUpKind::random(rng);
        let span_x = field.width - Params::POWERUP_SIZE;
        let span_y = field.height - Params::POWERUP_SIZE;
        let pos = Vec2::new(
            span_x * 0.8 * rng.unit() + span_x * 0.1,
            span_y * rng.unit(),
        );
        PowerUp::new(kind, pos, registry)
    }

    pub fn kind(&self) -> PowerUpKind {
        self.kind
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    pub fn sprite(&self) -> Entity {
        self.sprite
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// `Some(owner)` when the ball overlaps this pickup; the owner decides
    /// who benefits (nobody for `Owner::None`)
    pub fn check_collides(&self, ball: &Ball) -> Option<Owner> {
        if ball.bounds().overlaps(&self.bounds()) {
            Some(ball.owner())
        } else {
            None
        }
    }

    pub fn retire(self, registry: &mut Registry) {
        registry.unregister(self.sprite);
    }
}
