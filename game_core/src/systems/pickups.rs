use crate::components::{Ball, Effect, Paddles, PowerUp, PowerUpKind};
use crate::field::Field;
use crate::registry::{Registry, Rgb};
use glam::Vec2;
use log::debug;

/// A power-up consumed this tick, with what the controller needs for the
/// follow-up burst and any deferred effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pickup {
    pub kind: PowerUpKind,
    pub center: Vec2,
    pub color: Rgb,
    /// Squared speed of the ball that took it, used as the burst velocity
    pub ball_speed_sq: f32,
    /// `None` when an unowned ball took it and nobody benefits
    pub effect: Option<Effect>,
}

/// Test every power-up against the balls in order. The first overlapping
/// ball consumes it and its owner gets the effect; untouched power-ups carry
/// over in their original order.
pub fn collect_powerups(
    powerups: &mut Vec<PowerUp>,
    balls: &[Ball],
    paddles: &mut Paddles,
    field: &Field,
    registry: &mut Registry,
) -> Vec<Pickup> {
    let mut pickups = Vec::new();
    let mut carried_over = Vec::with_capacity(powerups.len());

    for powerup in powerups.drain(..) {
        let hit = balls
            .iter()
            .find_map(|ball| powerup.check_collides(ball).map(|owner| (ball, owner)));

        let Some((ball, owner)) = hit else {
            carried_over.push(powerup);
            continue;
        };

        let effect = owner.side().map(|side| {
            let (friendly, opponent) = paddles.pair_mut(side);
            powerup.kind().apply(friendly, opponent, field)
        });
        debug!("{:?} collected by {:?}", powerup.kind(), owner);

        pickups.push(Pickup {
            kind: powerup.kind(),
            center: powerup.bounds().center(),
            color: powerup.color(),
            ball_speed_sq: ball.vel().length_squared(),
            effect,
        });
        powerup.retire(registry);
    }

    *powerups = carried_over;
    pickups
}
