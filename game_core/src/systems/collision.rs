use crate::components::{Ball, Paddles};
use crate::field::Field;
use crate::registry::Registry;
use crate::resources::{Events, GameRng};

/// Per-ball physics pass: paddle contact, wall bounce, then trail emission
pub fn resolve_ball_collisions(
    balls: &mut [Ball],
    paddles: &Paddles,
    field: &Field,
    registry: &mut Registry,
    rng: &mut GameRng,
    events: &mut Events,
) {
    for ball in balls.iter_mut() {
        if ball
            .check_paddle_collision(&paddles.left, &paddles.right, rng)
            .is_some()
        {
            events.paddle_hits += 1;
        }
        if ball.check_vertical_collision(field.height) {
            events.wall_hits += 1;
        }
        ball.update_trail(registry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Owner, Trail};
    use glam::Vec2;

    fn setup() -> (Registry, Field, Paddles, GameRng, Events) {
        let mut registry = Registry::new();
        let field = Field::new(1280.0, 720.0);
        let paddles = Paddles::new(40.0, 200.0, &field, &mut registry);
        (registry, field, paddles, GameRng::new(9), Events::new())
    }

    #[test]
    fn test_wall_hit_counted() {
        let (mut registry, field, paddles, mut rng, mut events) = setup();
        let mut balls = vec![Ball::new(
            Vec2::new(600.0, -3.0),
            10.0,
            Vec2::new(4.0, -6.0),
            &mut registry,
        )];

        resolve_ball_collisions(&mut balls, &paddles, &field, &mut registry, &mut rng, &mut events);

        assert_eq!(events.wall_hits, 1);
        assert_eq!(events.paddle_hits, 0);
        assert_eq!(balls[0].pos.y, 0.0);
        assert_eq!(balls[0].vel().y, 6.0);
    }

    #[test]
    fn test_paddle_hit_claims_ball() {
        let (mut registry, field, paddles, mut rng, mut events) = setup();
        let left = &paddles.left;
        let mut ball = Ball::new(
            Vec2::new(left.pos.x + left.size.x - 4.0, left.pos.y + 50.0),
            10.0,
            Vec2::new(-8.0, 0.0),
            &mut registry,
        );
        ball.last_pos = Vec2::new(left.pos.x + left.size.x + 4.0, left.pos.y + 50.0);
        let mut balls = vec![ball];

        resolve_ball_collisions(&mut balls, &paddles, &field, &mut registry, &mut rng, &mut events);

        assert_eq!(events.paddle_hits, 1);
        assert_eq!(balls[0].owner(), Owner::Left);
        assert!(balls[0].vel().x > 0.0);
    }

    #[test]
    fn test_every_ball_leaves_a_trail() {
        let (mut registry, field, paddles, mut rng, mut events) = setup();
        let mut balls: Vec<Ball> = (0..3)
            .map(|i| {
                Ball::new(
                    Vec2::new(500.0 + 50.0 * i as f32, 300.0),
                    12.0,
                    Vec2::new(3.0, 1.0),
                    &mut registry,
                )
            })
            .collect();

        resolve_ball_collisions(&mut balls, &paddles, &field, &mut registry, &mut rng, &mut events);

        assert_eq!(registry.count::<Trail>(), 3);
        assert!(balls.iter().all(|b| b.trail_len() == 1));
    }
}
