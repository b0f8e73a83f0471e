use crate::components::Ball;
use crate::field::Field;
use crate::resources::{Events, GameRng, Score};
use log::debug;

/// A ball past the right edge scores for the left side and vice versa. The
/// ball is served again from the center rather than removed.
pub fn update_scoring(
    balls: &mut [Ball],
    field: &Field,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for ball in balls.iter_mut() {
        if ball.pos.x > field.width {
            score.increment_left();
            events.left_scored += 1;
            ball.reset_position(field, rng);
            debug!("left scores: {} - {}", score.left, score.right);
        } else if ball.pos.x + ball.size.x < 0.0 {
            score.increment_right();
            events.right_scored += 1;
            ball.reset_position(field, rng);
            debug!("right scores: {} - {}", score.left, score.right);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Owner;
    use crate::registry::Registry;
    use glam::Vec2;

    fn setup() -> (Registry, Field, Score, Events, GameRng) {
        (
            Registry::new(),
            Field::new(1280.0, 720.0),
            Score::new(),
            Events::new(),
            GameRng::new(12345),
        )
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut registry, field, mut score, mut events, mut rng) = setup();
        let mut balls = vec![Ball::new(
            Vec2::new(-10.5, 300.0),
            10.0,
            Vec2::new(-8.0, 0.0),
            &mut registry,
        )];

        update_scoring(&mut balls, &field, &mut score, &mut events, &mut rng);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert_eq!(events.right_scored, 1);
    }

    #[test]
    fn test_partly_visible_ball_does_not_score() {
        let (mut registry, field, mut score, mut events, mut rng) = setup();
        let mut balls = vec![Ball::new(
            Vec2::new(-9.0, 300.0),
            10.0,
            Vec2::new(-8.0, 0.0),
            &mut registry,
        )];

        update_scoring(&mut balls, &field, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score::new());
        assert_eq!(balls[0].pos.x, -9.0);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut registry, field, mut score, mut events, mut rng) = setup();
        let mut balls = vec![Ball::new(
            Vec2::new(field.width + 0.5, 300.0),
            10.0,
            Vec2::new(8.0, 0.0),
            &mut registry,
        )];

        update_scoring(&mut balls, &field, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 1);
        assert_eq!(score.right, 0);
        assert_eq!(events.left_scored, 1);
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut registry, field, mut score, mut events, mut rng) = setup();
        let mut ball = Ball::new(
            Vec2::new(field.width + 1.0, 300.0),
            10.0,
            Vec2::new(8.0, 0.0),
            &mut registry,
        );
        ball.set_owner(Owner::Right);
        let mut balls = vec![ball];

        update_scoring(&mut balls, &field, &mut score, &mut events, &mut rng);

        let ball = &balls[0];
        assert_eq!(ball.pos, field.centered(ball.size));
        assert_eq!(ball.owner(), Owner::None);
        assert!((6.0..11.0).contains(&ball.vel().x.abs()));
        assert!(ball.vel().y.abs() < 5.0);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut registry, field, mut score, mut events, mut rng) = setup();
        let mut balls: Vec<Ball> = [field.width + 1.0, field.width + 2.0, -40.0]
            .iter()
            .map(|&x| Ball::new(Vec2::new(x, 300.0), 10.0, Vec2::new(1.0, 0.0), &mut registry))
            .collect();

        update_scoring(&mut balls, &field, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 2);
        assert_eq!(score.right, 1);
    }
}
