use game_core::systems::tick_particles;
use game_core::*;
use glam::Vec2;

fn playing(seed: u64) -> Pong {
    let mut pong = Pong::new(Config::default(), seed);
    assert!(pong.set_state_playing().success);
    pong
}

fn keys(f: impl Fn(&mut InputState)) -> InputState {
    let mut input = InputState::new();
    f(&mut input);
    input
}

fn assert_invariants(pong: &Pong) {
    let field = pong.field();
    for ball in pong.balls() {
        assert!(ball.vel().x.abs() <= Params::BALL_MAX_VELOCITY);
        assert!(ball.vel().y.abs() <= Params::BALL_MAX_VELOCITY);
    }
    for paddle in [&pong.paddles().left, &pong.paddles().right] {
        assert!(paddle.pos.y >= 0.0, "paddle above field: {}", paddle.pos.y);
        assert!(
            paddle.pos.y + paddle.height() <= field.height + 1e-3,
            "paddle below field: {} + {}",
            paddle.pos.y,
            paddle.height()
        );
    }
}

#[test]
fn test_invariants_hold_over_long_run() {
    let mut pong = Pong::new(Config::default(), 2024);

    // Idle demo first, then a scripted match
    for _ in 0..1500 {
        pong.tick(&InputState::new());
        assert_invariants(&pong);
    }

    pong.reset_game();
    pong.set_state_playing();
    for i in 0..1500u32 {
        let input = keys(|k| {
            k.left_up = (i / 40) % 2 == 0;
            k.left_down = (i / 40) % 2 == 1;
            k.right_up = (i / 25) % 3 == 0;
            k.right_down = (i / 25) % 3 == 2;
        });
        pong.tick(&input);
        assert_invariants(&pong);
    }
}

#[test]
fn test_right_exit_scores_for_left() {
    let mut pong = playing(5);
    pong.add_new_ball();
    let field = pong.field();
    pong.balls_mut()[0].pos.x = field.width + 1.0;

    pong.update_scoring();

    assert_eq!(pong.score(), Score { left: 1, right: 0 });
    let ball = &pong.balls()[0];
    assert_eq!(ball.pos, field.centered(ball.size));
    assert_eq!(ball.owner(), Owner::None);
    assert!((6.0..11.0).contains(&ball.vel().x.abs()));
    assert!(ball.vel().y.abs() < 5.0);
}

#[test]
fn test_left_exit_scores_for_right() {
    let mut pong = playing(6);
    pong.add_new_ball();
    let size = pong.balls()[0].size.x;
    pong.balls_mut()[0].pos.x = -size - 0.5;

    pong.update_scoring();

    assert_eq!(pong.score(), Score { left: 0, right: 1 });
    let field = pong.field();
    let ball = &pong.balls()[0];
    assert_eq!(ball.pos, field.centered(ball.size));
}

#[test]
fn test_generator_emits_thirty_then_finishes_after_decay() {
    let mut registry = Registry::new();
    let mut rng = GameRng::new(99);
    let mut generator = ParticleGenerator::new(Vec2::new(640.0, 360.0), 3, 120.0, 10, 5, Rgb::WHITE);

    let mut ticks = 0;
    loop {
        generator.tick(&mut registry, &mut rng);
        tick_particles(&mut registry);
        ticks += 1;
        if generator.is_finished() {
            break;
        }
        assert!(ticks < 20);
    }

    assert_eq!(generator.emitted(), 30);
    assert_eq!(ticks, 8);
    assert_eq!(registry.count::<Particle>(), 0);
}

#[test]
fn test_win_triggers_game_over_with_full_explosion_queue() {
    let mut pong = playing(11);
    *pong.score_mut() = Score {
        left: 50,
        right: 48,
    };

    pong.tick(&InputState::new());

    assert_eq!(pong.state(), GameState::GameOver);
    assert_eq!(pong.menu().winner(), Some(Side::Left));
    assert_eq!(
        pong.events().state_change,
        Some((GameState::Playing, GameState::GameOver))
    );

    let count = pong.balls().len() + pong.powerups().len();
    assert!(count > 0);
    let queue = pong.explosion_queue();
    assert_eq!(queue.len(), count);
    let mut indices: Vec<usize> = queue.indices().collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..count).collect::<Vec<_>>());
}

#[test]
fn test_win_after_a_busy_match() {
    let mut pong = playing(12);
    for _ in 0..450 {
        pong.tick(&InputState::new());
    }
    assert_eq!(pong.state(), GameState::Playing);

    // Wide lead so a goal on the trigger tick cannot undo the win
    *pong.score_mut() = Score {
        left: 30,
        right: 70,
    };
    pong.tick(&InputState::new());

    assert_eq!(pong.state(), GameState::GameOver);
    assert_eq!(pong.menu().winner(), Some(Side::Right));
    assert_eq!(
        pong.explosion_queue().len(),
        pong.balls().len() + pong.powerups().len()
    );
    assert!(pong.balls().iter().all(|b| b.vel() == Vec2::ZERO));
}

#[test]
fn test_no_win_without_margin() {
    let mut pong = playing(13);
    *pong.score_mut() = Score {
        left: 50,
        right: 49,
    };
    pong.tick(&InputState::new());
    assert_eq!(pong.state(), GameState::Playing);
}

#[test]
fn test_explosion_sequence_drains_board() {
    let mut pong = playing(21);
    for _ in 0..3 {
        pong.add_new_ball();
    }
    pong.add_new_powerup();
    pong.add_new_powerup();
    // Park the balls outside the power-up band so nothing is collected
    for (i, ball) in pong.balls_mut().iter_mut().enumerate() {
        ball.pos = Vec2::new(5.0, 100.0 + 150.0 * i as f32);
        ball.last_pos = ball.pos;
    }

    pong.end_game(Side::Left);
    assert_eq!(pong.explosion_queue().len(), 5);

    for _ in 0..5 {
        pong.tick(&InputState::new());
        assert_eq!(pong.events().explosions, 1);
        assert_eq!(pong.events().balls_spawned, 0, "no spawns after the match");
    }
    assert!(pong.explosion_queue().is_empty());
    assert!(pong.powerups().is_empty());
    assert_eq!(pong.balls().len(), 3);
    assert!(pong.balls().iter().all(|b| !b.is_alive()));
    assert_eq!(pong.generators().len(), 5);

    pong.tick(&InputState::new());
    assert!(pong.balls().is_empty());
    assert_eq!(pong.state(), GameState::GameOver);
}

#[test]
fn test_confirm_returns_to_menu_then_idle_reset() {
    let mut pong = playing(31);
    *pong.score_mut() = Score {
        left: 48,
        right: 50,
    };
    pong.tick(&InputState::new());
    assert_eq!(pong.state(), GameState::GameOver);

    // Confirm works before the explosions have finished
    pong.tick(&keys(|k| k.confirm = true));
    assert_eq!(pong.state(), GameState::Menu);

    // The finished match is still on the board, so the idle check resets it
    pong.tick(&InputState::new());
    assert!(pong.events().match_reset);
    assert_eq!(pong.score(), Score::new());
    assert!(pong.balls().is_empty());
    assert!(pong.explosion_queue().is_empty());
}

#[test]
fn test_reset_position_then_collision_keeps_owner_none() {
    let mut registry = Registry::new();
    let field = Field::new(1280.0, 720.0);
    let paddles = Paddles::new(40.0, 200.0, &field, &mut registry);
    let mut rng = GameRng::new(3);

    for _ in 0..50 {
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), 15.0, Vec2::new(-9.0, 2.0), &mut registry);
        ball.set_owner(Owner::Right);
        ball.reset_position(&field, &mut rng);

        assert!(!ball.check_vertical_collision(field.height));
        assert!(ball
            .check_paddle_collision(&paddles.left, &paddles.right, &mut rng)
            .is_none());
        assert_eq!(ball.owner(), Owner::None);
        assert!((6.0..11.0).contains(&ball.vel().x.abs()));
        assert!(ball.vel().y.abs() < 5.0);
        ball.retire(&mut registry);
    }
}

#[test]
fn test_face_hit_wins_tie_break() {
    let mut registry = Registry::new();
    let field = Field::new(1280.0, 720.0);
    let paddles = Paddles::new(40.0, 200.0, &field, &mut registry);
    let mut rng = GameRng::new(8);
    let left = &paddles.left;
    let face = left.pos.x + left.size.x;
    let bottom = left.pos.y + left.size.y;

    let mut ball = Ball::new(
        Vec2::new(face - 3.0, bottom - 5.0),
        10.0,
        Vec2::new(-8.0, -4.0),
        &mut registry,
    );
    // Previously clear of both the face and the bottom edge
    ball.last_pos = Vec2::new(face + 2.0, bottom + 2.0);

    let hit = ball.check_paddle_collision(&paddles.left, &paddles.right, &mut rng);

    assert_eq!(hit, Some((Side::Left, PaddleHit::Face)));
    assert_eq!(ball.pos.x, face);
    assert!(ball.vel().x > 0.0);
    assert_eq!(ball.owner(), Owner::Left);
}

#[test]
fn test_spawns_capped_at_fifty() {
    let mut pong = playing(41);
    for _ in 0..60 {
        pong.add_new_ball();
        pong.add_new_powerup();
    }
    assert_eq!(pong.balls().len(), 50);
    assert_eq!(pong.powerups().len(), 50);
}

#[test]
fn test_menu_play_starts_fresh_match() {
    let mut pong = Pong::new(Config::default(), 51);
    for _ in 0..10 {
        pong.tick(&InputState::new());
    }
    assert!(!pong.balls().is_empty());

    pong.tick(&keys(|k| k.left_up = true));
    assert_eq!(pong.menu().selected(), MenuButton::Play);
    pong.tick(&InputState::new());
    pong.tick(&keys(|k| k.right_down = true));

    assert_eq!(pong.state(), GameState::Playing);
    assert_eq!(
        pong.events().state_change,
        Some((GameState::Menu, GameState::Playing))
    );
    assert!(pong.balls().is_empty());
    assert_eq!(pong.tick_count(), 0);
}

#[test]
fn test_menu_exit_requests_quit() {
    let mut pong = Pong::new(Config::default(), 52);
    pong.tick(&keys(|k| k.left_down = true));
    pong.tick(&InputState::new());
    assert!(!pong.quit_requested());
    pong.tick(&keys(|k| k.right_down = true));
    assert!(pong.quit_requested());
    assert_eq!(pong.state(), GameState::Menu);
}

#[test]
fn test_resized_field_repins_paddles() {
    let mut pong = playing(61);
    pong.set_field(Field::new(800.0, 600.0));
    pong.tick(&InputState::new());

    assert_eq!(pong.paddles().left.pos.x, 40.0);
    assert_eq!(pong.paddles().right.pos.x, 800.0 - 40.0 - 40.0);
}

#[test]
fn test_config_from_toml_drives_match() {
    let config = Config::from_toml_str(
        r#"
        win_score = 3
        max_balls = 2
        "#,
    )
    .unwrap();
    let mut pong = Pong::new(config, 71);
    pong.set_state_playing();
    for _ in 0..5 {
        pong.add_new_ball();
    }
    assert_eq!(pong.balls().len(), 2);

    *pong.score_mut() = Score { left: 3, right: 1 };
    pong.check_for_win(false);
    assert_eq!(pong.state(), GameState::GameOver);
}
