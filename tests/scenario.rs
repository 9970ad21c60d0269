use breakout::renderer::{CommandBuffer, DrawCommand};
use breakout::sim::{Session, TickInput, tick};
use breakout::{FrameController, GameConfig, Key};
use glam::Vec2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-2
}

#[test]
fn test_debug_launch_scenario() {
    let config = GameConfig::default();
    let mut session = Session::new(&config, 2024);

    assert_eq!(session.board.width, 800.0);
    assert_eq!(session.board.height, 600.0);
    assert_eq!(session.field.paddle.width, 100.0);
    assert_eq!(session.field.paddle.pos.x, 400.0);
    assert!(approx(session.field.paddle.pos.y, 533.33));
    assert_eq!(session.ball.radius, 5.0);
    assert_eq!(session.ball.pos, Vec2::new(400.0, 300.0));
    assert_eq!(session.ball.vel, Vec2::ZERO);

    session.debug_launch();
    assert!(approx(session.ball.vel.x, -3.54));
    assert!(approx(session.ball.vel.y, 3.54));

    tick(&mut session, &TickInput::default(), None);
    assert!(approx(session.ball.pos.x, 396.46));
    assert!(approx(session.ball.pos.y, 303.54));
    assert!(!session.is_game_over());
}

#[test]
fn test_unattended_ball_ends_the_game() {
    // Launched down-left while the paddle runs off to the right: the ball
    // misses it and drops out of the bottom.
    let mut game = FrameController::new(&GameConfig::default(), 5);
    let mut surface = CommandBuffer::new();

    game.key_down(Key::Launch);
    game.key_down(Key::Right);
    for _ in 0..400 {
        game.frame(&mut surface);
        if game.session().is_game_over() {
            break;
        }
    }
    assert!(game.session().is_game_over());
    assert_eq!(game.session().score.score, 0);

    // Ball frozen, paddle still drawn, banner instead of the ball
    let frozen = game.session().ball.pos;
    surface.commands.clear();
    game.frame(&mut surface);
    assert_eq!(game.session().ball.pos, frozen);
    assert!(
        surface
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::FillText { text, .. } if text == "GameOver"))
    );
    assert!(
        !surface
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::FillCircle { .. }))
    );
}

#[test]
fn test_paddle_returns_ball_to_blocks() {
    // Ball dropped straight onto the paddle centre bounces back up and
    // eventually clears a block.
    let mut session = Session::new(&GameConfig::default(), 11);
    session.ball.set_position(400.0, 400.0);
    session.ball.set_velocity(Vec2::new(0.0, 4.0));

    let mut bounced = false;
    for _ in 0..300 {
        tick(&mut session, &TickInput::default(), None);
        if session.ball.vel.y < 0.0 {
            bounced = true;
        }
        if session.score.score > 0 {
            break;
        }
    }
    assert!(bounced);
    assert!(!session.is_game_over());
    assert_eq!(session.score.score, 1000);
    assert_eq!(session.field.grid.len(), 41);
    assert_eq!(session.ball.targets().len(), 42);
}
