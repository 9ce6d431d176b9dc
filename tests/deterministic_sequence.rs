use grid_snake::config::GameConfig;
use grid_snake::engine::{GameOverReason, GameStatus, GameStepEngine, StepOutcome};
use grid_snake::grid::Cell;
use grid_snake::input::Direction;

fn board_40x30() -> GameConfig {
    GameConfig {
        cols: 40,
        rows: 30,
        score_increment: 10,
        ..GameConfig::default()
    }
}

fn cells(raw: &[(i32, i32)]) -> Vec<Cell> {
    raw.iter().map(|&(x, y)| Cell::new(x, y)).collect()
}

#[test]
fn eating_food_in_front_grows_the_snake() {
    let mut engine = GameStepEngine::from_layout(
        board_40x30(),
        42,
        cells(&[(20, 15), (19, 15), (18, 15)]),
        Direction::Right,
        Cell::new(21, 15),
    )
    .expect("valid layout");

    assert_eq!(engine.step(), StepOutcome::Ate { score: 10 });

    let snapshot = engine.snapshot();
    assert_eq!(
        snapshot.snake,
        cells(&[(21, 15), (20, 15), (19, 15), (18, 15)])
    );
    assert_eq!(snapshot.score, 10);
    let food = snapshot.food.expect("food respawned");
    assert!(!snapshot.snake.contains(&food));
}

#[test]
fn stepping_off_the_left_edge_ends_the_game() {
    let layout = cells(&[(0, 15), (1, 15), (2, 15)]);
    let mut engine = GameStepEngine::from_layout(
        board_40x30(),
        42,
        layout.clone(),
        Direction::Left,
        Cell::new(30, 3),
    )
    .expect("valid layout");

    assert_eq!(
        engine.step(),
        StepOutcome::Ended(GameOverReason::WallCollision)
    );
    assert_eq!(engine.status(), GameStatus::GameOver);
    assert_eq!(engine.snapshot().snake, layout);
}

#[test]
fn turning_into_the_body_ends_the_game() {
    let mut engine = GameStepEngine::from_layout(
        board_40x30(),
        42,
        cells(&[(5, 5), (4, 5), (3, 5), (3, 6), (3, 7)]),
        Direction::Left,
        Cell::new(30, 3),
    )
    .expect("valid layout");

    assert_eq!(
        engine.step(),
        StepOutcome::Ended(GameOverReason::SelfCollision)
    );
    assert_eq!(engine.status(), GameStatus::GameOver);
}

#[test]
fn restart_after_game_over_resets_everything() {
    let mut engine = GameStepEngine::from_layout(
        board_40x30(),
        42,
        cells(&[(0, 15), (1, 15), (2, 15)]),
        Direction::Left,
        Cell::new(30, 3),
    )
    .expect("valid layout");
    engine.step();
    assert!(engine.is_game_over());

    engine.restart();

    assert_eq!(engine.snake().len(), 3);
    assert_eq!(engine.direction(), Direction::Right);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(engine.game_over_reason(), None);
    let food = engine.food().expect("fresh game has food");
    assert!(!engine.snake().occupies(food));
}

#[test]
fn stepwise_turns_food_and_wall() {
    let mut engine = GameStepEngine::from_layout(
        GameConfig {
            cols: 6,
            rows: 4,
            score_increment: 2,
            ..GameConfig::default()
        },
        7,
        cells(&[(1, 1), (0, 1)]),
        Direction::Right,
        Cell::new(2, 1),
    )
    .expect("valid layout");

    assert_eq!(engine.step(), StepOutcome::Ate { score: 2 });
    assert_eq!(engine.snake().len(), 3);
    assert_eq!(engine.snake().head(), Cell::new(2, 1));

    engine.set_pending_direction(Direction::Left);
    engine.set_pending_direction(Direction::Up);
    engine.step();
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(engine.snake().head(), Cell::new(2, 0));

    engine.step();
    assert_eq!(engine.status(), GameStatus::GameOver);
    assert_eq!(engine.game_over_reason(), Some(GameOverReason::WallCollision));
}
