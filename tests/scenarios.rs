use throne::{Cell, Color, Game, GameSetup, MoveError, MoveOutcome, is_legal, new_game, second};

fn cell(row: u8, col: u8) -> Cell {
    Cell::new(row, col)
}

fn custom(black: &[(u8, u8)], white: &[(u8, u8)]) -> Game {
    Game::with_setup(GameSetup {
        first_pieces: black.iter().copied().map(Cell::from).collect(),
        second_pieces: white.iter().copied().map(Cell::from).collect(),
        ..GameSetup::default()
    })
    .unwrap()
}

fn count_on_board(game: &Game, color: Color) -> usize {
    (0..19u8)
        .flat_map(|row| (0..19u8).map(move |col| cell(row, col)))
        .filter(|&c| game.piece_at(c) == Some(color))
        .count()
}

#[test]
fn both_sides_start_with_eight_balls() {
    let game = new_game();

    for color in [Color::Black, Color::White] {
        assert_eq!(game.player(color).piece_count(), 8);
        assert_eq!(count_on_board(&game, color), 8);
        assert_eq!(second(second(color)), color);
    }
}

#[test]
fn slide_along_the_lower_wall_band() {
    let mut game = new_game();

    assert_eq!(game.attempt_move(cell(11, 2), cell(11, 4)), MoveOutcome::Moved);
}

#[test]
fn off_board_destination_is_rejected() {
    let mut game = new_game();

    assert!(matches!(
        game.attempt_move(cell(11, 2), cell(11, 20)),
        MoveOutcome::Invalid(MoveError::OutOfBounds(_))
    ));
}

#[test]
fn passing_over_a_throne_is_rejected() {
    let mut game = custom(&[(3, 2), (3, 8)], &[(0, 0)]);

    assert!(game.attempt_move(cell(3, 2), cell(3, 16)).is_invalid());
    assert_eq!(
        game.attempt_move(cell(3, 8), cell(3, 10)),
        MoveOutcome::Invalid(MoveError::ThroneInPath)
    );
}

#[test]
fn first_player_wins_on_the_lower_throne() {
    let mut game = custom(&[(18, 9)], &[(0, 0)]);

    assert_eq!(
        game.attempt_move(cell(18, 9), cell(15, 9)),
        MoveOutcome::GameOver(Color::Black)
    );
}

#[test]
fn capture_on_the_throne_still_wins() {
    let mut game = custom(&[(9, 0), (14, 9)], &[(16, 9), (0, 0)]);
    assert_eq!(game.attempt_move(cell(9, 0), cell(9, 1)), MoveOutcome::Moved);
    game.switch_turn();
    assert_eq!(game.attempt_move(cell(16, 9), cell(15, 9)), MoveOutcome::Moved);
    game.switch_turn();

    let outcome = game.attempt_move(cell(14, 9), cell(15, 9));

    assert_eq!(outcome, MoveOutcome::GameOver(Color::Black));
    assert_eq!(game.second_player().piece_count(), 1);
    assert_eq!(game.history()[2].captured, Some(cell(15, 9)));
}

#[test]
fn intervening_ball_blocks_the_column() {
    let mut game = custom(&[(7, 2), (9, 2), (1, 2)], &[(11, 2), (4, 2)]);

    // open cells between two wall ends are rejected before balls are looked at
    assert_eq!(
        game.attempt_move(cell(7, 2), cell(11, 2)),
        MoveOutcome::Invalid(MoveError::OutsideWallCorridor)
    );
    assert_eq!(game.piece_at(cell(11, 2)), Some(Color::White));

    assert_eq!(
        game.attempt_move(cell(1, 2), cell(6, 2)),
        MoveOutcome::Invalid(MoveError::PieceInPath)
    );
    assert_eq!(
        game.attempt_move(cell(9, 2), cell(9, 8)),
        MoveOutcome::Moved
    );
}

#[test]
fn no_self_capture_anywhere_on_the_standard_board() {
    let game = new_game();
    let own = game.first_player().pieces().to_vec();

    for &from in &own {
        for &to in &own {
            assert!(!is_legal(&game, from, to), "{from} -> {to}");
        }
    }
}

#[test]
fn capture_bookkeeping_over_a_short_game() {
    let mut game = custom(&[(9, 0), (12, 0)], &[(9, 6), (6, 0)]);

    assert_eq!(game.attempt_move(cell(9, 0), cell(9, 5)), MoveOutcome::Moved);
    game.switch_turn();
    assert_eq!(
        game.attempt_move(cell(9, 6), cell(9, 5)),
        MoveOutcome::MovedWithCapture
    );
    assert_eq!(game.player(Color::Black).pieces(), &[cell(12, 0)]);
    game.switch_turn();
    assert_eq!(
        game.attempt_move(cell(12, 0), cell(6, 0)),
        MoveOutcome::MovedWithCapture
    );

    for color in [Color::Black, Color::White] {
        assert_eq!(game.player(color).piece_count(), 1);
        assert_eq!(count_on_board(&game, color), 1);
    }
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.snapshot().move_count, 3);
}
