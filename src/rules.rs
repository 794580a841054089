use serde::Serialize;
use thiserror::Error;

use crate::game::Game;
use crate::types::Cell;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum MoveError {
    #[error("cell {0} is off the board")]
    OutOfBounds(Cell),
    #[error("the game is already over")]
    GameFinished,
    #[error("no ball of the active player at {0}")]
    NotYourPiece(Cell),
    #[error("moves must change exactly one of row or column")]
    NotStraight,
    #[error("stepping between a wall and open ground is limited to one cell")]
    WallBoundaryStep,
    #[error("a wall blocks the path")]
    WallInPath,
    #[error("a slide along the walls must stay on wall cells")]
    OutsideWallCorridor,
    #[error("a ball blocks the path")]
    PieceInPath,
    #[error("cannot land on a ball of the same color")]
    OwnPieceAtDestination,
    #[error("cannot pass over a throne")]
    ThroneInPath,
}

/// Legality of moving the active player's ball from `start` to `end`.
/// Does not check who owns the ball at `start`; see [`Game::attempt_move`].
pub fn is_legal(game: &Game, start: Cell, end: Cell) -> bool {
    check_move(game, start, end).is_ok()
}

/// Like [`is_legal`], reporting the first failing rule.
pub fn check_move(game: &Game, start: Cell, end: Cell) -> Result<(), MoveError> {
    check_bounds(start)?;
    check_bounds(end)?;

    let d_row = end.row as i32 - start.row as i32;
    let d_col = end.col as i32 - start.col as i32;
    if (d_row == 0) == (d_col == 0) {
        return Err(MoveError::NotStraight);
    }
    let distance = (d_row + d_col).abs();

    let walls = game.walls();
    match (walls.contains(start), walls.contains(end)) {
        (true, false) | (false, true) => {
            if distance > 1 {
                return Err(MoveError::WallBoundaryStep);
            }
        }
        (false, false) => {
            if has_wall_between(game, start, end) {
                return Err(MoveError::WallInPath);
            }
        }
        (true, true) => {
            if has_open_between(game, start, end) {
                return Err(MoveError::OutsideWallCorridor);
            }
        }
    }

    if has_piece_between(game, start, end) {
        return Err(MoveError::PieceInPath);
    }

    if game.piece_at(end) == Some(game.active_color()) {
        return Err(MoveError::OwnPieceAtDestination);
    }

    if game
        .thrones()
        .into_iter()
        .any(|throne| start.cells_between(end).any(|cell| cell == throne))
    {
        return Err(MoveError::ThroneInPath);
    }

    Ok(())
}

pub(crate) fn check_bounds(cell: Cell) -> Result<(), MoveError> {
    if cell.in_bounds() {
        Ok(())
    } else {
        Err(MoveError::OutOfBounds(cell))
    }
}

pub fn has_wall_between(game: &Game, start: Cell, end: Cell) -> bool {
    any_between(start, end, |cell| game.is_wall(cell))
}

pub fn has_open_between(game: &Game, start: Cell, end: Cell) -> bool {
    any_between(start, end, |cell| !game.is_wall(cell))
}

pub fn has_piece_between(game: &Game, start: Cell, end: Cell) -> bool {
    any_between(start, end, |cell| game.piece_at(cell).is_some())
}

fn any_between(start: Cell, end: Cell, pred: impl Fn(Cell) -> bool) -> bool {
    start.cells_between(end).any(pred)
}
