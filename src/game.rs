use log::{debug, info, trace, warn};

use crate::board::{PieceGrid, WallGrid};
use crate::rules::{self, MoveError};
use crate::setup::{GameSetup, SetupError};
use crate::types::{Cell, Color, GameSnapshot, MoveOutcome, MoveRecord, PlayerView, second};

const FIRST: usize = 0;
const SECOND: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    color: Color,
    pieces: Vec<Cell>,
    opponent_throne: Cell,
}

impl Player {
    fn new(color: Color, pieces: Vec<Cell>, opponent_throne: Cell) -> Self {
        Self {
            color,
            pieces,
            opponent_throne,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Live positions of this player's balls.
    pub fn pieces(&self) -> &[Cell] {
        &self.pieces
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Landing here wins the game for this player.
    pub fn opponent_throne(&self) -> Cell {
        self.opponent_throne
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    walls: WallGrid,
    pieces: PieceGrid,
    players: [Player; 2],
    active: usize,
    winner: Option<Color>,
    history: Vec<MoveRecord>,
}

/// Standard game with the first player to move.
pub fn new_game() -> Game {
    Game::new()
}

impl Game {
    pub fn new() -> Self {
        Self::from_valid_setup(GameSetup::default())
    }

    pub fn with_setup(setup: GameSetup) -> Result<Self, SetupError> {
        setup.validate()?;
        Ok(Self::from_valid_setup(setup))
    }

    fn from_valid_setup(setup: GameSetup) -> Self {
        let first_color = setup.first_color;
        let players = [
            Player::new(first_color, setup.first_pieces, setup.second_throne),
            Player::new(second(first_color), setup.second_pieces, setup.first_throne),
        ];

        let mut pieces = PieceGrid::new();
        for player in &players {
            for &cell in &player.pieces {
                pieces.set(cell, Some(player.color));
            }
        }

        Self {
            walls: WallGrid::standard(),
            pieces,
            players,
            active: FIRST,
            winner: None,
            history: Vec::new(),
        }
    }

    /// Moves the active player's ball from `start` to `end`.
    ///
    /// Turns are not switched here; call [`Game::switch_turn`] after a
    /// `Moved` or `MovedWithCapture` outcome.
    pub fn attempt_move(&mut self, start: Cell, end: Cell) -> MoveOutcome {
        match self.apply_move(start, end) {
            Ok(outcome) => outcome,
            Err(err) => {
                trace!("rejected {start} -> {end}: {err}");
                MoveOutcome::Invalid(err)
            }
        }
    }

    fn apply_move(&mut self, start: Cell, end: Cell) -> Result<MoveOutcome, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameFinished);
        }
        rules::check_bounds(start)?;

        let color = self.active_color();
        let opponent = self.opponent_index();
        if self.pieces.get(start) != Some(color) || !self.active_player().pieces.contains(&start) {
            return Err(MoveError::NotYourPiece(start));
        }

        rules::check_move(self, start, end)?;

        let captured = match self.pieces.get(end) {
            Some(other) if other != color => {
                self.players[opponent].pieces.retain(|&cell| cell != end);
                Some(end)
            }
            _ => None,
        };

        self.pieces.set(start, None);
        self.pieces.set(end, Some(color));
        let mover = &mut self.players[self.active];
        if let Some(slot) = mover.pieces.iter_mut().find(|cell| **cell == start) {
            *slot = end;
        }
        let reached_throne = mover.opponent_throne == end;

        self.history.push(MoveRecord {
            color,
            from: start,
            to: end,
            captured,
        });
        debug!("{color:?} moved {start} -> {end}, captured: {captured:?}");

        if reached_throne {
            self.winner = Some(color);
            info!("{color:?} reached the throne at {end} and wins");
            return Ok(MoveOutcome::GameOver(color));
        }

        Ok(if captured.is_some() {
            MoveOutcome::MovedWithCapture
        } else {
            MoveOutcome::Moved
        })
    }

    pub fn switch_turn(&mut self) {
        if self.winner.is_some() {
            warn!("switching turns after the game has ended");
        }
        self.active = self.opponent_index();
        debug!("{:?} to move", self.active_color());
    }

    /// Every cell the active player's ball at `from` can legally move to.
    /// Empty when `from` holds no such ball or the game is over.
    pub fn legal_targets(&self, from: Cell) -> Vec<Cell> {
        if self.winner.is_some() || self.pieces.get(from) != Some(self.active_color()) {
            return Vec::new();
        }

        let size = crate::board::BOARD_SIZE as u8;
        let column = (0..size).map(|row| Cell::new(row, from.col));
        let row = (0..size).map(|col| Cell::new(from.row, col));
        column
            .chain(row)
            .filter(|&to| to != from && rules::is_legal(self, from, to))
            .collect()
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    pub fn opponent(&self) -> &Player {
        &self.players[self.opponent_index()]
    }

    pub fn active_color(&self) -> Color {
        self.active_player().color
    }

    pub fn first_player(&self) -> &Player {
        &self.players[FIRST]
    }

    pub fn second_player(&self) -> &Player {
        &self.players[SECOND]
    }

    pub fn player(&self, color: Color) -> &Player {
        if self.players[FIRST].color == color {
            &self.players[FIRST]
        } else {
            &self.players[SECOND]
        }
    }

    /// The throne `color` defends, i.e. the one its opponent must reach.
    pub fn throne_of(&self, color: Color) -> Cell {
        self.player(second(color)).opponent_throne
    }

    pub(crate) fn thrones(&self) -> [Cell; 2] {
        [
            self.players[FIRST].opponent_throne,
            self.players[SECOND].opponent_throne,
        ]
    }

    pub fn walls(&self) -> &WallGrid {
        &self.walls
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(cell)
    }

    pub fn piece_at(&self, cell: Cell) -> Option<Color> {
        self.pieces.get(cell)
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            walls: self.walls.to_array(),
            board: self.pieces.to_array(),
            active_color: self.active_color(),
            winner: self.winner,
            players: self.players.iter().map(|p| self.player_view(p)).collect(),
            move_count: u32::try_from(self.history.len()).unwrap_or(u32::MAX),
        }
    }

    fn player_view(&self, player: &Player) -> PlayerView {
        PlayerView {
            color: player.color,
            pieces: player.pieces.clone(),
            piece_count: u8::try_from(player.pieces.len()).unwrap_or(u8::MAX),
            throne: self.throne_of(player.color),
            opponent_throne: player.opponent_throne,
        }
    }

    fn opponent_index(&self) -> usize {
        1 - self.active
    }

    #[cfg(test)]
    fn assert_consistent(&self) {
        for player in &self.players {
            assert_eq!(player.pieces.len(), self.pieces.count(player.color));
            for &cell in &player.pieces {
                assert_eq!(self.pieces.get(cell), Some(player.color));
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
