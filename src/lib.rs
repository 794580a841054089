use wasm_bindgen::prelude::*;

pub mod board;
pub mod game;
pub mod rules;
pub mod setup;
pub mod types;

pub use game::{Game, Player, new_game};
pub use rules::{MoveError, is_legal};
pub use setup::{GameSetup, SetupError};
pub use types::{Cell, Color, MoveOutcome, second};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Game handle for the JS front end. Cells are passed as `(row, col)`.
#[wasm_bindgen]
pub struct WasmGame {
    inner: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame { inner: new_game() }
    }

    /// Starts from a custom `GameSetup` object.
    pub fn with_setup(setup: JsValue) -> Result<WasmGame, JsValue> {
        let setup: GameSetup = serde_wasm_bindgen::from_value(setup)?;
        let inner = Game::with_setup(setup).map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(WasmGame { inner })
    }

    /// Returns a `MoveOutcome` object: `{ kind, detail }`.
    pub fn attempt_move(
        &mut self,
        start_row: u8,
        start_col: u8,
        end_row: u8,
        end_col: u8,
    ) -> Result<JsValue, JsValue> {
        let outcome = self.inner.attempt_move(
            Cell::new(start_row, start_col),
            Cell::new(end_row, end_col),
        );
        Ok(serde_wasm_bindgen::to_value(&outcome)?)
    }

    pub fn switch_turn(&mut self) {
        self.inner.switch_turn();
    }

    /// Returns a `GameSnapshot` object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.snapshot())?)
    }

    pub fn legal_targets(&self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        let targets = self.inner.legal_targets(Cell::new(row, col));
        Ok(serde_wasm_bindgen::to_value(&targets)?)
    }

    pub fn is_wall(&self, row: u8, col: u8) -> bool {
        self.inner.is_wall(Cell::new(row, col))
    }

    /// 0=empty, 1=white, 2=black.
    pub fn piece_at(&self, row: u8, col: u8) -> u8 {
        self.inner
            .piece_at(Cell::new(row, col))
            .map_or(0, Color::code)
    }

    pub fn active_color(&self) -> u8 {
        self.inner.active_color().code()
    }

    pub fn is_game_over(&self) -> bool {
        self.inner.is_finished()
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
