//! WASM bindings for tricktac-core
//!
//! Provides a JavaScript-friendly API for the game logic. This is the
//! boundary a browser frontend drives: input handlers call `selectPiece`
//! and `targetCell`, and the renderer redraws from `snapshot`.

use wasm_bindgen::prelude::*;

use crate::{Cell, Game, GameConfig, Phase, Player, Rank, StartingPlayer};

/// Ranks cross the boundary as 1=small, 2=medium, 3=large.
fn rank_from_u8(rank: u8) -> Option<Rank> {
    match rank {
        1 => Some(Rank::Small),
        2 => Some(Rank::Medium),
        3 => Some(Rank::Large),
        _ => None,
    }
}

/// WASM-friendly wrapper around Game
#[wasm_bindgen]
pub struct WasmGame {
    inner: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a new game.
    /// `starting_player`: 1 = red, 2 = blue, anything else = random.
    #[wasm_bindgen(constructor)]
    pub fn new(copies_per_rank: u8, starting_player: u8) -> WasmGame {
        let starting_player = match Player::from_bits(starting_player) {
            Some(player) => StartingPlayer::Fixed(player),
            None => StartingPlayer::Random,
        };
        WasmGame {
            inner: Game::new(GameConfig {
                copies_per_rank,
                starting_player,
                ..GameConfig::default()
            }),
        }
    }

    /// Select a piece from the reserve. Returns true if accepted.
    #[wasm_bindgen(js_name = selectPiece)]
    pub fn select_piece(&mut self, player: u8, rank: u8) -> bool {
        let (player, rank) = match (Player::from_bits(player), rank_from_u8(rank)) {
            (Some(player), Some(rank)) => (player, rank),
            _ => return false,
        };
        self.inner.select_piece(player, rank).is_ok()
    }

    /// Place the selected piece on a cell (0-8). Returns true if accepted.
    #[wasm_bindgen(js_name = targetCell)]
    pub fn target_cell(&mut self, cell: u8) -> bool {
        if !Cell(cell).is_valid() {
            return false;
        }
        self.inner.target_cell(Cell(cell)).is_ok()
    }

    /// Put a pending selection back.
    #[wasm_bindgen(js_name = cancelSelection)]
    pub fn cancel_selection(&mut self) {
        self.inner.cancel_selection();
    }

    /// Active player (1 or 2).
    #[wasm_bindgen(js_name = activePlayer)]
    pub fn active_player(&self) -> u8 {
        self.inner.active_player() as u8
    }

    /// Pending rank (1-3), or 0 if nothing is selected.
    #[wasm_bindgen(js_name = selectedRank)]
    pub fn selected_rank(&self) -> u8 {
        match self.inner.selected_rank() {
            Some(rank) => rank as u8 + 1,
            None => 0,
        }
    }

    /// Get reserves for a player as [small, medium, large].
    pub fn reserves(&self, player: u8) -> Vec<u8> {
        match Player::from_bits(player) {
            Some(player) => self.inner.inventory().remaining(player).to_vec(),
            None => vec![],
        }
    }

    /// Visible occupant of a cell as [player, rank], or [] when empty.
    pub fn occupant(&self, cell: u8) -> Vec<u8> {
        if !Cell(cell).is_valid() {
            return vec![];
        }
        match self.inner.board().occupant(Cell(cell)) {
            Some(piece) => vec![piece.owner as u8, piece.rank as u8 + 1],
            None => vec![],
        }
    }

    /// Winning line as [cell, cell, cell], or [] if the game is not won.
    #[wasm_bindgen(js_name = winningLine)]
    pub fn winning_line(&self) -> Vec<u8> {
        if self.inner.winner().is_none() {
            return vec![];
        }
        match self.inner.board().winning_line() {
            Some(line) => line.iter().map(|cell| cell.0).collect(),
            None => vec![],
        }
    }

    /// Check if the game has ended.
    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_over()
    }

    /// Get game result: "ongoing", "red_wins", "blue_wins", or "draw"
    pub fn result(&self) -> String {
        match self.inner.phase() {
            Phase::Won(Player::Red) => "red_wins".to_string(),
            Phase::Won(Player::Blue) => "blue_wins".to_string(),
            Phase::Drawn => "draw".to_string(),
            _ => "ongoing".to_string(),
        }
    }

    /// Full snapshot as a JS object (see [`crate::Snapshot`]).
    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).unwrap()
    }
}
