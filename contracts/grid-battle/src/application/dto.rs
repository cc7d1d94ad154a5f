use soroban_sdk::{contracttype, Address};

use crate::domain::Stage;

/// Result of placing one cell commitment
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlacementResult {
    /// Number of cells this player has placed so far
    pub placed: u32,
    /// Whether this player's board is now complete
    pub board_complete: bool,
    pub stage: Stage,
}

/// Result of revealing a cell (returned to frontend)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevealResult {
    pub index: u32,
    pub is_ship: bool,
    /// Unsunk ship cells left on the revealer's board
    pub ships_remaining: u32,
    /// Whether this reveal completed and validated the board
    pub board_validated: bool,
    pub stage: Stage,
    pub turn: Option<Address>,
    pub winner: Option<Address>,
}

/// Result of a close request
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CloseResult {
    pub winner: Option<Address>,
    /// True when this request decided the winner
    pub forfeited: bool,
}
