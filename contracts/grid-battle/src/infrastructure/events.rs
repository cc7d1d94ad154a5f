use soroban_sdk::{contractevent, Address};

use crate::domain::Stage;

#[contractevent]
pub struct GameCreated {
    pub player_one: Address,
    pub player_two: Address,
    pub grid_size: u32,
    pub declared_ship_count: u32,
}

#[contractevent]
pub struct OpponentJoined {
    pub player: Address,
}

/// Emitted when a player's last cell commitment lands.
#[contractevent]
pub struct PlacementCompleted {
    pub player: Address,
    pub stage: Stage,
}

#[contractevent]
pub struct GuessSubmitted {
    pub player: Address,
    pub index: u32,
}

#[contractevent]
pub struct CellRevealed {
    pub player: Address,
    pub index: u32,
    pub is_ship: bool,
    pub stage: Stage,
}

/// Emitted when a fully revealed board passes the ship-count check.
#[contractevent]
pub struct BoardValidated {
    pub player: Address,
}

#[contractevent]
pub struct GameFinished {
    pub winner: Option<Address>,
    pub forfeited: bool,
}

#[contractevent]
pub struct GameDeleted {
    pub player: Address,
}
