use soroban_sdk::{Address, Env};

use crate::domain::{
    Cell, CellCommitment, CellSecret, CommitmentVerifier, DomainError, Game, GameRules,
    PlayerBoard,
};
use crate::infrastructure::{BoardRepository, GameRepository};

/// Query: Get game state
pub struct GetGameQuery;

impl GetGameQuery {
    pub fn execute(env: &Env) -> Result<Game, DomainError> {
        GameRepository::load(env)
    }
}

/// Query: Get a participant's board
pub struct GetBoardQuery;

impl GetBoardQuery {
    pub fn execute(env: &Env, player: &Address) -> Result<PlayerBoard, DomainError> {
        BoardRepository::load(env, player)
    }
}

/// Query: Get one cell of a participant's board
pub struct GetCellQuery;

impl GetCellQuery {
    pub fn execute(env: &Env, player: &Address, index: u32) -> Result<Cell, DomainError> {
        let game = GameRepository::load(env)?;
        if index >= game.cell_count() {
            return Err(DomainError::IndexOutOfRange);
        }

        BoardRepository::load(env, player)?
            .get(index)
            .ok_or(DomainError::CellNotPlaced)
    }
}

/// Query: Get game rules
pub struct GetRulesQuery;

impl GetRulesQuery {
    pub fn execute(env: &Env) -> Result<GameRules, DomainError> {
        Ok(GameRepository::load(env)?.rules())
    }
}

/// Query: Commitment a client should place for a cell
pub struct BuildCommitmentQuery;

impl BuildCommitmentQuery {
    pub fn execute(env: &Env, secret: &CellSecret, is_ship: bool) -> CellCommitment {
        CommitmentVerifier::commit(env, secret, is_ship)
    }
}
