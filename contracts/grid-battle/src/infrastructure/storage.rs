use soroban_sdk::{contracttype, Address, Env};

use crate::domain::{DomainError, Game, PlayerBoard};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Game aggregate (instance storage)
    Game,
    /// Board of one participant (persistent storage)
    Board(Address),
}

/// TTL for game storage (~30 days)
pub const GAME_TTL_LEDGERS: u32 = 518_400;

/// Repository for the per-game state
pub struct GameRepository;

impl GameRepository {
    pub fn load(env: &Env) -> Result<Game, DomainError> {
        env.storage()
            .instance()
            .get(&DataKey::Game)
            .ok_or(DomainError::GameNotFound)
    }

    /// Saves the game with TTL extension
    pub fn save(env: &Env, game: &Game) {
        env.storage().instance().set(&DataKey::Game, game);
        env.storage()
            .instance()
            .extend_ttl(GAME_TTL_LEDGERS, GAME_TTL_LEDGERS);
    }

    pub fn remove(env: &Env) {
        env.storage().instance().remove(&DataKey::Game);
    }
}

/// Repository for per-participant boards, keyed by owner
pub struct BoardRepository;

impl BoardRepository {
    pub fn load(env: &Env, owner: &Address) -> Result<PlayerBoard, DomainError> {
        env.storage()
            .persistent()
            .get(&DataKey::Board(owner.clone()))
            .ok_or(DomainError::NotPlayer)
    }

    /// Saves a board with TTL extension
    pub fn save(env: &Env, board: &PlayerBoard) {
        let key = DataKey::Board(board.owner.clone());
        env.storage().persistent().set(&key, board);
        env.storage()
            .persistent()
            .extend_ttl(&key, GAME_TTL_LEDGERS, GAME_TTL_LEDGERS);
    }

    pub fn remove(env: &Env, owner: &Address) {
        env.storage()
            .persistent()
            .remove(&DataKey::Board(owner.clone()));
    }
}
