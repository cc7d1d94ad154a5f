#![no_std]

mod application;
mod domain;
mod infrastructure;

// Re-export public types for contract interface
pub use application::{CloseResult, PlacementResult, RevealResult};
pub use domain::{Cell, DomainError as Error, ErrorKind, Game, GameRules, PlayerBoard, Stage};

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, BytesN, Env};

use application::{
    BuildCommitmentQuery, CloseGameCommand, CreateGameCommand, DeleteGameCommand,
    FinalizeBoardCommand, GetBoardQuery, GetCellQuery, GetGameQuery, GetRulesQuery, GuessCommand,
    JoinGameCommand, PlaceCellCommand, RevealCommand,
};

/// One deployed instance hosts exactly one game between two players.
#[contract]
pub struct GridBattleContract;

#[contractimpl]
impl GridBattleContract {
    /// Create the game. Deployment fails on an invalid configuration.
    pub fn __constructor(
        env: Env,
        player_one: Address,
        player_two: Address,
        grid_size: u32,
        declared_ship_count: u32,
    ) {
        if let Err(error) = CreateGameCommand::execute(
            &env,
            player_one,
            player_two,
            grid_size,
            declared_ship_count,
        ) {
            panic_with_error!(&env, error);
        }
    }

    // ==================== Game Commands ====================

    /// Player two registers and placement opens
    pub fn join(env: Env, player: Address) -> Result<(), Error> {
        JoinGameCommand::execute(&env, player)
    }

    /// Commit the next cell of the caller's board, in index order
    pub fn place(
        env: Env,
        player: Address,
        commitment: BytesN<32>,
    ) -> Result<PlacementResult, Error> {
        PlaceCellCommand::execute(&env, player, commitment)
    }

    /// Turn player guesses a cell on the opponent's board
    pub fn guess(env: Env, player: Address, index: u32) -> Result<(), Error> {
        GuessCommand::execute(&env, player, index)
    }

    /// Open a cell of the caller's board: the guessed cell while Revealing,
    /// any remaining cell during PostReveal
    pub fn reveal(
        env: Env,
        player: Address,
        index: u32,
        secret: BytesN<32>,
    ) -> Result<RevealResult, Error> {
        RevealCommand::execute(&env, player, index, secret)
    }

    /// Validate the caller's board when it is already fully revealed
    pub fn finalize(env: Env, player: Address) -> Result<Stage, Error> {
        FinalizeBoardCommand::execute(&env, player)
    }

    /// Force the game to Finished; forfeits when no winner is recorded yet
    pub fn close(env: Env, player: Address) -> Result<CloseResult, Error> {
        CloseGameCommand::execute(&env, player)
    }

    /// Remove the game state once Finished
    pub fn delete(env: Env, player: Address) -> Result<(), Error> {
        DeleteGameCommand::execute(&env, player)
    }

    // ==================== Queries ====================

    pub fn get_game(env: Env) -> Result<Game, Error> {
        GetGameQuery::execute(&env)
    }

    pub fn get_board(env: Env, player: Address) -> Result<PlayerBoard, Error> {
        GetBoardQuery::execute(&env, &player)
    }

    pub fn get_cell(env: Env, player: Address, index: u32) -> Result<Cell, Error> {
        GetCellQuery::execute(&env, &player, index)
    }

    pub fn get_rules(env: Env) -> Result<GameRules, Error> {
        GetRulesQuery::execute(&env)
    }

    /// Build a cell commitment (utility for frontend)
    pub fn build_commitment(env: Env, secret: BytesN<32>, is_ship: bool) -> BytesN<32> {
        BuildCommitmentQuery::execute(&env, &secret, is_ship)
    }
}
