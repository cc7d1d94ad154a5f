use soroban_sdk::{log, Address, Env};

use crate::domain::{
    CellCommitment, CellSecret, CloseOutcome, DomainError, Game, PlayerBoard, Stage,
};
use crate::infrastructure::events::{
    BoardValidated, CellRevealed, GameCreated, GameDeleted, GameFinished, GuessSubmitted,
    OpponentJoined, PlacementCompleted,
};
use crate::infrastructure::{BoardRepository, GameRepository};

use super::dto::{CloseResult, PlacementResult, RevealResult};

/// Command: Create the game (runs once, from the constructor)
pub struct CreateGameCommand;

impl CreateGameCommand {
    pub fn execute(
        env: &Env,
        player_one: Address,
        player_two: Address,
        grid_size: u32,
        declared_ship_count: u32,
    ) -> Result<(), DomainError> {
        let game = Game::new(
            player_one.clone(),
            player_two.clone(),
            grid_size,
            declared_ship_count,
        )?;

        // The creator is registered immediately, the opponent on join.
        BoardRepository::save(env, &PlayerBoard::new(env, player_one.clone(), true));
        BoardRepository::save(env, &PlayerBoard::new(env, player_two.clone(), false));
        GameRepository::save(env, &game);

        GameCreated {
            player_one,
            player_two,
            grid_size,
            declared_ship_count,
        }
        .publish(env);
        Ok(())
    }
}

/// Command: Player two joins the game
pub struct JoinGameCommand;

impl JoinGameCommand {
    pub fn execute(env: &Env, player: Address) -> Result<(), DomainError> {
        player.require_auth();

        let mut game = GameRepository::load(env)?;
        game.ensure_player(&player)?;
        let mut board = BoardRepository::load(env, &player)?;

        let before = game.stage;
        game.join(&player, &mut board)?;

        BoardRepository::save(env, &board);
        GameRepository::save(env, &game);

        OpponentJoined { player }.publish(env);
        log_transition(env, before, &game);
        Ok(())
    }
}

/// Command: Place the next cell commitment
pub struct PlaceCellCommand;

impl PlaceCellCommand {
    pub fn execute(
        env: &Env,
        player: Address,
        commitment: CellCommitment,
    ) -> Result<PlacementResult, DomainError> {
        player.require_auth();

        let mut game = GameRepository::load(env)?;
        game.ensure_player(&player)?;
        let mut board = BoardRepository::load(env, &player)?;

        let before = game.stage;
        let board_complete = game.place(&player, &mut board, commitment)?;

        BoardRepository::save(env, &board);
        GameRepository::save(env, &game);

        if board_complete {
            PlacementCompleted {
                player,
                stage: game.stage,
            }
            .publish(env);
            log_transition(env, before, &game);
        }

        Ok(PlacementResult {
            placed: board.placement_cursor(),
            board_complete,
            stage: game.stage,
        })
    }
}

/// Command: Guess a cell on the opponent's board
pub struct GuessCommand;

impl GuessCommand {
    pub fn execute(env: &Env, player: Address, index: u32) -> Result<(), DomainError> {
        player.require_auth();

        let mut game = GameRepository::load(env)?;
        let defender = game.opponent_of(&player)?;
        let target = BoardRepository::load(env, &defender)?;

        game.guess(&player, &target, index)?;
        GameRepository::save(env, &game);

        GuessSubmitted { player, index }.publish(env);
        Ok(())
    }
}

/// Command: Reveal a cell of the caller's own board
pub struct RevealCommand;

impl RevealCommand {
    pub fn execute(
        env: &Env,
        player: Address,
        index: u32,
        secret: CellSecret,
    ) -> Result<RevealResult, DomainError> {
        player.require_auth();

        let mut game = GameRepository::load(env)?;
        game.ensure_player(&player)?;
        let mut board = BoardRepository::load(env, &player)?;

        let before = game.stage;
        let reveal = game.reveal(env, &player, &mut board, index, &secret)?;

        BoardRepository::save(env, &board);
        GameRepository::save(env, &game);

        CellRevealed {
            player: player.clone(),
            index,
            is_ship: reveal.is_ship,
            stage: game.stage,
        }
        .publish(env);
        if reveal.board_validated {
            BoardValidated { player }.publish(env);
        }
        if game.stage == Stage::Finished {
            GameFinished {
                winner: game.winner.clone(),
                forfeited: false,
            }
            .publish(env);
        }
        log_transition(env, before, &game);

        Ok(RevealResult {
            index,
            is_ship: reveal.is_ship,
            ships_remaining: board.ships_remaining,
            board_validated: reveal.board_validated,
            stage: game.stage,
            turn: game.turn.clone(),
            winner: game.winner.clone(),
        })
    }
}

/// Command: Validate a board that was fully revealed during play
pub struct FinalizeBoardCommand;

impl FinalizeBoardCommand {
    pub fn execute(env: &Env, player: Address) -> Result<Stage, DomainError> {
        player.require_auth();

        let mut game = GameRepository::load(env)?;
        game.ensure_player(&player)?;
        let mut board = BoardRepository::load(env, &player)?;

        let before = game.stage;
        game.finalize(&player, &mut board)?;

        BoardRepository::save(env, &board);
        GameRepository::save(env, &game);

        BoardValidated { player }.publish(env);
        if game.stage == Stage::Finished {
            GameFinished {
                winner: game.winner.clone(),
                forfeited: false,
            }
            .publish(env);
        }
        log_transition(env, before, &game);

        Ok(game.stage)
    }
}

/// Command: Force the game to Finished
pub struct CloseGameCommand;

impl CloseGameCommand {
    pub fn execute(env: &Env, player: Address) -> Result<CloseResult, DomainError> {
        player.require_auth();

        let mut game = GameRepository::load(env)?;
        let before = game.stage;
        let outcome = game.close(&player)?;

        if outcome != CloseOutcome::AlreadyFinished {
            GameRepository::save(env, &game);
            GameFinished {
                winner: game.winner.clone(),
                forfeited: outcome == CloseOutcome::Forfeited,
            }
            .publish(env);
            log_transition(env, before, &game);
        }

        Ok(CloseResult {
            winner: game.winner,
            forfeited: outcome == CloseOutcome::Forfeited,
        })
    }
}

/// Command: Remove all game state once Finished
pub struct DeleteGameCommand;

impl DeleteGameCommand {
    pub fn execute(env: &Env, player: Address) -> Result<(), DomainError> {
        player.require_auth();

        let game = GameRepository::load(env)?;
        game.ensure_deletable(&player)?;

        BoardRepository::remove(env, &game.player_one);
        BoardRepository::remove(env, &game.player_two);
        GameRepository::remove(env);

        GameDeleted { player }.publish(env);
        Ok(())
    }
}

fn log_transition(env: &Env, before: Stage, game: &Game) {
    if before != game.stage {
        log!(env, "stage transition", before, game.stage);
    }
}
