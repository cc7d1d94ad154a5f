use soroban_sdk::{contracttype, Address, Env};

use super::board::PlayerBoard;
use super::commitment::{CellCommitment, CellSecret, CommitmentVerifier};
use super::endgame::EndgameValidator;
use super::errors::DomainError;

/// Largest supported grid edge.
pub const MAX_GRID_SIZE: u32 = 10;

/// Game stages in the order they are visited. Guessing and Revealing alternate.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Stage {
    /// Player two has not joined yet
    WaitingForOpponent = 0,
    /// Both players commit their cells one by one
    Placement = 1,
    /// The turn player picks a cell on the opponent's board
    Guessing = 2,
    /// The defender opens the guessed cell
    Revealing = 3,
    /// A fleet is sunk; both players open their remaining cells
    PostReveal = 4,
    /// Terminal
    Finished = 5,
}

/// Game configuration (immutable after creation)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameRules {
    pub grid_size: u32,
    pub cell_count: u32,
    pub declared_ship_count: u32,
    pub max_grid_size: u32,
}

/// Game aggregate - core domain entity
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    // Players
    pub player_one: Address,
    pub player_two: Address,

    // Configuration
    pub grid_size: u32,
    pub declared_ship_count: u32,

    // Game state
    pub stage: Stage,
    pub turn: Option<Address>,
    pub current_guess: Option<u32>,
    pub winner: Option<Address>,

    // Completion counters, 0 until the first board finishes the phase
    pub placement_count: u32,
    pub reveal_count: u32,
}

/// What a successful reveal did to the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CellReveal {
    pub is_ship: bool,
    pub board_validated: bool,
}

/// How a close request was settled.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CloseOutcome {
    /// Game was already finished; nothing changed.
    AlreadyFinished,
    /// The closing player forfeited to the opponent.
    Forfeited,
    /// A winner was already recorded; only the stage was forced.
    Concluded,
}

impl Game {
    /// Creates a new game waiting for player two to join
    pub fn new(
        player_one: Address,
        player_two: Address,
        grid_size: u32,
        declared_ship_count: u32,
    ) -> Result<Self, DomainError> {
        if player_one == player_two {
            return Err(DomainError::SelfPlayNotAllowed);
        }

        if grid_size == 0 || grid_size > MAX_GRID_SIZE {
            return Err(DomainError::InvalidGridSize);
        }

        if declared_ship_count > grid_size * grid_size {
            return Err(DomainError::InvalidShipCount);
        }

        Ok(Self {
            player_one,
            player_two,
            grid_size,
            declared_ship_count,
            stage: Stage::WaitingForOpponent,
            turn: None,
            current_guess: None,
            winner: None,
            placement_count: 0,
            reveal_count: 0,
        })
    }

    pub fn cell_count(&self) -> u32 {
        self.grid_size * self.grid_size
    }

    pub fn rules(&self) -> GameRules {
        GameRules {
            grid_size: self.grid_size,
            cell_count: self.cell_count(),
            declared_ship_count: self.declared_ship_count,
            max_grid_size: MAX_GRID_SIZE,
        }
    }

    /// Registers player two and opens placement
    pub fn join(&mut self, player: &Address, board: &mut PlayerBoard) -> Result<(), DomainError> {
        self.ensure_not_finished()?;
        self.ensure_stage(Stage::WaitingForOpponent)?;

        if *player != self.player_two {
            return Err(DomainError::NotOpponent);
        }
        Self::ensure_owner(board, player)?;

        board.registered = true;
        self.stage = Stage::Placement;
        Ok(())
    }

    /// Stores the next cell commitment. Returns true when the board is complete.
    pub fn place(
        &mut self,
        player: &Address,
        board: &mut PlayerBoard,
        commitment: CellCommitment,
    ) -> Result<bool, DomainError> {
        self.ensure_not_finished()?;
        self.ensure_stage(Stage::Placement)?;
        self.ensure_player(player)?;
        Self::ensure_owner(board, player)?;

        if !board.registered {
            return Err(DomainError::NotRegistered);
        }

        let cell_count = self.cell_count();
        if board.placement_cursor() >= cell_count {
            return Err(DomainError::PlacementComplete);
        }

        board.place(commitment);
        if board.placement_cursor() < cell_count {
            return Ok(false);
        }

        board.ships_remaining = self.declared_ship_count;
        if self.placement_count == 0 {
            self.placement_count = 1;
        } else {
            self.stage = Stage::Guessing;
            self.turn = Some(self.player_one.clone());
        }
        Ok(true)
    }

    /// Records a guess against the opponent's board
    pub fn guess(
        &mut self,
        player: &Address,
        target: &PlayerBoard,
        index: u32,
    ) -> Result<(), DomainError> {
        self.ensure_not_finished()?;
        self.ensure_stage(Stage::Guessing)?;
        self.ensure_player(player)?;

        if !self.is_turn(player) {
            return Err(DomainError::NotYourTurn);
        }

        self.ensure_in_grid(index)?;
        Self::ensure_owner(target, &self.opponent_of(player)?)?;

        if target.is_revealed(index) {
            return Err(DomainError::CellAlreadyRevealed);
        }

        self.current_guess = Some(index);
        self.stage = Stage::Revealing;
        Ok(())
    }

    /// Opens a cell on the actor's own board
    pub fn reveal(
        &mut self,
        env: &Env,
        player: &Address,
        board: &mut PlayerBoard,
        index: u32,
        secret: &CellSecret,
    ) -> Result<CellReveal, DomainError> {
        self.ensure_not_finished()?;
        match self.stage {
            Stage::Revealing => self.reveal_guessed_cell(env, player, board, index, secret),
            Stage::PostReveal => self.reveal_remaining_cell(env, player, board, index, secret),
            _ => Err(DomainError::InvalidStage),
        }
    }

    /// Validates a board whose cells are all revealed already
    pub fn finalize(
        &mut self,
        player: &Address,
        board: &mut PlayerBoard,
    ) -> Result<(), DomainError> {
        self.ensure_not_finished()?;
        self.ensure_stage(Stage::PostReveal)?;
        self.ensure_player(player)?;
        Self::ensure_owner(board, player)?;

        if board.validated {
            return Err(DomainError::BoardAlreadyValidated);
        }

        EndgameValidator::ensure_valid(board, self.cell_count(), self.declared_ship_count)?;

        board.validated = true;
        self.record_validated_board();
        Ok(())
    }

    /// Ends the game on request of a player
    pub fn close(&mut self, player: &Address) -> Result<CloseOutcome, DomainError> {
        self.ensure_player(player)?;

        if self.stage == Stage::Finished {
            return Ok(CloseOutcome::AlreadyFinished);
        }

        let outcome = if self.winner.is_some() {
            CloseOutcome::Concluded
        } else {
            self.winner = Some(self.opponent_of(player)?);
            CloseOutcome::Forfeited
        };

        self.stage = Stage::Finished;
        self.turn = None;
        self.current_guess = None;
        Ok(outcome)
    }

    pub fn ensure_deletable(&self, player: &Address) -> Result<(), DomainError> {
        self.ensure_player(player)?;

        if self.stage != Stage::Finished {
            return Err(DomainError::GameNotFinished);
        }
        Ok(())
    }

    fn reveal_guessed_cell(
        &mut self,
        env: &Env,
        player: &Address,
        board: &mut PlayerBoard,
        index: u32,
        secret: &CellSecret,
    ) -> Result<CellReveal, DomainError> {
        self.ensure_player(player)?;
        if self.is_turn(player) {
            return Err(DomainError::NotDefender);
        }
        Self::ensure_owner(board, player)?;
        self.ensure_in_grid(index)?;

        let guessed = self.current_guess.ok_or(DomainError::NoPendingGuess)?;
        if index != guessed {
            return Err(DomainError::NotGuessedCell);
        }

        let is_ship = Self::open_cell(env, board, index, secret)?;
        let ships_remaining = if is_ship {
            board
                .ships_remaining
                .checked_sub(1)
                .ok_or(DomainError::ShipCountMismatch)?
        } else {
            board.ships_remaining
        };

        board.reveal(index, is_ship)?;
        board.ships_remaining = ships_remaining;
        self.current_guess = None;

        if !is_ship {
            self.advance_turn();
            self.stage = Stage::Guessing;
        } else if ships_remaining == 0 {
            self.winner = self.turn.take();
            self.stage = Stage::PostReveal;
        } else {
            // Attacker keeps the turn after a hit.
            self.stage = Stage::Guessing;
        }

        Ok(CellReveal {
            is_ship,
            board_validated: false,
        })
    }

    fn reveal_remaining_cell(
        &mut self,
        env: &Env,
        player: &Address,
        board: &mut PlayerBoard,
        index: u32,
        secret: &CellSecret,
    ) -> Result<CellReveal, DomainError> {
        self.ensure_player(player)?;
        Self::ensure_owner(board, player)?;
        self.ensure_in_grid(index)?;

        if board.validated {
            return Err(DomainError::BoardAlreadyValidated);
        }

        let is_ship = Self::open_cell(env, board, index, secret)?;

        let mut next = board.clone();
        next.reveal(index, is_ship)?;

        let cell_count = self.cell_count();
        if next.is_fully_revealed(cell_count) {
            EndgameValidator::ensure_valid(&next, cell_count, self.declared_ship_count)?;
            next.validated = true;
        }

        let board_validated = next.validated;
        *board = next;
        if board_validated {
            self.record_validated_board();
        }

        Ok(CellReveal {
            is_ship,
            board_validated,
        })
    }

    fn open_cell(
        env: &Env,
        board: &PlayerBoard,
        index: u32,
        secret: &CellSecret,
    ) -> Result<bool, DomainError> {
        let commitment = board.commitment_at(index)?;
        CommitmentVerifier::open(env, &commitment, secret).ok_or(DomainError::CommitmentMismatch)
    }

    fn record_validated_board(&mut self) {
        if self.reveal_count == 0 {
            self.reveal_count = 1;
        } else {
            self.stage = Stage::Finished;
        }
    }

    // Validation helpers

    fn ensure_not_finished(&self) -> Result<(), DomainError> {
        if self.stage == Stage::Finished {
            return Err(DomainError::GameAlreadyFinished);
        }
        Ok(())
    }

    fn ensure_stage(&self, expected: Stage) -> Result<(), DomainError> {
        if self.stage != expected {
            return Err(DomainError::InvalidStage);
        }
        Ok(())
    }

    fn ensure_in_grid(&self, index: u32) -> Result<(), DomainError> {
        if index >= self.cell_count() {
            return Err(DomainError::IndexOutOfRange);
        }
        Ok(())
    }

    fn ensure_owner(board: &PlayerBoard, player: &Address) -> Result<(), DomainError> {
        if board.owner != *player {
            return Err(DomainError::BoardOwnerMismatch);
        }
        Ok(())
    }

    pub fn ensure_player(&self, player: &Address) -> Result<(), DomainError> {
        if *player != self.player_one && *player != self.player_two {
            return Err(DomainError::NotPlayer);
        }
        Ok(())
    }

    pub fn opponent_of(&self, player: &Address) -> Result<Address, DomainError> {
        if *player == self.player_one {
            Ok(self.player_two.clone())
        } else if *player == self.player_two {
            Ok(self.player_one.clone())
        } else {
            Err(DomainError::NotPlayer)
        }
    }
}
