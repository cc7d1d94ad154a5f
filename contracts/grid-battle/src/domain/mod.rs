mod board;
mod commitment;
mod endgame;
mod errors;
mod game;
mod turn;

pub use board::{Cell, PlayerBoard};
pub use commitment::{CellCommitment, CellSecret, CommitmentVerifier};
pub use errors::{DomainError, ErrorKind};
pub use game::{CloseOutcome, Game, GameRules, Stage};
