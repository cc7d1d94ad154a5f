mod commands;
mod dto;
mod queries;

pub use commands::{
    CloseGameCommand, CreateGameCommand, DeleteGameCommand, FinalizeBoardCommand,
    GuessCommand, JoinGameCommand, PlaceCellCommand, RevealCommand,
};
pub use dto::{CloseResult, PlacementResult, RevealResult};
pub use queries::{
    BuildCommitmentQuery, GetBoardQuery, GetCellQuery, GetGameQuery, GetRulesQuery,
};
