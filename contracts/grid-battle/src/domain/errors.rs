use soroban_sdk::contracterror;

/// Rejection reasons for game actions. A rejected action never mutates state.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DomainError {
    // Game lifecycle errors
    GameNotFound = 1,
    GameAlreadyFinished = 2,
    InvalidStage = 3,
    GameNotFinished = 4,

    // Identity errors
    NotPlayer = 5,
    NotOpponent = 6,
    NotYourTurn = 7,
    NotDefender = 8,
    SelfPlayNotAllowed = 9,
    BoardOwnerMismatch = 10,
    NotRegistered = 11,

    // Configuration and index errors
    InvalidGridSize = 12,
    InvalidShipCount = 13,
    IndexOutOfRange = 14,

    // Reveal errors
    CommitmentMismatch = 15,

    // Cursor errors
    PlacementComplete = 16,
    CellNotPlaced = 17,
    CellAlreadyRevealed = 18,
    NoPendingGuess = 19,
    NotGuessedCell = 20,
    BoardAlreadyValidated = 21,
    BoardIncomplete = 22,

    // Endgame errors
    ShipCountMismatch = 23,
}

/// Coarse classification of a rejection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The actor is not the expected principal for this action.
    Authorization,
    /// The action is not valid in the current stage.
    Stage,
    /// An index or configuration value is outside its domain.
    Range,
    /// The revealed secret matches neither committed bit.
    CommitmentMismatch,
    /// A placement or reveal cursor was violated.
    Ordering,
    /// The endgame ship-count check failed.
    Integrity,
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::GameNotFound
            | DomainError::GameAlreadyFinished
            | DomainError::InvalidStage
            | DomainError::GameNotFinished => ErrorKind::Stage,
            DomainError::NotPlayer
            | DomainError::NotOpponent
            | DomainError::NotYourTurn
            | DomainError::NotDefender
            | DomainError::SelfPlayNotAllowed
            | DomainError::BoardOwnerMismatch
            | DomainError::NotRegistered => ErrorKind::Authorization,
            DomainError::InvalidGridSize
            | DomainError::InvalidShipCount
            | DomainError::IndexOutOfRange => ErrorKind::Range,
            DomainError::CommitmentMismatch => ErrorKind::CommitmentMismatch,
            DomainError::PlacementComplete
            | DomainError::CellNotPlaced
            | DomainError::CellAlreadyRevealed
            | DomainError::NoPendingGuess
            | DomainError::NotGuessedCell
            | DomainError::BoardAlreadyValidated
            | DomainError::BoardIncomplete => ErrorKind::Ordering,
            DomainError::ShipCountMismatch => ErrorKind::Integrity,
        }
    }
}
