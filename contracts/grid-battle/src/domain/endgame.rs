use super::board::PlayerBoard;
use super::errors::DomainError;

/// Checks a fully revealed board against the declared fleet size.
pub struct EndgameValidator;

impl EndgameValidator {
    /// True iff every cell is revealed and exactly `declared_ship_count` of them are ships.
    pub fn validate(board: &PlayerBoard, cell_count: u32, declared_ship_count: u32) -> bool {
        board.is_fully_revealed(cell_count) && board.revealed_ship_count() == declared_ship_count
    }

    pub fn ensure_valid(
        board: &PlayerBoard,
        cell_count: u32,
        declared_ship_count: u32,
    ) -> Result<(), DomainError> {
        if !board.is_fully_revealed(cell_count) {
            return Err(DomainError::BoardIncomplete);
        }
        if board.revealed_ship_count() != declared_ship_count {
            return Err(DomainError::ShipCountMismatch);
        }
        Ok(())
    }
}
