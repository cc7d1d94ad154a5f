use soroban_sdk::{contracttype, Address, Env, Vec};

use super::commitment::CellCommitment;
use super::errors::DomainError;

/// One grid cell. Leaves `Committed` exactly once and never returns.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Cell {
    Committed(CellCommitment),
    Revealed(bool),
}

/// Per-player board state. Cells are stored row-major, index = y * grid_size + x.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlayerBoard {
    pub owner: Address,
    /// Opt-in flag: set at creation for player one, on join for player two.
    pub registered: bool,
    pub cells: Vec<Cell>,
    pub ships_remaining: u32,
    pub validated: bool,
}

impl PlayerBoard {
    pub fn new(env: &Env, owner: Address, registered: bool) -> Self {
        Self {
            owner,
            registered,
            cells: Vec::new(env),
            ships_remaining: 0,
            validated: false,
        }
    }

    /// Next cell index to fill during placement.
    pub fn placement_cursor(&self) -> u32 {
        self.cells.len()
    }

    pub fn get(&self, index: u32) -> Option<Cell> {
        self.cells.get(index)
    }

    /// True once a commitment has been placed at `index`.
    pub fn is_filled(&self, index: u32) -> bool {
        index < self.cells.len()
    }

    pub fn is_revealed(&self, index: u32) -> bool {
        matches!(self.get(index), Some(Cell::Revealed(_)))
    }

    /// Stores `commitment` at the placement cursor.
    pub fn place(&mut self, commitment: CellCommitment) {
        self.cells.push_back(Cell::Committed(commitment));
    }

    /// The commitment still hiding `index`.
    pub fn commitment_at(&self, index: u32) -> Result<CellCommitment, DomainError> {
        match self.get(index) {
            Some(Cell::Committed(commitment)) => Ok(commitment),
            Some(Cell::Revealed(_)) => Err(DomainError::CellAlreadyRevealed),
            None => Err(DomainError::CellNotPlaced),
        }
    }

    /// One-shot transition of a committed cell to its revealed value.
    pub fn reveal(&mut self, index: u32, is_ship: bool) -> Result<(), DomainError> {
        self.commitment_at(index)?;
        self.cells.set(index, Cell::Revealed(is_ship));
        Ok(())
    }

    pub fn revealed_count(&self) -> u32 {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, Cell::Revealed(_)))
            .count() as u32
    }

    pub fn revealed_ship_count(&self) -> u32 {
        self.cells
            .iter()
            .filter(|cell| *cell == Cell::Revealed(true))
            .count() as u32
    }

    pub fn is_fully_revealed(&self, cell_count: u32) -> bool {
        self.cells.len() == cell_count && self.revealed_count() == cell_count
    }
}
