pub mod events;
pub mod storage;

pub use storage::{BoardRepository, GameRepository};
