//! SQLite storage implementation for the savings goal.

mod model;
mod repository;

pub use model::{GoalDB, GOAL_ROW_ID};
pub use repository::SqliteGoalRepository;

// Re-export trait from core for convenience
pub use nestfund_core::goal::GoalRepositoryTrait;
