use crate::errors::Result;
use crate::goal::goal_model::Goal;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Loads the persisted goal, or `None` if none has been saved yet.
    /// Strict: an unparsable record fails with `GoalError::CorruptStore`.
    fn load(&self) -> Result<Option<Goal>>;

    /// Full overwrite of the single persisted goal record.
    async fn save(&self, goal: Goal) -> Result<Goal>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goal(&self, today: NaiveDate) -> Result<Goal>;
    async fn set_goal(&self, goal: Goal) -> Result<Goal>;
}
