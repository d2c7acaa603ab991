use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::warn;

use super::goal_errors::GoalError;
use super::goal_model::Goal;
use super::goal_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::{Error, Result};

/// Service for reading and saving the savings goal.
pub struct GoalService {
    repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { repository }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    /// Returns the persisted goal, falling back to the default when none
    /// has been saved yet or the record is unreadable. The unreadable case
    /// is logged; the fallback is not persisted until the user saves an
    /// edit.
    fn get_goal(&self, today: NaiveDate) -> Result<Goal> {
        match self.repository.load() {
            Ok(Some(goal)) => Ok(goal),
            Ok(None) => Ok(Goal::default_for(today)),
            Err(Error::Goal(GoalError::CorruptStore(detail))) => {
                warn!(
                    "Persisted goal is unreadable, using the default goal: {}",
                    detail
                );
                Ok(Goal::default_for(today))
            }
            Err(e) => Err(e),
        }
    }

    /// Validates and overwrites the goal. A non-positive target never
    /// reaches the store.
    async fn set_goal(&self, goal: Goal) -> Result<Goal> {
        goal.validate()?;
        self.repository.save(goal).await
    }
}
