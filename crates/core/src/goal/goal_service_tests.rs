//! Tests for the goal service fallback and validation policy.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::errors::{Error, Result};
    use crate::goal::{Goal, GoalError, GoalRepositoryTrait, GoalService, GoalServiceTrait};

    struct MockGoalRepository {
        stored: Mutex<Option<Goal>>,
        corrupt: bool,
    }

    impl MockGoalRepository {
        fn empty() -> Self {
            MockGoalRepository {
                stored: Mutex::new(None),
                corrupt: false,
            }
        }

        fn with(goal: Goal) -> Self {
            MockGoalRepository {
                stored: Mutex::new(Some(goal)),
                corrupt: false,
            }
        }

        fn corrupt() -> Self {
            MockGoalRepository {
                stored: Mutex::new(None),
                corrupt: true,
            }
        }
    }

    #[async_trait]
    impl GoalRepositoryTrait for MockGoalRepository {
        fn load(&self) -> Result<Option<Goal>> {
            if self.corrupt {
                return Err(Error::Goal(GoalError::CorruptStore(
                    "bad target amount".to_string(),
                )));
            }
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn save(&self, goal: Goal) -> Result<Goal> {
            *self.stored.lock().unwrap() = Some(goal.clone());
            Ok(goal)
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[tokio::test]
    async fn test_get_goal_returns_persisted_goal() {
        let persisted = Goal {
            target_amount: dec!(12000),
            target_date: NaiveDate::from_ymd_opt(2027, 6, 30).unwrap(),
        };
        let service = GoalService::new(Arc::new(MockGoalRepository::with(persisted.clone())));

        assert_eq!(service.get_goal(today()).unwrap(), persisted);
    }

    #[tokio::test]
    async fn test_get_goal_falls_back_to_default_without_persisting() {
        let repository = Arc::new(MockGoalRepository::empty());
        let service = GoalService::new(Arc::clone(&repository) as Arc<dyn GoalRepositoryTrait>);

        let goal = service.get_goal(today()).unwrap();
        assert_eq!(goal, Goal::default_for(today()));
        // the fallback is handed to the caller, not written through
        assert!(repository.stored.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_goal_recovers_from_corrupt_store() {
        let service = GoalService::new(Arc::new(MockGoalRepository::corrupt()));

        let goal = service.get_goal(today()).unwrap();
        assert_eq!(goal, Goal::default_for(today()));
    }

    #[tokio::test]
    async fn test_set_goal_rejects_non_positive_target() {
        let repository = Arc::new(MockGoalRepository::empty());
        let service = GoalService::new(Arc::clone(&repository) as Arc<dyn GoalRepositoryTrait>);

        let result = service
            .set_goal(Goal {
                target_amount: dec!(0),
                target_date: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::Goal(GoalError::InvalidTarget(_)))
        ));
        assert!(repository.stored.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_goal_overwrites_wholesale() {
        let first = Goal {
            target_amount: dec!(10000),
            target_date: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
        };
        let second = Goal {
            target_amount: dec!(45000),
            target_date: NaiveDate::from_ymd_opt(2030, 12, 31).unwrap(),
        };

        let repository = Arc::new(MockGoalRepository::empty());
        let service = GoalService::new(Arc::clone(&repository) as Arc<dyn GoalRepositoryTrait>);

        service.set_goal(first).await.unwrap();
        service.set_goal(second.clone()).await.unwrap();

        assert_eq!(*repository.stored.lock().unwrap(), Some(second));
    }
}
