use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use nestfund_core::errors::Result;
use nestfund_core::goal::{Goal, GoalRepositoryTrait};

use super::model::{GoalDB, GOAL_ROW_ID};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goal;

/// SQLite-backed goal store. The goal is one row, overwritten wholesale on
/// every save.
pub struct SqliteGoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SqliteGoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SqliteGoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for SqliteGoalRepository {
    fn load(&self) -> Result<Option<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let row = goal::table
            .find(GOAL_ROW_ID)
            .first::<GoalDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        match row {
            Some(db) => Ok(Some(Goal::try_from(db)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, new_goal: Goal) -> Result<Goal> {
        self.writer
            .exec(move |conn| {
                diesel::replace_into(goal::table)
                    .values(GoalDB::from(new_goal))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let row = goal::table
                    .find(GOAL_ROW_ID)
                    .first::<GoalDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::try_from(row)?)
            })
            .await
    }
}
