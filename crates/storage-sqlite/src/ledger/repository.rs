use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use nestfund_core::errors::Result;
use nestfund_core::ledger::{ContributionRecord, Ledger, LedgerRepositoryTrait};

use super::model::ContributionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::contributions;

/// SQLite-backed ledger store.
///
/// Reads go through the pool; every mutation is a full table rewrite
/// executed on the single-writer actor, so a read-modify-rewrite cycle is
/// one atomic unit.
pub struct SqliteLedgerRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SqliteLedgerRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SqliteLedgerRepository { pool, writer }
    }

    /// Records are created with monotone wall-clock timestamps, so
    /// timestamp order is append order.
    fn load_all(conn: &mut SqliteConnection) -> Result<Ledger> {
        let rows = contributions::table
            .order(contributions::timestamp.asc())
            .load::<ContributionDB>(conn)
            .map_err(StorageError::from)?;

        let records = rows
            .into_iter()
            .map(ContributionRecord::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Ledger::new(records))
    }

    /// Full rewrite: delete everything, insert the snapshot. Always runs
    /// inside the writer's transaction.
    fn rewrite_all(conn: &mut SqliteConnection, ledger: &Ledger) -> Result<usize> {
        diesel::delete(contributions::table)
            .execute(conn)
            .map_err(StorageError::from)?;

        let rows: Vec<ContributionDB> = ledger
            .records()
            .iter()
            .cloned()
            .map(ContributionDB::from)
            .collect();

        let written = diesel::insert_into(contributions::table)
            .values(&rows)
            .execute(conn)
            .map_err(StorageError::from)?;

        Ok(written)
    }
}

#[async_trait]
impl LedgerRepositoryTrait for SqliteLedgerRepository {
    fn load(&self) -> Result<Ledger> {
        let mut conn = get_connection(&self.pool)?;
        Self::load_all(&mut conn)
    }

    async fn append(&self, record: ContributionRecord) -> Result<Ledger> {
        self.writer
            .exec(move |conn| {
                // Fresh read in the same transaction as the rewrite; the
                // append is one atomic read-modify-write unit.
                let ledger = Self::load_all(conn)?.with_appended(record);
                Self::rewrite_all(conn, &ledger)?;
                Ok(ledger)
            })
            .await
    }

    async fn replace_all(&self, ledger: Ledger) -> Result<usize> {
        self.writer
            .exec(move |conn| Self::rewrite_all(conn, &ledger))
            .await
    }

    async fn clear(&self) -> Result<()> {
        self.writer
            .exec(|conn| {
                diesel::delete(contributions::table)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
