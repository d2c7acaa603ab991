//! Single-writer actor for the savings database.
//!
//! Every mutation is funneled through one background task that owns a
//! dedicated connection and runs each job inside an immediate transaction.
//! Serializing the write path makes a load-modify-rewrite cycle atomic
//! with respect to any other writer in the process.

use std::any::Any;
use std::sync::Arc;

use diesel::SqliteConnection;
use tokio::sync::{mpsc, oneshot};

use nestfund_core::errors::{Error, Result};

use super::DbPool;
use crate::errors::StorageError;

type BoxedValue = Box<dyn Any + Send + 'static>;
type Job = Box<dyn FnOnce(&mut SqliteConnection) -> Result<BoxedValue> + Send + 'static>;

/// Cloneable handle for submitting write jobs to the actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(Job, oneshot::Sender<Result<BoxedValue>>)>,
}

impl WriteHandle {
    /// Runs `job` on the writer's dedicated connection, inside a single
    /// transaction, and returns its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Any + Send + 'static,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        // The job's return value is type-erased through the channel and
        // restored below.
        let erased: Job = Box::new(move |conn| job(conn).map(|v| Box::new(v) as BoxedValue));

        self.tx
            .send((erased, reply_tx))
            .await
            .map_err(|_| StorageError::WriterStopped)?;

        let outcome = reply_rx.await.map_err(|_| StorageError::WriterStopped)?;
        outcome.map(|boxed| match boxed.downcast::<T>() {
            Ok(value) => *value,
            // exec wrapped the job itself, so the payload type always matches
            Err(_) => unreachable!("write job returned a value of the wrong type"),
        })
    }
}

/// Spawns the writer task. The returned handle is the only way to mutate
/// the database.
pub fn spawn_writer(pool: Arc<DbPool>) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(Job, oneshot::Sender<Result<BoxedValue>>)>(256);

    tokio::spawn(async move {
        // One connection, held for the lifetime of the actor.
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                log::error!("Writer could not acquire a database connection: {}", e);
                // Dropping rx makes every pending and future exec fail
                // with WriterStopped instead of hanging.
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<BoxedValue> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(Error::from);

            // Ignore a dropped receiver; the caller gave up on the reply.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
