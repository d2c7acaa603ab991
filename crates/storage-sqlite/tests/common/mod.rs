use std::sync::Arc;

use tempfile::TempDir;

use nestfund_storage_sqlite::{create_pool, run_migrations, spawn_writer, DbPool, WriteHandle};

/// A migrated database in a temp directory, alive for the test's duration.
pub struct TestDb {
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
    _dir: TempDir,
}

/// Must run inside a Tokio runtime: the writer actor spawns a task.
pub fn setup() -> TestDb {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("nestfund-test.db");
    let pool = create_pool(db_path.to_str().expect("utf-8 temp path")).expect("create pool");
    run_migrations(&pool).expect("run migrations");
    let writer = spawn_writer(Arc::clone(&pool));

    TestDb {
        pool,
        writer,
        _dir: dir,
    }
}
