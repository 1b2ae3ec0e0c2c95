use rusqlite::Connection;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::errors::PipelineError;

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS tasks (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT,
    status TEXT,
    importance TEXT,
    created_datetime TEXT,
    last_modified_datetime TEXT,
    is_posted INTEGER DEFAULT 0
);
";

// Thread-local connection slot, remembered together with the file it points at.
thread_local! {
    static DB_CONN: RefCell<Option<(PathBuf, Connection)>> = const { RefCell::new(None) };
}

#[derive(Clone, Debug)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Provides a mutable connection to the closure, opening it on first use
    /// in this thread.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, PipelineError>
    where
        F: FnOnce(&mut Connection) -> Result<T, PipelineError>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();

                let stale = !matches!(slot.as_ref(), Some((p, _)) if *p == self.path);
                if stale {
                    let conn = Connection::open(&self.path).map_err(|e| {
                        PipelineError::DbError(format!(
                            "Open DB {} failed: {e}",
                            self.path.display()
                        ))
                    })?;
                    *slot = Some((self.path.clone(), conn));
                }

                match slot.as_mut() {
                    Some((_, conn)) => f(conn),
                    None => Err(PipelineError::DbError("connection slot empty".into())),
                }
            })
            .map_err(|_| PipelineError::DbError("thread-local connection unavailable".into()))?
    }
}

/// Creates the tasks table if it isn't there yet.
pub fn init_db(db: &Database) -> Result<(), PipelineError> {
    db.with_conn(|conn| {
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| PipelineError::DbError(format!("Failed to apply schema: {e}")))?;
        Ok(())
    })?;

    log::debug!("Database ready at {}", db.path().display());
    Ok(())
}
