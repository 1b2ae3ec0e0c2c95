use rusqlite::params;

use super::connection::Database;
use crate::errors::PipelineError;
use crate::graph::TodoTask;

/// A completed task that has not been posted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpostedTask {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Upserts tasks by id in one transaction. An existing row keeps its
/// `is_posted` flag, so re-importing never re-posts anything.
pub fn import_tasks(db: &Database, tasks: &[TodoTask]) -> Result<usize, PipelineError> {
    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| PipelineError::DbError(format!("begin tx failed: {e}")))?;

        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO tasks
                        (id, title, content, status, importance, created_datetime, last_modified_datetime)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                     ON CONFLICT(id) DO UPDATE SET
                        title = excluded.title,
                        content = excluded.content,
                        status = excluded.status,
                        importance = excluded.importance,
                        created_datetime = excluded.created_datetime,
                        last_modified_datetime = excluded.last_modified_datetime",
                )
                .map_err(|e| PipelineError::DbError(format!("prepare upsert failed: {e}")))?;

            for task in tasks {
                stmt.execute(params![
                    task.id,
                    task.title,
                    task.content(),
                    task.status,
                    task.importance,
                    task.created_date_time,
                    task.last_modified_date_time,
                ])
                .map_err(|e| PipelineError::DbError(format!("upsert task {} failed: {e}", task.id)))?;
            }
        }

        tx.commit()
            .map_err(|e| PipelineError::DbError(format!("commit failed: {e}")))?;
        Ok(tasks.len())
    })
}

/// Completed tasks not yet posted, oldest insert first.
pub fn get_unposted_tasks(db: &Database, limit: usize) -> Result<Vec<UnpostedTask>, PipelineError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                "SELECT id, title, COALESCE(content, '') FROM tasks
                 WHERE is_posted = 0 AND status = 'completed'
                 ORDER BY rowid
                 LIMIT ?1",
            )
            .map_err(|e| PipelineError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map(params![limit as i64], |row| {
                Ok(UnpostedTask {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    content: row.get(2)?,
                })
            })
            .map_err(|e| PipelineError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| PipelineError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}

pub fn mark_task_as_posted(db: &Database, task_id: &str) -> Result<(), PipelineError> {
    db.with_conn(|conn| {
        conn.execute("UPDATE tasks SET is_posted = 1 WHERE id = ?1", params![task_id])
            .map_err(|e| PipelineError::DbError(format!("mark posted failed: {e}")))?;
        Ok(())
    })
}
