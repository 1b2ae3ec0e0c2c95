// src/publish.rs
use crate::db::{get_unposted_tasks, mark_task_as_posted, Database};
use crate::errors::PipelineError;
use crate::threads::{format_post, Poster};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PublishSummary {
    pub posted: usize,
    pub failed: usize,
}

/// Posts up to `limit` completed, unposted tasks. A task is only marked as
/// posted once the poster reports success; failures stay queued for the next run.
pub fn publish_pending<P: Poster + ?Sized>(
    db: &Database,
    poster: &P,
    limit: usize,
) -> Result<PublishSummary, PipelineError> {
    let tasks = get_unposted_tasks(db, limit)?;
    let mut summary = PublishSummary::default();

    if tasks.is_empty() {
        log::info!("No unposted tasks found");
        return Ok(summary);
    }

    for task in tasks {
        let text = format_post(&task.title, &task.content);
        match poster.post(&text) {
            Ok(post_id) => {
                mark_task_as_posted(db, &task.id)?;
                log::info!("Posted task '{}' (post {post_id})", task.title);
                summary.posted += 1;
            }
            Err(e) => {
                log::warn!("Error posting task '{}': {e}", task.title);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
