// src/simplify/batch.rs

use super::item::{simplify_item, RawItem, SimplifiedItem};

/// How often a progress notification is emitted.
pub const PROGRESS_EVERY: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Started { total: usize },
    Processed { done: usize, total: usize },
}

/// Simplifies every item in order, one output per input, logging progress.
pub fn simplify_all(items: &[RawItem]) -> Vec<SimplifiedItem> {
    simplify_all_with_progress(items, |p| match p {
        Progress::Started { total } => log::info!("Simplifying {total} todo items..."),
        Progress::Processed { done, total } => log::info!("Processed {done}/{total} items..."),
    })
}

/// Same as [`simplify_all`] but hands progress to `on_progress` instead of the log.
/// The callback only observes; it cannot change the output.
pub fn simplify_all_with_progress<F>(items: &[RawItem], mut on_progress: F) -> Vec<SimplifiedItem>
where
    F: FnMut(Progress),
{
    let total = items.len();
    on_progress(Progress::Started { total });

    let mut out = Vec::with_capacity(total);
    for (i, item) in items.iter().enumerate() {
        out.push(simplify_item(item));

        let done = i + 1;
        if done % PROGRESS_EVERY == 0 {
            on_progress(Progress::Processed { done, total });
        }
    }
    out
}
