use anyhow::Context;
use todo_simple::config::{self, StoreConfig, ThreadsConfig};
use todo_simple::db::{init_db, Database};
use todo_simple::logging;
use todo_simple::publish::publish_pending;
use todo_simple::threads::ThreadsPoster;

/// `post_completed [limit]`: posts at most `limit` (default 1) completed tasks.
fn main() -> anyhow::Result<()> {
    // .env may set LOG_LEVEL, so it is read before the logger starts.
    config::load_dotenv();
    logging::init();

    let limit = match std::env::args().nth(1) {
        Some(a) => a
            .parse()
            .with_context(|| format!("'{a}' is not a valid limit"))?,
        None => 1,
    };

    let store_cfg = StoreConfig::from_env();
    let poster = ThreadsPoster::new(&ThreadsConfig::from_env()?)?;

    let db = Database::new(&store_cfg.database_path);
    init_db(&db)?;

    let summary = publish_pending(&db, &poster, limit)?;
    log::info!(
        "Done: {} posted, {} failed",
        summary.posted,
        summary.failed
    );
    Ok(())
}
