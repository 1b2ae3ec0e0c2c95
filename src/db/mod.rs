pub mod connection;
pub mod tasks;

pub use connection::{init_db, Database};
pub use tasks::{get_unposted_tasks, import_tasks, mark_task_as_posted, UnpostedTask};
