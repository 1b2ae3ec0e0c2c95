use anyhow::{bail, Context};
use std::io::{self, BufRead, Write};
use todo_simple::auth::TokenProvider;
use todo_simple::config::{self, GraphConfig, StoreConfig};
use todo_simple::db::{import_tasks, init_db, Database};
use todo_simple::graph::{save_tasks_json, GraphClient, TodoList};
use todo_simple::logging;

/// `fetch_todos [list-number]`: without an argument the lists are shown and
/// the number is read from stdin.
fn main() -> anyhow::Result<()> {
    // .env may set LOG_LEVEL, so it is read before the logger starts.
    config::load_dotenv();
    logging::init();

    let graph_cfg = GraphConfig::from_env()?;
    let store_cfg = StoreConfig::from_env();

    let token = TokenProvider::new(&graph_cfg)?
        .access_token()
        .context("getting access token")?;
    let graph = GraphClient::new(&graph_cfg.api_base, token)?;

    let lists = graph.todo_lists().context("listing To Do lists")?;
    if lists.is_empty() {
        bail!("no To Do lists found");
    }

    println!("Your To Do lists:");
    for (i, list) in lists.iter().enumerate() {
        println!("{}. {} (ID: {})", i + 1, list.display_name, list.id);
    }

    let selected = select_list(&lists, std::env::args().nth(1))?;
    log::info!("Fetching tasks from '{}'...", selected.display_name);

    let tasks = graph
        .tasks(&selected.id)
        .with_context(|| format!("fetching tasks of '{}'", selected.display_name))?;
    log::info!("Found {} tasks", tasks.len());

    save_tasks_json(&tasks, &store_cfg.tasks_json_path)?;
    log::info!(
        "Saved {} tasks to {}",
        tasks.len(),
        store_cfg.tasks_json_path.display()
    );

    let db = Database::new(&store_cfg.database_path);
    init_db(&db)?;
    let imported = import_tasks(&db, &tasks)?;
    log::info!("Imported {imported} tasks to database");

    Ok(())
}

fn select_list(lists: &[TodoList], arg: Option<String>) -> anyhow::Result<&TodoList> {
    let answer = match arg {
        Some(a) => a,
        None => {
            print!("Enter the number of the list to fetch: ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        }
    };

    let n: usize = answer
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a list number", answer.trim()))?;

    n.checked_sub(1)
        .and_then(|i| lists.get(i))
        .with_context(|| format!("list number must be between 1 and {}", lists.len()))
}
