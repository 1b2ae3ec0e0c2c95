use anyhow::Context;
use todo_simple::config::{self, SimplifyPaths};
use todo_simple::simplify::{analyze, load_raw_items, save_simplified, simplify_all};
use todo_simple::logging;

fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    logging::init();
    let paths = SimplifyPaths::from_args(std::env::args().skip(1));

    // 1️⃣ Load the raw export (fails before any processing if it isn't a list of records)
    let raw = load_raw_items(&paths.input)
        .with_context(|| format!("loading {}", paths.input.display()))?;

    // 2️⃣ Simplify
    let simplified = simplify_all(&raw);

    // 3️⃣ Save
    save_simplified(&simplified, &paths.output)
        .with_context(|| format!("saving {}", paths.output.display()))?;
    log::info!("Saved simplified data to {}", paths.output.display());

    // 4️⃣ Report
    println!("{}", analyze(&simplified));
    Ok(())
}
