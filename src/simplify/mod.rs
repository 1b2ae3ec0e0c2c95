pub mod analysis;
pub mod batch;
pub mod dates;
pub mod io;
pub mod item;

pub use analysis::{analyze, analyze_with_rng, AnalysisReport, FieldCoverage};
pub use batch::{simplify_all, simplify_all_with_progress, Progress};
pub use dates::{parse_date, reconcile, DateSpan, ParsedDate, DATE_KEYS};
pub use io::{load_raw_items, parse_raw_items, save_simplified};
pub use item::{simplify_item, RawItem, SimplifiedItem};
