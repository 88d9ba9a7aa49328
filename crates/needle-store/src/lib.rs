pub mod jsonl;
pub mod results;

pub use jsonl::{dataset_path, read_jsonl, write_jsonl};
pub use results::{accuracy_tables, score_dir, AccuracyTable, FileReport, JsonlResultStore};
