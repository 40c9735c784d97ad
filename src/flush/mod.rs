mod jsonl;

pub use jsonl::{flush_run_to_jsonl, write_jsonl};
