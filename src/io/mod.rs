pub mod csv;
pub mod json;
pub mod loader;

// Re-export commonly used functions
pub use csv::{read_csv, write_group_csv, write_summary_csv};
pub use json::{write_group_json, write_json, write_summary_json};
pub use loader::{ensure_output_dir, load_or_sample, load_table, sample_frame, LoadedTable, TableSource};
