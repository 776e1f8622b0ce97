pub mod scoring_table;
pub mod sequence;
pub mod output;

pub use scoring_table::{load_scoring_table, read_scoring_table};
pub use sequence::{parse_sequence, read_sequence, resolve_sequence};
pub use output::{write_result, OutputFormat};
