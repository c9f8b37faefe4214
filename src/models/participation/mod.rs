pub mod queries;
pub mod types;

pub use queries::{Aggregator, build_count_query, fold_rows};
pub use types::{CategoryRow, CountQuery, FilterParam, StoreError};
