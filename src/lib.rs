pub mod aggregate;
pub mod args;
pub mod domain;
pub mod filters;
pub mod io;
pub mod options;
pub mod runner;
pub mod stats;
pub mod utils;

pub use aggregate::{aggregate, aggregate_with_stats};
pub use args::Args;
pub use options::AggregateOptions;
pub use runner::run;
pub use stats::AggregationStats;
