use anyhow::Result;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::args::Args;
use crate::filters::{load_filter_file, parse_filter_list};

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    pub input_path: PathBuf,
    /// `None` writes to stdout.
    pub output_path: Option<PathBuf>,
    pub min_labels: i64,
    pub filter_labels: HashSet<String>,
}

impl AggregateOptions {
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut filter_labels = parse_filter_list(&args.fs);
        if let Some(path) = args.filter_file.as_deref() {
            filter_labels.extend(load_filter_file(path)?);
        }

        Ok(Self {
            input_path: PathBuf::from(&args.input),
            output_path: args.output.clone(),
            min_labels: args.min,
            filter_labels,
        })
    }
}
