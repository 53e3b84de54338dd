use std::collections::{BTreeSet, HashMap, HashSet};

use crate::domain::{clean_labels, label_count, parent_domain};
use crate::stats::AggregationStats;

/// Counts how many subdomains map to each one-level-up parent.
///
/// Returns the counts together with the number of subdomains that had no
/// parent after filtering.
pub fn count_parents<I, S>(
    subdomains: I,
    filters: &HashSet<String>,
) -> (HashMap<String, usize>, usize)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut discarded = 0;

    for sub in subdomains {
        let labels = clean_labels(sub.as_ref(), filters);
        match parent_domain(&labels) {
            Some(parent) => *counts.entry(parent).or_insert(0) += 1,
            None => discarded += 1,
        }
    }

    (counts, discarded)
}

/// `min_labels` gates both the hit count and the parent's own label count.
/// Zero or negative thresholds admit everything.
pub fn meets_threshold(domain: &str, count: usize, min_labels: i64) -> bool {
    at_least(count, min_labels) && at_least(label_count(domain), min_labels)
}

fn at_least(value: usize, min: i64) -> bool {
    i64::try_from(value).map_or(true, |v| v >= min)
}

pub fn aggregate_with_stats<S: AsRef<str>>(
    subdomains: &[S],
    min_labels: i64,
    filters: &HashSet<String>,
) -> AggregationStats {
    let (parent_counts, lines_discarded) = count_parents(subdomains, filters);

    let retained = parent_counts
        .iter()
        .filter(|(domain, count)| meets_threshold(domain, **count, min_labels))
        .map(|(domain, _)| domain.clone())
        .collect();

    AggregationStats {
        lines_read: subdomains.len(),
        lines_discarded,
        parent_counts,
        retained,
    }
}

/// Parent domains seen at least `min_labels` times that themselves have at
/// least `min_labels` labels.
pub fn aggregate<S: AsRef<str>>(
    subdomains: &[S],
    min_labels: i64,
    filters: &HashSet<String>,
) -> BTreeSet<String> {
    aggregate_with_stats(subdomains, min_labels, filters).retained
}
