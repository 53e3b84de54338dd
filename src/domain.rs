use std::collections::HashSet;

/// Splits a subdomain on `.` and drops every label present in `filters`.
///
/// An empty subdomain yields a single empty label, so it only disappears
/// entirely when the empty string is itself a filtered label.
pub fn clean_labels<'a>(subdomain: &'a str, filters: &HashSet<String>) -> Vec<&'a str> {
    subdomain
        .split('.')
        .filter(|label| !filters.contains(*label))
        .collect()
}

/// One level up: everything after the leftmost label, rejoined with `.`.
pub fn parent_domain(labels: &[&str]) -> Option<String> {
    if labels.len() < 2 {
        return None;
    }
    Some(labels[1..].join("."))
}

pub fn label_count(domain: &str) -> usize {
    domain.split('.').count()
}
