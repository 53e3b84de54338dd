use std::collections::{BTreeSet, HashMap};

use crate::utils::format_number;

#[derive(Debug, Default)]
pub struct AggregationStats {
    pub lines_read: usize,
    /// Lines left with fewer than two labels once filtered.
    pub lines_discarded: usize,
    pub parent_counts: HashMap<String, usize>,
    pub retained: BTreeSet<String>,
}

impl AggregationStats {
    pub fn summary(&self) -> String {
        let top = self
            .parent_counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)));

        let mut out = String::from("--- Aggregation Summary ---\n");
        out.push_str(&format!(
            "Subdomains read: {}\n",
            format_number(self.lines_read)
        ));
        out.push_str(&format!(
            "Subdomains discarded (no parent): {}\n",
            format_number(self.lines_discarded)
        ));
        out.push_str(&format!(
            "Distinct parent domains: {}\n",
            format_number(self.parent_counts.len())
        ));
        out.push_str(&format!(
            "Parent domains retained: {}\n",
            format_number(self.retained.len())
        ));
        if let Some((domain, count)) = top {
            out.push_str(&format!(
                "Most frequent parent: {} ({} hits)\n",
                domain,
                format_number(*count)
            ));
        }
        out
    }
}
