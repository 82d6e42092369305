//! Category counts behind the summary charts.

use std::collections::HashMap;

use serde::Serialize;

use hcp_model::{ChannelAssignment, Segment, SegmentedHcp};

/// One bar of a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub count: usize,
}

/// Counts of one categorical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub title: String,
    pub buckets: Vec<Bucket>,
}

impl Distribution {
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Percentage of the total in `bucket`; zero for an empty distribution.
    pub fn share(&self, bucket: &Bucket) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            bucket.count as f64 * 100.0 / total as f64
        }
    }

    pub fn max_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

// Count descending, then label ascending.
fn by_count<'a, I>(title: &str, labels: I) -> Distribution
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    let mut buckets: Vec<Bucket> = counts
        .into_iter()
        .map(|(label, count)| Bucket {
            label: label.to_string(),
            count,
        })
        .collect();
    buckets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    Distribution {
        title: title.to_string(),
        buckets,
    }
}

/// Providers per tier, in tier order, including empty tiers.
pub fn segment_distribution(rows: &[SegmentedHcp]) -> Distribution {
    let buckets = Segment::ALL
        .iter()
        .map(|segment| Bucket {
            label: segment.label().to_string(),
            count: rows.iter().filter(|row| row.segment == *segment).count(),
        })
        .collect();
    Distribution {
        title: "Segment".to_string(),
        buckets,
    }
}

pub fn specialty_distribution(rows: &[SegmentedHcp]) -> Distribution {
    by_count(
        "Specialty",
        rows.iter().map(|row| row.record.specialty.as_str()),
    )
}

pub fn state_distribution(rows: &[SegmentedHcp]) -> Distribution {
    by_count(
        "State",
        rows.iter().map(|row| row.record.state_code.as_str()),
    )
}

pub fn channel_distribution(assignments: &[ChannelAssignment]) -> Distribution {
    by_count(
        "Channel affinity",
        assignments.iter().map(|a| a.channel_affinity.label()),
    )
}
