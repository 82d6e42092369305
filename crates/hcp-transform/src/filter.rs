//! View filtering over computed results.
//!
//! Filters only select rows. Scores, ranks, and tiers are never recomputed.

use serde::{Deserialize, Serialize};

use hcp_common::contains_ignore_case;
use hcp_model::{ChannelAssignment, SegmentedHcp};

/// Row selection for the ranked table.
///
/// Empty `states` or `specialties` select everything. The two search strings
/// are case-insensitive substring matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub states: Vec<String>,
    pub specialties: Vec<String>,
    pub npi_search: String,
    pub specialty_search: String,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_specialties<I, S>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_npi_search(mut self, text: impl Into<String>) -> Self {
        self.npi_search = text.into();
        self
    }

    pub fn with_specialty_search(mut self, text: impl Into<String>) -> Self {
        self.specialty_search = text.into();
        self
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
            && self.specialties.is_empty()
            && self.npi_search.trim().is_empty()
            && self.specialty_search.trim().is_empty()
    }

    pub fn matches(&self, row: &SegmentedHcp) -> bool {
        let record = &row.record;
        (self.states.is_empty() || self.states.iter().any(|s| s == &record.state_code))
            && (self.specialties.is_empty()
                || self.specialties.iter().any(|s| s == &record.specialty))
            && contains_ignore_case(&record.npi_id, self.npi_search.trim())
            && contains_ignore_case(&record.specialty, self.specialty_search.trim())
    }
}

/// Rows of `ranked` matching `filter`, in their original order.
pub fn filter_ranked(ranked: &[SegmentedHcp], filter: &FilterOptions) -> Vec<SegmentedHcp> {
    ranked
        .iter()
        .filter(|row| filter.matches(row))
        .cloned()
        .collect()
}

/// Affinity rows paired with the ranked rows that match `filter`.
///
/// `affinity` must be in the same order as `ranked`, as produced by
/// [`crate::run_pipeline`]. Rows are paired by position, so duplicate ids
/// select only the matching occurrence.
pub fn filter_affinity(
    ranked: &[SegmentedHcp],
    affinity: &[ChannelAssignment],
    filter: &FilterOptions,
) -> Vec<ChannelAssignment> {
    ranked
        .iter()
        .zip(affinity)
        .filter(|(row, assignment)| {
            row.record.npi_id == assignment.npi_id && filter.matches(row)
        })
        .map(|(_, assignment)| assignment.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hcp_model::{ChannelAffinity, HcpRecord, Segment, WritingBehavior};

    fn row(id: &str, specialty: &str, state: &str, rank: usize) -> SegmentedHcp {
        SegmentedHcp {
            record: HcpRecord::new(id, specialty, 100.0, state, WritingBehavior::Medium),
            score: 200.0,
            priority_rank: rank,
            segment: Segment::Middle,
        }
    }

    fn table() -> Vec<SegmentedHcp> {
        vec![
            row("1000000001", "Oncology", "CA", 1),
            row("1000000002", "Neurology", "NY", 2),
            row("1000000013", "Pediatric Oncology", "CA", 3),
        ]
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = FilterOptions::new();
        assert!(filter.is_empty());
        assert_eq!(filter_ranked(&table(), &filter), table());
    }

    #[test]
    fn state_and_specialty_sets() {
        let filter = FilterOptions::new().with_states(["CA"]);
        let ids: Vec<String> = filter_ranked(&table(), &filter)
            .into_iter()
            .map(|r| r.record.npi_id)
            .collect();
        assert_eq!(ids, vec!["1000000001", "1000000013"]);

        let filter = FilterOptions::new()
            .with_states(["CA", "NY"])
            .with_specialties(["Neurology"]);
        let rows = filter_ranked(&table(), &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].priority_rank, 2);
    }

    #[test]
    fn searches_are_case_insensitive_substrings() {
        let filter = FilterOptions::new().with_specialty_search("ONCO");
        assert_eq!(filter_ranked(&table(), &filter).len(), 2);

        let filter = FilterOptions::new().with_npi_search("13");
        let rows = filter_ranked(&table(), &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].priority_rank, 3);
    }

    #[test]
    fn affinity_follows_view() {
        let ranked = table();
        let affinity: Vec<ChannelAssignment> = ranked
            .iter()
            .map(|row| ChannelAssignment {
                npi_id: row.record.npi_id.clone(),
                channel_affinity: ChannelAffinity::Email,
            })
            .collect();
        let kept = filter_affinity(&ranked, &affinity, &FilterOptions::new().with_states(["NY"]));
        assert_eq!(kept, vec![affinity[1].clone()]);
    }

    #[test]
    fn duplicate_ids_keep_one_affinity_row_per_shown_row() {
        let ranked = vec![row("X", "Oncology", "CA", 1), row("X", "Surgery", "TX", 2)];
        let affinity = vec![
            ChannelAssignment {
                npi_id: "X".to_string(),
                channel_affinity: ChannelAffinity::InPerson,
            },
            ChannelAssignment {
                npi_id: "X".to_string(),
                channel_affinity: ChannelAffinity::Email,
            },
        ];
        let filter = FilterOptions::new().with_states(["CA"]);
        let view = filter_ranked(&ranked, &filter);
        let kept = filter_affinity(&ranked, &affinity, &filter);
        assert_eq!(view.len(), 1);
        assert_eq!(kept.len(), view.len());
        assert_eq!(kept[0].channel_affinity, ChannelAffinity::InPerson);
    }
}
