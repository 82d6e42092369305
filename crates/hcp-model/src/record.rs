//! Row types flowing through the pipeline.
//!
//! Field names serialize to the tabular column names in [`crate::columns`].

use serde::{Deserialize, Serialize};

use crate::enums::{ChannelAffinity, Segment, WritingBehavior};

/// One provider row with the five base attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HcpRecord {
    #[serde(rename = "NPI Id")]
    pub npi_id: String,
    #[serde(rename = "speciality")]
    pub specialty: String,
    #[serde(rename = "rx value")]
    pub rx_value: f64,
    pub state_code: String,
    pub writing_behavior: WritingBehavior,
}

impl HcpRecord {
    pub fn new(
        npi_id: impl Into<String>,
        specialty: impl Into<String>,
        rx_value: f64,
        state_code: impl Into<String>,
        writing_behavior: WritingBehavior,
    ) -> Self {
        Self {
            npi_id: npi_id.into(),
            specialty: specialty.into(),
            rx_value,
            state_code: state_code.into(),
            writing_behavior,
        }
    }

    /// `rx_value` multiplied by the behavior weight.
    pub fn score(&self) -> f64 {
        self.rx_value * self.writing_behavior.weight()
    }
}

/// A record after scoring and ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedHcp {
    #[serde(flatten)]
    pub record: HcpRecord,
    pub score: f64,
    /// 1-based position in descending score order.
    pub priority_rank: usize,
}

/// A ranked record with its priority tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentedHcp {
    #[serde(flatten)]
    pub record: HcpRecord,
    pub score: f64,
    pub priority_rank: usize,
    pub segment: Segment,
}

impl SegmentedHcp {
    pub fn from_ranked(ranked: RankedHcp, segment: Segment) -> Self {
        Self {
            record: ranked.record,
            score: ranked.score,
            priority_rank: ranked.priority_rank,
            segment,
        }
    }
}

/// One row of the channel-affinity table, keyed by provider id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelAssignment {
    #[serde(rename = "NPI Id")]
    pub npi_id: String,
    pub channel_affinity: ChannelAffinity,
}
