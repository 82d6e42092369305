//! Type-safe enumerations for the categorical HCP attributes.
//!
//! Each enum carries its exact display label, since those labels are part of
//! the exported tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prescription-writing behavior of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WritingBehavior {
    High,
    Medium,
    Low,
}

impl WritingBehavior {
    pub const ALL: [WritingBehavior; 3] = [Self::High, Self::Medium, Self::Low];

    /// Score multiplier applied to `rx_value`.
    pub fn weight(self) -> f64 {
        match self {
            WritingBehavior::High => 3.0,
            WritingBehavior::Medium => 2.0,
            WritingBehavior::Low => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WritingBehavior::High => "High",
            WritingBehavior::Medium => "Medium",
            WritingBehavior::Low => "Low",
        }
    }
}

impl fmt::Display for WritingBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WritingBehavior {
    type Err = String;

    /// Case-insensitive after trimming; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HIGH" => Ok(WritingBehavior::High),
            "MEDIUM" => Ok(WritingBehavior::Medium),
            "LOW" => Ok(WritingBehavior::Low),
            _ => Err(format!("Unknown writing behavior: {s}")),
        }
    }
}

/// Priority tier derived from rank position.
///
/// Declaration order is tier order, so `Ord` sorts Top before Bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Segment {
    #[serde(rename = "Top 20%")]
    Top,
    #[serde(rename = "Middle 30%")]
    Middle,
    #[serde(rename = "Bottom 50%")]
    Bottom,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Self::Top, Self::Middle, Self::Bottom];

    pub fn label(&self) -> &'static str {
        match self {
            Segment::Top => "Top 20%",
            Segment::Middle => "Middle 30%",
            Segment::Bottom => "Bottom 50%",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Segment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Segment::ALL
            .into_iter()
            .find(|segment| segment.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("Unknown segment: {s}"))
    }
}

/// Preferred outreach channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelAffinity {
    #[serde(rename = "In-person")]
    InPerson,
    Email,
}

impl ChannelAffinity {
    pub const ALL: [ChannelAffinity; 2] = [Self::InPerson, Self::Email];

    pub fn label(&self) -> &'static str {
        match self {
            ChannelAffinity::InPerson => "In-person",
            ChannelAffinity::Email => "Email",
        }
    }
}

impl fmt::Display for ChannelAffinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
