//! Column names of the tabular interface.
//!
//! Input headers keep the spelling of the spreadsheets this tool was built
//! around (`speciality`, `rx value`), so exports round-trip back into ingest.

pub const NPI_ID: &str = "NPI Id";
pub const SPECIALTY: &str = "speciality";
pub const RX_VALUE: &str = "rx value";
pub const STATE_CODE: &str = "state_code";
pub const WRITING_BEHAVIOR: &str = "writing_behavior";

pub const SCORE: &str = "score";
pub const PRIORITY_RANK: &str = "priority_rank";
pub const SEGMENT: &str = "segment";
pub const CHANNEL_AFFINITY: &str = "channel_affinity";

/// Required input columns, in source order.
pub const SOURCE_COLUMNS: [&str; 5] = [NPI_ID, SPECIALTY, RX_VALUE, STATE_CODE, WRITING_BEHAVIOR];

/// Columns of the ranked and segmented table.
pub const RANKED_COLUMNS: [&str; 8] = [
    NPI_ID,
    SPECIALTY,
    RX_VALUE,
    STATE_CODE,
    WRITING_BEHAVIOR,
    SCORE,
    PRIORITY_RANK,
    SEGMENT,
];

/// Columns of the channel-affinity table.
pub const AFFINITY_COLUMNS: [&str; 2] = [NPI_ID, CHANNEL_AFFINITY];
