pub mod columns;
pub mod enums;
pub mod error;
pub mod options;
pub mod record;

pub use enums::{ChannelAffinity, Segment, WritingBehavior};
pub use error::{Result, SchemaError};
pub use options::{PipelineOptions, SyntheticOptions, UnknownBehaviorPolicy};
pub use record::{ChannelAssignment, HcpRecord, RankedHcp, SegmentedHcp};
