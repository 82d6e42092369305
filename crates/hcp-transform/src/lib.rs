//! HCP targeting transformations.
//!
//! This crate turns validated provider records into the two pipeline outputs:
//!
//! - **rank**: score every provider and order by descending score
//! - **segment**: assign the Top 20% / Middle 30% / Bottom 50% tiers
//! - **channel**: classify each provider as In-person or Email
//! - **pipeline**: run the three stages in order
//! - **filter**: view-level filtering of computed results
//! - **frame**: build Polars DataFrames for display and export

pub mod channel;
pub mod filter;
pub mod frame;
pub mod pipeline;
pub mod rank;
pub mod segment;

pub use channel::{IN_PERSON_SPECIALTIES, channel_affinity, classify_channel};
pub use filter::{FilterOptions, filter_affinity, filter_ranked};
pub use frame::{affinity_frame, ranked_frame, source_frame};
pub use pipeline::{PipelineOutput, join_affinity, run_pipeline};
pub use rank::rank_hcps;
pub use segment::{SegmentEdges, segment_hcps};
