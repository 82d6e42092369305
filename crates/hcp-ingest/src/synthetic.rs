//! Seeded synthetic provider data.
//!
//! Stands in for a real provider feed. The generator owns its RNG, seeded from
//! [`SyntheticOptions::seed`], so the same options always yield the same table.

use rand::distributions::WeightedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, LogNormal};
use tracing::{debug, info_span};

use hcp_model::{HcpRecord, SyntheticOptions, WritingBehavior};

use crate::error::{IngestError, Result};

/// Specialties drawn uniformly for synthetic providers.
pub const SPECIALTIES: [&str; 11] = [
    "Cardiology",
    "Dermatology",
    "Endocrinology",
    "Family Medicine",
    "Gastroenterology",
    "Internal Medicine",
    "Neurology",
    "Oncology",
    "Pediatrics",
    "Psychiatry",
    "Surgery",
];

/// State codes drawn uniformly for synthetic providers.
pub const STATE_CODES: [&str; 10] = ["CA", "NY", "TX", "FL", "IL", "PA", "OH", "GA", "NC", "MI"];

const NPI_BASE: u64 = 1_000_000_000;

// Log-scale parameters of the prescription value distribution.
const RX_LOG_MEAN: f64 = 9.0;
const RX_LOG_SIGMA: f64 = 0.7;

// Probabilities for High, Medium, Low (same order as `WritingBehavior::ALL`).
const BEHAVIOR_WEIGHTS: [f64; 3] = [0.3, 0.5, 0.2];

/// Generates `options.count` providers from `options.seed`.
///
/// Columns are drawn one after another (specialty, state, rx value, behavior),
/// each from the same seeded stream.
pub fn generate_hcp_data(options: &SyntheticOptions) -> Result<Vec<HcpRecord>> {
    let span = info_span!("generate", seed = options.seed, count = options.count);
    let _guard = span.enter();

    let rx_distribution =
        LogNormal::new(RX_LOG_MEAN, RX_LOG_SIGMA).map_err(|e| IngestError::Distribution {
            message: e.to_string(),
        })?;
    let behavior_distribution =
        WeightedIndex::new(&BEHAVIOR_WEIGHTS).map_err(|e| IngestError::Distribution {
            message: e.to_string(),
        })?;

    let mut rng = StdRng::seed_from_u64(options.seed);
    let count = options.count;

    let specialties: Vec<&str> = (0..count)
        .map(|_| SPECIALTIES[rng.gen_range(0..SPECIALTIES.len())])
        .collect();
    let states: Vec<&str> = (0..count)
        .map(|_| STATE_CODES[rng.gen_range(0..STATE_CODES.len())])
        .collect();
    let rx_values: Vec<f64> = (0..count)
        .map(|_| rx_distribution.sample(&mut rng).trunc())
        .collect();
    let behaviors: Vec<WritingBehavior> = (0..count)
        .map(|_| WritingBehavior::ALL[behavior_distribution.sample(&mut rng)])
        .collect();

    let records: Vec<HcpRecord> = specialties
        .into_iter()
        .zip(states)
        .zip(rx_values)
        .zip(behaviors)
        .enumerate()
        .map(|(idx, (((specialty, state), rx_value), behavior))| {
            HcpRecord::new(
                (NPI_BASE + idx as u64).to_string(),
                specialty,
                rx_value,
                state,
                behavior,
            )
        })
        .collect();

    debug!(records = records.len(), "generated synthetic providers");
    Ok(records)
}
