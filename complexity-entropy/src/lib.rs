// complexity-entropy/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod entropy;
pub mod metrics;
pub mod statistics;
pub mod scoring;

pub use entropy::{entropy_of, FrequencyTable};
pub use metrics::{diversity, productivity, LengthMismatch, PRODUCTIVITY_BASELINE};
pub use scoring::{score_sequences, sentence_complexity, SentenceMetrics};
pub use statistics::{compute_stats, DistributionStats};
