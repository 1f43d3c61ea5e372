//! Group formation: shuffle primitive and roster partitioning

mod partition;
mod shuffle;

pub use partition::{partition, partition_by_count, partition_by_size};
pub use shuffle::shuffle;
