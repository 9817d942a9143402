// Status Path Analysis
//
// A piece of work moves through a series of statuses over time. This module
// reconstructs that series per piece (ordered by start time) and counts how
// often each exact series occurs across all pieces.
//
// Key Insight: paths are compared as whole ordered sequences. [10, 20, 30]
// differs from [30, 20, 10] and from its own prefix [10, 20], so the tally
// answers "which route through the system is most common", not "which
// statuses co-occur".

mod status_path;
mod tally;

pub use status_path::{paths_by_piece, StatusPath};
pub use tally::PathTally;
