//! Working tree and index change counts
//!
//! - `file_change`: porcelain status codes mapped to change kinds
//! - `file_status_tally`: per-side counts over a porcelain listing
//! - `stash`: stash presence

pub mod file_change;
pub mod file_status_tally;
pub mod stash;
