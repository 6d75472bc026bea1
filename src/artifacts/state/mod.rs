//! Repository state detection
//!
//! - `operation`: the ordered table of in-progress operation markers
//! - `repo_state`: branch or detached identity plus operation and flags
//! - `detector`: builds a `RepoState` from git and the metadata directory

pub mod detector;
pub mod operation;
pub mod repo_state;
