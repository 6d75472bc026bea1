//! Where a prompt is rendered from
//!
//! - `environment`: prompt-related environment variables
//! - `git`: the git subprocess runner
//! - `locator`: finding the repository metadata directory
//! - `repository`: the directory being described and the output writer

pub mod environment;
pub mod git;
pub mod locator;
pub mod repository;
