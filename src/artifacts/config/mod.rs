//! Prompt configuration
//!
//! Configuration is read once per invocation with a single `git config`
//! call and turned into typed values with documented defaults:
//!
//! - `git_config`: the raw, lowercased key/value snapshot
//! - `display_config`: segment texts, palette and boolean toggles
//! - `prompt_config`: everything the pipeline needs, including describe
//!   style and upstream settings

pub mod display_config;
pub mod git_config;
pub mod prompt_config;
