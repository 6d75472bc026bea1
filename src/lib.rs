//! Git working tree status for shell prompts
//!
//! `bit-prompt` inspects a repository through the `git` binary and renders a
//! compact, colorized summary (branch, upstream divergence, in-progress
//! operation, staged and unstaged change counts, stash) for interpolation into
//! `PS1` or `PROMPT`.
//!
//! - `areas`: the repository, its location and the git subprocess runner
//! - `artifacts`: configuration, state detection, upstream comparison,
//!   status tallying and formatting
//! - `commands`: the query and apply entry points

pub mod areas;
pub mod artifacts;
pub mod commands;
