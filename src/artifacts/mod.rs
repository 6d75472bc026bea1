//! Prompt data and algorithms
//!
//! - `config`: typed prompt settings read from `git config` and the environment
//! - `format`: composing the colorized status and substituting it into a template
//! - `state`: branch identity and in-progress operations
//! - `status`: stash presence and staged/unstaged change counts
//! - `upstream`: ahead/behind counts against the upstream branch

pub mod config;
pub mod format;
pub mod state;
pub mod status;
pub mod upstream;
