//! Prompt entry points
//!
//! - `compose`: the shared pipeline from repository to rendered status
//! - `query`: print the status on its own
//! - `apply`: print the status between a prompt prefix and suffix

pub mod apply;
pub mod compose;
pub mod query;
