//! Ahead/behind counts against an upstream
//!
//! - `upstream_options`: parsing of the `showUpstream` keywords
//! - `comparator`: upstream resolution (remote-tracking or git-svn) and the
//!   two counting strategies

pub mod comparator;
pub mod upstream_options;
