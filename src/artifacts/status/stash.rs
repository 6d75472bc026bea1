use crate::areas::git::GitRunner;

pub const STASH_REF: &str = "refs/stash";

/// Whether at least one stash entry exists.
pub fn has_stash(git: &impl GitRunner) -> bool {
    git.succeeds(&["rev-parse", "--verify", "--quiet", STASH_REF])
}
