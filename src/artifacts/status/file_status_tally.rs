use crate::areas::git::GitRunner;
use crate::artifacts::status::file_change::{ChangeKind, FileChange};
use tracing::debug;

/// Per-kind change counts for one side (index or working tree)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangeCounts {
    pub added: u32,
    pub modified: u32,
    pub deleted: u32,
    pub unmerged: u32,
}

impl ChangeCounts {
    pub fn new(added: u32, modified: u32, deleted: u32, unmerged: u32) -> Self {
        ChangeCounts {
            added,
            modified,
            deleted,
            unmerged,
        }
    }

    pub fn record(&mut self, kind: ChangeKind) {
        match kind {
            ChangeKind::Added => self.added += 1,
            ChangeKind::Modified => self.modified += 1,
            ChangeKind::Deleted => self.deleted += 1,
            ChangeKind::Unmerged => self.unmerged += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.added + self.modified + self.deleted + self.unmerged
    }

    /// ` +A ~M -D`
    pub fn summary(&self) -> String {
        format!(
            " {}{} {}{} {}{}",
            ChangeKind::Added,
            self.added,
            ChangeKind::Modified,
            self.modified,
            ChangeKind::Deleted,
            self.deleted
        )
    }

    /// `!U`
    pub fn unmerged_summary(&self) -> String {
        format!("{}{}", ChangeKind::Unmerged, self.unmerged)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileStatusTally {
    pub index: ChangeCounts,
    pub working: ChangeCounts,
}

impl FileStatusTally {
    /// Tally `git status --porcelain`; a failed status counts nothing.
    pub fn load(git: &impl GitRunner) -> Self {
        match git.run(&["status", "--porcelain"]) {
            Ok(output) => Self::from_porcelain(&output),
            Err(error) => {
                debug!(event = "prompt.status.unavailable", error = %error);
                Self::default()
            }
        }
    }

    pub fn from_porcelain(output: &str) -> Self {
        output
            .lines()
            .filter_map(FileChange::parse_porcelain)
            .fold(FileStatusTally::default(), |mut tally, change| {
                if let Some(kind) = change.index {
                    tally.index.record(kind);
                }
                if let Some(kind) = change.working {
                    tally.working.record(kind);
                }
                tally
            })
    }
}
