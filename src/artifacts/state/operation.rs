//! In-progress operations
//!
//! git leaves marker files in the metadata directory while a rebase, `am`,
//! merge, cherry-pick, revert or bisect is underway. Several can coexist
//! (a bisect interrupted by a merge, for example), so detection walks
//! [`OPERATION_RULES`] top to bottom and reports only the first match.

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecialOperation {
    #[default]
    None,
    RebaseInteractive,
    RebaseMerge,
    RebaseApply,
    ApplyingMailbox,
    AmbiguousAmRebase,
    Merging,
    CherryPicking,
    Reverting,
    Bisecting,
}

impl SpecialOperation {
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            SpecialOperation::None => None,
            SpecialOperation::RebaseInteractive => Some("|REBASE-i"),
            SpecialOperation::RebaseMerge => Some("|REBASE-m"),
            SpecialOperation::RebaseApply => Some("|REBASE"),
            SpecialOperation::ApplyingMailbox => Some("|AM"),
            SpecialOperation::AmbiguousAmRebase => Some("|AM/REBASE"),
            SpecialOperation::Merging => Some("|MERGING"),
            SpecialOperation::CherryPicking => Some("|CHERRY-PICKING"),
            SpecialOperation::Reverting => Some("|REVERTING"),
            SpecialOperation::Bisecting => Some("|BISECTING"),
        }
    }
}

/// What has to exist in the metadata directory for a rule to match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Dir(&'static str),
    DirWithFile(&'static str, &'static str),
    File(&'static str),
}

impl Marker {
    pub fn is_present(&self, git_dir: &Path) -> bool {
        match self {
            Marker::Dir(dir) => git_dir.join(dir).is_dir(),
            Marker::DirWithFile(dir, file) => {
                git_dir.join(dir).is_dir() && git_dir.join(dir).join(file).is_file()
            }
            Marker::File(file) => git_dir.join(file).is_file(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationRule {
    pub marker: Marker,
    pub operation: SpecialOperation,
    /// Files holding the current step and the step count
    pub progress: Option<(&'static str, &'static str)>,
    /// File holding the ref the operation started from
    pub original_ref: Option<&'static str>,
}

const REBASE_MERGE_PROGRESS: Option<(&str, &str)> =
    Some(("rebase-merge/msgnum", "rebase-merge/end"));
const REBASE_APPLY_PROGRESS: Option<(&str, &str)> =
    Some(("rebase-apply/next", "rebase-apply/last"));
const REBASE_MERGE_HEAD_NAME: Option<&str> = Some("rebase-merge/head-name");

/// Operation markers in precedence order; the first present one wins.
pub const OPERATION_RULES: [OperationRule; 9] = [
    OperationRule {
        marker: Marker::DirWithFile("rebase-merge", "interactive"),
        operation: SpecialOperation::RebaseInteractive,
        progress: REBASE_MERGE_PROGRESS,
        original_ref: REBASE_MERGE_HEAD_NAME,
    },
    OperationRule {
        marker: Marker::Dir("rebase-merge"),
        operation: SpecialOperation::RebaseMerge,
        progress: REBASE_MERGE_PROGRESS,
        original_ref: REBASE_MERGE_HEAD_NAME,
    },
    OperationRule {
        marker: Marker::DirWithFile("rebase-apply", "rebasing"),
        operation: SpecialOperation::RebaseApply,
        progress: REBASE_APPLY_PROGRESS,
        original_ref: None,
    },
    OperationRule {
        marker: Marker::DirWithFile("rebase-apply", "applying"),
        operation: SpecialOperation::ApplyingMailbox,
        progress: REBASE_APPLY_PROGRESS,
        original_ref: None,
    },
    OperationRule {
        marker: Marker::Dir("rebase-apply"),
        operation: SpecialOperation::AmbiguousAmRebase,
        progress: REBASE_APPLY_PROGRESS,
        original_ref: None,
    },
    OperationRule {
        marker: Marker::File("MERGE_HEAD"),
        operation: SpecialOperation::Merging,
        progress: None,
        original_ref: None,
    },
    OperationRule {
        marker: Marker::File("CHERRY_PICK_HEAD"),
        operation: SpecialOperation::CherryPicking,
        progress: None,
        original_ref: None,
    },
    OperationRule {
        marker: Marker::File("REVERT_HEAD"),
        operation: SpecialOperation::Reverting,
        progress: None,
        original_ref: None,
    },
    OperationRule {
        marker: Marker::File("BISECT_LOG"),
        operation: SpecialOperation::Bisecting,
        progress: None,
        original_ref: None,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperationInProgress {
    pub operation: SpecialOperation,
    pub progress: Option<(u32, u32)>,
    pub original_ref: Option<String>,
}

impl OperationRule {
    fn inspect(&self, git_dir: &Path) -> OperationInProgress {
        let progress = self.progress.and_then(|(step_file, total_file)| {
            let step = read_number(git_dir, step_file)?;
            let total = read_number(git_dir, total_file)?;
            Some((step, total))
        });

        OperationInProgress {
            operation: self.operation,
            progress,
            original_ref: self
                .original_ref
                .and_then(|file| read_trimmed(git_dir, file))
                .filter(|name| !name.is_empty()),
        }
    }
}

/// Apply [`OPERATION_RULES`] to a metadata directory.
pub fn detect_operation(git_dir: &Path) -> OperationInProgress {
    OPERATION_RULES
        .iter()
        .find(|rule| rule.marker.is_present(git_dir))
        .map(|rule| rule.inspect(git_dir))
        .unwrap_or_default()
}

fn read_trimmed(git_dir: &Path, file: &str) -> Option<String> {
    std::fs::read_to_string(git_dir.join(file))
        .ok()
        .map(|content| content.trim().to_string())
}

fn read_number(git_dir: &Path, file: &str) -> Option<u32> {
    read_trimmed(git_dir, file)?.parse().ok()
}
