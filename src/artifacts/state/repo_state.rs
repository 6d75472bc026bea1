use crate::artifacts::state::operation::SpecialOperation;

pub const BRANCH_REF_PREFIX: &str = "refs/heads/";
/// Shown instead of a branch while the shell sits inside the metadata directory
pub const GIT_DIR_SENTINEL: &str = "GIT_DIR!";
pub const BARE_PREFIX: &str = "BARE:";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepoState {
    /// Full ref name when on a branch
    pub branch: Option<String>,
    pub detached: bool,
    /// Parenthesized description when detached
    pub describe: Option<String>,
    pub operation: SpecialOperation,
    pub progress: Option<(u32, u32)>,
    pub bare: bool,
    pub inside_git_dir: bool,
    pub inside_work_tree: bool,
}

impl RepoState {
    pub fn on_branch(branch: impl Into<String>) -> Self {
        RepoState {
            branch: Some(branch.into()),
            ..Default::default()
        }
    }

    pub fn detached(describe: impl Into<String>) -> Self {
        RepoState {
            detached: true,
            describe: Some(describe.into()),
            ..Default::default()
        }
    }

    /// Branch or detached description, without `refs/heads/`, prefixed with
    /// `BARE:` for bare repositories.
    pub fn label(&self) -> String {
        let name = if self.detached {
            self.describe.as_deref()
        } else {
            self.branch.as_deref()
        }
        .unwrap_or_default();

        let name = name.strip_prefix(BRANCH_REF_PREFIX).unwrap_or(name);
        let prefix = if self.bare { BARE_PREFIX } else { "" };

        format!("{prefix}{name}")
    }

    /// `|REBASE-i 3/10`, or just the tag when progress is unknown.
    pub fn operation_tag(&self) -> Option<String> {
        let tag = self.operation.tag()?;

        Some(match self.progress {
            Some((step, total)) => format!("{tag} {step}/{total}"),
            None => tag.to_string(),
        })
    }
}
