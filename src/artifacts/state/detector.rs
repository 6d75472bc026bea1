use crate::areas::git::GitRunner;
use crate::areas::locator::RepositoryLocation;
use crate::artifacts::config::prompt_config::DescribeStyle;
use crate::artifacts::state::operation::detect_operation;
use crate::artifacts::state::repo_state::{GIT_DIR_SENTINEL, RepoState};
use derive_new::new;
use tracing::debug;

const ABBREVIATED_HEAD_LEN: usize = 7;
const UNKNOWN_HEAD: &str = "unknown";

#[derive(new)]
pub struct StateDetector<'r, G: GitRunner> {
    git: &'r G,
    location: &'r RepositoryLocation,
    describe_style: DescribeStyle,
}

impl<'r, G: GitRunner> StateDetector<'r, G> {
    pub fn detect(&self) -> RepoState {
        let in_progress = detect_operation(self.location.git_dir());

        let mut state = match in_progress.original_ref {
            Some(original_ref) => RepoState::on_branch(original_ref),
            None => self.resolve_head(),
        };
        state.operation = in_progress.operation;
        state.progress = in_progress.progress;

        state.inside_git_dir = self.git.rev_parse_flag("--is-inside-git-dir");
        if state.inside_git_dir {
            state.bare = self.git.rev_parse_flag("--is-bare-repository");
            if !state.bare {
                state = RepoState {
                    branch: Some(GIT_DIR_SENTINEL.to_string()),
                    detached: false,
                    describe: None,
                    ..state
                };
            }
        } else {
            state.inside_work_tree = self.git.rev_parse_flag("--is-inside-work-tree");
        }

        debug!(event = "prompt.state.detected", state = ?state);

        state
    }

    fn resolve_head(&self) -> RepoState {
        match self.git.run(&["symbolic-ref", "HEAD"]) {
            Ok(head) if !head.trim().is_empty() => RepoState::on_branch(head.trim()),
            _ => RepoState::detached(format!("({})", self.describe_head())),
        }
    }

    /// Configured `git describe`, else the abbreviated HEAD, else `unknown`.
    fn describe_head(&self) -> String {
        self.git
            .run(self.describe_style.describe_args())
            .ok()
            .map(|description| description.trim().to_string())
            .filter(|description| !description.is_empty())
            .or_else(|| self.abbreviated_head())
            .unwrap_or_else(|| UNKNOWN_HEAD.to_string())
    }

    fn abbreviated_head(&self) -> Option<String> {
        let head = std::fs::read_to_string(self.location.git_dir().join("HEAD")).ok()?;
        let abbreviated = head
            .trim()
            .chars()
            .take(ABBREVIATED_HEAD_LEN)
            .collect::<String>();

        (!abbreviated.is_empty()).then(|| format!("{abbreviated}..."))
    }
}
