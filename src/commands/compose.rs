use crate::areas::repository::Repository;
use crate::artifacts::config::display_config::Toggles;
use crate::artifacts::config::prompt_config::PromptConfig;
use crate::artifacts::format::composer::{Formatter, StatusInputs};
use crate::artifacts::format::shell::Shell;
use crate::artifacts::format::template::{self, DEFAULT_TEMPLATE};
use crate::artifacts::state::detector::StateDetector;
use crate::artifacts::status::file_status_tally::FileStatusTally;
use crate::artifacts::status::stash::has_stash;
use crate::artifacts::upstream::comparator::UpstreamComparator;
use tracing::debug;

impl Repository {
    /// The colorized status, or `None` outside a repository or when the
    /// prompt is switched off through `bash.enableGitStatus`.
    pub fn compose(&self) -> Option<String> {
        let Some(location) = self.locate() else {
            debug!(event = "prompt.compose.no_repository", path = %self.path().display());
            return None;
        };

        let git = self.git();
        let config = PromptConfig::load(git, self.environment());

        if !config.display.is_enabled(Toggles::ENABLE_GIT_STATUS) {
            debug!(event = "prompt.compose.disabled");
            return None;
        }

        let state = StateDetector::new(git, &location, config.describe_style).detect();
        let mut inputs = StatusInputs {
            state,
            ..Default::default()
        };

        // stash, upstream and file counts only make sense with a work tree
        if inputs.state.inside_work_tree {
            if let Some(options) = config.upstream {
                inputs.delta = UpstreamComparator::new(
                    git,
                    options,
                    &config.svn_remotes,
                    self.environment().svn_id.as_deref(),
                )
                .compare();
            }

            if config.display.is_enabled(Toggles::SHOW_STASH_STATE) {
                inputs.has_stash = has_stash(git);
            }

            if config.display.is_enabled(Toggles::ENABLE_FILE_STATUS) {
                inputs.tally = FileStatusTally::load(git);
            }
        }

        debug!(event = "prompt.compose.completed", inputs = ?inputs);

        Some(Formatter::new(&config.display).format(&inputs))
    }

    /// [`compose`](Self::compose), wrapped for `shell` and substituted into
    /// `template`.
    pub fn render(&self, template: Option<&str>, shell: Shell) -> anyhow::Result<Option<String>> {
        let Some(status) = self.compose() else {
            return Ok(None);
        };

        let status = shell.wrap_escapes(&status)?;
        Ok(Some(template::substitute(
            template.unwrap_or(DEFAULT_TEMPLATE),
            &status,
        )))
    }
}
