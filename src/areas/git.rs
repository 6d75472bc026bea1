//! git subprocess runner
//!
//! Every query this crate makes about a repository goes through [`GitRunner`].
//! The production implementation, [`GitCli`], spawns the `git` binary in the
//! repository's working directory and captures stdout. Failures are typed as
//! [`GitError`] so callers can log the cause before degrading to a default.

use derive_new::new;
use std::path::Path;
use std::process::Command;
use tracing::{debug, trace};

#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("failed to execute git {args}: {source}")]
    Spawn {
        args: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {args} exited with status {code}: {stderr}")]
    Failed {
        args: String,
        code: i32,
        stderr: String,
    },

    #[error("git {args} produced non-UTF-8 output")]
    NonUtf8Output { args: String },
}

/// Something that can answer git queries.
pub trait GitRunner {
    /// Run git with `args` and return its standard output.
    fn run(&self, args: &[&str]) -> Result<String, GitError>;

    fn succeeds(&self, args: &[&str]) -> bool {
        self.run(args).is_ok()
    }

    /// Answer one of the `rev-parse --is-*` questions.
    fn rev_parse_flag(&self, flag: &str) -> bool {
        matches!(self.run(&["rev-parse", flag]), Ok(output) if output.trim() == "true")
    }
}

#[derive(Debug, Clone, new)]
pub struct GitCli {
    /// Directory git is run in
    work_dir: Box<Path>,
}

impl GitRunner for GitCli {
    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let joined = args.join(" ");

        trace!(
            event = "prompt.git.command_started",
            args = %joined,
            path = %self.work_dir.display()
        );

        let output = Command::new("git")
            .current_dir(&self.work_dir)
            .args(args)
            // a prompt must never hold the index lock while the user runs git
            .env("GIT_OPTIONAL_LOCKS", "0")
            .output()
            .map_err(|source| GitError::Spawn {
                args: joined.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let code = output.status.code().unwrap_or(-1);

            debug!(
                event = "prompt.git.command_failed",
                args = %joined,
                code = code,
                stderr = %stderr
            );

            return Err(GitError::Failed {
                args: joined,
                code,
                stderr,
            });
        }

        String::from_utf8(output.stdout).map_err(|_| GitError::NonUtf8Output { args: joined })
    }
}
