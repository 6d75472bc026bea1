//! Repository discovery
//!
//! Finds the metadata directory (`.git`, or the repository itself when bare)
//! that the rest of the pipeline reads marker files from. Not finding one is
//! the normal "outside any repository" answer, not an error.

use crate::areas::environment::Environment;
use crate::areas::git::GitRunner;
use std::path::{Path, PathBuf};
use tracing::debug;

const GIT_DIR_NAME: &str = ".git";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocation {
    git_dir: Box<Path>,
}

impl RepositoryLocation {
    pub fn new(git_dir: PathBuf) -> Self {
        RepositoryLocation {
            git_dir: git_dir.into_boxed_path(),
        }
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }
}

/// Locate the metadata directory for `work_dir`.
///
/// With an explicit path, a nested `.git` directory wins, then the path
/// itself when it already is a metadata directory. Without one, the first
/// match of: the shell's cached directory, `GIT_DIR`, a `.git` directory in
/// `work_dir`, and finally `git rev-parse --git-dir`.
pub fn locate(
    work_dir: &Path,
    explicit: Option<&Path>,
    environment: &Environment,
    git: &impl GitRunner,
) -> Option<RepositoryLocation> {
    let location = match explicit {
        Some(path) => locate_explicit(work_dir, path, git),
        None => locate_implicit(work_dir, environment, git),
    };

    debug!(
        event = "prompt.locator.completed",
        path = %work_dir.display(),
        git_dir = ?location.as_ref().map(|l| l.git_dir().display().to_string())
    );

    location
}

/// Unlike taking the path literally, a directory with neither `.git` nor
/// `HEAD` falls back to asking git.
fn locate_explicit(
    work_dir: &Path,
    path: &Path,
    git: &impl GitRunner,
) -> Option<RepositoryLocation> {
    let path = work_dir.join(path);
    let nested = path.join(GIT_DIR_NAME);

    if nested.is_dir() {
        Some(RepositoryLocation::new(nested))
    } else if path.join("HEAD").is_file() {
        Some(RepositoryLocation::new(path))
    } else {
        ask_git(work_dir, git)
    }
}

fn locate_implicit(
    work_dir: &Path,
    environment: &Environment,
    git: &impl GitRunner,
) -> Option<RepositoryLocation> {
    if let Some(cached) = &environment.cached_git_dir {
        return Some(RepositoryLocation::new(work_dir.join(cached)));
    }

    if let Some(git_dir) = &environment.git_dir {
        let git_dir = work_dir.join(git_dir);
        // a GIT_DIR that is not a directory leaves us outside any repository
        return git_dir.is_dir().then(|| RepositoryLocation::new(git_dir));
    }

    let dot_git = work_dir.join(GIT_DIR_NAME);
    if dot_git.is_dir() {
        return Some(RepositoryLocation::new(dot_git));
    }

    ask_git(work_dir, git)
}

fn ask_git(work_dir: &Path, git: &impl GitRunner) -> Option<RepositoryLocation> {
    let output = git.run(&["rev-parse", "--git-dir"]).ok()?;
    let git_dir = output.trim();

    if git_dir.is_empty() {
        None
    } else {
        Some(RepositoryLocation::new(work_dir.join(git_dir)))
    }
}
