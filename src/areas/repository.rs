use crate::areas::environment::Environment;
use crate::areas::git::GitCli;
use crate::areas::locator::{self, RepositoryLocation};
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// The directory a prompt is rendered for, and where its output goes.
pub struct Repository {
    path: Box<Path>,
    explicit_path: bool,
    writer: RefCell<Box<dyn std::io::Write>>,
    git: GitCli,
    environment: Environment,
}

impl Repository {
    /// `path` is the directory git runs in; `explicit_path` marks it as named
    /// by the caller rather than inherited from the shell.
    pub fn new(
        path: &Path,
        explicit_path: bool,
        environment: Environment,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        let path: Box<Path> = path.into();

        Repository {
            git: GitCli::new(path.clone()),
            path,
            explicit_path,
            writer: RefCell::new(writer),
            environment,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn git(&self) -> &GitCli {
        &self.git
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn locate(&self) -> Option<RepositoryLocation> {
        let explicit = self.explicit_path.then_some(self.path());
        locator::locate(&self.path, explicit, &self.environment, &self.git)
    }
}
