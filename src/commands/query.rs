use crate::areas::repository::Repository;
use crate::artifacts::format::shell::Shell;
use std::io::Write;

impl Repository {
    /// Print the templated status without a trailing newline, or nothing at
    /// all when there is no status to show.
    pub fn query(&self, template: Option<&str>, shell: Shell) -> anyhow::Result<()> {
        if let Some(status) = self.render(template, shell)? {
            write!(self.writer(), "{status}")?;
        }

        self.writer().flush()?;

        Ok(())
    }
}
