use crate::areas::repository::Repository;
use crate::artifacts::format::shell::Shell;
use std::io::Write;

impl Repository {
    /// Print `pre`, the templated status and `post` as one prompt string.
    pub fn apply(
        &self,
        pre: &str,
        post: &str,
        template: Option<&str>,
        shell: Shell,
    ) -> anyhow::Result<()> {
        let status = self.render(template, shell)?.unwrap_or_default();

        write!(self.writer(), "{pre}{status}{post}")?;
        self.writer().flush()?;

        Ok(())
    }
}
