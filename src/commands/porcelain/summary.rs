use crate::areas::session::Session;
use crate::artifacts::project::project_diff::ProjectDiff;
use std::path::Path;

impl Session {
    /// Print commit-message lines describing block and costume changes per target
    pub fn summary(&self, old: &Path, new: &Path, json: bool) -> anyhow::Result<()> {
        let old = self.load_project(old)?;
        let new = self.load_project(new)?;

        let lines = ProjectDiff::compute(&old, &new, self.differ()).commit_summary();

        if json {
            serde_json::to_writer(&mut *self.writer(), &lines)?;
            writeln!(self.writer())?;
            return Ok(());
        }

        for line in lines {
            writeln!(self.writer(), "{line}")?;
        }

        Ok(())
    }
}
