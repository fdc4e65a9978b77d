use crate::areas::session::Session;
use crate::artifacts::diff::merge::{AnnotatedLine, LineOrigin};
use crate::artifacts::diff::record::ScriptDiffRecord;
use crate::artifacts::diff::status_filter::StatusFilter;
use crate::artifacts::project::project_diff::{ProjectDiff, TargetDiff};
use colored::Colorize;
use derive_new::new;
use std::path::Path;

#[derive(Debug, Clone, Default, new)]
pub struct ScriptsOptions {
    /// Only show this sprite (or the stage, by name)
    pub target: Option<String>,
    pub filter: StatusFilter,
    pub json: bool,
}

impl Session {
    pub fn scripts(&self, old: &Path, new: &Path, options: &ScriptsOptions) -> anyhow::Result<()> {
        let old = self.load_project(old)?;
        let new = self.load_project(new)?;

        let targets = ProjectDiff::compute(&old, &new, self.differ())
            .targets
            .into_iter()
            .filter(|target| options.target.as_ref().is_none_or(|name| &target.name == name))
            .filter_map(|mut target| {
                target
                    .records
                    .retain(|record| record.status.matches_filter(options.filter));
                (!target.records.is_empty()).then_some(target)
            })
            .collect::<Vec<_>>();

        if options.json {
            serde_json::to_writer_pretty(&mut *self.writer(), &targets)?;
            writeln!(self.writer())?;
            return Ok(());
        }

        for target in &targets {
            self.print_target(target)?;
        }

        Ok(())
    }

    fn print_target(&self, target: &TargetDiff) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("diff --scripts {}", target.display_name()).bold()
        )?;

        for record in &target.records {
            self.print_record(record)?;
        }

        Ok(())
    }

    fn print_record(&self, record: &ScriptDiffRecord) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!(
                "@@ script {} {} +{} -{} @@",
                record.script_no,
                record.status.as_str(),
                record.added_count(),
                record.removed_count()
            )
            .cyan()
        )?;

        for line in &record.merged {
            self.print_line(line)?;
        }

        Ok(())
    }

    fn print_line(&self, line: &AnnotatedLine) -> anyhow::Result<()> {
        let text = line.to_string();
        match line.origin {
            LineOrigin::Added => writeln!(self.writer(), "{}", text.green())?,
            LineOrigin::Removed => writeln!(self.writer(), "{}", text.red())?,
            LineOrigin::Keep => writeln!(self.writer(), "{}", text)?,
        }

        Ok(())
    }
}
