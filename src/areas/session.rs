use crate::areas::workspace::Workspace;
use crate::artifacts::diff::script_differ::ScriptDiffer;
use crate::artifacts::project::target::ProjectFile;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// State of one command invocation
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    differ: ScriptDiffer,
}

impl Session {
    pub fn new(
        path: &str,
        writer: Box<dyn std::io::Write>,
        differ: ScriptDiffer,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;

        Ok(Session {
            writer: RefCell::new(writer),
            workspace: Workspace::new(path.into_boxed_path()),
            differ,
        })
    }

    pub fn path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn differ(&self) -> &ScriptDiffer {
        &self.differ
    }

    pub fn load_project(&self, path: &Path) -> anyhow::Result<ProjectFile> {
        self.workspace.load_project(path)
    }
}
