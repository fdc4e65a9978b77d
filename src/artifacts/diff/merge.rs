use crate::artifacts::diff::line_diff::Edit;
use crate::artifacts::diff::text_line::TextLine;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineOrigin {
    Keep,
    Added,
    Removed,
}

impl LineOrigin {
    pub fn marker(&self) -> char {
        match self {
            LineOrigin::Keep => ' ',
            LineOrigin::Added => '+',
            LineOrigin::Removed => '-',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct AnnotatedLine {
    pub index: usize,
    pub content: String,
    pub origin: LineOrigin,
    #[new(default)]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub indent: String,
}

pub type AnnotatedSequence = Vec<AnnotatedLine>;

impl AnnotatedLine {
    pub fn with_indent(mut self, indent: String) -> Self {
        self.indent = indent;
        self
    }

    /// Content with its indent, without the origin marker
    pub fn indented(&self) -> String {
        format!("{}{}", self.indent, self.content)
    }
}

impl Display for AnnotatedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.origin.marker(), self.indent, self.content)
    }
}

fn annotated(index: usize, line: &TextLine, origin: LineOrigin) -> AnnotatedLine {
    AnnotatedLine::new(index, line.content.clone(), origin).with_indent(line.indent.clone())
}

/// Interleave an edit script into one sequence holding every line of both sides.
///
/// Lines are renumbered `0..n` in edit order.
pub fn merge(edits: &[Edit]) -> AnnotatedSequence {
    edits
        .iter()
        .enumerate()
        .map(|(index, edit)| {
            let origin = match edit {
                Edit::Keep { .. } => LineOrigin::Keep,
                Edit::Insert { .. } => LineOrigin::Added,
                Edit::Delete { .. } => LineOrigin::Removed,
            };
            annotated(index, edit.line(), origin)
        })
        .collect()
}

/// Tag every line with the same origin, keeping line order and numbering
pub fn annotate(lines: &[TextLine], origin: LineOrigin) -> AnnotatedSequence {
    lines
        .iter()
        .map(|line| annotated(line.index, line, origin))
        .collect()
}

pub fn renumber(lines: &mut [AnnotatedLine]) {
    for (index, line) in lines.iter_mut().enumerate() {
        line.index = index;
    }
}
