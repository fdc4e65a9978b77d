use derive_new::new;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::LazyLock;

static LINE_NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+ ").expect("line number regex is valid"));

/// One projected line.
///
/// `content` is the trimmed text that takes part in comparisons. Leading
/// whitespace from the projection is kept apart in `indent` and only used
/// for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct TextLine {
    pub index: usize,
    pub content: String,
    #[new(default)]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub indent: String,
}

pub type LineSequence = Vec<TextLine>;

impl TextLine {
    pub fn with_indent(mut self, indent: String) -> Self {
        self.indent = indent;
        self
    }

    /// Display form used by the presentation layer, `"{index} {content}"`
    pub fn numbered(&self) -> String {
        format!("{} {}", self.index, self.content)
    }
}

impl Display for TextLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.numbered())
    }
}

/// Split projected text into trimmed, numbered lines, keeping each line's
/// leading whitespace as its indent.
///
/// Empty text yields an empty sequence rather than a single blank line.
pub fn lines_from_text(text: &str) -> LineSequence {
    if text.is_empty() {
        return Vec::new();
    }

    text.split('\n')
        .enumerate()
        .map(|(index, line)| {
            let line = line.trim_end();
            let content = line.trim_start();
            let indent = &line[..line.len() - content.len()];
            TextLine::new(index, content.to_string()).with_indent(indent.to_string())
        })
        .collect()
}

/// Join line contents, without indentation
pub fn lines_to_text(lines: &[TextLine]) -> String {
    lines
        .iter()
        .map(|line| line.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop a leading `"{number} "` display prefix
pub fn strip_line_number(line: &str) -> &str {
    match LINE_NUMBER_PREFIX.find(line) {
        Some(prefix) => &line[prefix.end()..],
        None => line,
    }
}

/// Parse lines in numbered display form back into a sequence, renumbering from 0
pub fn lines_from_numbered<S: AsRef<str>>(numbered: &[S]) -> LineSequence {
    numbered
        .iter()
        .enumerate()
        .map(|(index, line)| TextLine::new(index, strip_line_number(line.as_ref()).to_string()))
        .collect()
}

/// Content-only comparison; line numbers never take part in equality
pub fn same_content(a: &[TextLine], b: &[TextLine]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.content == y.content)
}
