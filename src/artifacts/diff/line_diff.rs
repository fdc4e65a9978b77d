//! LCS line diff
//!
//! Lines are aligned on content equality only. When several alignments are
//! optimal the walk keeps the earliest matches, and inside a changed region
//! all deletions come before all insertions, so each region renders as one
//! `-` run followed by one `+` run.

use crate::artifacts::diff::text_line::TextLine;
use derive_new::new;
use serde::Serialize;
use std::fmt::Display;

/// Upper bound on LCS table cells before falling back to a coarse diff
pub const DEFAULT_MAX_TABLE_CELLS: usize = 4_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Edit {
    Keep { old: TextLine, new: TextLine },
    Insert { new: TextLine },
    Delete { old: TextLine },
}

pub type EditScript = Vec<Edit>;

impl Edit {
    /// The line shown for this edit; kept lines show their new form
    pub fn line(&self) -> &TextLine {
        match self {
            Edit::Keep { new, .. } | Edit::Insert { new } => new,
            Edit::Delete { old } => old,
        }
    }

    pub fn content(&self) -> &str {
        &self.line().content
    }

    pub fn old_line(&self) -> Option<&TextLine> {
        match self {
            Edit::Keep { old, .. } | Edit::Delete { old } => Some(old),
            Edit::Insert { .. } => None,
        }
    }

    pub fn new_line(&self) -> Option<&TextLine> {
        match self {
            Edit::Keep { new, .. } | Edit::Insert { new } => Some(new),
            Edit::Delete { .. } => None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, Edit::Keep { .. })
    }

    pub fn as_string(&self) -> String {
        match self {
            Edit::Delete { old } => format!("-{}", old.content),
            Edit::Insert { new } => format!("+{}", new.content),
            Edit::Keep { new, .. } => format!(" {}", new.content),
        }
    }
}

impl Display for Edit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

pub trait DiffAlgorithm {
    type Table;

    fn compute_table(&self) -> Self::Table;
    fn backtrack(&self, table: &Self::Table) -> EditScript;

    fn diff(&self) -> EditScript {
        self.backtrack(&self.compute_table())
    }

    fn format_diff(&self) -> String {
        self.diff()
            .iter()
            .map(Edit::as_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Suffix LCS lengths, `(n + 1) * (m + 1)` cells in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    width: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    fn at(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LcsDiff<'d> {
    a: &'d [TextLine],
    b: &'d [TextLine],
    #[new(value = "DEFAULT_MAX_TABLE_CELLS")]
    max_table_cells: usize,
}

impl<'d> LcsDiff<'d> {
    pub fn with_max_table_cells(mut self, max_table_cells: usize) -> Self {
        self.max_table_cells = max_table_cells;
        self
    }

    fn common_prefix(&self) -> usize {
        self.a
            .iter()
            .zip(self.b)
            .take_while(|(x, y)| x.content == y.content)
            .count()
    }

    fn common_suffix(&self, prefix: usize) -> usize {
        self.a[prefix..]
            .iter()
            .rev()
            .zip(self.b[prefix..].iter().rev())
            .take_while(|(x, y)| x.content == y.content)
            .count()
    }

    fn keep(old: &TextLine, new: &TextLine) -> Edit {
        Edit::Keep {
            old: old.clone(),
            new: new.clone(),
        }
    }

    /// Delete-all/insert-all alignment for inputs too large for a full table.
    ///
    /// Still trims the common prefix and suffix so small edits to long
    /// scripts stay readable.
    fn coarse_diff(&self) -> EditScript {
        let prefix = self.common_prefix();
        let suffix = self.common_suffix(prefix);
        let (a_end, b_end) = (self.a.len() - suffix, self.b.len() - suffix);

        let mut edits = Vec::with_capacity(self.a.len() + self.b.len());
        edits.extend((0..prefix).map(|i| Self::keep(&self.a[i], &self.b[i])));
        edits.extend(
            self.a[prefix..a_end]
                .iter()
                .map(|old| Edit::Delete { old: old.clone() }),
        );
        edits.extend(
            self.b[prefix..b_end]
                .iter()
                .map(|new| Edit::Insert { new: new.clone() }),
        );
        edits.extend((0..suffix).map(|k| Self::keep(&self.a[a_end + k], &self.b[b_end + k])));
        edits
    }

    fn fits_budget(&self) -> bool {
        let prefix = self.common_prefix();
        let rows = self.a.len() - prefix + 1;
        let cols = self.b.len() - prefix + 1;
        rows.checked_mul(cols)
            .is_some_and(|cells| cells <= self.max_table_cells)
    }
}

impl<'d> DiffAlgorithm for LcsDiff<'d> {
    /// `None` when the table would exceed the cell budget
    type Table = Option<(usize, LcsTable)>;

    fn compute_table(&self) -> Self::Table {
        if !self.fits_budget() {
            return None;
        }

        let prefix = self.common_prefix();
        let (a, b) = (&self.a[prefix..], &self.b[prefix..]);
        let (n, m) = (a.len(), b.len());
        let width = m + 1;
        let mut cells = vec![0u32; (n + 1) * width];

        for i in (0..n).rev() {
            for j in (0..m).rev() {
                cells[i * width + j] = if a[i].content == b[j].content {
                    cells[(i + 1) * width + j + 1] + 1
                } else {
                    cells[(i + 1) * width + j].max(cells[i * width + j + 1])
                };
            }
        }

        Some((prefix, LcsTable { width, cells }))
    }

    fn backtrack(&self, table: &Self::Table) -> EditScript {
        let Some((prefix, table)) = table else {
            tracing::warn!(
                old_lines = self.a.len(),
                new_lines = self.b.len(),
                budget = self.max_table_cells,
                "line diff exceeds table budget, using coarse alignment"
            );
            return self.coarse_diff();
        };

        let prefix = *prefix;
        let (a, b) = (&self.a[prefix..], &self.b[prefix..]);
        let (n, m) = (a.len(), b.len());

        let mut edits = Vec::with_capacity(self.a.len() + self.b.len());
        edits.extend((0..prefix).map(|i| Self::keep(&self.a[i], &self.b[i])));

        let (mut i, mut j) = (0, 0);
        while i < n && j < m {
            if a[i].content == b[j].content {
                edits.push(Self::keep(&a[i], &b[j]));
                i += 1;
                j += 1;
            } else if table.at(i + 1, j) >= table.at(i, j + 1) {
                edits.push(Edit::Delete { old: a[i].clone() });
                i += 1;
            } else {
                edits.push(Edit::Insert { new: b[j].clone() });
                j += 1;
            }
        }
        edits.extend(a[i..].iter().map(|old| Edit::Delete { old: old.clone() }));
        edits.extend(b[j..].iter().map(|new| Edit::Insert { new: new.clone() }));

        edits
    }
}
