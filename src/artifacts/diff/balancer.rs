//! Structural balancing of merged scripts
//!
//! A line-level merge treats compound block headers (`forever`, `repeat …`,
//! `if … then`) and their closing `end` lines independently, so a change inside
//! a loop can leave the merged text with more or fewer `end` lines than
//! headers. The balancer runs in two phases:
//!
//! 1. A left-to-right scan removes closers. Closers met before any opener
//!    never close anything and are always dropped. What happens to the rest
//!    depends on [`BalanceMode`].
//! 2. Every opener still left open gets a closer appended at the end of the
//!    script, innermost first.
//!
//! After both phases the number of openers equals the number of closers, and
//! balancing an already balanced result changes nothing.
//!
//! ## Modes
//!
//! [`BalanceMode::Literal`] keeps an "inside compound" flag. Seeing an opener
//! sets it; seeing a closer while it is set removes *every* line equal to that
//! closer and clears it. With several `end` lines in one script this deletes
//! more than the one closer being matched, and the appended closers then end
//! up grouped at the bottom of the script.
//!
//! [`BalanceMode::Positional`] pairs each closer with the innermost open
//! compound and leaves it where it is. Only a closer at a position where no
//! compound is open is removed.
//!
//! ## Debugging
//!
//! Build with `--features debug_balance` to trace each scan step.

use crate::artifacts::diff::merge::{AnnotatedLine, AnnotatedSequence, LineOrigin, renumber};
use derive_new::new;
use serde::{Deserialize, Serialize};

macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_balance")]
        {
            tracing::debug!($($arg)*);
        }
    };
}

pub const CLOSER: &str = "end";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceMode {
    /// Remove every line equal to the matched closer
    #[default]
    Literal,
    /// Remove only the matched closer
    Positional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Opener,
    Closer,
    Other,
}

impl MarkerKind {
    pub fn of(content: &str) -> Self {
        if content == CLOSER {
            MarkerKind::Closer
        } else if content == "forever"
            || content.starts_with("repeat")
            || (content.starts_with("if ") && content.ends_with(" then"))
        {
            MarkerKind::Opener
        } else {
            MarkerKind::Other
        }
    }
}

fn kind(line: &AnnotatedLine) -> MarkerKind {
    MarkerKind::of(&line.content)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct Balancer {
    mode: BalanceMode,
}

impl Balancer {
    pub fn mode(&self) -> BalanceMode {
        self.mode
    }

    pub fn balance(&self, merged: AnnotatedSequence) -> AnnotatedSequence {
        let mut lines = match self.mode {
            BalanceMode::Literal => remove_closers_literal(merged),
            BalanceMode::Positional => remove_closers_positional(merged),
        };

        close_open_compounds(&mut lines);
        renumber(&mut lines);
        lines
    }
}

/// Scan phase with whole-value removal.
///
/// The scan walks the sequence as it was before any removal; each closer met
/// inside a compound removes all lines with the same content from the result.
pub fn remove_closers_literal(merged: AnnotatedSequence) -> AnnotatedSequence {
    let mut seen_opener = false;
    let mut inside_compound = false;
    let mut stray = Vec::new();
    let mut cleared: Vec<String> = Vec::new();

    for (position, line) in merged.iter().enumerate() {
        match kind(line) {
            MarkerKind::Opener => {
                seen_opener = true;
                inside_compound = true;
            }
            MarkerKind::Closer if inside_compound => {
                if !cleared.contains(&line.content) {
                    cleared.push(line.content.clone());
                }
                debug_log!(at = line.index, "literal scan removed closers");
                inside_compound = false;
            }
            MarkerKind::Closer if !seen_opener => stray.push(position),
            _ => {}
        }
    }

    merged
        .into_iter()
        .enumerate()
        .filter(|(position, line)| !stray.contains(position) && !cleared.contains(&line.content))
        .map(|(_, line)| line)
        .collect()
}

/// Scan phase removing only closers that have no open compound to close
pub fn remove_closers_positional(merged: AnnotatedSequence) -> AnnotatedSequence {
    let mut depth = 0usize;

    merged
        .into_iter()
        .filter(|line| match kind(line) {
            MarkerKind::Opener => {
                depth += 1;
                true
            }
            MarkerKind::Closer if depth > 0 => {
                depth -= 1;
                true
            }
            MarkerKind::Closer => {
                debug_log!(at = line.index, "positional scan removed unmatched closer");
                false
            }
            MarkerKind::Other => true,
        })
        .collect()
}

/// Close every compound still open, innermost first.
///
/// Appended closers take the origin of the last opener line and the indent
/// of the opener they close.
fn close_open_compounds(lines: &mut AnnotatedSequence) {
    let mut open: Vec<&str> = Vec::new();
    for line in lines.iter() {
        match kind(line) {
            MarkerKind::Opener => open.push(&line.indent),
            MarkerKind::Closer => {
                open.pop();
            }
            MarkerKind::Other => {}
        }
    }

    let origin = lines
        .iter()
        .rev()
        .find(|line| kind(line) == MarkerKind::Opener)
        .map_or(LineOrigin::Keep, |line| line.origin);
    let closers = open
        .into_iter()
        .rev()
        .map(str::to_string)
        .collect::<Vec<_>>();

    debug_log!(appended = closers.len(), "balanced");
    for indent in closers {
        lines.push(AnnotatedLine::new(lines.len(), CLOSER.to_string(), origin).with_indent(indent));
    }
}
