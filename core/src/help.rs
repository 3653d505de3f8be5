//! Self-documenting help listing.
//!
//! Task declarations are read straight out of the Makefile: any line that
//! starts with a letter and carries a `## ` marker is listed, with the text
//! before the first `:` as the task name and everything after the marker as
//! its description.

use crate::{Error, Result};
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use std::io::{ErrorKind, Write};
use std::path::Path;

const MARKER: &str = "## ";
const NAME_WIDTH: usize = 25;
const NAME_COLOR: Color = Color::Cyan;

/// A task line found in the declaration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDeclaration {
    pub name: String,
    pub description: String,
    /// The full source line, used as the sort key.
    pub line: String,
}

impl TaskDeclaration {
    /// Parse a single line, returning `None` if it is not a task declaration.
    pub fn from_line(line: &str) -> Option<Self> {
        if !line.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return None;
        }

        let (head, description) = line.split_once(MARKER)?;
        if head.is_empty() || description.is_empty() {
            return None;
        }

        let name = head.split_once(':').map_or(head, |(name, _)| name);

        Some(Self {
            name: name.to_string(),
            description: description.to_string(),
            line: line.to_string(),
        })
    }
}

/// Collect task declarations from `text`, ordered by their full source line.
///
/// Ordering is by the whole line (prerequisites and all), not by name, so a
/// declaration like `a-b: ## ...` sorts before `a: ## ...`.
pub fn parse_declarations(text: &str) -> Vec<TaskDeclaration> {
    let mut lines: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with(|c: char| c.is_ascii_alphabetic()))
        .collect();
    lines.sort_unstable();

    lines.into_iter().filter_map(TaskDeclaration::from_line).collect()
}

/// Write the aligned two-column listing.
pub fn render<W: Write>(declarations: &[TaskDeclaration], out: &mut W, color: bool) -> Result<()> {
    for decl in declarations {
        if color {
            writeln!(
                out,
                "{}{:<width$}{} {}",
                SetForegroundColor(NAME_COLOR),
                decl.name,
                ResetColor,
                decl.description,
                width = NAME_WIDTH,
            )?;
        } else {
            writeln!(out, "{:<width$} {}", decl.name, decl.description, width = NAME_WIDTH)?;
        }
    }
    Ok(())
}

/// Read the declaration files in `paths` and print their combined task
/// listing. Bytes that are not UTF-8 are replaced, and a reader that goes
/// away mid-listing ends it quietly.
pub fn print_help<P, W>(paths: &[P], out: &mut W, color: bool) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut text = String::new();
    for path in paths {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::ReadDeclarations {
            path: path.to_path_buf(),
            source,
        })?;
        text.push_str(&String::from_utf8_lossy(&bytes));
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
    }

    let declarations = parse_declarations(&text);
    tracing::debug!(files = paths.len(), count = declarations.len(), "parsed task declarations");

    match render(&declarations, out, color).and_then(|()| out.flush().map_err(Error::from)) {
        Err(Error::Io(err)) if err.kind() == ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed, stopping help listing");
            Ok(())
        }
        result => result,
    }
}
