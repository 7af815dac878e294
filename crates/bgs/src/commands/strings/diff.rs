use bgs_strings::{LocaleTable, StringTable};
use clap::{Args, ValueEnum};
use itertools::Itertools;
use miette::Result;
use owo_colors::OwoColorize;
use similar::{ChangeTag, TextDiff};
use std::{collections::HashMap, fmt::Display, path::PathBuf};

use super::{read_table, Kind, Table};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Mode {
    #[default]
    Semantic,
    Full,
}

#[derive(Debug, PartialEq, Eq)]
enum Change {
    Added(u32, String),
    Removed(u32, String),
    Modified(u32, String, String, Vec<String>),
}

impl Change {
    fn id(&self) -> u32 {
        match self {
            Change::Added(id, _) | Change::Removed(id, _) | Change::Modified(id, _, _, _) => *id,
        }
    }
}

impl Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Change::Added(id, v) => {
                writeln!(f, "✅ {:>10}: {}", id, v.green())
            }
            Change::Removed(id, v) => {
                writeln!(f, "❌ {:>10}: {}", id, v.red())
            }
            Change::Modified(id, old, new, context) => {
                writeln!(f, "🔃 {:>10}: {} vs {}", id, old.red(), new.green())?;
                if !context.is_empty() {
                    writeln!(
                        f,
                        "{}",
                        context.iter().map(|l| "    ".to_string() + l).join("\n")
                    )?;
                }
                Ok(())
            }
        }
    }
}

/// Inline, highlighted difference of two texts
fn inline_diff(old: &str, new: &str) -> Vec<String> {
    let diff = TextDiff::from_words(old, new);
    let mut comparison = Vec::new();

    for op in diff.ops().iter() {
        for change in diff.iter_inline_changes(op) {
            let mut context = String::new();
            for (emphasized, value) in change.iter_strings_lossy() {
                if emphasized {
                    if change.tag() == ChangeTag::Insert {
                        context.push_str(&format!("{}", value.green().underline()));
                    } else {
                        context.push_str(&format!("{}", value.red().underline()));
                    }
                } else {
                    context.push_str(&format!("{}", value.dimmed()));
                }
            }
            comparison.push(context);
        }
    }

    comparison
}

/// Compare two tables by id, the first string listed for an id wins
fn compare(left: &StringTable, right: &StringTable, mode: Mode) -> Vec<Change> {
    let by_id = |table: &StringTable| -> HashMap<u32, String> {
        table
            .iter()
            .rev()
            .map(|r| (r.id, r.text.clone()))
            .collect()
    };
    let left = by_id(left);
    let right = by_id(right);

    let added = right
        .iter()
        .filter(|(id, _)| !left.contains_key(id))
        .map(|(id, text)| Change::Added(*id, text.clone()));

    let removed = left
        .iter()
        .filter(|(id, _)| !right.contains_key(id))
        .map(|(id, text)| Change::Removed(*id, text.clone()));

    let modified = left.iter().filter_map(|(id, old)| {
        let new = right.get(id)?;
        if old == new {
            return None;
        }

        let context = match mode {
            Mode::Full => inline_diff(old, new),
            Mode::Semantic => Vec::new(),
        };
        Some(Change::Modified(*id, old.clone(), new.clone(), context))
    });

    added
        .chain(removed)
        .chain(modified)
        .sorted_by_key(Change::id)
        .collect()
}

#[derive(Args)]
pub struct DiffArgs {
    /// An input string table
    #[arg(short, long, value_name = "FILE")]
    left: PathBuf,

    /// An input string table
    #[arg(short, long, value_name = "FILE")]
    right: PathBuf,

    /// The type of both string tables, detected from the extension when omitted
    #[arg(short, long, value_enum)]
    kind: Option<Kind>,

    /// The locale of the text, taken from the file names when omitted
    #[arg(long)]
    locale: Option<String>,

    /// The locale table used to pick a text encoding
    #[arg(short, long, value_enum, default_value_t = Table::Legacy)]
    table: Table,

    /// Comparison mode
    #[arg(short, long, value_enum, default_value_t = Mode::Semantic)]
    mode: Mode,
}

impl DiffArgs {
    pub fn handle(&self) -> Result<()> {
        let table = LocaleTable::from(self.table);

        let left = read_table(&self.left, self.kind, self.locale.as_deref(), &table)?;
        let right = read_table(&self.right, self.kind, self.locale.as_deref(), &table)?;

        let changes = compare(&left, &right, self.mode);
        if changes.is_empty() {
            return Ok(());
        }

        println!(
            "🔃 {} vs {}",
            self.left.display().blue(),
            self.right.display().blue()
        );
        for change in &changes {
            print!("{}", change);
        }

        Ok(())
    }
}
