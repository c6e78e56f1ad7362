//! Shared layout for presenters whose values contain other values.
//!
//! A block looks like
//!
//! ```text
//! {
//!     name: value,
//!     other: <Inner #3> {
//!         a: 1
//!     }
//! }
//! ```
//!
//! Every nested value is presented through the registry with one less unit
//! of depth, then re-indented on every line so that it sits under its
//! parent's entry.

use replview_types::Value;

use crate::error::Result;
use crate::markup;
use crate::mode::{Depth, Mode};
use crate::presenter::Present;

pub const INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiters {
    Braces,
    Brackets,
}

impl Delimiters {
    fn pair(&self) -> (&'static str, &'static str) {
        match self {
            Delimiters::Braces => ("{", "}"),
            Delimiters::Brackets => ("[", "]"),
        }
    }
}

/// One nested value, optionally labelled (`label: value`).
#[derive(Debug, Clone)]
pub struct Entry {
    pub label: Option<String>,
    pub value: Value,
}

impl Entry {
    pub fn named(label: impl Into<String>, value: Value) -> Self {
        Self {
            label: Some(label.into()),
            value,
        }
    }

    pub fn positional(value: Value) -> Self {
        Self { label: None, value }
    }
}

/// A presenter that renders as `reference + " " + block`.
pub trait Recursive {
    fn reference(&self, value: &Value, mode: Mode) -> Result<String>;

    fn entries(&self, value: &Value) -> Result<Vec<Entry>>;

    fn delimiters(&self) -> Delimiters {
        Delimiters::Braces
    }
}

/// Full form of a recursive value. An exhausted budget yields the
/// reference alone, without looking at the entries.
pub fn present_value<R>(
    presenter: &R,
    value: &Value,
    depth: Depth,
    mode: Mode,
    nested: &dyn Present,
) -> Result<String>
where
    R: Recursive + ?Sized,
{
    if depth.is_exhausted() {
        return presenter.reference(value, mode);
    }

    let reference = presenter.reference(value, mode)?;
    let entries = presenter.entries(value)?;
    let block = format_block(&entries, presenter.delimiters(), depth, mode, nested)?;

    Ok(format!("{} {}", reference, block))
}

/// Lay out `entries` between `delimiters`. `depth` is the budget of the
/// value that owns the entries; each entry is presented one level lower.
pub fn format_block(
    entries: &[Entry],
    delimiters: Delimiters,
    depth: Depth,
    mode: Mode,
    nested: &dyn Present,
) -> Result<String> {
    let (open, close) = delimiters.pair();
    if entries.is_empty() {
        return Ok(format!("{}{}", open, close));
    }

    let child_depth = depth.descend();
    let mut formatted = Vec::with_capacity(entries.len());
    for entry in entries {
        let value = indent(&nested.present(&entry.value, child_depth, mode)?);
        formatted.push(match &entry.label {
            Some(label) if mode.is_color() => format!("{}: {}", markup::escape(label), value),
            Some(label) => format!("{}: {}", label, value),
            None => value,
        });
    }

    let glue = format!(",\n{}", INDENT);
    Ok(format!(
        "{}\n{}{}\n{}",
        open,
        INDENT,
        formatted.join(&glue),
        close
    ))
}

/// Indent every line after the first by one unit. The first line follows
/// the entry label, which is already indented.
pub fn indent(text: &str) -> String {
    text.replace('\n', &format!("\n{}", INDENT))
}
