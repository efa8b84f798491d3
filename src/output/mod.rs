//
//  travis-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Formatting
//!
//! Rendering of API results for the `travis` binary: `comfy_table` tables
//! for interactive use, pretty JSON for scripting.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

use crate::models::{Action, Build, Job, Repository, Setting};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// A type that renders as one row of a table.
pub trait TableRow {
    /// Column headers, shared by every row of the type.
    fn headers() -> Vec<&'static str>;

    fn row(&self) -> Vec<String>;
}

/// Creates a table with the default preset and dynamic column widths.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Renders `values` as a table.
pub fn render_table<T: TableRow>(values: &[T]) -> Table {
    let mut table = create_table();
    table.set_header(T::headers());
    for value in values {
        table.add_row(value.row());
    }
    table
}

/// Writes values in the configured format.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn write<T: Serialize + TableRow>(&self, value: &T) -> anyhow::Result<()> {
        self.write_list(std::slice::from_ref(value))
    }

    /// Writes a list: a JSON array, or one table with a row per value.
    pub fn write_list<T: Serialize + TableRow>(&self, values: &[T]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(values)?),
            OutputFormat::Table if values.is_empty() => println!("No results"),
            OutputFormat::Table => println!("{}", render_table(values)),
        }
        Ok(())
    }
}

fn or_dash(value: Option<impl ToString>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

impl TableRow for Repository {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Slug", "Active", "Private", "Language"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.slug.clone(),
            self.active.to_string(),
            self.private.to_string(),
            or_dash(self.github_language.as_deref()),
        ]
    }
}

impl TableRow for Build {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Number", "State", "Event", "Branch", "Duration"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.number.clone(),
            self.state.to_string(),
            or_dash(self.event_type.as_deref()),
            or_dash(self.branch.as_ref().map(|b| b.name.as_str())),
            or_dash(self.duration.map(|d| format!("{}s", d))),
        ]
    }
}

impl TableRow for Job {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Number", "State", "Queue", "Allow Failure"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            or_dash(self.number.as_deref()),
            self.state.to_string(),
            or_dash(self.queue.as_deref()),
            self.allow_failure.to_string(),
        ]
    }
}

impl TableRow for Setting {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "Value"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.name.clone(), self.value.to_string()]
    }
}

impl<T: Serialize> TableRow for Action<T> {
    fn headers() -> Vec<&'static str> {
        vec!["Status", "Change", "Resource"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.kind.clone(),
            self.state_change.clone(),
            self.resource_type.clone(),
        ]
    }
}
