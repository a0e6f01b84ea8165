//! Terminal table rendering
//!
//! Wraps `tabled` with the table types selectable from the command line.
//! A table that does not fit the terminal width is a [`Error::Render`],
//! unless it has wrap columns that can absorb the overflow.

use crate::error::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style, Width};
use tabled::Table;

/// Output style of a rendered table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableType {
    /// No borders
    Plain,
    /// Pipe separated columns without styling, for scripts
    Porcelain,
    /// Single line box drawing
    #[default]
    Single,
    /// Double line box drawing
    Double,
    /// GitHub flavoured markdown
    Github,
}

impl TableType {
    /// Porcelain output never carries colour or width checks
    pub fn is_porcelain(self) -> bool {
        self == TableType::Porcelain
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableType::Plain => "plain",
            TableType::Porcelain => "porcelain",
            TableType::Single => "single",
            TableType::Double => "double",
            TableType::Github => "github",
        };
        f.write_str(name)
    }
}

/// A table of string cells, header row first
pub struct TerminalTable {
    table_type: TableType,
    rows: Vec<Vec<String>>,
    wrap_columns: Vec<usize>,
    centered_columns: Vec<usize>,
    max_width: Option<usize>,
}

impl TerminalTable {
    pub fn new(table_type: TableType, rows: Vec<Vec<String>>) -> Self {
        Self {
            table_type,
            rows,
            wrap_columns: Vec::new(),
            centered_columns: Vec::new(),
            max_width: None,
        }
    }

    /// Columns whose content may be wrapped to fit the terminal
    pub fn wrap_columns(mut self, columns: &[usize]) -> Self {
        self.wrap_columns = columns.to_vec();
        self
    }

    /// Columns whose content is centred
    pub fn center_columns(mut self, columns: &[usize]) -> Self {
        self.centered_columns = columns.to_vec();
        self
    }

    /// Terminal width the table must fit in; `None` disables the check
    pub fn max_width(mut self, width: Option<usize>) -> Self {
        self.max_width = width;
        self
    }

    /// Render the table
    pub fn output(&self) -> Result<String> {
        let mut builder = Builder::default();
        for row in &self.rows {
            builder.push_record(row.clone());
        }
        let mut table = builder.build();

        match self.table_type {
            TableType::Plain => table.with(Style::blank()),
            TableType::Porcelain => table.with(Style::empty().vertical('|')),
            TableType::Single => table.with(Style::modern()),
            TableType::Double => table.with(Style::extended()),
            TableType::Github => table.with(Style::markdown()),
        };

        for &column in &self.centered_columns {
            table.modify(Columns::one(column), Alignment::center());
        }

        if self.table_type.is_porcelain() {
            return Ok(table.to_string());
        }

        if let Some(max_width) = self.max_width {
            self.fit(&mut table, max_width)?;
        }

        Ok(table.to_string())
    }

    fn fit(&self, table: &mut Table, max_width: usize) -> Result<()> {
        let width = table.total_width();
        if width <= max_width {
            return Ok(());
        }

        let overflow = width - max_width;
        for &column in &self.wrap_columns {
            let current = self.column_width(column);
            // Keep at least a few characters per line in a wrapped column
            let target = current.saturating_sub(overflow).max(4);
            table.modify(Columns::one(column), Width::wrap(target));
            if table.total_width() <= max_width {
                return Ok(());
            }
        }

        Err(Error::render(format!(
            "Terminal size is too narrow ({max_width} columns) to display a table {width} columns wide. \
             Try a wider terminal or `--porcelain` output"
        )))
    }

    fn column_width(&self, column: usize) -> usize {
        self.rows
            .iter()
            .filter_map(|row| row.get(column))
            .flat_map(|cell| cell.lines())
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }
}
