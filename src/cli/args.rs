//! Command-line argument structures for waitlist

use crate::error::Error;
use crate::table::TableType;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct WaitListArgs {
    #[command(subcommand)]
    pub action: WaitListAction,
}

/// Actions of the `wait-list` subcommand
#[derive(Subcommand, Debug)]
pub enum WaitListAction {
    /// Shows all existing wait lists
    All(AllArgs),
    /// List pending entries from a wait list
    List(ListArgs),
    /// Show entry fields
    Show(ShowArgs),
    /// Add a pending entry to a wait list
    Add(AddArgs),
    /// Mark a pending entry as approved
    Approve(EntryArgs),
    /// Mark a pending entry as rejected
    Reject(EntryArgs),
    /// Remove a pending entry from a wait list using its title or ID
    Del(EntryArgs),
    /// Removes an entire wait list with all of its entries. Use this with caution
    Purge(PurgeArgs),
}

/// Table output options
#[derive(Args, Debug, Default)]
pub struct TableArgs {
    /// Table output style
    #[arg(long, value_enum)]
    pub table_type: Option<TableType>,

    /// Machine readable output; same as `--table-type porcelain`
    #[arg(long, conflicts_with = "table_type")]
    pub porcelain: bool,
}

impl TableArgs {
    /// Effective table type, falling back to `default`
    pub fn resolve(&self, default: TableType) -> TableType {
        if self.porcelain {
            TableType::Porcelain
        } else {
            self.table_type.unwrap_or(default)
        }
    }
}

#[derive(Args, Debug)]
pub struct AllArgs {
    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Name of wait list to operate on
    #[arg(value_name = "LIST_NAME")]
    pub list_name: Option<String>,

    #[command(flatten)]
    pub table: TableArgs,
}

impl ListArgs {
    pub fn list_name(&self, default_list: &str) -> String {
        self.list_name
            .clone()
            .unwrap_or_else(|| default_list.to_string())
    }
}

/// `[LIST_NAME] <ENTRY>`: entry title or ID, optionally preceded by a list name
#[derive(Args, Debug)]
pub struct EntryArgs {
    /// Optional list name followed by the entry title or ID
    #[arg(value_name = "ENTRY", required = true, num_args = 1..=2)]
    pub targets: Vec<String>,
}

impl EntryArgs {
    /// Split into `(list_name, entry)`
    pub fn target(&self, default_list: &str) -> (String, String) {
        match self.targets.as_slice() {
            [list_name, entry] => (list_name.clone(), entry.clone()),
            [entry] => (default_list.to_string(), entry.clone()),
            // clap enforces one or two values
            _ => (default_list.to_string(), String::new()),
        }
    }
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub entry: EntryArgs,

    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Optional list name, then the entry title and URL
    #[arg(value_name = "ARGS", required = true, num_args = 2..=3)]
    pub targets: Vec<String>,

    /// Extra fields in `key=value` form, e.g. imdb_id=tt1234567 tmdb_id=27205
    #[arg(long, value_name = "ATTRIBUTES", num_args = 1.., value_parser = parse_attribute)]
    pub attributes: Vec<(String, String)>,

    /// Add an entry as approved
    #[arg(long)]
    pub approved: bool,
}

impl AddArgs {
    /// Split into `(list_name, entry_title, url)`
    pub fn target(&self, default_list: &str) -> (String, String, String) {
        match self.targets.as_slice() {
            [list_name, title, url] => (list_name.clone(), title.clone(), url.clone()),
            [title, url] => (default_list.to_string(), title.clone(), url.clone()),
            _ => (default_list.to_string(), String::new(), String::new()),
        }
    }
}

#[derive(Args, Debug)]
pub struct PurgeArgs {
    /// Name of wait list to operate on
    #[arg(value_name = "LIST_NAME")]
    pub list_name: Option<String>,
}

impl PurgeArgs {
    pub fn list_name(&self, default_list: &str) -> String {
        self.list_name
            .clone()
            .unwrap_or_else(|| default_list.to_string())
    }
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Show current configuration
    #[arg(long)]
    pub show: bool,

    /// Initialize configuration file with defaults
    #[arg(long)]
    pub init: bool,

    /// Validate configuration file
    #[arg(long)]
    pub validate: bool,
}

/// Parse a single `key=value` attribute
///
/// The argument must contain exactly one `=`.
pub fn parse_attribute(attribute: &str) -> Result<(String, String), Error> {
    if attribute.matches('=').count() != 1 {
        return Err(Error::InvalidAttribute {
            attribute: attribute.to_string(),
        });
    }

    match attribute.split_once('=') {
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(Error::InvalidAttribute {
            attribute: attribute.to_string(),
        }),
    }
}
