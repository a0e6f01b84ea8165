//! Command-line interface module for waitlist
//!
//! This module is organized into submodules:
//! - `args`: Command-line argument structures
//! - `console`: Output sink shared by the handlers
//! - `handlers`: Command handler implementations

mod args;
mod console;
mod handlers;

pub use args::*;
pub use console::Console;
use handlers::*;

use crate::config::Config;
use crate::database::Database;
use crate::error::Result;
use crate::table::TableType;
use crate::types::Approval;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::debug;

/// waitlist - manage named wait lists of pending entries
#[derive(Parser, Debug)]
#[command(name = "waitlist")]
#[command(about = "Manage named wait lists of pending entries awaiting approval")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file path (overrides the configured one)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (suppress progress notices)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// View and manage wait lists
    WaitList(WaitListArgs),
    /// Show, initialize or validate configuration
    Config(ConfigArgs),
}

impl Cli {
    /// Load the configuration selected by `--config`, then apply `--db`
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_path(path)?,
            None => Config::load()?,
        };

        if let Some(db) = &self.db {
            config.database_path = db.clone();
        }

        Ok(config)
    }
}

/// Main CLI application
pub struct CliApp {
    pub config: Config,
    pub db: Database,
    pub console: Console,
    pub no_color: bool,
    /// Width tables must fit in; `None` when stdout is not a terminal
    pub terminal_width: Option<usize>,
}

impl CliApp {
    /// Create a new CLI application, opening the configured database
    pub fn new(cli: &Cli, config: Config) -> Result<Self> {
        let db = Database::new(&config.database_path)?;

        let terminal_width = if std::io::stdout().is_terminal() {
            crossterm::terminal::size().ok().map(|(cols, _)| cols as usize)
        } else {
            None
        };

        Ok(Self {
            config,
            db,
            console: Console::stdout(cli.quiet),
            no_color: cli.no_color,
            terminal_width,
        })
    }

    /// Assemble an application from already opened parts
    pub fn from_parts(config: Config, db: Database, console: Console) -> Self {
        Self {
            config,
            db,
            console,
            no_color: false,
            terminal_width: None,
        }
    }

    /// Run a `wait-list` action
    pub fn run(&mut self, action: &WaitListAction) -> Result<()> {
        debug!(?action, "dispatching wait-list action");

        match action {
            WaitListAction::All(args) => handle_all(self, args),
            WaitListAction::List(args) => handle_list(self, args),
            WaitListAction::Show(args) => handle_show(self, args),
            WaitListAction::Add(args) => handle_add(self, args),
            WaitListAction::Approve(args) => handle_approve(self, args, Approval::Approved),
            WaitListAction::Reject(args) => handle_approve(self, args, Approval::Rejected),
            WaitListAction::Del(args) => handle_del(self, args),
            WaitListAction::Purge(args) => handle_purge(self, args),
        }
    }

    /// Whether table cells may carry colour
    pub(crate) fn colorize(&self, table_type: TableType) -> bool {
        !self.no_color && !table_type.is_porcelain()
    }
}

/// Run an already parsed command line with its loaded configuration
pub fn run_with(cli: &Cli, config: Config) -> Result<()> {
    match &cli.command {
        Commands::Config(args) => {
            let mut console = Console::stdout(cli.quiet);
            handle_config(&config, cli.config.as_deref(), args, &mut console)
        }
        Commands::WaitList(args) => {
            let mut app = CliApp::new(cli, config)?;
            app.run(&args.action)
        }
    }
}
