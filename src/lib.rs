//! waitlist - manage named wait lists of pending entries
//!
//! This library provides functionality for:
//! - Storing named wait lists and their entries in SQLite
//! - Looking entries up by ID or exact title
//! - Merging entry attributes and recording approval decisions
//! - Rendering lists and entries as terminal tables
//!
//! # Examples
//!
//! ```rust
//! use waitlist::database::Database;
//! use waitlist::types::Approval;
//! use std::collections::BTreeMap;
//!
//! let mut db = Database::in_memory()?;
//! let session = db.session()?;
//! let list = session.create_list("movies")?;
//! let fields = BTreeMap::from([("title".to_string(), "Heat".to_string())]);
//! let entry = session.add_entry(list.id, "Heat", &fields, Approval::Pending)?;
//! session.set_approval(entry.id, Approval::Approved)?;
//! session.commit()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod prelude;
pub mod table;
pub mod types;

pub use config::{Config, DEFAULT_LIST_NAME};
pub use database::{Database, Session, WaitList, WaitListEntry};
pub use error::{Error, Result};
pub use table::{TableType, TerminalTable};
pub use types::Approval;
