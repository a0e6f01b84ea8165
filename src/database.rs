//! Database management for waitlist
//!
//! This module provides SQLite-based storage for wait lists and their
//! entries. All reads and writes go through a [`Session`], a transactional
//! scope that commits explicitly and rolls back when dropped.

use crate::error::Result;
use crate::types::{Approval, EntryId, ListId};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Default database file name
pub const DEFAULT_DB_FILE: &str = "waitlist.db";

/// Represents a named wait list
#[derive(Debug, Clone, Serialize)]
pub struct WaitList {
    pub id: ListId,
    pub name: String,
    pub added: DateTime<Utc>,
}

/// Represents a pending item in a wait list
#[derive(Debug, Clone, Serialize)]
pub struct WaitListEntry {
    pub id: EntryId,
    pub wait_list_id: ListId,
    pub title: String,
    /// Arbitrary attributes; always holds `title`
    pub fields: BTreeMap<String, String>,
    pub approval: Approval,
    pub added: DateTime<Utc>,
}

impl WaitListEntry {
    /// Number of attributes stored on the entry
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// Column used to order entry listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOrder {
    Added,
    Title,
    Id,
}

impl EntryOrder {
    fn column(self) -> &'static str {
        match self {
            EntryOrder::Added => "added",
            EntryOrder::Title => "title",
            EntryOrder::Id => "id",
        }
    }
}

/// Main database manager
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database at `db_path` and initialize schema
    #[must_use = "Database connection must be used"]
    pub fn new(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %db_path.display(), "opening wait list database");
        Self::from_connection(Connection::open(db_path)?)
    }

    /// Open a private in-memory database
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // Purging a list relies on the cascade
        conn.execute("PRAGMA foreign_keys = ON", [])?;

        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn initialize_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS wait_lists (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                added TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS wait_list_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                wait_list_id INTEGER NOT NULL,
                title TEXT NOT NULL,
                fields TEXT NOT NULL,
                approved INTEGER,
                added TEXT NOT NULL,
                UNIQUE (wait_list_id, title),
                FOREIGN KEY (wait_list_id) REFERENCES wait_lists(id) ON DELETE CASCADE
            );

            CREATE INDEX IF NOT EXISTS idx_entries_list ON wait_list_entries(wait_list_id);
            CREATE INDEX IF NOT EXISTS idx_entries_added ON wait_list_entries(added DESC);",
        )?;

        Ok(())
    }

    /// Begin a transactional session
    ///
    /// Changes are only persisted by [`Session::commit`].
    pub fn session(&mut self) -> Result<Session<'_>> {
        Ok(Session {
            tx: self.conn.transaction()?,
        })
    }
}

/// A single transactional scope over the store
pub struct Session<'conn> {
    tx: Transaction<'conn>,
}

impl Session<'_> {
    /// Commit all changes made in this session
    pub fn commit(self) -> Result<()> {
        self.tx.commit()?;
        Ok(())
    }

    /// Get all wait lists
    #[must_use = "Query results should be used"]
    pub fn get_wait_lists(&self) -> Result<Vec<WaitList>> {
        let mut stmt = self
            .tx
            .prepare("SELECT id, name, added FROM wait_lists ORDER BY id")?;

        let lists = stmt
            .query_map([], row_to_list)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(lists)
    }

    /// Find a wait list by exact (case-sensitive) name
    pub fn get_list_by_exact_name(&self, name: &str) -> Result<Option<WaitList>> {
        let list = self
            .tx
            .query_row(
                "SELECT id, name, added FROM wait_lists WHERE name = ?1",
                params![name],
                row_to_list,
            )
            .optional()?;

        Ok(list)
    }

    /// Create a new wait list
    pub fn create_list(&self, name: &str) -> Result<WaitList> {
        let added = Utc::now();
        self.tx.execute(
            "INSERT INTO wait_lists (name, added) VALUES (?1, ?2)",
            params![name, timestamp(added)],
        )?;

        let id = ListId::new(self.tx.last_insert_rowid());
        debug!(%id, name, "created wait list");

        Ok(WaitList {
            id,
            name: name.to_string(),
            added,
        })
    }

    /// Find an entry by ID within a list
    pub fn get_entry_by_id(&self, list_id: ListId, id: EntryId) -> Result<Option<WaitListEntry>> {
        let entry = self
            .tx
            .query_row(
                "SELECT id, wait_list_id, title, fields, approved, added
                 FROM wait_list_entries
                 WHERE wait_list_id = ?1 AND id = ?2",
                params![list_id, id],
                row_to_entry,
            )
            .optional()?;

        Ok(entry)
    }

    /// Find an entry by exact title within a list
    pub fn get_entry_by_title(&self, list_id: ListId, title: &str) -> Result<Option<WaitListEntry>> {
        let entry = self
            .tx
            .query_row(
                "SELECT id, wait_list_id, title, fields, approved, added
                 FROM wait_list_entries
                 WHERE wait_list_id = ?1 AND title = ?2",
                params![list_id, title],
                row_to_entry,
            )
            .optional()?;

        Ok(entry)
    }

    /// Get all entries of a list
    #[must_use = "Query results should be used"]
    pub fn get_entries_by_list_id(
        &self,
        list_id: ListId,
        order: EntryOrder,
        descending: bool,
    ) -> Result<Vec<WaitListEntry>> {
        let direction = if descending { "DESC" } else { "ASC" };
        // id breaks ties between entries added within the same microsecond
        let sql = format!(
            "SELECT id, wait_list_id, title, fields, approved, added
             FROM wait_list_entries
             WHERE wait_list_id = ?1
             ORDER BY {} {direction}, id {direction}",
            order.column()
        );

        let mut stmt = self.tx.prepare(&sql)?;
        let entries = stmt
            .query_map(params![list_id], row_to_entry)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(entries)
    }

    /// Insert a new entry into a list
    pub fn add_entry(
        &self,
        list_id: ListId,
        title: &str,
        fields: &BTreeMap<String, String>,
        approval: Approval,
    ) -> Result<WaitListEntry> {
        let added = Utc::now();
        self.tx.execute(
            "INSERT INTO wait_list_entries (wait_list_id, title, fields, approved, added)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                list_id,
                title,
                serde_json::to_string(fields)?,
                approval,
                timestamp(added)
            ],
        )?;

        let id = EntryId::new(self.tx.last_insert_rowid());
        debug!(%id, %list_id, title, "added wait list entry");

        Ok(WaitListEntry {
            id,
            wait_list_id: list_id,
            title: title.to_string(),
            fields: fields.clone(),
            approval,
            added,
        })
    }

    /// Replace the stored attributes of an entry
    pub fn update_fields(&self, id: EntryId, fields: &BTreeMap<String, String>) -> Result<()> {
        self.tx.execute(
            "UPDATE wait_list_entries SET fields = ?1 WHERE id = ?2",
            params![serde_json::to_string(fields)?, id],
        )?;
        debug!(%id, count = fields.len(), "updated entry fields");
        Ok(())
    }

    /// Set the approval state of an entry
    pub fn set_approval(&self, id: EntryId, approval: Approval) -> Result<()> {
        self.tx.execute(
            "UPDATE wait_list_entries SET approved = ?1 WHERE id = ?2",
            params![approval, id],
        )?;
        debug!(%id, %approval, "updated entry approval");
        Ok(())
    }

    /// Delete a single entry
    pub fn delete_entry(&self, id: EntryId) -> Result<()> {
        self.tx
            .execute("DELETE FROM wait_list_entries WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Delete a list together with all of its entries
    pub fn delete_list(&self, id: ListId) -> Result<()> {
        self.tx
            .execute("DELETE FROM wait_lists WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Count the entries of a list
    pub fn count_entries(&self, list_id: ListId) -> Result<usize> {
        let count: usize = self.tx.query_row(
            "SELECT COUNT(*) FROM wait_list_entries WHERE wait_list_id = ?1",
            params![list_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

/// Fixed-width RFC 3339 so that text ordering is chronological
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn row_to_list(row: &Row) -> rusqlite::Result<WaitList> {
    Ok(WaitList {
        id: row.get(0)?,
        name: row.get(1)?,
        added: row
            .get::<_, String>(2)?
            .parse()
            .unwrap_or_else(|_| Utc::now()),
    })
}

fn row_to_entry(row: &Row) -> rusqlite::Result<WaitListEntry> {
    let fields_json: String = row.get(3)?;
    let fields = serde_json::from_str(&fields_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(WaitListEntry {
        id: row.get(0)?,
        wait_list_id: row.get(1)?,
        title: row.get(2)?,
        fields,
        approval: row.get(4)?,
        added: row
            .get::<_, String>(5)?
            .parse()
            .unwrap_or_else(|_| Utc::now()),
    })
}
