//! Command handler implementations for waitlist CLI
//!
//! This module organizes command handlers into logical groups:
//! - `lists`: Whole-list commands (all, purge)
//! - `entries`: Entry commands (list, show, add, approve/reject, del)
//! - `config`: Configuration handler
//!
//! Missing lists and entries are reported on the console and end the
//! handler normally; so do table rendering failures.

mod config;
mod entries;
mod lists;

pub use config::*;
pub use entries::*;
pub use lists::*;

use crate::cli::Console;
use crate::database::{Session, WaitList, WaitListEntry};
use crate::error::{EntryRef, Error, Result};
use crate::table::TerminalTable;
use crate::types::EntryId;

/// Find a list by exact name
pub(crate) fn find_list(session: &Session<'_>, name: &str) -> Result<WaitList> {
    session
        .get_list_by_exact_name(name)?
        .ok_or_else(|| Error::list_not_found(name))
}

/// Resolve an operator supplied entry identifier within a list
///
/// Integers are looked up by ID, anything else by exact title. Surrounding
/// whitespace is ignored for integers, and an integer too large for a row ID
/// is a miss rather than a title.
pub(crate) fn find_entry(
    session: &Session<'_>,
    list: &WaitList,
    identifier: &str,
) -> Result<WaitListEntry> {
    let (entry, by) = match integer_literal(identifier) {
        Some(digits) => match digits.parse::<i64>() {
            Ok(id) => (
                session.get_entry_by_id(list.id, EntryId::new(id))?,
                EntryRef::Id(id.to_string()),
            ),
            Err(_) => (None, EntryRef::Id(digits.to_string())),
        },
        None => (
            session.get_entry_by_title(list.id, identifier)?,
            EntryRef::Title(identifier.to_string()),
        ),
    };

    entry.ok_or_else(|| Error::EntryNotFound {
        entry: by,
        list: list.name.clone(),
    })
}

/// `identifier` without surrounding whitespace, if it is an optionally signed integer
fn integer_literal(identifier: &str) -> Option<&str> {
    let trimmed = identifier.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(trimmed)
}

/// Report a not-found error on the console and yield `None`
pub(crate) fn report_missing<T>(console: &mut Console, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => {
            console.line(&e)?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Print a rendered table, reporting render failures as `ERROR:` lines
pub(crate) fn print_table(console: &mut Console, table: &TerminalTable) -> Result<()> {
    match table.output() {
        Ok(output) => console.line(output),
        Err(e @ Error::Render { .. }) => console.line(format!("ERROR: {}", e)),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::cli::{AddArgs, CliApp, WaitListAction};
    use crate::config::Config;
    use crate::database::Database;

    /// Application over an in-memory store with captured output
    pub(crate) fn app() -> CliApp {
        CliApp::from_parts(
            Config::default(),
            Database::in_memory().unwrap(),
            Console::buffer(),
        )
    }

    /// Run `add` with the given positional arguments
    pub(crate) fn add(app: &mut CliApp, targets: &[&str]) {
        let args = AddArgs {
            targets: targets.iter().map(|s| s.to_string()).collect(),
            attributes: Vec::new(),
            approved: false,
        };
        app.run(&WaitListAction::Add(args)).unwrap();
    }

    #[test]
    fn test_find_entry_prefers_id() {
        let mut app = app();
        add(&mut app, &["movies", "Heat", "http://heat"]);
        // A title that looks like an ID is only reachable by its ID
        add(&mut app, &["movies", "1984", "http://1984"]);

        let session = app.db.session().unwrap();
        let list = find_list(&session, "movies").unwrap();

        assert_eq!(find_entry(&session, &list, "1").unwrap().title, "Heat");
        let err = find_entry(&session, &list, "1984").unwrap_err();
        assert!(matches!(
            err,
            Error::EntryNotFound {
                entry: EntryRef::Id(ref id),
                ..
            } if id == "1984"
        ));
    }

    #[test]
    fn test_find_entry_trims_integer_identifiers() {
        let mut app = app();
        add(&mut app, &["movies", "Heat", "http://heat"]);

        let session = app.db.session().unwrap();
        let list = find_list(&session, "movies").unwrap();

        assert_eq!(find_entry(&session, &list, " 1").unwrap().title, "Heat");
        assert_eq!(find_entry(&session, &list, "+1\n").unwrap().title, "Heat");
    }

    #[test]
    fn test_find_entry_oversized_id_is_id_miss() {
        let mut app = app();
        add(&mut app, &["movies", "Heat", "http://heat"]);

        let session = app.db.session().unwrap();
        let list = find_list(&session, "movies").unwrap();

        let err = find_entry(&session, &list, "99999999999999999999").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not find matching wait entry with ID 99999999999999999999 in list `movies`"
        );
    }

    #[test]
    fn test_integer_literal() {
        assert_eq!(integer_literal(" 12 "), Some("12"));
        assert_eq!(integer_literal("-3"), Some("-3"));
        assert_eq!(integer_literal("1984 Remake"), None);
        assert_eq!(integer_literal("+"), None);
        assert_eq!(integer_literal(""), None);
    }

    #[test]
    fn test_report_missing_passes_other_errors() {
        let mut console = Console::buffer();
        let result: Result<()> = Err(Error::render("boom"));
        assert!(report_missing(&mut console, result).is_err());
        assert!(console.contents().is_empty());
    }
}
