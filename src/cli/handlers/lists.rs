//! Whole-list handlers for waitlist CLI

use super::{find_list, print_table, report_missing};
use crate::cli::args::*;
use crate::cli::CliApp;
use crate::error::Result;
use crate::table::TerminalTable;
use tracing::info;

/// Show all wait lists
pub fn handle_all(app: &mut CliApp, args: &AllArgs) -> Result<()> {
    let table_type = args.table.resolve(app.config.table_type);

    let lists = {
        let session = app.db.session()?;
        session.get_wait_lists()?
    };

    let mut rows = vec![vec!["#".to_string(), "List Name".to_string()]];
    rows.extend(
        lists
            .into_iter()
            .map(|list| vec![list.id.to_string(), list.name]),
    );

    let table = TerminalTable::new(table_type, rows).max_width(app.terminal_width);
    print_table(&mut app.console, &table)
}

/// Delete a list together with all of its entries
pub fn handle_purge(app: &mut CliApp, args: &PurgeArgs) -> Result<()> {
    let list_name = args.list_name(&app.config.default_list);
    let session = app.db.session()?;

    let Some(list) = report_missing(&mut app.console, find_list(&session, &list_name))? else {
        return Ok(());
    };

    app.console.line(format!("Deleting list {}", list.name))?;
    session.delete_list(list.id)?;
    session.commit()?;

    info!(list = %list.name, "purged wait list");
    Ok(())
}
