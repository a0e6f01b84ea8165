//! Entry handlers for waitlist CLI

use super::{find_entry, find_list, print_table, report_missing};
use crate::cli::args::*;
use crate::cli::{CliApp, Console};
use crate::database::EntryOrder;
use crate::error::Result;
use crate::table::TerminalTable;
use crate::types::Approval;
use crossterm::style::Stylize;
use std::collections::BTreeMap;
use tracing::info;

/// List the entries of a wait list, newest first
pub fn handle_list(app: &mut CliApp, args: &ListArgs) -> Result<()> {
    let list_name = args.list_name(&app.config.default_list);
    let table_type = args.table.resolve(app.config.table_type);
    let colorize = app.colorize(table_type);

    let entries = {
        let session = app.db.session()?;
        let Some(list) = report_missing(&mut app.console, find_list(&session, &list_name))? else {
            return Ok(());
        };
        session.get_entries_by_list_id(list.id, EntryOrder::Added, true)?
    };

    let mut rows = vec![vec![
        "#".to_string(),
        "Title".to_string(),
        "# of fields".to_string(),
        "Approved".to_string(),
    ]];
    for entry in entries {
        let approved = match entry.approval {
            Approval::Approved if colorize => entry.approval.as_cell().green().to_string(),
            other => other.as_cell().to_string(),
        };
        rows.push(vec![
            entry.id.to_string(),
            entry.title.clone(),
            entry.field_count().to_string(),
            approved,
        ]);
    }

    let table = TerminalTable::new(table_type, rows).max_width(app.terminal_width);
    print_table(&mut app.console, &table)
}

/// Show every field of one entry, sorted by field name
pub fn handle_show(app: &mut CliApp, args: &ShowArgs) -> Result<()> {
    let (list_name, identifier) = args.entry.target(&app.config.default_list);
    let table_type = args.table.resolve(app.config.table_type);

    let entry = {
        let session = app.db.session()?;
        let lookup = find_list(&session, &list_name)
            .and_then(|list| find_entry(&session, &list, &identifier));
        let Some(entry) = report_missing(&mut app.console, lookup)? else {
            return Ok(());
        };
        entry
    };

    let mut rows = vec![vec!["Field name".to_string(), "Value".to_string()]];
    // BTreeMap iteration is already sorted by key
    rows.extend(entry.fields.into_iter().map(|(k, v)| vec![k, v]));

    let table = TerminalTable::new(table_type, rows)
        .wrap_columns(&[1])
        .center_columns(&[0])
        .max_width(app.terminal_width);
    print_table(&mut app.console, &table)
}

/// Add an entry, or merge attributes into an existing entry of the same title
pub fn handle_add(app: &mut CliApp, args: &AddArgs) -> Result<()> {
    let (list_name, title, url) = args.target(&app.config.default_list);
    let session = app.db.session()?;

    let list = match session.get_list_by_exact_name(&list_name)? {
        Some(list) => list,
        None => {
            app.console.notice(format!(
                "Could not find a wait list with name `{}`, creating",
                list_name
            ))?;
            session.create_list(&list_name)?
        }
    };

    let output = match session.get_entry_by_title(list.id, &title)? {
        Some(existing) => {
            app.console.notice(format!(
                "Entry with the title `{}` already exist with list `{}`. Will replace identifiers if given",
                title, list.name
            ))?;
            let mut fields = existing.fields;
            fields.insert("url".to_string(), url);
            merge_attributes(&mut app.console, &title, &mut fields, &args.attributes)?;
            session.update_fields(existing.id, &fields)?;
            format!("Successfully updated entry `{}` to wait list `{}`", title, list.name)
        }
        None => {
            app.console.notice(format!(
                "Adding entry with title `{}` to list `{}`",
                title, list.name
            ))?;
            let approval = if args.approved {
                app.console.notice("marking entry as approved")?;
                Approval::Approved
            } else {
                Approval::Pending
            };
            let mut fields = BTreeMap::from([
                ("title".to_string(), title.clone()),
                ("url".to_string(), url),
            ]);
            merge_attributes(&mut app.console, &title, &mut fields, &args.attributes)?;
            session.add_entry(list.id, &title, &fields, approval)?;
            format!("Successfully added entry `{}` to wait list `{}`", title, list.name)
        }
    };

    session.commit()?;
    info!(list = %list.name, %title, "stored wait list entry");
    app.console.line(output)
}

/// Overlay `attributes` onto `fields`; the title field always stays the entry title
fn merge_attributes(
    console: &mut Console,
    title: &str,
    fields: &mut BTreeMap<String, String>,
    attributes: &[(String, String)],
) -> Result<()> {
    if !attributes.is_empty() {
        console.notice(format!("Adding attributes to entry `{}`", title))?;
        fields.extend(attributes.iter().cloned());
    }
    fields.insert("title".to_string(), title.to_string());
    Ok(())
}

/// Approve or reject an entry
///
/// An entry already in the `target` state is left untouched.
pub fn handle_approve(app: &mut CliApp, args: &EntryArgs, target: Approval) -> Result<()> {
    let (list_name, identifier) = args.target(&app.config.default_list);
    let session = app.db.session()?;

    let lookup =
        find_list(&session, &list_name).and_then(|list| find_entry(&session, &list, &identifier));
    let Some(entry) = report_missing(&mut app.console, lookup)? else {
        return Ok(());
    };

    if entry.approval == target {
        return app
            .console
            .line(format!("entry {} is already {}", entry.title, target));
    }

    session.set_approval(entry.id, target)?;
    session.commit()?;

    info!(title = %entry.title, approval = %target, "changed entry approval");
    app.console.line(format!(
        "Successfully marked pending entry {} as {}",
        entry.title, target
    ))
}

/// Delete one entry from a list
pub fn handle_del(app: &mut CliApp, args: &EntryArgs) -> Result<()> {
    let (list_name, identifier) = args.target(&app.config.default_list);
    let session = app.db.session()?;

    let lookup =
        find_list(&session, &list_name).and_then(|list| find_entry(&session, &list, &identifier));
    let Some(entry) = report_missing(&mut app.console, lookup)? else {
        return Ok(());
    };

    app.console.line(format!(
        "Removing wait entry `{}` from list {}",
        entry.title, list_name
    ))?;
    session.delete_entry(entry.id)?;
    session.commit()?;

    info!(title = %entry.title, list = %list_name, "deleted wait list entry");
    Ok(())
}
