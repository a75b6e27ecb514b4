//! Whitelist / blacklist command handlers.

use serde_json::Value;
use tabled::Tabled;

use ryuboard_api::{ListChange, ListSnapshot, RyuClient, from_value};

use crate::cli::{GlobalOpts, ListsArgs, ListsCommand, OutputFormat};
use crate::error::CliError;
use crate::output::{self, View};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "List")]
    list: String,
    #[tabled(rename = "MAC")]
    mac: String,
}

fn snapshot_view(raw: &Value) -> Option<View<EntryRow>> {
    let snapshot: ListSnapshot = from_value(raw.clone()).ok()?;
    let entries = snapshot.entries();
    let plain = entries
        .iter()
        .map(|e| format!("{} {}", e.list_type, e.mac))
        .collect();
    let rows = entries
        .into_iter()
        .map(|e| EntryRow {
            list: e.list_type.to_string(),
            mac: e.mac,
        })
        .collect();
    Some(View { rows, plain })
}

/// Report a mutation reply. A reply that decodes as an error status fails
/// the command; anything else is printed as received.
fn report_change(raw: &Value, global: &GlobalOpts) -> Result<(), CliError> {
    let change = from_value::<ListChange>(raw.clone()).ok();
    if let Some(rejected) = change.as_ref().filter(|c| !c.is_success()) {
        return Err(CliError::ListRejected {
            message: rejected.message.clone(),
        });
    }

    let out = match (&global.output, change) {
        (OutputFormat::Table | OutputFormat::Plain, Some(change)) => {
            let color = output::should_color(&global.color);
            format!(
                "{}: {}",
                output::paint_status(&change.status, color),
                change.message
            )
        }
        _ => output::render_structured(&global.output, raw)?,
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle(
    client: &RyuClient,
    args: ListsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ListsCommand::Show => {
            let raw = client.get_lists().await?;
            let out = output::render_payload(&global.output, &raw, snapshot_view)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
        ListsCommand::Add { list, mac } => {
            let raw = client.add_to_list(list.into(), &mac).await?;
            report_change(&raw, global)
        }
        ListsCommand::Remove { list, mac } => {
            let raw = client.remove_from_list(list.into(), &mac).await?;
            report_change(&raw, global)
        }
    }
}
