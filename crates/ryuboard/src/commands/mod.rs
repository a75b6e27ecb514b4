//! Command dispatch: bridges CLI args -> client accessors -> output formatting.

pub mod config_cmd;
pub mod lists;
pub mod monitor;
pub mod routes;
pub mod topology;

use ryuboard_api::RyuClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a controller-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &RyuClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Alerts => monitor::alerts(client, global).await,
        Command::Traffic => monitor::traffic(client, global).await,
        Command::Topology(args) => topology::handle(client, args, global).await,
        Command::Lists(args) => lists::handle(client, args, global).await,
        // Local commands are handled before dispatch
        Command::Routes(_) | Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
