//! Topology command handlers.
//!
//! The switch, link and host payloads come from Ryu's topology API and are
//! rendered by JSON pointer; nothing here is typed.

use serde_json::Value;
use tabled::Tabled;

use ryuboard_api::RyuClient;

use crate::cli::{GlobalOpts, TopologyArgs, TopologyCommand};
use crate::error::CliError;
use crate::output::{self, View, cell};

#[derive(Tabled)]
struct SwitchRow {
    #[tabled(rename = "DPID")]
    dpid: String,
    #[tabled(rename = "Ports")]
    ports: usize,
}

#[derive(Tabled)]
struct LinkRow {
    #[tabled(rename = "Source")]
    src: String,
    #[tabled(rename = "Destination")]
    dst: String,
}

#[derive(Tabled)]
struct HostRow {
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "IPv4")]
    ipv4: String,
    #[tabled(rename = "IPv6")]
    ipv6: String,
    #[tabled(rename = "Attached")]
    attached: String,
}

fn endpoint(value: &Value, side: &str) -> String {
    format!(
        "{}:{}",
        cell(value, &format!("/{side}/dpid")),
        cell(value, &format!("/{side}/port_no"))
    )
}

fn switch_view(raw: &Value) -> Option<View<SwitchRow>> {
    let items = raw.as_array()?;
    let rows: Vec<SwitchRow> = items
        .iter()
        .map(|sw| SwitchRow {
            dpid: cell(sw, "/dpid"),
            ports: sw
                .get("ports")
                .and_then(Value::as_array)
                .map_or(0, Vec::len),
        })
        .collect();
    let plain = rows.iter().map(|r| r.dpid.clone()).collect();
    Some(View { rows, plain })
}

fn link_view(raw: &Value) -> Option<View<LinkRow>> {
    let items = raw.as_array()?;
    let rows: Vec<LinkRow> = items
        .iter()
        .map(|link| LinkRow {
            src: endpoint(link, "src"),
            dst: endpoint(link, "dst"),
        })
        .collect();
    let plain = rows.iter().map(|r| format!("{} {}", r.src, r.dst)).collect();
    Some(View { rows, plain })
}

fn host_view(raw: &Value) -> Option<View<HostRow>> {
    let items = raw.as_array()?;
    let rows: Vec<HostRow> = items
        .iter()
        .map(|host| HostRow {
            mac: cell(host, "/mac"),
            ipv4: cell(host, "/ipv4"),
            ipv6: cell(host, "/ipv6"),
            attached: endpoint(host, "port"),
        })
        .collect();
    let plain = rows.iter().map(|r| r.mac.clone()).collect();
    Some(View { rows, plain })
}

pub async fn handle(
    client: &RyuClient,
    args: TopologyArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = match args.command {
        TopologyCommand::Switches => {
            let raw = client.get_switches().await?;
            output::render_payload(&global.output, &raw, switch_view)?
        }
        TopologyCommand::Links => {
            let raw = client.get_links().await?;
            output::render_payload(&global.output, &raw, link_view)?
        }
        TopologyCommand::Hosts => {
            let raw = client.get_hosts().await?;
            output::render_payload(&global.output, &raw, host_view)?
        }
    };
    output::print_output(&out, global.quiet);
    Ok(())
}
