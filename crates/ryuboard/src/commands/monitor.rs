//! Alert and traffic command handlers.

use serde_json::Value;
use tabled::Tabled;

use ryuboard_api::{AlertReport, RyuClient, TrafficSample, from_value};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output::{self, View};

const BAR_WIDTH: f64 = 24.0;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct AlertRow {
    #[tabled(rename = "Source MAC")]
    mac: String,
    #[tabled(rename = "PPS")]
    pps: String,
    #[tabled(rename = "DPID")]
    dpid: String,
    #[tabled(rename = "Blocked")]
    blocked: &'static str,
}

#[derive(Tabled)]
struct TrafficRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "PPS")]
    pps: String,
    #[tabled(rename = "")]
    bar: String,
}

// ── Views ───────────────────────────────────────────────────────────

/// Detected attackers first, then MACs blacklisted without a live alert
/// (manual entries, or alerts cleared by the controller).
fn alert_view(raw: &Value) -> Option<View<AlertRow>> {
    let report: AlertReport = from_value(raw.clone()).ok()?;

    let mut rows: Vec<AlertRow> = report
        .alerts
        .iter()
        .map(|(mac, alert)| AlertRow {
            mac: mac.clone(),
            pps: format!("{:.2}", alert.pps),
            dpid: alert.dpid.to_string(),
            blocked: if report.blacklist.contains(mac) { "yes" } else { "no" },
        })
        .collect();

    rows.extend(
        report
            .blacklist
            .iter()
            .filter(|mac| !report.alerts.contains_key(*mac))
            .map(|mac| AlertRow {
                mac: mac.clone(),
                pps: "-".into(),
                dpid: "-".into(),
                blocked: "yes",
            }),
    );

    let plain = rows.iter().map(|r| r.mac.clone()).collect();
    Some(View { rows, plain })
}

fn traffic_view(raw: &Value) -> Option<View<TrafficRow>> {
    let samples: Vec<TrafficSample> = from_value(raw.clone()).ok()?;
    let peak = samples.iter().map(|s| s.pps).fold(0.0_f64, f64::max);

    let rows = samples
        .iter()
        .map(|s| TrafficRow {
            time: s.time.clone(),
            pps: format!("{:.2}", s.pps),
            bar: bar(s.pps, peak),
        })
        .collect();
    let plain = samples
        .iter()
        .map(|s| format!("{}\t{:.2}", s.time, s.pps))
        .collect();
    Some(View { rows, plain })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar(pps: f64, peak: f64) -> String {
    if peak <= 0.0 || pps <= 0.0 {
        return String::new();
    }
    let len = (pps / peak * BAR_WIDTH).round() as usize;
    "█".repeat(len.max(1))
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn alerts(client: &RyuClient, global: &GlobalOpts) -> Result<(), CliError> {
    let raw = client.get_alerts().await?;
    let out = output::render_payload(&global.output, &raw, alert_view)?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn traffic(client: &RyuClient, global: &GlobalOpts) -> Result<(), CliError> {
    let raw = client.get_traffic_stats().await?;
    let out = output::render_payload(&global.output, &raw, traffic_view)?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn alert_view_includes_manual_blacklist_entries() {
        let raw = json!({
            "blacklist": ["00:00:00:00:00:02", "00:00:00:00:00:09"],
            "alerts": { "00:00:00:00:00:02": { "pps": 300.0, "dpid": 1 } }
        });
        let view = alert_view(&raw).unwrap();
        assert_eq!(view.plain, vec!["00:00:00:00:00:02", "00:00:00:00:00:09"]);
        assert_eq!(view.rows[0].pps, "300.00");
        assert_eq!(view.rows[1].dpid, "-");
    }

    #[test]
    fn traffic_view_rejects_non_list_payload() {
        assert!(traffic_view(&json!({ "time": "x" })).is_none());
    }

    #[test]
    fn bar_scales_to_peak() {
        assert_eq!(bar(50.0, 100.0).chars().count(), 12);
        assert_eq!(bar(100.0, 100.0).chars().count(), 24);
        assert_eq!(bar(0.0, 100.0), "");
        assert_eq!(bar(0.01, 100.0).chars().count(), 1);
    }
}
