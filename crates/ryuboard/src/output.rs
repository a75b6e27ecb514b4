//! Output formatting: table, JSON, YAML, plain.
//!
//! Structured formats always serialize the controller's payload as it came
//! back. Table and plain go through a per-command view of the payload and
//! fall back to pretty JSON when the payload doesn't have the expected shape.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

/// Table rows and plain-text lines derived from one payload.
pub struct View<R> {
    pub rows: Vec<R>,
    pub plain: Vec<String>,
}

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Green for success, red for anything else.
pub fn paint_status(status: &str, color: bool) -> String {
    match (color, status) {
        (false, _) => status.to_owned(),
        (true, "success") => status.green().to_string(),
        (true, _) => status.red().to_string(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a raw controller payload in the chosen format.
///
/// `view` returns `None` when the payload isn't shaped as expected, in
/// which case table and plain output show pretty JSON instead.
pub fn render_payload<R: Tabled>(
    format: &OutputFormat,
    raw: &Value,
    view: impl FnOnce(&Value) -> Option<View<R>>,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => match view(raw) {
            Some(v) => Ok(render_table(&v.rows)),
            None => render_json(raw, false),
        },
        OutputFormat::Plain => match view(raw) {
            Some(v) => Ok(v.plain.join("\n")),
            None => render_json(raw, false),
        },
        _ => render_structured(format, raw),
    }
}

/// Render locally produced rows (no controller payload involved).
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Ok(render_table(&rows))
        }
        OutputFormat::Plain => Ok(data.iter().map(id_fn).collect::<Vec<_>>().join("\n")),
        _ => render_structured(format, data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// JSON / JSON-compact / YAML. Table and plain fall through to pretty JSON.
pub fn render_structured<T: Serialize + ?Sized>(
    format: &OutputFormat,
    data: &T,
) -> Result<String, CliError> {
    match format {
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(data)?),
        OutputFormat::Json | OutputFormat::Table | OutputFormat::Plain => render_json(data, false),
    }
}

fn render_json<T: Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let out = if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };
    Ok(out)
}

// ── Loose field access for opaque payloads ───────────────────────────

/// Render a scalar JSON field for a table cell; `-` when absent.
pub fn cell(value: &Value, pointer: &str) -> String {
    match value.pointer(pointer) {
        None | Some(Value::Null) => "-".into(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_owned))
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}
