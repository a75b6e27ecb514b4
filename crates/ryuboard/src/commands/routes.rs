//! Route table inspection. Runs entirely locally.

use serde::Serialize;
use tabled::Tabled;

use ryuboard_router::{Navigation, Route, RouteTable, Router, ViewId};

use crate::cli::{GlobalOpts, RoutesArgs, RoutesCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct RouteRow {
    #[tabled(rename = "Path")]
    path: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "View")]
    view: String,
}

fn route_row(route: &Route) -> RouteRow {
    RouteRow {
        path: route.path,
        name: route.name,
        view: route.view.to_string(),
    }
}

/// One replayed navigation step.
#[derive(Debug, Serialize)]
struct StepRecord {
    step: String,
    path: String,
    view: ViewId,
    outcome: &'static str,
}

#[derive(Tabled)]
struct StepRow {
    #[tabled(rename = "Step")]
    step: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "View")]
    view: String,
    #[tabled(rename = "Outcome")]
    outcome: &'static str,
}

fn outcome(nav: Option<Navigation>) -> &'static str {
    match nav {
        Some(Navigation::Changed { .. }) => "changed",
        Some(Navigation::Unchanged) => "unchanged",
        None => "at-edge",
    }
}

fn walk(from: &str, steps: &[String]) -> Result<Vec<StepRecord>, CliError> {
    let mut router = Router::new(RouteTable::default(), from);
    let mut records = Vec::with_capacity(steps.len());

    for step in steps {
        let nav = match step.as_str() {
            "back" => router.back(),
            "forward" => router.forward(),
            path if path.starts_with('/') => Some(router.visit(path)),
            name => Some(router.navigate(name)?),
        };
        records.push(StepRecord {
            step: step.clone(),
            path: router.current_path().to_owned(),
            view: router.current_view(),
            outcome: outcome(nav),
        });
    }
    Ok(records)
}

pub fn handle(args: RoutesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let table = RouteTable::default();

    let out = match args.command {
        RoutesCommand::List => output::render_list(&global.output, table.routes(), route_row, |r| {
            r.path.to_owned()
        })?,
        RoutesCommand::Resolve { path } => {
            let route = table.resolve(&path)?;
            output::render_list(
                &global.output,
                std::slice::from_ref(route),
                route_row,
                |r| r.view.to_string(),
            )?
        }
        RoutesCommand::Href { name } => table.href(&name)?.to_owned(),
        RoutesCommand::Walk { from, steps } => {
            let records = walk(&from, &steps)?;
            output::render_list(
                &global.output,
                &records,
                |r| StepRow {
                    step: r.step.clone(),
                    path: r.path.clone(),
                    view: r.view.to_string(),
                    outcome: r.outcome,
                },
                |r| format!("{} {}", r.path, r.view),
            )?
        }
    };
    output::print_output(&out, global.quiet);
    Ok(())
}
