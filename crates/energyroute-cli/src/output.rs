//! Output formatting for route and network rendering.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use energyroute_lib::{MatrixReport, RouteSummary};

use crate::terminal::ColorPalette;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Step-by-step listing with energies and weights.
    #[default]
    Text,
    /// Single `0 -> 1 -> 2` line.
    Basic,
    /// Pretty-printed JSON.
    Json,
}

/// Render a route summary in the requested format.
pub fn render_route(
    summary: &RouteSummary,
    format: OutputFormat,
    palette: &ColorPalette,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => to_json(summary),
        OutputFormat::Basic => Ok(summary.render_compact()),
        OutputFormat::Text => Ok(render_route_text(summary, palette)),
    }
}

/// Render the generated network in the requested format.
///
/// `Basic` and `Text` share the plain listing.
pub fn render_matrix(report: &MatrixReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Basic | OutputFormat::Text => Ok(report.render()),
    }
}

fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut rendered = serde_json::to_string_pretty(value)?;
    rendered.push('\n');
    Ok(rendered)
}

fn render_route_text(summary: &RouteSummary, p: &ColorPalette) -> String {
    if !summary.found {
        return format!(
            "{}No valid path found{} from {} to {} (threshold: {}).\n",
            p.red, p.reset, summary.start, summary.end, summary.threshold
        );
    }

    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{}Path{} from {} to {} ({} hops, threshold: {}):",
        p.green, p.reset, summary.start, summary.end, summary.hops, summary.threshold
    );
    for step in &summary.steps {
        let node = format!("{}node {}{}", p.white_bold, step.node, p.reset);
        let energy = format!("{}[energy {}]{}", p.cyan, step.energy, p.reset);
        match step.hop_weight {
            Some(weight) => {
                let _ = writeln!(
                    buffer,
                    "  {:>3}: {} {} {}(+{:.2}){}",
                    step.index, node, energy, p.gray, weight, p.reset
                );
            }
            None => {
                let _ = writeln!(buffer, "  {:>3}: {} {}", step.index, node, energy);
            }
        }
    }
    let _ = writeln!(
        buffer,
        "\n{}Total weight: {:.2}{}",
        p.green, summary.total_weight, p.reset
    );
    buffer
}
