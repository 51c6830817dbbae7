//! Route command handler for computing energy-gated paths between nodes.

use anyhow::{Context, Result};
use tracing::info;

use energyroute_lib::{
    build_network, plan_route, Energy, MatrixReport, NetworkConfig, NodeId, RouteRequest,
    RouteSummary,
};

use energyroute_cli::output::{render_matrix, render_route, OutputFormat};
use energyroute_cli::terminal::ColorPalette;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting node index.
    pub from: NodeId,
    /// Destination node index.
    pub to: NodeId,
    /// Nodes with energy at or below this value cannot be entered.
    pub threshold: Energy,
    /// Print the generated weights and energies before the route.
    pub show_matrix: bool,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.from, self.to).with_threshold(self.threshold)
    }
}

/// Handle the route subcommand.
///
/// Generates the network described by `config`, plans the route and prints it.
pub fn handle_route_command(
    config: &NetworkConfig,
    format: OutputFormat,
    palette: &ColorPalette,
    args: &RouteCommandArgs,
) -> Result<()> {
    let network = build_network(config).context("failed to generate the network")?;

    if args.show_matrix && format != OutputFormat::Json {
        let report = MatrixReport::from_network(&network);
        println!("{}", render_matrix(&report, format)?);
    }

    let request = args.to_request();
    let plan = plan_route(&network, &request)
        .with_context(|| format!("failed to plan route from {} to {}", args.from, args.to))?;
    info!(
        found = plan.is_found(),
        hops = plan.hop_count(),
        "route planned"
    );

    let summary = RouteSummary::from_plan(&network, &plan);
    print!("{}", render_route(&summary, format, palette)?);
    Ok(())
}
