//! Matrix command handler: print the generated weights and energy levels.

use anyhow::{Context, Result};

use energyroute_cli::output::{render_matrix, OutputFormat};
use energyroute_lib::{build_network, MatrixReport, NetworkConfig};

/// Handle the matrix subcommand.
pub fn handle_matrix_command(config: &NetworkConfig, format: OutputFormat) -> Result<()> {
    let network = build_network(config).context("failed to generate the network")?;
    let report = MatrixReport::from_network(&network);
    print!("{}", render_matrix(&report, format)?);
    Ok(())
}
