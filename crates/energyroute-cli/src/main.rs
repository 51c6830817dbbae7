mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use energyroute_cli::output::OutputFormat;
use energyroute_cli::terminal::ColorPalette;
use energyroute_lib::{Energy, NetworkConfig, NodeId, DEFAULT_SEED, MAX_NODE_COUNT};

use commands::matrix::handle_matrix_command;
use commands::route::{handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Energy-gated shortest paths over generated networks")]
struct Cli {
    #[command(flatten)]
    network: NetworkArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Disable ANSI colors (also honoured via NO_COLOR).
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

/// Parameters of the generated network.
#[derive(Args, Debug)]
struct NetworkArgs {
    /// Number of nodes in the network.
    #[arg(
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u16).range(1..=MAX_NODE_COUNT as i64),
        global = true
    )]
    nodes: u16,

    /// Seed for weight and energy generation.
    #[arg(long, default_value_t = DEFAULT_SEED, global = true)]
    seed: u64,

    /// Exclusive upper bound for edge weights.
    #[arg(long, default_value_t = 10.0, global = true)]
    max_weight: f64,

    /// Inclusive lower bound for node energy.
    #[arg(long, default_value_t = 15, global = true, allow_negative_numbers = true)]
    energy_min: Energy,

    /// Exclusive upper bound for node energy.
    #[arg(long, default_value_t = 100, global = true, allow_negative_numbers = true)]
    energy_max: Energy,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the cheapest route between two nodes, skipping low-energy nodes.
    Route {
        /// Starting node index.
        #[arg(long = "from")]
        from: NodeId,
        /// Destination node index.
        #[arg(long = "to")]
        to: NodeId,
        /// Nodes with energy at or below this value cannot be entered.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        threshold: Energy,
        /// Print the generated weights and energies before the route.
        #[arg(long)]
        show_matrix: bool,
    },
    /// Print the generated weight matrix and node energy levels.
    Matrix,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };

    match cli.command {
        Command::Route {
            from,
            to,
            threshold,
            show_matrix,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                threshold,
                show_matrix,
            };
            let config = network_config(&cli.network);
            handle_route_command(&config, cli.format, &palette, &args)
        }
        Command::Matrix => handle_matrix_command(&network_config(&cli.network), cli.format),
    }
}

fn network_config(args: &NetworkArgs) -> NetworkConfig {
    NetworkConfig {
        node_count: usize::from(args.nodes),
        max_weight: args.max_weight,
        energy_range: args.energy_min..args.energy_max,
        seed: args.seed,
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
