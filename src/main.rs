//! Room Planner - command line room layout designer
//!
//! Edits a saved room layout: room size, wall colors and furniture. Every
//! command works on one storage slot in the layouts directory.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roomplanner::cli::{
    CliContext, CliResult, ConfigArgs, ExitCode, FurnitureArgs, NewArgs, ResizeArgs,
    SessionArgs, ShapesArgs, ShowArgs, WallArgs,
};
use roomplanner::constants::APP_BINARY_NAME;

/// Room Planner - design a room layout from the command line
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Directory holding saved layouts (overrides the config file).
    /// Must come before the subcommand.
    #[arg(long, value_name = "DIR")]
    layouts_dir: Option<PathBuf>,

    /// Storage slot to work on
    #[arg(long, value_name = "KEY", global = true)]
    slot: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new empty room
    New(NewArgs),
    /// Show the room, walls and furniture
    Show(ShowArgs),
    /// Change the room size
    Resize(ResizeArgs),
    /// Inspect and paint walls
    Wall(WallArgs),
    /// Manage furniture
    Furniture(FurnitureArgs),
    /// Show the primitives a furniture kind is built from
    Shapes(ShapesArgs),
    /// Edit the layout with commands read from stdin
    Session(SessionArgs),
    /// View or change configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Shapes(args) => args.execute(),
        Commands::Config(args) => args.execute(),
        command => {
            let ctx = CliContext::new(cli.layouts_dir, cli.slot)?;
            match command {
                Commands::New(args) => args.execute(&ctx),
                Commands::Show(args) => args.execute(&ctx),
                Commands::Resize(args) => args.execute(&ctx),
                Commands::Wall(args) => args.execute(&ctx),
                Commands::Furniture(args) => args.execute(&ctx),
                Commands::Session(args) => args.execute(&ctx),
                Commands::Shapes(_) | Commands::Config(_) => Ok(()),
            }
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(ExitCode::ValidationError.code());
        }
    };

    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::debug!(kind = ?e.kind, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }
}
