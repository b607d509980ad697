//! Roadmap Probe - command-line smoke tests for the roadmap API
//!
//! Without a subcommand it runs `update`: read the local fixture, update its
//! first roadmap with the built-in ejes and iniciativas, print the result.

use clap::{Parser, Subcommand};
use roadmap_cli::commands::{self, roadmap, update};
use roadmap_cli::config::CliConfig;
use roadmap_cli::error::CliResult;
use roadmap_cli::output::{self, OutputFormat};
use roadmap_cli::RoadmapClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Roadmap Probe CLI application
#[derive(Parser)]
#[command(name = "roadmap-probe")]
#[command(about = "Roadmap API prober - fixture-driven smoke tests", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "ROADMAP_CONFIG")]
    config: Option<String>,

    /// Roadmap API endpoint [default: http://localhost:8081]
    #[arg(short, long, env = "ROADMAP_ENDPOINT")]
    endpoint: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Arguments for the default `update` run
    #[command(flatten)]
    update: update::UpdateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Update the fixture's first roadmap and print the result (default)
    Update(update::UpdateArgs),

    /// List all roadmaps
    #[command(alias = "ls")]
    List,

    /// Show a single roadmap
    Get {
        /// Roadmap ID
        roadmap_id: String,
    },

    /// Create an empty roadmap
    Create {
        /// Roadmap title
        #[arg(short, long)]
        title: String,

        /// Roadmap description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Print the built-in update payload without sending it
    Payload,

    /// Show configuration
    Config,
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load config
    let config = CliConfig::load(cli.config.as_deref())?;
    let endpoint = config.resolve_endpoint(cli.endpoint.as_deref());

    // Create client
    let client = RoadmapClient::new(&endpoint, config.timeout())?;

    // Execute command
    let fixture = config.resolve_fixture(cli.update.fixture.clone());
    match cli.command.unwrap_or(Commands::Update(cli.update)) {
        Commands::Update(args) => update::execute(args, &client, &config).await,
        Commands::List => roadmap::list(&client, cli.output).await,
        Commands::Get { roadmap_id } => roadmap::get(&client, &roadmap_id, cli.output).await,
        Commands::Create { title, description } => {
            roadmap::create(&client, title, description, cli.output).await
        }
        Commands::Payload => commands::payload(cli.output),
        Commands::Config => {
            println!("Endpoint: {}", endpoint);
            println!("Fixture: {}", fixture.display());
            println!("Config: {:?}", config);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; stdout carries the report, logs go to stderr
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
