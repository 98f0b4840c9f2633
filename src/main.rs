use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use harnessgg_site::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "harnessgg-site")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Discovery service for Harness.gg CLI packages", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP service
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the package catalog
    Catalog {
        /// Resolve live versions from npm and PyPI
        #[arg(short, long)]
        resolve: bool,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the llms.txt discovery index
    Llms {
        /// Use static fallback versions instead of querying registries
        #[arg(long)]
        offline: bool,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the agent document for a package route
    Doc {
        /// Package route (e.g. /electron)
        route: String,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}", format!("Error: failed to create tokio runtime: {}", e).red());
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run_async(cli)) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

async fn run_async(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve { host, port, config } => {
            harnessgg_site::cli::serve::run(config.as_deref(), host, port).await?;
        }

        Commands::Catalog {
            resolve,
            json,
            config,
        } => {
            harnessgg_site::cli::catalog::run(config.as_deref(), resolve, json).await?;
        }

        Commands::Llms { offline, config } => {
            harnessgg_site::cli::docs::run_llms(config.as_deref(), offline).await?;
        }

        Commands::Doc { route, config } => {
            harnessgg_site::cli::docs::run_doc(&route, config.as_deref())?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "harnessgg-site", &mut io::stdout());
        }
    }

    Ok(())
}
