//! OctoFit CLI
//!
//! Renders the dashboard pages in the terminal:
//! - Landing page and the five resource pages
//! - Any client route via `open`
//! - Default config generation

use clap::{Parser, Subcommand, ValueEnum};
use octofit::app::{Route, Shell};
use octofit::client::ApiClient;
use octofit::config::{generate_default_config, Config, LoadedConfig};
use octofit::endpoint::Resource;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "octofit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fitness dashboard for the OctoFit backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// GitHub Codespaces workspace name (wins over --api-url)
    #[arg(long, global = true)]
    pub codespace: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the landing page
    Home,
    /// Show logged activities
    Activities,
    /// Show the leaderboard
    Leaderboard,
    /// Show team rankings
    Teams,
    /// Show users
    Users,
    /// Show suggested workouts
    Workouts,
    /// Open a client route, e.g. /teams
    Open {
        path: String,
    },
    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    fn path(&self) -> &str {
        match self {
            Commands::Home => Route::Home.path(),
            Commands::Activities => Resource::Activities.route(),
            Commands::Leaderboard => Resource::Leaderboard.route(),
            Commands::Teams => Resource::Teams.route(),
            Commands::Users => Resource::Users.route(),
            Commands::Workouts => Resource::Workouts.route(),
            Commands::Open { path } => path,
            Commands::Config { .. } => "",
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let config = generate_default_config();
        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &config)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", config),
        }
        return Ok(());
    }

    let loaded = match &cli.config {
        Some(path) => LoadedConfig::from_path(path)?,
        None => Config::load_default(),
    };
    let mut config = loaded.config.clone();
    if let Some(url) = cli.api_url.clone() {
        config.api.base_url = Some(url);
    }
    if let Some(name) = cli.codespace.clone() {
        config.api.codespace_name = Some(name);
    }

    octofit::logging::init_tracing(&config.logging)?;
    loaded.report();

    let client = ApiClient::new(config.api.resolver(), config.api.request_timeout())?;
    tracing::debug!(base_url = %client.resolver().base_url(), "Backend resolved");
    let shell = Shell::new(client);

    let path = cli.command.path();
    let route = Route::parse(path);

    if let (OutputFormat::Json, Route::Page(resource)) = (cli.format, route) {
        match shell.records_json(resource).await {
            Ok(records) => println!("{}", serde_json::to_string_pretty(&records)?),
            Err(message) => {
                eprintln!("Error loading {}: {}", resource.title().to_lowercase(), message);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let rendered = shell.open(path).await;
    print!("{}", rendered.full());

    if rendered.error.is_some() {
        std::process::exit(1);
    }
    if rendered.route == Route::NotFound {
        std::process::exit(2);
    }

    Ok(())
}
