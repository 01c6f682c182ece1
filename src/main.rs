//! movie-scout: terminal movie discovery client
//!
//! Search a TMDB-compatible catalog with debounced search-as-you-type,
//! and track what everyone searches for in an Appwrite-compatible store.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use movie_scout::cli::{self, OutputFormat};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "movie-scout")]
#[command(version)]
#[command(about = "Terminal movie discovery client", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Interactive browser (popular movies until you type)
    movie-scout browse

    # One-shot search
    movie-scout search \"batman\" --limit 10

    # What everyone else is searching for
    movie-scout trending

ENVIRONMENT:
    TMDB_API_TOKEN           Catalog bearer token
    APPWRITE_ENDPOINT        Analytics store endpoint
    APPWRITE_PROJECT_ID      Analytics store project
    APPWRITE_API_KEY         Analytics store API key
    APPWRITE_DATABASE_ID     Database holding the search-term collection
    APPWRITE_COLLECTION_ID   Search-term collection")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `search` subcommand
#[derive(Parser)]
struct SearchArgs {
    /// Search query (empty lists popular movies)
    #[arg(default_value = "")]
    query: String,

    /// Maximum number of results to show
    #[arg(short, long, default_value = "20")]
    limit: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Do not count this search in the trending statistics
    #[arg(long)]
    no_track: bool,
}

/// Arguments for the `trending` subcommand
#[derive(Parser)]
struct TrendingArgs {
    /// Maximum number of terms to show
    #[arg(short, long, default_value = "5")]
    limit: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive movie browser with live search
    Browse,

    /// One-shot movie search
    Search(SearchArgs),

    /// Show the most-searched terms
    Trending(TrendingArgs),

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file + env)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .movie-scout.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let (config, _loaded_from) = movie_scout::config::load_or_default(cli.config.as_deref());

    match cli.command {
        Commands::Browse => {
            cli::run_browse(&config)?;
            Ok(())
        }

        Commands::Search(args) => {
            cli::run_search(&config, &args.query, args.limit, args.output, args.no_track)?;
            Ok(())
        }

        Commands::Trending(args) => {
            cli::run_trending(&config, args.limit, args.output)?;
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    movie_scout::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir().map(|p| p.join("movie-scout").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in &[
                    ".movie-scout.yaml",
                    ".movie-scout.yml",
                    "movie-scout.yaml",
                    "movie-scout.yml",
                ] {
                    eprintln!("  {name}");
                }
                eprintln!();
                match movie_scout::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".movie-scout.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = movie_scout::config::generate_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "movie-scout", &mut io::stdout());
            Ok(())
        }
    }
}
