//! socialcap CLI - AI-generated Instagram and LinkedIn captions for an image.
//!
//! The image is sent to a vision-capable Gemini model, and the two captions
//! come back as cards (or JSON) on stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Caption an image
//! socialcap generate photo.jpg
//!
//! # Just the Instagram caption, for piping into a clipboard tool
//! socialcap generate photo.jpg --only instagram | pbcopy
//!
//! # Which models can this key use?
//! socialcap models
//!
//! # Store the API key in the config file
//! socialcap config set-key
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// socialcap - AI-generated social media captions for your images.
#[derive(Parser, Debug)]
#[command(name = "socialcap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate Instagram and LinkedIn captions for an image
    Generate(cli::generate::GenerateArgs),

    /// List the models available to your API key
    Models(cli::models::ModelsArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI verbose override.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match socialcap_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `socialcap config path`."
            );
            socialcap_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("socialcap v{}", socialcap_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Generate(args) => cli::generate::execute(args, config).await,
        Commands::Models(args) => cli::models::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
