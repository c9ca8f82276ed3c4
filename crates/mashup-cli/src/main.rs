//! Idea Mashup CLI - generate startup ideas from curated element pools.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use mashup_core::GenerationConfigOverrides;
use mashup_ops::Config;
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::config as config_cmd;

/// Idea Mashup CLI - combine personas, problems, technologies and business
/// models into startup ideas.
#[derive(Parser, Debug)]
#[command(
    name = "mashup",
    author,
    version,
    about = "Idea Mashup: random startup ideas from curated elements",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate ideas and print them (default command).
    Generate {
        /// Number of ideas to generate.
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        #[command(flatten)]
        switches: CategorySwitches,

        /// Print JSON instead of plain descriptions.
        #[arg(long)]
        json: bool,
    },

    /// Replace the element pools from a JSON file.
    ///
    /// The file maps element types to lists of contents, e.g.
    /// `{"persona": ["Tech Entrepreneurs"], "problem": [...]}`.
    Seed {
        /// Path to the elements file.
        file: PathBuf,
    },

    /// Run the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value_t = 3000, env = "MASHUP_PORT")]
        port: u16,

        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Show element pool and saved idea counts.
    Status,

    /// Manage configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Per-invocation category switches; unset ones follow the config.
#[derive(Args, Debug, Default)]
struct CategorySwitches {
    /// Include a format.
    #[arg(long, overrides_with = "no_formats")]
    formats: bool,
    /// Leave the format out.
    #[arg(long, overrides_with = "formats")]
    no_formats: bool,

    /// Include a channel.
    #[arg(long, overrides_with = "no_channels")]
    channels: bool,
    /// Leave the channel out.
    #[arg(long, overrides_with = "channels")]
    no_channels: bool,

    /// Include an action verb.
    #[arg(long, overrides_with = "no_action_verbs")]
    action_verbs: bool,
    /// Leave the action verb out.
    #[arg(long, overrides_with = "action_verbs")]
    no_action_verbs: bool,

    /// Include a trend.
    #[arg(long, overrides_with = "no_trends")]
    trends: bool,
    /// Leave the trend out.
    #[arg(long, overrides_with = "trends")]
    no_trends: bool,
}

impl CategorySwitches {
    fn overrides(&self) -> GenerationConfigOverrides {
        GenerationConfigOverrides {
            include_formats: switch(self.formats, self.no_formats),
            include_channels: switch(self.channels, self.no_channels),
            include_action_verbs: switch(self.action_verbs, self.no_action_verbs),
            include_trends: switch(self.trends, self.no_trends),
        }
    }
}

fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    // Setup tracing based on verbosity; RUST_LOG wins when set
    let serving = matches!(cli.command, Some(Commands::Serve { .. }));
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else if serving {
        Level::INFO
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(level.as_str())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;

    let command = cli.command.unwrap_or(Commands::Generate {
        count: 1,
        switches: CategorySwitches::default(),
        json: false,
    });

    match command {
        Commands::Generate {
            count,
            switches,
            json,
        } => {
            commands::generate::execute(config, count, switches.overrides(), json).await?;
        }

        Commands::Seed { file } => {
            commands::seed::execute(config, &file).await?;
        }

        Commands::Serve { port, host } => {
            commands::serve::execute(config, &host, port).await?;
        }

        Commands::Status => {
            commands::status::execute(config).await?;
        }

        Commands::Config(config_cmd_inner) => {
            match config_cmd_inner {
                ConfigCommands::Show => {
                    config_cmd::show(&config)?;
                }
                ConfigCommands::Set { key, value } => {
                    // Environment overrides stay out of the saved file
                    let mut file_config = Config::load_file()?;
                    config_cmd::set(&mut file_config, &key, &value)?;
                }
                ConfigCommands::Get { key } => {
                    config_cmd::get(&config, &key)?;
                }
                ConfigCommands::Reset => {
                    config_cmd::reset()?;
                }
                ConfigCommands::Path => {
                    if let Some(path) = Config::config_file_path() {
                        println!("{}", path.display());
                    } else {
                        println!("(no config file path available)");
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switches_map_to_overrides() {
        let cli = Cli::parse_from(["mashup", "generate", "--no-formats", "--trends"]);
        let Some(Commands::Generate { switches, .. }) = cli.command else {
            panic!("Expected generate");
        };
        let overrides = switches.overrides();
        assert_eq!(overrides.include_formats, Some(false));
        assert_eq!(overrides.include_trends, Some(true));
        assert_eq!(overrides.include_channels, None);
    }

    #[test]
    fn test_last_switch_wins() {
        let cli = Cli::parse_from(["mashup", "generate", "--formats", "--no-formats"]);
        let Some(Commands::Generate { switches, .. }) = cli.command else {
            panic!("Expected generate");
        };
        assert_eq!(switches.overrides().include_formats, Some(false));
    }
}
