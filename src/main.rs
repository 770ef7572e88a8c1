//! openapi-gen CLI entrypoint
//! Parses command-line arguments, loads the project config and prints the
//! resolved per-run generation configs.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use openapi_gen::config::{
    AccessModifier, FeatureFlag, GenerateOptions, GenerationConfig, GeneratorMode,
    NamingStrategy, UserConfig,
};
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "openapi-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Resolve the generation configs for each requested mode and print them
    Resolve {
        /// Path to the project config file (YAML, JSON or TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Mode to generate; may be repeated
        #[arg(long = "mode")]
        modes: Vec<GeneratorMode>,
        /// Access modifier for generated declarations
        #[arg(long)]
        access_modifier: Option<AccessModifier>,
        /// Strategy for deriving identifiers
        #[arg(long)]
        naming_strategy: Option<NamingStrategy>,
        /// Import to add to each generated file; may be repeated
        #[arg(long = "additional-import")]
        additional_imports: Vec<String>,
        /// Comment to add to the top of each generated file; may be repeated
        #[arg(long = "additional-file-comment")]
        additional_file_comments: Vec<String>,
        /// Pre-release feature to enable; may be repeated
        #[arg(long = "feature-flag")]
        feature_flags: Vec<FeatureFlag>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    Yaml,
    Json,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO; stdout is reserved for output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Resolve {
            config,
            modes,
            access_modifier,
            naming_strategy,
            additional_imports,
            additional_file_comments,
            feature_flags,
            format,
        } => {
            let options = GenerateOptions {
                modes,
                access_modifier,
                naming_strategy,
                additional_imports,
                additional_file_comments,
                feature_flags,
            };
            resolve(config, &options, format)?
        }
    }
    Ok(())
}

/// Runtime handler for the resolve command
fn resolve(
    config_path: Option<PathBuf>,
    options: &GenerateOptions,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let config_path = match config_path {
        Some(path) => Some(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            UserConfig::discover(&cwd).context("Failed to discover config file")?
        }
    };

    let user_config = match &config_path {
        Some(path) => {
            info!("Using config file {}", path.display());
            Some(
                UserConfig::from_file(path)
                    .with_context(|| format!("Failed to load config file {}", path.display()))?,
            )
        }
        None => {
            debug!("No config file found, using command-line options only");
            None
        }
    };

    let configs = options
        .resolve(user_config.as_ref())
        .context("Failed to resolve generation configs")?;

    println!("{}", render(&configs, format)?);
    Ok(())
}

fn render(configs: &[GenerationConfig], format: OutputFormat) -> anyhow::Result<String> {
    let output = match format {
        OutputFormat::Yaml => serde_yaml::to_string(configs)?,
        OutputFormat::Json => serde_json::to_string_pretty(configs)?,
    };
    Ok(output)
}
