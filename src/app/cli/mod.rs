//! CLI Adapter.

mod check;
mod modulepath;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::adapters::ServerSettings;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "includable")]
#[command(version)]
#[command(
    about = "Test whether a class manifest exists on an environment's module path",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    settings: SettingsArgs,
    /// Log each probed manifest and print the matched path
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SettingsArgs {
    /// TOML file with environmentpath, environment, and basemodulepath
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,
    /// Directory holding all environments
    #[arg(long, global = true, value_name = "DIR")]
    environmentpath: Option<PathBuf>,
    /// Environment to evaluate
    #[arg(short, long, global = true)]
    environment: Option<String>,
    /// Colon-delimited global module directories
    #[arg(long, global = true, value_name = "PATHS")]
    basemodulepath: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a class can be included
    #[clap(visible_alias = "c")]
    Check {
        /// Qualified class name, e.g. role::base
        name: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the resolved module search path
    #[clap(visible_alias = "mp")]
    Modulepath {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

impl SettingsArgs {
    /// Explicit flags override the settings file, which overrides defaults.
    fn into_settings(self) -> Result<ServerSettings, AppError> {
        let mut settings = match &self.settings {
            Some(path) => ServerSettings::load(path)?,
            None => ServerSettings::default(),
        };
        if let Some(environmentpath) = self.environmentpath {
            settings.environmentpath = environmentpath;
        }
        if let Some(environment) = self.environment {
            settings.environment = environment;
        }
        if let Some(basemodulepath) = self.basemodulepath {
            settings.basemodulepath = basemodulepath;
        }
        settings.validate()?;
        Ok(settings)
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "includable=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let verbose = cli.verbose;
    let result: Result<i32, AppError> = cli.settings.into_settings().and_then(|settings| {
        match cli.command {
            Commands::Check { name, format } => check::run_check(&settings, &name, format, verbose),
            Commands::Modulepath { format } => {
                modulepath::run_modulepath(&settings, format).map(|_| 0)
            }
        }
    });

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
