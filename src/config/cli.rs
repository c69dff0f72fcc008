use crate::config::toml_config::{CalcConfig, LoggingConfig};
use crate::core::{ErrorStyle, OverflowPolicy};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "safe-calc")]
#[command(about = "Integer division that reports failure instead of panicking")]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override divider.overflow_policy
    #[arg(long, value_enum, global = true)]
    pub overflow_policy: Option<OverflowPolicy>,

    /// Override format.error_style
    #[arg(long, value_enum, global = true)]
    pub error_style: Option<ErrorStyle>,

    /// Override logging.format
    #[arg(long, global = true, value_parser = ["text", "json"])]
    pub log_format: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Divide two integers and print the formatted result
    #[command(allow_negative_numbers = true)]
    Divide { dividend: i64, divisor: i64 },
    /// Evaluate the [[requests]] listed in the configuration file
    Batch {
        /// Print the batch report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the two-phase barrier demonstration
    Rendezvous {
        #[arg(short, long)]
        workers: Option<usize>,
    },
    /// Print a greeting
    Greet { name: String, age: u32 },
}

impl CliConfig {
    /// Loads the configuration file, if any, and applies command-line overrides.
    pub fn resolve(&self) -> Result<CalcConfig> {
        let mut config = match &self.config {
            Some(path) => CalcConfig::from_file(path)?,
            None => CalcConfig::default(),
        };

        if let Some(policy) = self.overflow_policy {
            config.divider.overflow_policy = policy;
        }
        if let Some(style) = self.error_style {
            config.format.error_style = style;
        }
        if let Some(format) = &self.log_format {
            config
                .logging
                .get_or_insert_with(LoggingConfig::default)
                .format = Some(format.clone());
        }
        if let Command::Rendezvous {
            workers: Some(workers),
        } = self.command
        {
            config.rendezvous.workers = workers;
        }

        Ok(config)
    }
}
