//! Config command handler.
//!
//! Shows and initializes the workspace answer configuration.

use clap::{Args, Subcommand};
use docquest_core::{config::AppConfig, AppError, AppResult};
use docquest_engine::{
    config::{get_config_path, load_config, save_config},
    AnswerConfig,
};

/// Show or initialize answer configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the effective answer configuration as YAML
    Show,

    /// Write the default answer configuration to the workspace
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

impl ConfigCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        match &self.command {
            ConfigSubcommand::Show => {
                let answer_config = load_config(&config.workspace)?;
                print!("{}", serde_yaml::to_string(&answer_config)?);
                Ok(())
            }
            ConfigSubcommand::Init { force } => {
                let path = get_config_path(&config.workspace);
                if path.exists() && !force {
                    return Err(AppError::Config(format!(
                        "Config already exists at {:?}. Use --force to overwrite.",
                        path
                    )));
                }

                save_config(&config.workspace, &AnswerConfig::default())?;
                tracing::info!("Initialized answer config");
                println!("Wrote {}", path.display());
                Ok(())
            }
        }
    }
}
