use clap::{Parser, Subcommand};
use pythonanywhere::Client;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(about, author, version)]
pub struct Command {
    /// Path to load the configuration file. Default to ~/.config/pythonanywhere.json. If not found, loading from environment.
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Also display the requests being made
    #[clap(short, long)]
    verbose: bool,
    #[clap(subcommand)]
    subcmd: SubCommand,
}

impl Command {
    /// The explicit configuration file, if any.
    pub fn explicit_config(&self) -> Option<&PathBuf> {
        self.config.as_ref()
    }

    pub fn config(&self) -> PathBuf {
        if let Some(ref cfg) = self.config {
            cfg.clone()
        } else if let Some(cfg_dir) = dirs::config_dir() {
            cfg_dir.join("pythonanywhere.json")
        } else {
            PathBuf::from(".pythonanywhere.json")
        }
    }
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Path related sub command
    Path(crate::path::Command),
}

impl Command {
    pub async fn execute(&self, client: Client) -> exitcode::ExitCode {
        match &self.subcmd {
            SubCommand::Path(sub) => sub.execute(client).await,
        }
    }

    pub fn set_log_level(&self) {
        let filter = if self.verbose {
            "debug".to_string()
        } else {
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
        };
        if let Err(err) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
        {
            eprintln!("couldn't init logger: {err:?}");
        }
    }
}
