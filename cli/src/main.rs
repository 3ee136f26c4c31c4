mod app;
mod config;
mod path;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cmd = app::Command::parse();
    cmd.set_log_level();
    let cfg = match config::Config::from_path(&cmd.config()) {
        Ok(cfg) => cfg,
        Err(err) if cmd.explicit_config().is_some() => {
            tracing::error!("unable to load configuration: {}", err);
            std::process::exit(exitcode::CONFIG);
        }
        Err(err) => {
            tracing::debug!("no configuration loaded, using environment: {}", err);
            config::Config::default()
        }
    };
    let client = match cfg.build() {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("unable to build client: {}", err);
            std::process::exit(exitcode::CONFIG);
        }
    };
    std::process::exit(cmd.execute(client).await);
}
