use clap::Parser;
use pythonanywhere::remote::RemotePath;

#[derive(Parser)]
pub struct Command;

impl Command {
    #[tracing::instrument(skip_all, level = "info")]
    pub async fn execute(&self, remote: &RemotePath) -> exitcode::ExitCode {
        match remote.tree().await {
            Some(paths) => {
                for path in paths {
                    println!("{path}");
                }
                exitcode::OK
            }
            None => exitcode::DATAERR,
        }
    }
}
