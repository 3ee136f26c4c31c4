use clap::Parser;
use pythonanywhere::remote::RemotePath;

#[derive(Parser)]
pub struct Command;

impl Command {
    #[tracing::instrument(skip_all, level = "info")]
    pub async fn execute(&self, remote: &RemotePath) -> exitcode::ExitCode {
        if remote.delete().await {
            exitcode::OK
        } else {
            exitcode::DATAERR
        }
    }
}
