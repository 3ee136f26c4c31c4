use clap::Parser;
use pythonanywhere::remote::RemotePath;
use std::path::PathBuf;

#[derive(Parser)]
pub struct Command {
    /// Local file to upload.
    #[clap(short, long)]
    file: PathBuf,
}

impl Command {
    #[tracing::instrument(skip_all, level = "info")]
    pub async fn execute(&self, remote: &RemotePath) -> exitcode::ExitCode {
        let content = match std::fs::read(&self.file) {
            Ok(content) => content,
            Err(err) => {
                tracing::error!("unable to read {:?}: {:?}", self.file, err);
                return exitcode::NOINPUT;
            }
        };
        if remote.upload(content).await {
            exitcode::OK
        } else {
            exitcode::DATAERR
        }
    }
}
