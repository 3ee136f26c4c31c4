mod delete;
mod get;
mod share;
mod tree;
mod unshare;
mod upload;

use clap::{Parser, Subcommand};
use pythonanywhere::remote::RemotePath;
use pythonanywhere::Client;

#[derive(Parser)]
pub struct Command {
    /// Absolute path on the remote filesystem, like /home/alice/mysite/app.py
    path: String,
    #[clap(subcommand)]
    subcommand: SubCommand,
}

impl Command {
    pub async fn execute(&self, client: Client) -> exitcode::ExitCode {
        let remote = RemotePath::new(client, self.path.as_str());
        self.subcommand.execute(&remote).await
    }
}

#[derive(Subcommand)]
enum SubCommand {
    /// Print the content of a file or list the entries of a directory
    Get(get::Command),
    /// List every path below a directory
    Tree(tree::Command),
    /// Upload the content of a local file
    Upload(upload::Command),
    /// Delete the file or the directory
    Delete(delete::Command),
    /// Share publicly and print the sharing url
    Share(share::Command),
    /// Stop sharing
    Unshare(unshare::Command),
}

impl SubCommand {
    async fn execute(&self, remote: &RemotePath) -> exitcode::ExitCode {
        match self {
            Self::Get(cmd) => cmd.execute(remote).await,
            Self::Tree(cmd) => cmd.execute(remote).await,
            Self::Upload(cmd) => cmd.execute(remote).await,
            Self::Delete(cmd) => cmd.execute(remote).await,
            Self::Share(cmd) => cmd.execute(remote).await,
            Self::Unshare(cmd) => cmd.execute(remote).await,
        }
    }
}
