use clap::Parser;
use pythonanywhere::remote::RemotePath;

#[derive(Parser)]
pub struct Command {
    /// Only print the sharing url if the path is already shared.
    #[clap(long)]
    check: bool,
}

impl Command {
    #[tracing::instrument(skip_all, level = "info")]
    pub async fn execute(&self, remote: &RemotePath) -> exitcode::ExitCode {
        if self.check {
            return match remote.try_sharing_url().await {
                Ok(Some(url)) => {
                    println!("{url}");
                    exitcode::OK
                }
                Ok(None) => exitcode::OK,
                Err(err) => {
                    tracing::warn!("unable to check if {remote} is shared: {err}");
                    exitcode::DATAERR
                }
            };
        }
        let url = remote.share().await;
        if url.is_empty() {
            exitcode::DATAERR
        } else {
            println!("{url}");
            exitcode::OK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Command;
    use pythonanywhere::credentials::Credentials;
    use pythonanywhere::remote::RemotePath;
    use pythonanywhere::Client;

    const SHARING_ENDPOINT: &str = "/api/v0/user/alice/files/sharing/";

    fn remote(server: &mockito::Server) -> RemotePath {
        let base = format!("{}/api/v0/user/alice/files/", server.url());
        let client = Client::new(base, Credentials::api_token("secret")).unwrap();
        RemotePath::new(client, "/home/alice/hello.txt")
    }

    fn by_path() -> mockito::Matcher {
        mockito::Matcher::UrlEncoded("path".into(), "/home/alice/hello.txt".into())
    }

    #[tokio::test]
    async fn check_when_shared() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", SHARING_ENDPOINT)
            .match_query(by_path())
            .with_status(200)
            .with_body(r#"{"url": "/user/alice/shares/8e7c9d0b/"}"#)
            .create_async()
            .await;
        let cmd = Command { check: true };
        assert_eq!(cmd.execute(&remote(&server)).await, exitcode::OK);
        m.assert_async().await;
    }

    #[tokio::test]
    async fn check_when_not_shared() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", SHARING_ENDPOINT)
            .match_query(by_path())
            .with_status(404)
            .create_async()
            .await;
        let cmd = Command { check: true };
        assert_eq!(cmd.execute(&remote(&server)).await, exitcode::OK);
        m.assert_async().await;
    }

    #[tokio::test]
    async fn check_failure() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", SHARING_ENDPOINT)
            .match_query(by_path())
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;
        let cmd = Command { check: true };
        assert_eq!(cmd.execute(&remote(&server)).await, exitcode::DATAERR);
        m.assert_async().await;
    }

    #[tokio::test]
    async fn share_failure() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", SHARING_ENDPOINT)
            .with_status(500)
            .create_async()
            .await;
        let cmd = Command { check: false };
        assert_eq!(cmd.execute(&remote(&server)).await, exitcode::DATAERR);
        m.assert_async().await;
    }
}
