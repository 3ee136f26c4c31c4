use crate::error::Error;
use crate::files::SHARING_ENDPOINT;
use crate::prelude::HttpCommand;
use crate::Client;
use reqwest::StatusCode;

/// Command to stop sharing a path
///
/// Executing this command will return the status code of the response, whatever it is.
/// `204 No Content` means the sharing link has been removed.
#[derive(Debug)]
pub struct SharingDeleteCommand<'a> {
    pub path: &'a str,
}

impl<'a> SharingDeleteCommand<'a> {
    pub fn new(path: &'a str) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl<'a> HttpCommand for SharingDeleteCommand<'a> {
    type Output = StatusCode;

    async fn execute(self, client: &Client) -> Result<Self::Output, Error> {
        let res = client
            .delete_request(SHARING_ENDPOINT, Some(self.path))
            .await?;
        let status = res.status();
        tracing::debug!("responded with status {status:?}");
        Ok(status)
    }
}

#[cfg(test)]
mod http_tests {
    use super::SharingDeleteCommand;
    use crate::prelude::HttpCommand;
    use mockito::Matcher;

    #[tokio::test]
    async fn returns_status() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("DELETE", "/api/v0/user/alice/files/sharing/")
            .match_query(Matcher::UrlEncoded(
                "path".into(),
                "/home/alice/hello.txt".into(),
            ))
            .with_status(204)
            .create_async()
            .await;
        let client = crate::tests::client(&server.url());
        let status = SharingDeleteCommand::new("/home/alice/hello.txt")
            .execute(&client)
            .await
            .unwrap();
        assert_eq!(status.as_u16(), 204);
        m.assert_async().await;
    }
}
