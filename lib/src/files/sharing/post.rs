use super::SharingPayload;
use crate::error::Error;
use crate::files::SHARING_ENDPOINT;
use crate::http::{ensure_success, read_json};
use crate::prelude::HttpCommand;
use crate::Client;
use reqwest::StatusCode;

/// Command to share a path publicly
///
/// Executing this command will return the status code and the sharing link on success.
/// The API answers `200 OK` when the path was already shared and `201 Created` otherwise.
#[derive(Debug)]
pub struct SharingPostCommand<'a> {
    pub path: &'a str,
}

impl<'a> SharingPostCommand<'a> {
    pub fn new(path: &'a str) -> Self {
        Self { path }
    }
}

#[derive(serde::Serialize)]
struct SharingPostParams<'a> {
    path: &'a str,
}

#[async_trait::async_trait]
impl<'a> HttpCommand for SharingPostCommand<'a> {
    type Output = (StatusCode, String);

    async fn execute(self, client: &Client) -> Result<Self::Output, Error> {
        let params = SharingPostParams { path: self.path };
        let res = client.post_request_json(SHARING_ENDPOINT, &params).await?;
        let res = ensure_success("sharing", res).await?;
        let status = res.status();
        let payload: SharingPayload = read_json(res).await?;
        let url = payload.into_url().ok_or_else(|| Error::Protocol {
            operation: "sharing",
            status,
            message: "missing url in response".into(),
        })?;
        Ok((status, url))
    }
}

#[cfg(test)]
mod http_tests {
    use super::SharingPostCommand;
    use crate::prelude::HttpCommand;
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/api/v0/user/alice/files/sharing/")
            .match_header("authorization", "Token secret")
            .match_body(Matcher::Json(
                serde_json::json!({"path": "/home/alice/hello.txt"}),
            ))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"url": "/user/alice/shares/8e7c9d0b/"}"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server.url());
        let (status, url) = SharingPostCommand::new("/home/alice/hello.txt")
            .execute(&client)
            .await
            .unwrap();
        assert_eq!(status.as_u16(), 201);
        assert_eq!(url, "/user/alice/shares/8e7c9d0b/");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn missing_url() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/api/v0/user/alice/files/sharing/")
            .with_status(200)
            .with_body(r#"{}"#)
            .create_async()
            .await;
        let client = crate::tests::client(&server.url());
        let error = SharingPostCommand::new("/home/alice/hello.txt")
            .execute(&client)
            .await
            .unwrap_err();
        assert!(matches!(error, crate::Error::Protocol { .. }));
        m.assert_async().await;
    }
}
