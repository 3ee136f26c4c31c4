//! Resources needed to list the tree under a directory

use super::TREE_ENDPOINT;
use crate::error::Error;
use crate::http::{ensure_success, read_json};
use crate::prelude::HttpCommand;
use crate::Client;

/// Command to list every path below a directory
///
/// Executing this command will return the list of the paths on success, directories ending with a `/`.
#[derive(Debug)]
pub struct TreeGetCommand<'a> {
    pub path: &'a str,
}

impl<'a> TreeGetCommand<'a> {
    pub fn new(path: &'a str) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl<'a> HttpCommand for TreeGetCommand<'a> {
    type Output = Vec<String>;

    async fn execute(self, client: &Client) -> Result<Self::Output, Error> {
        let res = client.get_request(TREE_ENDPOINT, Some(self.path)).await?;
        let res = ensure_success("fetching tree", res).await?;
        read_json(res).await
    }
}

#[cfg(test)]
mod http_tests {
    use super::TreeGetCommand;
    use crate::prelude::HttpCommand;
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/api/v0/user/alice/files/tree/")
            .match_query(Matcher::UrlEncoded(
                "path".into(),
                "/home/alice/mysite".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
    "/home/alice/mysite/flask_app.py",
    "/home/alice/mysite/static/",
    "/home/alice/mysite/static/style.css"
]"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(&server.url());
        let result = TreeGetCommand::new("/home/alice/mysite")
            .execute(&client)
            .await
            .unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[1], "/home/alice/mysite/static/");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn malformed() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/api/v0/user/alice/files/tree/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;
        let client = crate::tests::client(&server.url());
        let error = TreeGetCommand::new("/home/alice")
            .execute(&client)
            .await
            .unwrap_err();
        assert!(matches!(error, crate::Error::SerdeJson(_)));
        m.assert_async().await;
    }
}
