//! Resources needed to upload the content of a file

use super::PATH_ENDPOINT;
use crate::error::Error;
use crate::http::ensure_success;
use crate::prelude::HttpCommand;
use crate::Client;
use reqwest::{multipart, StatusCode};

/// Command to create or replace a file with the given content
///
/// Executing this command will return the status code of the response on success.
/// The API answers `200 OK` when an existing file is updated and `201 Created` when the
/// file didn't exist yet.
///
/// ```
/// use pythonanywhere::builder::ClientBuilder;
/// use pythonanywhere::files::PathPostCommand;
/// use pythonanywhere::prelude::HttpCommand;
///
/// # tokio_test::block_on(async {
/// # let Ok(client) = ClientBuilder::from_env().build() else { return };
/// let cmd = PathPostCommand::new("/home/alice/hello.txt", b"Hello World!".to_vec());
/// match cmd.execute(&client).await {
///   Ok(status) => println!("uploaded with status {status}"),
///   Err(err) => eprintln!("error: {:?}", err),
/// }
/// # })
/// ```
#[derive(Debug)]
pub struct PathPostCommand<'a> {
    pub path: &'a str,
    pub content: Vec<u8>,
}

impl<'a> PathPostCommand<'a> {
    pub fn new(path: &'a str, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path,
            content: content.into(),
        }
    }
}

#[async_trait::async_trait]
impl<'a> HttpCommand for PathPostCommand<'a> {
    type Output = StatusCode;

    async fn execute(self, client: &Client) -> Result<Self::Output, Error> {
        if self.path.ends_with('/') {
            return Err(Error::InvalidPath(self.path.to_string()));
        }
        let part = multipart::Part::bytes(self.content).file_name("content");
        let form = multipart::Form::new().part("content", part);
        let endpoint = format!("{PATH_ENDPOINT}{}", self.path);
        let res = client.post_request_multipart(&endpoint, form).await?;
        let res = ensure_success("uploading", res).await?;
        Ok(res.status())
    }
}
