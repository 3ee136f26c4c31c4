use super::PATH_ENDPOINT;
use crate::error::Error;
use crate::http::ensure_success;
use crate::prelude::HttpCommand;
use crate::Client;
use reqwest::StatusCode;

/// Command to delete a file or a directory, recursively
///
/// The API answers `204 No Content` once the path is gone.
#[derive(Debug)]
pub struct PathDeleteCommand<'a> {
    pub path: &'a str,
}

impl<'a> PathDeleteCommand<'a> {
    pub fn new(path: &'a str) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl<'a> HttpCommand for PathDeleteCommand<'a> {
    type Output = ();

    async fn execute(self, client: &Client) -> Result<Self::Output, Error> {
        let endpoint = format!("{PATH_ENDPOINT}{}", self.path);
        let res = client.delete_request(&endpoint, None).await?;
        let res = ensure_success("deleting", res).await?;
        match res.status() {
            StatusCode::NO_CONTENT => Ok(()),
            status => Err(Error::UnexpectedStatus {
                operation: "deleting",
                status,
            }),
        }
    }
}
