use super::SharingPayload;
use crate::error::Error;
use crate::files::SHARING_ENDPOINT;
use crate::http::{ensure_success, read_json};
use crate::prelude::HttpCommand;
use crate::Client;
use reqwest::StatusCode;

/// Command to get the sharing link of a path
///
/// Executing this command will return `Some(link)` when the path is shared and `None` otherwise.
/// The link is relative to the website, see [`Client::public_url`](crate::Client::public_url).
#[derive(Debug)]
pub struct SharingGetCommand<'a> {
    pub path: &'a str,
}

impl<'a> SharingGetCommand<'a> {
    pub fn new(path: &'a str) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl<'a> HttpCommand for SharingGetCommand<'a> {
    type Output = Option<String>;

    async fn execute(self, client: &Client) -> Result<Self::Output, Error> {
        let res = client.get_request(SHARING_ENDPOINT, Some(self.path)).await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let res = ensure_success("fetching sharing", res).await?;
        let payload: SharingPayload = read_json(res).await?;
        Ok(payload.into_url())
    }
}
