//! Resources needed to fetch the content of a path

use super::{PathContents, PATH_ENDPOINT};
use crate::error::Error;
use crate::http::{ensure_success, read_json};
use crate::prelude::HttpCommand;
use crate::Client;
use reqwest::header::CONTENT_TYPE;

/// Command to fetch the content of a file, or the listing of a directory
///
/// Executing this command will return a [`PathContents`](crate::files::PathContents) on success.
/// The API answers with a JSON listing for directories and with the raw content for files.
///
/// ```
/// use pythonanywhere::builder::ClientBuilder;
/// use pythonanywhere::files::{PathContents, PathGetCommand};
/// use pythonanywhere::prelude::HttpCommand;
///
/// # tokio_test::block_on(async {
/// # let Ok(client) = ClientBuilder::from_env().build() else { return };
/// match PathGetCommand::new("/home/alice/hello.txt").execute(&client).await {
///   Ok(PathContents::File(content)) => println!("{} bytes", content.len()),
///   Ok(PathContents::Directory(listing)) => println!("{} entries", listing.len()),
///   Err(err) => eprintln!("error: {:?}", err),
/// }
/// # })
/// ```
#[derive(Debug)]
pub struct PathGetCommand<'a> {
    pub path: &'a str,
}

impl<'a> PathGetCommand<'a> {
    pub fn new(path: &'a str) -> Self {
        Self { path }
    }
}

fn is_json(res: &reqwest::Response) -> bool {
    res.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value.contains("application/json"))
}

#[async_trait::async_trait]
impl<'a> HttpCommand for PathGetCommand<'a> {
    type Output = PathContents;

    async fn execute(self, client: &Client) -> Result<Self::Output, Error> {
        let endpoint = format!("{PATH_ENDPOINT}{}", self.path);
        let res = client.get_request(&endpoint, None).await?;
        let res = ensure_success("fetching contents", res).await?;
        if is_json(&res) {
            Ok(PathContents::Directory(read_json(res).await?))
        } else {
            Ok(PathContents::File(res.bytes().await?))
        }
    }
}
