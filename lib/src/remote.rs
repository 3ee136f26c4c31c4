//! A handle on a single path of the remote filesystem
//!
//! Every operation comes in two flavors. The `try_*` methods return a [`Result`] so the
//! caller can tell a legitimately empty answer from a failure. The other methods never
//! fail: they log the error and return a falsy value (`None`, `false` or an empty string).
//!
//! Nothing is cached, each call performs the requests again.

use std::fmt;

use reqwest::StatusCode;

use crate::error::Error;
use crate::files::{
    Listing, PathContents, PathDeleteCommand, PathGetCommand, PathPostCommand,
    SharingDeleteCommand, SharingGetCommand, SharingPostCommand, TreeGetCommand,
};
use crate::prelude::HttpCommand;
use crate::Client;

/// The content of a remote path
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Contents {
    Directory(Listing),
    Text(String),
}

impl Contents {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            Self::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&Listing> {
        match self {
            Self::Directory(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// An existing file has been overwritten
    Updated,
    /// The file didn't exist before
    Created,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareOutcome {
    /// Fully qualified sharing url
    pub url: String,
    /// `false` when the path was already shared
    pub newly_shared: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnshareOutcome {
    Unshared,
    /// The path wasn't shared, nothing has been done
    NotShared,
}

/// A file or a directory on the remote filesystem
///
/// ```
/// use pythonanywhere::builder::ClientBuilder;
/// use pythonanywhere::remote::RemotePath;
///
/// # tokio_test::block_on(async {
/// # let Ok(client) = ClientBuilder::from_env().build() else { return };
/// let path = RemotePath::new(client, "/home/alice/hello.txt");
/// if path.upload("Hello World!").await {
///     println!("shared at {}", path.share().await);
/// }
/// # })
/// ```
#[derive(Clone, Debug)]
pub struct RemotePath {
    client: Client,
    path: String,
}

impl RemotePath {
    pub fn new(client: Client, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The url to browse the path on the website.
    ///
    /// It's the base url of the client, without the `/api/v0` part, followed by the path.
    pub fn url(&self) -> String {
        let files_base = self.client.base_url().replacen("/api/v0", "", 1);
        format!("{}{}", files_base.trim_end_matches('/'), self.path)
    }

    fn report(&self, err: &Error) {
        if err.is_unexpected_status() {
            tracing::error!("{}: {err}", self.path);
        } else {
            tracing::warn!("{}: {err}", self.path);
        }
    }
}

impl fmt::Display for RemotePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

impl RemotePath {
    /// Fetches the listing of a directory or the text of a file.
    #[tracing::instrument(skip(self), fields(path = %self.path))]
    pub async fn try_contents(&self) -> Result<Contents, Error> {
        match PathGetCommand::new(&self.path).execute(&self.client).await? {
            PathContents::Directory(listing) => Ok(Contents::Directory(listing)),
            PathContents::File(raw) => Ok(Contents::Text(String::from_utf8(raw.to_vec())?)),
        }
    }

    pub async fn contents(&self) -> Option<Contents> {
        self.try_contents()
            .await
            .map_err(|err| self.report(&err))
            .ok()
    }

    /// Lists every path below the current one.
    #[tracing::instrument(skip(self), fields(path = %self.path))]
    pub async fn try_tree(&self) -> Result<Vec<String>, Error> {
        TreeGetCommand::new(&self.path).execute(&self.client).await
    }

    pub async fn tree(&self) -> Option<Vec<String>> {
        self.try_tree().await.map_err(|err| self.report(&err)).ok()
    }

    #[tracing::instrument(skip(self), fields(path = %self.path))]
    pub async fn try_delete(&self) -> Result<(), Error> {
        PathDeleteCommand::new(&self.path)
            .execute(&self.client)
            .await?;
        tracing::info!("{} deleted!", self.path);
        Ok(())
    }

    pub async fn delete(&self) -> bool {
        self.try_delete()
            .await
            .map_err(|err| self.report(&err))
            .is_ok()
    }

    /// Creates or replaces the file with the given content.
    ///
    /// Any success code other than `200` or `201` is an [`Error::UnexpectedStatus`].
    #[tracing::instrument(skip(self, content), fields(path = %self.path))]
    pub async fn try_upload(&self, content: impl Into<Vec<u8>>) -> Result<UploadOutcome, Error> {
        let status = PathPostCommand::new(&self.path, content)
            .execute(&self.client)
            .await?;
        match status {
            StatusCode::OK => {
                tracing::info!("{} successfully updated!", self.path);
                Ok(UploadOutcome::Updated)
            }
            StatusCode::CREATED => {
                tracing::info!("Content successfully uploaded to {}!", self.path);
                Ok(UploadOutcome::Created)
            }
            status => Err(Error::UnexpectedStatus {
                operation: "uploading",
                status,
            }),
        }
    }

    pub async fn upload(&self, content: impl Into<Vec<u8>>) -> bool {
        self.try_upload(content)
            .await
            .map_err(|err| self.report(&err))
            .is_ok()
    }

    /// Returns the fully qualified sharing url, or `None` when the path isn't shared.
    #[tracing::instrument(skip(self), fields(path = %self.path))]
    pub async fn try_sharing_url(&self) -> Result<Option<String>, Error> {
        match SharingGetCommand::new(&self.path)
            .execute(&self.client)
            .await?
        {
            Some(link) => {
                tracing::info!("{} is shared at {link}", self.path);
                Ok(Some(self.client.public_url(&link)))
            }
            None => {
                tracing::info!("{} has not been shared", self.path);
                Ok(None)
            }
        }
    }

    pub async fn sharing_url(&self) -> String {
        self.try_sharing_url()
            .await
            .map_err(|err| self.report(&err))
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Shares the path, or confirms it's already shared.
    #[tracing::instrument(skip(self), fields(path = %self.path))]
    pub async fn try_share(&self) -> Result<ShareOutcome, Error> {
        let (status, link) = SharingPostCommand::new(&self.path)
            .execute(&self.client)
            .await?;
        let newly_shared = match status {
            StatusCode::OK => false,
            StatusCode::CREATED => true,
            status => {
                return Err(Error::UnexpectedStatus {
                    operation: "sharing",
                    status,
                })
            }
        };
        let state = if newly_shared {
            "successfully"
        } else {
            "was already"
        };
        tracing::info!("{} {state} shared at {link}", self.path);
        Ok(ShareOutcome {
            url: self.client.public_url(&link),
            newly_shared,
        })
    }

    pub async fn share(&self) -> String {
        self.try_share()
            .await
            .map(|outcome| outcome.url)
            .map_err(|err| self.report(&err))
            .unwrap_or_default()
    }

    /// Stops sharing the path.
    ///
    /// The sharing state is checked first and the link removed afterwards, both steps
    /// are separate requests so a concurrent change on the server can slip in between.
    #[tracing::instrument(skip(self), fields(path = %self.path))]
    pub async fn try_unshare(&self) -> Result<UnshareOutcome, Error> {
        if self.try_sharing_url().await?.is_none() {
            tracing::info!(
                "{} is not being shared, no need to stop sharing...",
                self.path
            );
            return Ok(UnshareOutcome::NotShared);
        }
        match SharingDeleteCommand::new(&self.path)
            .execute(&self.client)
            .await?
        {
            StatusCode::NO_CONTENT => {
                tracing::info!("{} is no longer shared!", self.path);
                Ok(UnshareOutcome::Unshared)
            }
            status => Err(Error::Protocol {
                operation: "unsharing",
                status,
                message: format!("could not unshare {}", self.path),
            }),
        }
    }

    pub async fn unshare(&self) -> bool {
        self.try_unshare()
            .await
            .map_err(|err| self.report(&err))
            .is_ok()
    }
}
