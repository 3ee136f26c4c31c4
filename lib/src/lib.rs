//! Client for the [PythonAnywhere](https://www.pythonanywhere.com) files API.
//!
//! The [`RemotePath`](crate::remote::RemotePath) handle is the main entry point: it wraps a
//! single path on the remote filesystem and exposes reading, uploading, deleting and
//! sharing it. The lower level commands in [`files`](crate::files) map one to one with the
//! API endpoints.
//!
//! ```
//! use pythonanywhere::builder::ClientBuilder;
//! use pythonanywhere::credentials::Credentials;
//! use pythonanywhere::remote::RemotePath;
//!
//! let client = ClientBuilder::default()
//!     .with_credentials(Credentials::api_token("my-token"))
//!     .with_username("alice")
//!     .build()
//!     .expect("unable to build client");
//! let path = RemotePath::new(client, "/home/alice/hello.txt");
//! assert_eq!(
//!     path.url(),
//!     "https://www.pythonanywhere.com/user/alice/files/home/alice/hello.txt"
//! );
//! ```

use std::borrow::Cow;

pub mod builder;
pub mod credentials;
pub mod error;
pub mod files;
mod http;
pub mod prelude;
pub mod remote;
pub mod site;

pub use error::Error;

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the PythonAnywhere files API
///
/// The `base_url` is the root of the files API for a given user, something like
/// `https://www.pythonanywhere.com/api/v0/user/alice/files/`.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Cow<'static, str>,
    credentials: credentials::Credentials,
    inner: reqwest::Client,
}

impl Client {
    /// Create a client with the default settings, see [`ClientBuilder`](crate::builder::ClientBuilder)
    /// for anything more specific.
    pub fn new(
        base_url: impl Into<Cow<'static, str>>,
        credentials: credentials::Credentials,
    ) -> Result<Self, builder::Error> {
        builder::ClientBuilder::default()
            .with_base_url(base_url)
            .with_credentials(credentials)
            .build()
    }

    /// The root of the files API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The root of the website, without the API part.
    ///
    /// `https://www.pythonanywhere.com/api/v0/user/alice/files/` gives `https://www.pythonanywhere.com/`.
    pub fn host_url(&self) -> &str {
        match self.base_url.find("/api/") {
            Some(index) => &self.base_url[..=index],
            None => &self.base_url,
        }
    }

    /// Makes a link returned by the API fully qualified.
    ///
    /// The link is resolved against [`host_url`](Self::host_url): an absolute link is kept as is
    /// and a link starting with `/` is resolved against the origin.
    pub fn public_url(&self, link: &str) -> String {
        match reqwest::Url::parse(self.host_url()).and_then(|base| base.join(link)) {
            Ok(url) => url.to_string(),
            Err(err) => {
                let host = self.host_url();
                tracing::debug!("unable to resolve {link:?} against {host}: {err}");
                format!(
                    "{}/{}",
                    self.host_url().trim_end_matches('/'),
                    link.trim_start_matches('/')
                )
            }
        }
    }
}
