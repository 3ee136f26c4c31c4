use std::borrow::Cow;
use std::time::Duration;

use crate::credentials::Credentials;
use crate::site::Site;

/// Errors that may occur during client configuration and building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No API token was provided.
    #[error("no credentials provided")]
    MissingCredentials,
    /// No username was provided and no base URL was set explicitly.
    #[error("no username provided to build the api endpoint")]
    MissingUsername,
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// The API endpoint is computed from the site and the username, unless a base URL is
/// set explicitly.
///
/// ```
/// use pythonanywhere::builder::ClientBuilder;
/// use pythonanywhere::credentials::Credentials;
/// use pythonanywhere::site::Site;
///
/// let client = ClientBuilder::default()
///     .with_credentials(Credentials::api_token("my-token"))
///     .with_site(Site::Europe)
///     .with_username("alice")
///     .build()
///     .expect("unable to build client");
/// assert_eq!(client.base_url(), "https://eu.pythonanywhere.com/api/v0/user/alice/files/");
/// ```
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<Cow<'static, str>>,
    client_builder: Option<reqwest::ClientBuilder>,
    credentials: Option<Credentials>,
    site: Site,
    timeout: Option<Duration>,
    username: Option<String>,
}

fn username_from_env() -> Option<String> {
    ["PYTHONANYWHERE_USERNAME", "USER", "LOGNAME", "USERNAME"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty())
}

fn timeout_from_env() -> Option<Duration> {
    let value = std::env::var("PYTHONANYWHERE_TIMEOUT").ok()?;
    match value.parse::<u64>() {
        Ok(millis) => Some(Duration::from_millis(millis)),
        Err(err) => {
            tracing::warn!("ignoring invalid PYTHONANYWHERE_TIMEOUT {value:?}: {err}");
            None
        }
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured using environment variables.
    ///
    /// - Uses `API_TOKEN` for the credentials.
    /// - Uses `PYTHONANYWHERE_SITE` or `PYTHONANYWHERE_DOMAIN` for the site.
    /// - Uses `PYTHONANYWHERE_USERNAME`, then `USER`, `LOGNAME` and `USERNAME` for the username.
    /// - Uses `PYTHONANYWHERE_TIMEOUT`, in milliseconds, for the request timeout.
    ///
    /// Falls back to the US site if none is specified.
    pub fn from_env() -> Self {
        Self {
            base_url: None,
            client_builder: None,
            credentials: Credentials::from_env(),
            site: Site::from_env().unwrap_or_default(),
            timeout: timeout_from_env(),
            username: username_from_env(),
        }
    }
}

impl ClientBuilder {
    /// Sets a custom base URL, replacing the one computed from the site and the username.
    pub fn set_base_url(&mut self, base_url: impl Into<Cow<'static, str>>) {
        self.base_url = Some(base_url.into());
    }

    /// Sets a custom base URL and returns the modified builder.
    pub fn with_base_url(mut self, base_url: impl Into<Cow<'static, str>>) -> Self {
        self.set_base_url(base_url);
        self
    }

    /// Sets a custom `reqwest::ClientBuilder`.
    pub fn set_client_builder(&mut self, client_builder: reqwest::ClientBuilder) {
        self.client_builder = Some(client_builder);
    }

    /// Sets a custom `reqwest::ClientBuilder` and returns the modified builder.
    pub fn with_client_builder(mut self, client_builder: reqwest::ClientBuilder) -> Self {
        self.set_client_builder(client_builder);
        self
    }

    /// Sets the credentials for API authentication.
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Sets the credentials and returns the modified builder.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.set_credentials(credentials);
        self
    }

    pub fn set_site(&mut self, site: Site) {
        self.site = site;
    }

    pub fn with_site(mut self, site: Site) -> Self {
        self.set_site(site);
        self
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.set_timeout(timeout);
        self
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.set_username(username);
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredentials`] if no credentials were set.
    /// Returns [`Error::MissingUsername`] if neither a base URL nor a username were set.
    /// Returns [`Error::Reqwest`] if the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, Error> {
        let credentials = self.credentials.ok_or(Error::MissingCredentials)?;
        let base_url = match (self.base_url, self.username) {
            (Some(base_url), _) => base_url,
            (None, Some(username)) => Cow::Owned(self.site.files_endpoint(&username)),
            (None, None) => return Err(Error::MissingUsername),
        };
        let mut builder = self
            .client_builder
            .unwrap_or_default()
            .user_agent(crate::USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(crate::Client {
            base_url,
            credentials,
            inner: builder.build()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientBuilder, Error};
    use crate::credentials::Credentials;

    #[test]
    fn should_require_credentials() {
        let err = ClientBuilder::default()
            .with_username("alice")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingCredentials));
    }

    #[test]
    fn should_require_username_without_base_url() {
        let err = ClientBuilder::default()
            .with_credentials(Credentials::api_token("token"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingUsername));
    }

    #[test]
    fn should_prefer_base_url() {
        let client = ClientBuilder::default()
            .with_credentials(Credentials::api_token("token"))
            .with_username("alice")
            .with_base_url("http://localhost:1234/api/v0/user/bob/files/")
            .build()
            .unwrap();
        assert_eq!(
            client.base_url(),
            "http://localhost:1234/api/v0/user/bob/files/"
        );
    }

    #[test]
    fn should_compute_us_endpoint_by_default() {
        let client = ClientBuilder::default()
            .with_credentials(Credentials::api_token("token"))
            .with_username("alice")
            .build()
            .unwrap();
        assert_eq!(
            client.base_url(),
            "https://www.pythonanywhere.com/api/v0/user/alice/files/"
        );
    }
}
