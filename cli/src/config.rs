use pythonanywhere::builder::{ClientBuilder, Error};
use pythonanywhere::credentials::Credentials;
use pythonanywhere::site::Site;
use pythonanywhere::Client;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::Path;
use std::time::Duration;

/// Values read from the configuration file, each of them overrides the environment.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    token: Option<String>,
    username: Option<String>,
    /// `us`, `eu` or a hostname
    site: Option<String>,
    /// In seconds
    timeout: Option<u64>,
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let reader = std::fs::File::open(path).map_err(|err| err.to_string())?;
        let result = serde_json::from_reader(reader).map_err(|err| err.to_string())?;
        Ok(result)
    }

    fn builder(self) -> ClientBuilder {
        let mut builder = ClientBuilder::from_env();
        if let Some(token) = self.token {
            builder.set_credentials(Credentials::api_token(token));
        }
        if let Some(username) = self.username {
            builder.set_username(username);
        }
        if let Some(site) = self.site {
            builder.set_site(Site::from_name(&site).unwrap_or(Site::Custom(Cow::Owned(site))));
        }
        if let Some(timeout) = self.timeout.map(Duration::from_secs) {
            builder.set_timeout(timeout);
        }
        builder
    }

    pub fn build(self) -> Result<Client, Error> {
        self.builder().build()
    }
}
