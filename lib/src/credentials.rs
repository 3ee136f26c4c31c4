//! This gives the required structure to authenticate with the PythonAnywhere API, using the
//! token available on the account page.

/// The different kind of credentials used for authentication
#[derive(Clone)]
pub enum Credentials {
    ApiToken { api_token: String },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiToken { .. } => f.debug_struct("ApiToken").finish_non_exhaustive(),
        }
    }
}

impl Credentials {
    /// Creates a credential based on the environment variables
    ///
    /// When `API_TOKEN` is set, a `Some(Credentials::ApiToken)` will be created, otherwise `None` is returned.
    ///
    /// ```rust
    /// use pythonanywhere::credentials::Credentials;
    ///
    /// match Credentials::from_env() {
    ///     Some(Credentials::ApiToken { .. }) => println!("uses an api token"),
    ///     None => eprintln!("no credentials provided"),
    /// }
    /// ```
    pub fn from_env() -> Option<Self> {
        std::env::var("API_TOKEN")
            .ok()
            .filter(|value| !value.is_empty())
            .map(Self::api_token)
    }

    pub fn api_token<S: Into<String>>(api_token: S) -> Self {
        Self::ApiToken {
            api_token: api_token.into(),
        }
    }

    pub(crate) fn header_value(&self) -> String {
        match self {
            Self::ApiToken { api_token } => format!("Token {api_token}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Credentials;

    #[test]
    fn token_header() {
        let creds = Credentials::api_token("abcdef");
        assert_eq!(creds.header_value(), "Token abcdef");
    }

    #[test]
    fn debug_hides_token() {
        let creds = Credentials::api_token("abcdef");
        assert!(!format!("{creds:?}").contains("abcdef"));
    }
}
