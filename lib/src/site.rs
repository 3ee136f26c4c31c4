use std::borrow::Cow;

pub const US_HOST: &str = "www.pythonanywhere.com";
pub const EU_HOST: &str = "eu.pythonanywhere.com";

/// The PythonAnywhere site hosting the account
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Site {
    #[default]
    UnitedStates,
    Europe,
    Custom(Cow<'static, str>),
}

impl Site {
    pub fn host(&self) -> &str {
        match self {
            Self::UnitedStates => US_HOST,
            Self::Europe => EU_HOST,
            Self::Custom(host) => host,
        }
    }

    /// The root of the files API for the given user.
    pub fn files_endpoint(&self, username: &str) -> String {
        format!("https://{}/api/v0/user/{}/files/", self.host(), username)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "us" => Some(Self::UnitedStates),
            "eu" => Some(Self::Europe),
            _ => None,
        }
    }

    /// Reads `PYTHONANYWHERE_SITE` as a full hostname, then falls back on `www.` followed by
    /// `PYTHONANYWHERE_DOMAIN`. Returns `None` when neither is set.
    pub fn from_env() -> Option<Self> {
        if let Ok(host) = std::env::var("PYTHONANYWHERE_SITE") {
            Some(Self::from_host(host))
        } else if let Ok(domain) = std::env::var("PYTHONANYWHERE_DOMAIN") {
            Some(Self::from_host(format!("www.{domain}")))
        } else {
            None
        }
    }

    fn from_host(host: String) -> Self {
        match host.as_str() {
            US_HOST => Self::UnitedStates,
            EU_HOST => Self::Europe,
            _ => Self::Custom(Cow::Owned(host)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Site;

    #[test]
    fn endpoint() {
        assert_eq!(
            Site::Europe.files_endpoint("bob"),
            "https://eu.pythonanywhere.com/api/v0/user/bob/files/"
        );
    }

    #[test]
    fn from_name() {
        assert_eq!(Site::from_name("us"), Some(Site::UnitedStates));
        assert_eq!(Site::from_name("eu"), Some(Site::Europe));
        assert_eq!(Site::from_name("mars"), None);
    }

    #[test]
    fn from_host() {
        assert_eq!(
            Site::from_host("www.pythonanywhere.com".into()),
            Site::UnitedStates
        );
        assert_eq!(
            Site::from_host("www.example.org".into()).host(),
            "www.example.org"
        );
    }
}
