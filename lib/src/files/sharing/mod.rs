//! Commands managing the public sharing links of paths

pub mod delete;
pub mod get;
pub mod post;

pub use delete::SharingDeleteCommand;
pub use get::SharingGetCommand;
pub use post::SharingPostCommand;

#[derive(Debug, serde::Deserialize)]
struct SharingPayload {
    url: Option<String>,
}

impl SharingPayload {
    fn into_url(self) -> Option<String> {
        self.url.filter(|url| !url.is_empty())
    }
}
