//! Commands mapping the endpoints of the files API
//!
//! Each command performs a single request. Paths are absolute paths on the remote
//! filesystem, like `/home/alice/hello.txt`.

use std::collections::BTreeMap;

pub mod path_delete;
pub mod path_get;
pub mod path_post;
pub mod sharing;
pub mod tree_get;

pub use path_delete::PathDeleteCommand;
pub use path_get::PathGetCommand;
pub use path_post::PathPostCommand;
pub use sharing::{SharingDeleteCommand, SharingGetCommand, SharingPostCommand};
pub use tree_get::TreeGetCommand;

pub(crate) const PATH_ENDPOINT: &str = "path";
pub(crate) const TREE_ENDPOINT: &str = "tree/";
pub(crate) const SHARING_ENDPOINT: &str = "sharing/";

/// The kind of an entry in a directory listing
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// An entry of a directory listing, as returned by the API
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct DirectoryEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub url: String,
}

impl DirectoryEntry {
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }
}

/// Directory listing, indexed by entry name
pub type Listing = BTreeMap<String, DirectoryEntry>;

/// What the API returns when fetching a path
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathContents {
    Directory(Listing),
    File(bytes::Bytes),
}
