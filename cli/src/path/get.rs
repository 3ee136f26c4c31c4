use clap::Parser;
use pythonanywhere::files::Listing;
use pythonanywhere::remote::{Contents, RemotePath};

#[derive(Parser)]
pub struct Command;

fn format_listing(listing: &Listing) -> Vec<String> {
    listing
        .iter()
        .map(|(name, entry)| {
            if entry.is_directory() {
                format!("{name}/")
            } else {
                name.clone()
            }
        })
        .collect()
}

impl Command {
    #[tracing::instrument(skip_all, level = "info")]
    pub async fn execute(&self, remote: &RemotePath) -> exitcode::ExitCode {
        match remote.contents().await {
            Some(Contents::Text(text)) => {
                print!("{text}");
                exitcode::OK
            }
            Some(Contents::Directory(listing)) => {
                for line in format_listing(&listing) {
                    println!("{line}");
                }
                exitcode::OK
            }
            None => exitcode::DATAERR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::format_listing;
    use pythonanywhere::files::{DirectoryEntry, EntryKind, Listing};

    #[test]
    fn should_mark_directories() {
        let mut listing = Listing::new();
        listing.insert(
            "mysite".into(),
            DirectoryEntry {
                kind: EntryKind::Directory,
                url: "https://www.pythonanywhere.com/api/v0/user/alice/files/path/home/alice/mysite/".into(),
            },
        );
        listing.insert(
            "hello.txt".into(),
            DirectoryEntry {
                kind: EntryKind::File,
                url: "https://www.pythonanywhere.com/api/v0/user/alice/files/path/home/alice/hello.txt".into(),
            },
        );
        assert_eq!(format_listing(&listing), vec!["hello.txt", "mysite/"]);
    }
}
