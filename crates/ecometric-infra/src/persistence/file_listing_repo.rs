//! File-based listing repository reading the site's JSON feed documents

use std::fs;
use std::path::{Path, PathBuf};

use ecometric_domain::model::{Feed, Listing};
use ecometric_domain::repository::ListingRepository;
use ecometric_types::Error;
use serde_json::Value;
use tracing::{debug, warn};

/// Reads feed documents relative to a site root directory
pub struct FileListingRepository {
    site_root: PathBuf,
}

impl FileListingRepository {
    pub fn new(site_root: PathBuf) -> Self {
        Self { site_root }
    }

    pub fn site_root(&self) -> &Path {
        &self.site_root
    }

    /// On-disk location of a feed document
    pub fn feed_path(&self, feed: Feed) -> PathBuf {
        self.site_root.join(feed.path().trim_start_matches('/'))
    }
}

impl ListingRepository for FileListingRepository {
    fn find_by_feed(&self, feed: Feed) -> Result<Vec<Listing>, Error> {
        let path = self.feed_path(feed);
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(&path)?;
        let document: Value = serde_json::from_str(&content)?;

        let items = match document.get(feed.data_key()) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(Error::InvalidInput(format!(
                    "'{}' in {} is not an array",
                    feed.data_key(),
                    path.display()
                )))
            }
            None => {
                debug!(path = %path.display(), key = feed.data_key(), "feed has no items key");
                return Ok(Vec::new());
            }
        };

        let mut listings = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match serde_json::from_value::<Listing>(item.clone()) {
                Ok(listing) => listings.push(listing),
                Err(e) => warn!(path = %path.display(), index, error = %e, "skipping malformed listing"),
            }
        }
        debug!(feed = ?feed, count = listings.len(), "loaded listings");
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_feed(root: &Path, feed: Feed, body: &str) {
        let path = root.join(feed.path().trim_start_matches('/'));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn test_reads_feed_items() {
        let dir = tempfile::tempdir().unwrap();
        write_feed(
            dir.path(),
            Feed::Jobs,
            r#"{"vagas": [{"titulo": "Carpinteiro", "localizacao": "Porto"}, {"titulo": "Pedreiro"}]}"#,
        );
        let repo = FileListingRepository::new(dir.path().to_path_buf());
        let items = repo.find_by_feed(Feed::Jobs).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].titulo, "Carpinteiro");
        assert_eq!(items[1].localizacao, "");
    }

    #[test]
    fn test_missing_key_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        write_feed(dir.path(), Feed::Housing, r#"{"outros": []}"#);
        let repo = FileListingRepository::new(dir.path().to_path_buf());
        assert!(repo.find_by_feed(Feed::Housing).unwrap().is_empty());
    }

    #[test]
    fn test_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileListingRepository::new(dir.path().to_path_buf());
        assert!(matches!(
            repo.find_by_feed(Feed::Donations),
            Err(Error::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        write_feed(dir.path(), Feed::Services, "{not json");
        let repo = FileListingRepository::new(dir.path().to_path_buf());
        assert!(matches!(repo.find_by_feed(Feed::Services), Err(Error::Json(_))));
    }

    #[test]
    fn test_malformed_item_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_feed(
            dir.path(),
            Feed::Services,
            r#"{"servicos": [{"titulo": 5}, {"titulo": "Canalizador"}]}"#,
        );
        let repo = FileListingRepository::new(dir.path().to_path_buf());
        let items = repo.find_by_feed(Feed::Services).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].titulo, "Canalizador");
    }
}
