//! File-backed key-value store.
//!
//! Keeps one file per key under a data directory. File names are the
//! percent-encoded key plus `.json`, so arbitrary keys (including ones
//! containing path separators) map losslessly to distinct files.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::trait_::{KeyValueStore, Result};

/// Directory-backed store: one file per key.
///
/// Writes land in a sibling temp file and are renamed into place, so a
/// record observed by a later read is either the previous value or the
/// new one, never a torn write.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub async fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.json", urlencoding::encode(key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.record_path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.record_path(key);
        let tmp_name = format!(
            ".{}.tmp-{}",
            path.file_name().and_then(|n| n.to_str()).unwrap_or("record"),
            std::process::id()
        );
        let tmp_path = self.root.join(tmp_name);

        fs::write(&tmp_path, value).await?;
        fs::rename(&tmp_path, &path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_of_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();
        assert_eq!(store.get("Monday").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        store.set("Monday", "[\"buy milk\"]").await.unwrap();
        assert_eq!(
            store.get("Monday").await.unwrap().as_deref(),
            Some("[\"buy milk\"]")
        );
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        store.set("Friday", "old").await.unwrap();
        store.set("Friday", "new").await.unwrap();
        assert_eq!(store.get("Friday").await.unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn values_survive_reopening_the_store() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileStore::open(dir.path()).await.unwrap();
            store.set("Sunday", "[\"rest\"]").await.unwrap();
        }

        let reopened = FileStore::open(dir.path()).await.unwrap();
        assert_eq!(
            reopened.get("Sunday").await.unwrap().as_deref(),
            Some("[\"rest\"]")
        );
    }

    #[tokio::test]
    async fn keys_that_are_not_filesystem_safe_still_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        let key = "next week/Monday plan?";
        store.set(key, "value").await.unwrap();
        assert_eq!(store.get(key).await.unwrap().as_deref(), Some("value"));

        // The record stays inside the root directory.
        let mut entries = std::fs::read_dir(dir.path()).unwrap();
        assert!(entries.all(|entry| entry.unwrap().path().is_file()));
    }

    #[tokio::test]
    async fn distinct_keys_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        store.set("a b", "first").await.unwrap();
        store.set("a_b", "second").await.unwrap();
        assert_eq!(store.get("a b").await.unwrap().as_deref(), Some("first"));
        assert_eq!(store.get("a_b").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn empty_value_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        store.set("Saturday", "").await.unwrap();
        assert_eq!(store.get("Saturday").await.unwrap().as_deref(), Some(""));
    }
}
