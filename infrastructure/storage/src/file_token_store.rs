use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;

use business::domain::auth::token_store::TokenStore;
use business::domain::errors::StorageError;

pub const TOKEN_FILE_NAME: &str = "token.json";

/// Location of the durable session token.
pub struct TokenStoreConfig {
    pub directory: PathBuf,
}

impl TokenStoreConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn token_path(&self) -> PathBuf {
        self.directory.join(TOKEN_FILE_NAME)
    }
}

/// Owner read/write only. The file holds a bearer credential.
#[cfg(unix)]
const TOKEN_FILE_MODE: u32 = 0o600;

#[cfg(unix)]
async fn restrict_to_owner(path: &Path) -> Result<(), StorageError> {
    use std::os::unix::fs::PermissionsExt;

    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(TOKEN_FILE_MODE))
        .await
        .map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Could not restrict token file");
            StorageError::Write
        })
}

#[cfg(not(unix))]
async fn restrict_to_owner(_path: &Path) -> Result<(), StorageError> {
    Ok(())
}

#[derive(Serialize, Deserialize)]
struct TokenFile {
    token: String,
}

/// Keeps the bearer token in a small JSON file (`{"token": "..."}`), the
/// command-line counterpart of the browser's local storage entry.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(config: &TokenStoreConfig) -> Self {
        Self {
            path: config.token_path(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<String>, StorageError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Token file unreadable");
                return Err(StorageError::Read);
            }
        };

        let file: TokenFile = serde_json::from_slice(&raw).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Token file is corrupt");
            StorageError::Read
        })?;

        Ok(Some(file.token).filter(|t| !t.is_empty()))
    }

    async fn save(&self, token: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|_| StorageError::Write)?;
        }

        let body = serde_json::to_vec(&TokenFile {
            token: token.to_string(),
        })
        .map_err(|_| StorageError::Write)?;

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(TOKEN_FILE_MODE);

        let mut file = options
            .open(&self.path)
            .await
            .map_err(|_| StorageError::Write)?;
        // `mode` only applies on creation; a file left by an older run keeps
        // its permissions unless they are reset here.
        restrict_to_owner(&self.path).await?;

        file.write_all(&body).await.map_err(|_| StorageError::Write)?;
        file.flush().await.map_err(|_| StorageError::Write)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(_) => Err(StorageError::Write),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileTokenStore {
        FileTokenStore::new(&TokenStoreConfig::new(dir.path().join("session")))
    }

    #[tokio::test]
    async fn should_return_none_when_no_token_saved() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.load().await, Ok(None));
    }

    #[tokio::test]
    async fn should_load_token_after_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("jwt-abc").await.unwrap();

        assert_eq!(store.load().await, Ok(Some("jwt-abc".to_string())));
        assert!(store.path().ends_with("session/token.json"));
    }

    #[tokio::test]
    async fn should_survive_a_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).save("jwt-abc").await.unwrap();

        let reopened = store_in(&dir);

        assert_eq!(reopened.load().await, Ok(Some("jwt-abc".to_string())));
    }

    #[tokio::test]
    async fn should_forget_token_on_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("jwt-abc").await.unwrap();

        store.clear().await.unwrap();
        store.clear().await.unwrap();

        assert_eq!(store.load().await, Ok(None));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn should_restrict_token_file_to_owner() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("jwt-abc").await.unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn should_tighten_permissions_of_existing_token_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(dir.path().join("session")).unwrap();
        std::fs::write(store.path(), br#"{"token":"old"}"#).unwrap();
        std::fs::set_permissions(store.path(), std::fs::Permissions::from_mode(0o644)).unwrap();

        store.save("jwt-new").await.unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(store.load().await, Ok(Some("jwt-new".to_string())));
    }

    #[tokio::test]
    async fn should_fail_read_when_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        tokio::fs::create_dir_all(dir.path().join("session"))
            .await
            .unwrap();
        tokio::fs::write(store.path(), b"not json").await.unwrap();

        assert_eq!(store.load().await, Err(StorageError::Read));
    }
}
