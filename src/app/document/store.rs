use crate::{
    core::{
        document::{extension, file_name, public_path, store::DocumentStore, StampClock},
        model::document::{DocumentCategory, FilePayload, StoragePath, StoredFile},
    },
    error::DeskError,
};
use std::{
    path::{Path, PathBuf},
    time::SystemTime,
};
use tracing::{debug, warn};

/// Simple FS based implementation of a [DocumentStore].
/// Documents are stored as `{base}/{owner}/{category}-{stamp}.{ext}`.
#[derive(Debug)]
pub struct FsDocumentStore {
    /// The base directory to store the documents in.
    base: PathBuf,

    clock: StampClock,
}

impl FsDocumentStore {
    /// Create the store, creating the base directory if it does not exist.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, DeskError> {
        tokio::fs::create_dir_all(&path).await?;
        Ok(Self {
            base: tokio::fs::canonicalize(path).await?,
            clock: StampClock::new(),
        })
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

#[async_trait::async_trait]
impl DocumentStore for FsDocumentStore {
    async fn allocate(
        &self,
        owner: i32,
        category: DocumentCategory,
        original_name: &str,
    ) -> Result<StoragePath, DeskError> {
        let ext = extension(original_name)?;
        let owner = owner.to_string();
        let dir = self.base.join(&owner);

        tokio::fs::create_dir_all(&dir).await?;

        loop {
            let name = file_name(category, self.clock.next(), ext);
            let absolute = dir.join(&name);

            // Another process may have claimed the stamp
            if tokio::fs::try_exists(&absolute).await? {
                debug!("{} already exists", absolute.display());
                continue;
            }

            return Ok(StoragePath {
                absolute,
                public: public_path(&owner, &name),
            });
        }
    }

    async fn write(&self, file: &FilePayload, path: &StoragePath) -> Result<(), DeskError> {
        if file.is_empty() {
            return Err(DeskError::EmptyFile);
        }
        debug!("Writing {}", path.absolute.display());
        Ok(tokio::fs::write(&path.absolute, &file.content).await?)
    }

    async fn list(&self) -> Result<Vec<StoredFile>, DeskError> {
        let now = SystemTime::now();
        let mut files = vec![];

        let mut owners = tokio::fs::read_dir(&self.base).await?;

        while let Some(owner) = owners.next_entry().await? {
            if !owner.file_type().await?.is_dir() {
                continue;
            }

            let Some(owner_name) = owner.file_name().to_str().map(String::from) else {
                warn!("Skipping non UTF-8 directory {}", owner.path().display());
                continue;
            };

            let mut entries = tokio::fs::read_dir(owner.path()).await?;

            while let Some(entry) = entries.next_entry().await? {
                let metadata = entry.metadata().await?;

                if !metadata.is_file() {
                    continue;
                }

                let Some(name) = entry.file_name().to_str().map(String::from) else {
                    warn!("Skipping non UTF-8 file {}", entry.path().display());
                    continue;
                };

                let age = now
                    .duration_since(metadata.modified()?)
                    .unwrap_or_default();

                files.push(StoredFile {
                    path: StoragePath {
                        absolute: entry.path(),
                        public: public_path(&owner_name, &name),
                    },
                    age,
                });
            }
        }

        Ok(files)
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), DeskError> {
        debug!("Removing {}", path.absolute.display());
        Ok(tokio::fs::remove_file(&path.absolute).await?)
    }
}
