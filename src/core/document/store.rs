use crate::{
    core::model::document::{DocumentCategory, FilePayload, StoragePath, StoredFile},
    error::DeskError,
};

/// Persists employee documents.
/// Serves as indirection to decouple the documents from the medium they are stored on.
#[async_trait::async_trait]
pub trait DocumentStore {
    /// Compute a fresh, unused location for a document and make sure its
    /// parent exists. Nothing is written to the location itself.
    ///
    /// * `owner`: ID of the employee owning the document.
    /// * `category`: Document category, used as the file name prefix.
    /// * `original_name`: The uploaded file's name, used for its extension.
    async fn allocate(
        &self,
        owner: i32,
        category: DocumentCategory,
        original_name: &str,
    ) -> Result<StoragePath, DeskError>;

    /// Write the payload to the given location, overwriting any existing content.
    /// Empty payloads are rejected with [DeskError::EmptyFile] and nothing is written.
    ///
    /// * `file`: The uploaded file.
    /// * `path`: Location obtained from [DocumentStore::allocate].
    async fn write(&self, file: &FilePayload, path: &StoragePath) -> Result<(), DeskError>;

    /// List every stored document file.
    async fn list(&self) -> Result<Vec<StoredFile>, DeskError>;

    /// Delete a stored document file.
    ///
    /// * `path`: The file to delete.
    async fn delete(&self, path: &StoragePath) -> Result<(), DeskError>;
}
