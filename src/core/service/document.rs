use crate::{
    core::{
        document::store::DocumentStore,
        model::document::{DocumentCategory, FilePayload, StoredDocument},
        repo::employee::EmployeeRepo,
    },
    error::DeskError,
};
use std::{collections::HashSet, sync::Arc, time::Duration};
use tracing::{debug, info};

/// Attaches documents to employees and keeps the stored files in check.
#[derive(Clone)]
pub struct DocumentService<R> {
    repo: R,
    store: Arc<dyn DocumentStore + Send + Sync>,
}

impl<R> DocumentService<R>
where
    R: EmployeeRepo + Send + Sync,
{
    pub fn new(repo: R, store: Arc<dyn DocumentStore + Send + Sync>) -> Self {
        Self { repo, store }
    }

    /// Store the file and associate it with the employee, replacing any previous
    /// document of the same category. The previous file stays on disk.
    ///
    /// The file is written before the association. If the association fails the
    /// file is left behind as an orphan, see [DocumentService::prune].
    ///
    /// * `employee_id`: Employee ID.
    /// * `category`: Document category.
    /// * `file`: The uploaded file.
    pub async fn upload(
        &self,
        employee_id: i32,
        category: DocumentCategory,
        file: &FilePayload,
    ) -> Result<StoredDocument, DeskError> {
        if file.is_empty() {
            return Err(DeskError::EmptyFile);
        }

        if self.repo.get_by_id(employee_id).await?.is_none() {
            return Err(DeskError::DoesNotExist(format!(
                "Employee with ID {employee_id}"
            )));
        }

        let path = self
            .store
            .allocate(employee_id, category, &file.name)
            .await?;

        self.store.write(file, &path).await?;

        let affected = self
            .repo
            .set_document(employee_id, category, &path.public)
            .await?;

        if affected == 0 {
            return Err(DeskError::DoesNotExist(format!(
                "Employee with ID {employee_id}"
            )));
        }

        info!(
            "Stored {category} for employee {employee_id} at '{}' ({} bytes)",
            path.public,
            file.size()
        );

        Ok(StoredDocument {
            employee_id,
            category,
            path: path.public,
        })
    }

    /// Remove the association between the employee and their document of the
    /// given category. The file itself is not deleted.
    ///
    /// * `employee_id`: Employee ID.
    /// * `category`: Document category.
    pub async fn remove(
        &self,
        employee_id: i32,
        category: DocumentCategory,
    ) -> Result<(), DeskError> {
        let affected = self.repo.clear_document(employee_id, category).await?;

        if affected == 0 {
            return Err(DeskError::DoesNotExist(format!(
                "Employee with ID {employee_id}"
            )));
        }

        info!("Removed {category} association for employee {employee_id}");

        Ok(())
    }

    /// Delete stored files no employee references anymore.
    /// Files modified within `grace` are kept, since they may belong to an
    /// upload whose association has not been written yet.
    /// Returns the public paths of the deleted files.
    ///
    /// * `grace`: Minimum age of a file before it can be deleted.
    pub async fn prune(&self, grace: Duration) -> Result<Vec<String>, DeskError> {
        let referenced: HashSet<String> =
            self.repo.list_document_paths().await?.into_iter().collect();

        let mut removed = vec![];

        for file in self.store.list().await? {
            if referenced.contains(&file.path.public) {
                continue;
            }

            if file.age < grace {
                debug!("Keeping recent unreferenced file '{}'", file.path.public);
                continue;
            }

            self.store.delete(&file.path).await?;
            info!("Pruned orphaned document '{}'", file.path.public);
            removed.push(file.path.public);
        }

        Ok(removed)
    }
}
