use crate::{
    core::model::{
        document::DocumentCategory,
        employee::{Employee, EmployeeInsert, EmployeeOption},
    },
    error::DeskError,
};

/// Keeps track of employees and the documents associated with them.
#[async_trait::async_trait]
pub trait EmployeeRepo {
    /// List all employees, most recently created first.
    async fn list(&self) -> Result<Vec<Employee>, DeskError>;

    /// List the ID and name of every employee, ordered by name.
    async fn list_options(&self) -> Result<Vec<EmployeeOption>, DeskError>;

    /// Get an employee by ID.
    ///
    /// * `id`: Employee ID.
    async fn get_by_id(&self, id: i32) -> Result<Option<Employee>, DeskError>;

    /// Insert an employee without any documents.
    ///
    /// * `employee`: Insert payload.
    async fn insert(&self, employee: &EmployeeInsert) -> Result<Employee, DeskError>;

    /// Overwrite an employee's fields. Documents are left untouched.
    /// Returns the number of affected rows.
    ///
    /// * `id`: Employee ID.
    /// * `employee`: Update payload.
    async fn update(&self, id: i32, employee: &EmployeeInsert) -> Result<u64, DeskError>;

    /// Remove an employee, along with their timesheets.
    /// Returns the number of affected rows.
    ///
    /// * `id`: Employee ID.
    async fn remove_by_id(&self, id: i32) -> Result<u64, DeskError>;

    /// Associate a stored document path with an employee, replacing any
    /// previous path of the same category. Returns the number of affected rows.
    ///
    /// * `id`: Employee ID.
    /// * `category`: Document category.
    /// * `path`: Public path of the stored document.
    async fn set_document(
        &self,
        id: i32,
        category: DocumentCategory,
        path: &str,
    ) -> Result<u64, DeskError>;

    /// Remove the document association of the given category.
    /// Returns the number of affected rows, which is 1 for an existing
    /// employee whether or not they had a document.
    ///
    /// * `id`: Employee ID.
    /// * `category`: Document category.
    async fn clear_document(&self, id: i32, category: DocumentCategory)
        -> Result<u64, DeskError>;

    /// Every document path referenced by any employee.
    async fn list_document_paths(&self) -> Result<Vec<String>, DeskError>;
}
