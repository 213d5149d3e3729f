use crate::{
    core::{
        model::{
            document::DocumentCategory,
            employee::{Employee, EmployeeInsert, EmployeeOption},
        },
        repo::employee::EmployeeRepo,
    },
    error::DeskError,
};
use sqlx::PgPool;

const EMPLOYEE_COLUMNS: &str = "id, full_name, email, phone, date_of_birth, job_title, department, salary, start_date, end_date, photo_path, cv_path, id_document_path";

#[async_trait::async_trait]
impl EmployeeRepo for PgPool {
    async fn list(&self) -> Result<Vec<Employee>, DeskError> {
        Ok(sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY id DESC"
        ))
        .fetch_all(self)
        .await?)
    }

    async fn list_options(&self) -> Result<Vec<EmployeeOption>, DeskError> {
        Ok(sqlx::query_as::<_, EmployeeOption>(
            "SELECT id, full_name FROM employees ORDER BY full_name ASC",
        )
        .fetch_all(self)
        .await?)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Employee>, DeskError> {
        Ok(sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self)
        .await?)
    }

    async fn insert(&self, employee: &EmployeeInsert) -> Result<Employee, DeskError> {
        let EmployeeInsert {
            full_name,
            email,
            phone,
            date_of_birth,
            job_title,
            department,
            salary,
            start_date,
            end_date,
        } = employee;

        Ok(sqlx::query_as::<_, Employee>(&format!(
            "INSERT INTO employees (
                full_name, email, phone, date_of_birth, job_title,
                department, salary, start_date, end_date
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {EMPLOYEE_COLUMNS}"
        ))
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .bind(date_of_birth)
        .bind(job_title)
        .bind(department.as_str())
        .bind(salary)
        .bind(start_date)
        .bind(end_date)
        .fetch_one(self)
        .await?)
    }

    async fn update(&self, id: i32, employee: &EmployeeInsert) -> Result<u64, DeskError> {
        let EmployeeInsert {
            full_name,
            email,
            phone,
            date_of_birth,
            job_title,
            department,
            salary,
            start_date,
            end_date,
        } = employee;

        let result = sqlx::query(
            "UPDATE employees
             SET full_name = $1, email = $2, phone = $3, date_of_birth = $4, job_title = $5,
                 department = $6, salary = $7, start_date = $8, end_date = $9, updated_at = NOW()
             WHERE id = $10",
        )
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .bind(date_of_birth)
        .bind(job_title)
        .bind(department.as_str())
        .bind(salary)
        .bind(start_date)
        .bind(end_date)
        .bind(id)
        .execute(self)
        .await?;

        Ok(result.rows_affected())
    }

    async fn remove_by_id(&self, id: i32) -> Result<u64, DeskError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(self)
            .await?;
        Ok(result.rows_affected())
    }

    async fn set_document(
        &self,
        id: i32,
        category: DocumentCategory,
        path: &str,
    ) -> Result<u64, DeskError> {
        let result = sqlx::query(&format!(
            "UPDATE employees SET {} = $1, updated_at = NOW() WHERE id = $2",
            category.column()
        ))
        .bind(path)
        .bind(id)
        .execute(self)
        .await?;
        Ok(result.rows_affected())
    }

    async fn clear_document(
        &self,
        id: i32,
        category: DocumentCategory,
    ) -> Result<u64, DeskError> {
        let result = sqlx::query(&format!(
            "UPDATE employees SET {} = NULL, updated_at = NOW() WHERE id = $1",
            category.column()
        ))
        .bind(id)
        .execute(self)
        .await?;
        Ok(result.rows_affected())
    }

    async fn list_document_paths(&self) -> Result<Vec<String>, DeskError> {
        Ok(sqlx::query_scalar::<_, String>(
            "SELECT path FROM (
                SELECT photo_path AS path FROM employees
                UNION ALL
                SELECT cv_path FROM employees
                UNION ALL
                SELECT id_document_path FROM employees
             ) paths
             WHERE path IS NOT NULL",
        )
        .fetch_all(self)
        .await?)
    }
}
