use crate::{
    core::{
        model::employee::{Employee, EmployeeDetail, EmployeeInsert, EmployeeOption},
        repo::{employee::EmployeeRepo, timesheet::TimesheetRepo},
    },
    error::DeskError,
};
use tracing::info;
use validify::Validate;

/// Amount of timesheets shown alongside an employee.
pub const RECENT_TIMESHEETS: i64 = 5;

/// High level operations for employee management.
#[derive(Clone)]
pub struct EmployeeService<R> {
    repo: R,
}

impl<R> EmployeeService<R>
where
    R: EmployeeRepo + TimesheetRepo + Send + Sync,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, DeskError> {
        self.repo.list().await
    }

    pub async fn list_options(&self) -> Result<Vec<EmployeeOption>, DeskError> {
        self.repo.list_options().await
    }

    /// Get an employee from the repository.
    ///
    /// * `id`: Employee ID.
    pub async fn get(&self, id: i32) -> Result<Employee, DeskError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| DeskError::DoesNotExist(format!("Employee with ID {id}")))
    }

    /// Get an employee along with their latest timesheets.
    ///
    /// * `id`: Employee ID.
    pub async fn get_detail(&self, id: i32) -> Result<EmployeeDetail, DeskError> {
        let employee = self.get(id).await?;
        let timesheets = self.repo.list_by_employee(id, RECENT_TIMESHEETS).await?;
        Ok(EmployeeDetail {
            employee,
            timesheets,
        })
    }

    /// Validate and insert an employee. Documents are attached separately.
    ///
    /// * `employee`: Insert payload.
    pub async fn create(&self, employee: EmployeeInsert) -> Result<Employee, DeskError> {
        employee.validate()?;
        let employee = self.repo.insert(&employee).await?;
        info!("Created employee '{}' ({})", employee.full_name, employee.id);
        Ok(employee)
    }

    /// Validate and overwrite an employee's fields.
    ///
    /// * `id`: Employee ID.
    /// * `employee`: Update payload.
    pub async fn update(&self, id: i32, employee: EmployeeInsert) -> Result<(), DeskError> {
        employee.validate()?;

        if self.repo.update(id, &employee).await? == 0 {
            return Err(DeskError::DoesNotExist(format!("Employee with ID {id}")));
        }

        info!("Updated employee {id}");
        Ok(())
    }

    /// Delete an employee and, through the schema, their timesheets.
    /// Stored documents are not deleted.
    ///
    /// * `id`: Employee ID.
    pub async fn delete(&self, id: i32) -> Result<(), DeskError> {
        if self.repo.remove_by_id(id).await? == 0 {
            return Err(DeskError::DoesNotExist(format!("Employee with ID {id}")));
        }

        info!("Deleted employee {id}");
        Ok(())
    }
}
