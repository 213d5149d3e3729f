use crate::{
    core::{
        model::timesheet::{Timesheet, TimesheetDisplay, TimesheetInsert},
        repo::{employee::EmployeeRepo, timesheet::TimesheetRepo},
    },
    error::DeskError,
};
use tracing::info;
use validify::Validate;

/// High level operations for timesheet management.
#[derive(Clone)]
pub struct TimesheetService<R> {
    repo: R,
}

impl<R> TimesheetService<R>
where
    R: EmployeeRepo + TimesheetRepo + Send + Sync,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<TimesheetDisplay>, DeskError> {
        self.repo.list_timesheets().await
    }

    /// Get a timesheet along with its employee's info.
    ///
    /// * `id`: Timesheet ID.
    pub async fn get(&self, id: i32) -> Result<TimesheetDisplay, DeskError> {
        self.repo
            .get_timesheet(id)
            .await?
            .ok_or_else(|| DeskError::DoesNotExist(format!("Timesheet with ID {id}")))
    }

    /// Validate and insert a timesheet for an existing employee.
    ///
    /// * `timesheet`: Insert payload.
    pub async fn create(&self, timesheet: TimesheetInsert) -> Result<Timesheet, DeskError> {
        timesheet.validate()?;

        let employee_id = timesheet.employee_id;
        if self.repo.get_by_id(employee_id).await?.is_none() {
            return Err(DeskError::DoesNotExist(format!(
                "Employee with ID {employee_id}"
            )));
        }

        let timesheet = self.repo.insert_timesheet(&timesheet).await?;
        info!(
            "Created timesheet {} for employee {employee_id}",
            timesheet.id
        );
        Ok(timesheet)
    }

    /// * `id`: Timesheet ID.
    pub async fn delete(&self, id: i32) -> Result<(), DeskError> {
        if self.repo.remove_timesheet(id).await? == 0 {
            return Err(DeskError::DoesNotExist(format!("Timesheet with ID {id}")));
        }

        info!("Deleted timesheet {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TimesheetService;
    use crate::{
        app::test::memory::{employee_insert, MemoryRepo},
        core::{
            model::timesheet::{parse_datetime, TimesheetInsert},
            repo::employee::EmployeeRepo,
        },
        error::DeskError,
    };

    fn timesheet(employee_id: i32, start: &str, end: &str) -> TimesheetInsert {
        TimesheetInsert {
            employee_id,
            start_time: parse_datetime(start).unwrap(),
            end_time: parse_datetime(end).unwrap(),
            summary: Some("Sprint planning".to_string()),
        }
    }

    #[tokio::test]
    async fn create_and_get_joins_employee() {
        let repo = MemoryRepo::default();
        let employee = repo.insert(&employee_insert()).await.unwrap();
        let service = TimesheetService::new(repo);

        let created = service
            .create(timesheet(employee.id, "2024-02-01T09:00", "2024-02-01T17:00"))
            .await
            .unwrap();

        let display = service.get(created.id).await.unwrap();

        assert_eq!(employee.full_name, display.full_name);
        assert_eq!(employee.department, display.department);
        assert_eq!(Some("Sprint planning"), display.summary.as_deref());
    }

    #[tokio::test]
    async fn create_rejects_invalid_range() {
        let repo = MemoryRepo::default();
        let employee = repo.insert(&employee_insert()).await.unwrap();
        let service = TimesheetService::new(repo);

        let result = service
            .create(timesheet(employee.id, "2024-02-01T09:00", "2024-02-03T09:00"))
            .await;

        assert!(matches!(result, Err(DeskError::Validation(_))));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_requires_employee() {
        let service = TimesheetService::new(MemoryRepo::default());

        let result = service
            .create(timesheet(9, "2024-02-01T09:00", "2024-02-01T10:00"))
            .await;

        assert!(matches!(result, Err(DeskError::DoesNotExist(_))));
    }

    #[tokio::test]
    async fn list_is_ordered_by_start_and_delete_removes() {
        let repo = MemoryRepo::default();
        let employee = repo.insert(&employee_insert()).await.unwrap();
        let service = TimesheetService::new(repo);

        let early = service
            .create(timesheet(employee.id, "2024-02-01T09:00", "2024-02-01T10:00"))
            .await
            .unwrap();
        let late = service
            .create(timesheet(employee.id, "2024-02-02T09:00", "2024-02-02T10:00"))
            .await
            .unwrap();

        let ids: Vec<_> = service.list().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(vec![late.id, early.id], ids);

        service.delete(early.id).await.unwrap();
        assert!(matches!(
            service.get(early.id).await,
            Err(DeskError::DoesNotExist(_))
        ));
        assert!(matches!(
            service.delete(early.id).await,
            Err(DeskError::DoesNotExist(_))
        ));
    }
}
