use crate::{
    core::{
        model::timesheet::{Timesheet, TimesheetDisplay, TimesheetInsert},
        repo::timesheet::TimesheetRepo,
    },
    error::DeskError,
};
use sqlx::PgPool;

const DISPLAY_SELECT: &str = "
    SELECT
        timesheets.id,
        timesheets.employee_id,
        timesheets.start_time,
        timesheets.end_time,
        timesheets.summary,
        employees.full_name,
        employees.department
    FROM timesheets
    JOIN employees ON timesheets.employee_id = employees.id";

#[async_trait::async_trait]
impl TimesheetRepo for PgPool {
    async fn list_timesheets(&self) -> Result<Vec<TimesheetDisplay>, DeskError> {
        Ok(sqlx::query_as::<_, TimesheetDisplay>(&format!(
            "{DISPLAY_SELECT} ORDER BY timesheets.start_time DESC, timesheets.id DESC"
        ))
        .fetch_all(self)
        .await?)
    }

    async fn get_timesheet(&self, id: i32) -> Result<Option<TimesheetDisplay>, DeskError> {
        Ok(sqlx::query_as::<_, TimesheetDisplay>(&format!(
            "{DISPLAY_SELECT} WHERE timesheets.id = $1"
        ))
        .bind(id)
        .fetch_optional(self)
        .await?)
    }

    async fn list_by_employee(
        &self,
        employee_id: i32,
        limit: i64,
    ) -> Result<Vec<Timesheet>, DeskError> {
        Ok(sqlx::query_as::<_, Timesheet>(
            "SELECT id, employee_id, start_time, end_time, summary
             FROM timesheets
             WHERE employee_id = $1
             ORDER BY start_time DESC, id DESC
             LIMIT $2",
        )
        .bind(employee_id)
        .bind(limit)
        .fetch_all(self)
        .await?)
    }

    async fn insert_timesheet(&self, timesheet: &TimesheetInsert) -> Result<Timesheet, DeskError> {
        Ok(sqlx::query_as::<_, Timesheet>(
            "INSERT INTO timesheets (employee_id, start_time, end_time, summary)
             VALUES ($1, $2, $3, $4)
             RETURNING id, employee_id, start_time, end_time, summary",
        )
        .bind(timesheet.employee_id)
        .bind(timesheet.start_time)
        .bind(timesheet.end_time)
        .bind(&timesheet.summary)
        .fetch_one(self)
        .await?)
    }

    async fn remove_timesheet(&self, id: i32) -> Result<u64, DeskError> {
        let result = sqlx::query("DELETE FROM timesheets WHERE id = $1")
            .bind(id)
            .execute(self)
            .await?;
        Ok(result.rows_affected())
    }
}
