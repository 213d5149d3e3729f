use crate::{
    core::model::timesheet::{Timesheet, TimesheetDisplay, TimesheetInsert},
    error::DeskError,
};

#[async_trait::async_trait]
pub trait TimesheetRepo {
    /// List all timesheets with their employee's info, latest start time first.
    async fn list_timesheets(&self) -> Result<Vec<TimesheetDisplay>, DeskError>;

    /// Get a timesheet with its employee's info.
    ///
    /// * `id`: Timesheet ID.
    async fn get_timesheet(&self, id: i32) -> Result<Option<TimesheetDisplay>, DeskError>;

    /// List an employee's latest timesheets.
    ///
    /// * `employee_id`: Employee ID.
    /// * `limit`: Maximum amount of timesheets to return.
    async fn list_by_employee(
        &self,
        employee_id: i32,
        limit: i64,
    ) -> Result<Vec<Timesheet>, DeskError>;

    /// Insert a timesheet.
    ///
    /// * `timesheet`: Insert payload.
    async fn insert_timesheet(&self, timesheet: &TimesheetInsert) -> Result<Timesheet, DeskError>;

    /// Remove a timesheet. Returns the number of affected rows.
    ///
    /// * `id`: Timesheet ID.
    async fn remove_timesheet(&self, id: i32) -> Result<u64, DeskError>;
}
