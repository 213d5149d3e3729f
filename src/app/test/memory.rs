//! In-memory repository used by service tests.

use crate::{
    core::{
        model::{
            document::DocumentCategory,
            employee::{Department, Employee, EmployeeInsert, EmployeeOption},
            timesheet::{Timesheet, TimesheetDisplay, TimesheetInsert},
        },
        repo::{employee::EmployeeRepo, timesheet::TimesheetRepo},
    },
    error::DeskError,
};
use chrono::NaiveDate;
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

/// A valid employee payload.
pub fn employee_insert() -> EmployeeInsert {
    EmployeeInsert {
        full_name: "John Doe".to_string(),
        email: "john.doe@company.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
        job_title: "Senior Developer".to_string(),
        department: Department::Engineering,
        salary: 95_000.,
        start_date: NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
        end_date: None,
    }
}

#[derive(Debug, Default)]
struct Tables {
    employees: BTreeMap<i32, Employee>,
    timesheets: BTreeMap<i32, Timesheet>,
    next_employee: i32,
    next_timesheet: i32,
}

impl Tables {
    fn display(&self, timesheet: &Timesheet) -> Option<TimesheetDisplay> {
        let employee = self.employees.get(&timesheet.employee_id)?;
        Some(TimesheetDisplay {
            id: timesheet.id,
            employee_id: timesheet.employee_id,
            start_time: timesheet.start_time,
            end_time: timesheet.end_time,
            summary: timesheet.summary.clone(),
            full_name: employee.full_name.clone(),
            department: employee.department.clone(),
        })
    }
}

/// Mirrors the ordering and cascading rules of the Postgres schema.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepo {
    tables: Arc<Mutex<Tables>>,
}

fn to_employee(id: i32, insert: &EmployeeInsert) -> Employee {
    Employee {
        id,
        full_name: insert.full_name.clone(),
        email: insert.email.clone(),
        phone: insert.phone.clone(),
        date_of_birth: insert.date_of_birth,
        job_title: insert.job_title.clone(),
        department: insert.department.to_string(),
        salary: insert.salary,
        start_date: insert.start_date,
        end_date: insert.end_date,
        photo_path: None,
        cv_path: None,
        id_document_path: None,
    }
}

impl MemoryRepo {
    /// Insert a valid employee with the given ID.
    pub fn put_employee(&self, id: i32) {
        let mut tables = self.tables.lock().unwrap();
        tables.next_employee = tables.next_employee.max(id);
        tables.employees.insert(id, to_employee(id, &employee_insert()));
    }

    pub fn put_photo(&self, id: i32, path: &str) {
        let mut tables = self.tables.lock().unwrap();
        if let Some(employee) = tables.employees.get_mut(&id) {
            employee.photo_path = Some(path.to_string());
        }
    }

    /// Insert a 09:00 - 17:00 timesheet on the given day of January 2024.
    pub fn put_timesheet(&self, employee_id: i32, day: u32) {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let mut tables = self.tables.lock().unwrap();
        tables.next_timesheet += 1;
        let id = tables.next_timesheet;
        tables.timesheets.insert(
            id,
            Timesheet {
                id,
                employee_id,
                start_time: date.and_hms_opt(9, 0, 0).unwrap(),
                end_time: date.and_hms_opt(17, 0, 0).unwrap(),
                summary: None,
            },
        );
    }
}

#[async_trait::async_trait]
impl EmployeeRepo for MemoryRepo {
    async fn list(&self) -> Result<Vec<Employee>, DeskError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.employees.values().rev().cloned().collect())
    }

    async fn list_options(&self) -> Result<Vec<EmployeeOption>, DeskError> {
        let tables = self.tables.lock().unwrap();
        let mut options: Vec<_> = tables
            .employees
            .values()
            .map(|employee| EmployeeOption {
                id: employee.id,
                full_name: employee.full_name.clone(),
            })
            .collect();
        options.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(options)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Employee>, DeskError> {
        Ok(self.tables.lock().unwrap().employees.get(&id).cloned())
    }

    async fn insert(&self, employee: &EmployeeInsert) -> Result<Employee, DeskError> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_employee += 1;
        let employee = to_employee(tables.next_employee, employee);
        tables.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: i32, employee: &EmployeeInsert) -> Result<u64, DeskError> {
        let mut tables = self.tables.lock().unwrap();
        let Some(existing) = tables.employees.get_mut(&id) else {
            return Ok(0);
        };
        *existing = Employee {
            photo_path: existing.photo_path.take(),
            cv_path: existing.cv_path.take(),
            id_document_path: existing.id_document_path.take(),
            ..to_employee(id, employee)
        };
        Ok(1)
    }

    async fn remove_by_id(&self, id: i32) -> Result<u64, DeskError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.employees.remove(&id).is_none() {
            return Ok(0);
        }
        tables
            .timesheets
            .retain(|_, timesheet| timesheet.employee_id != id);
        Ok(1)
    }

    async fn set_document(
        &self,
        id: i32,
        category: DocumentCategory,
        path: &str,
    ) -> Result<u64, DeskError> {
        let mut tables = self.tables.lock().unwrap();
        let Some(employee) = tables.employees.get_mut(&id) else {
            return Ok(0);
        };
        *document_mut(employee, category) = Some(path.to_string());
        Ok(1)
    }

    async fn clear_document(
        &self,
        id: i32,
        category: DocumentCategory,
    ) -> Result<u64, DeskError> {
        let mut tables = self.tables.lock().unwrap();
        let Some(employee) = tables.employees.get_mut(&id) else {
            return Ok(0);
        };
        *document_mut(employee, category) = None;
        Ok(1)
    }

    async fn list_document_paths(&self) -> Result<Vec<String>, DeskError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .employees
            .values()
            .flat_map(|employee| {
                DocumentCategory::ALL
                    .into_iter()
                    .filter_map(|category| employee.document(category).map(String::from))
            })
            .collect())
    }
}

fn document_mut(employee: &mut Employee, category: DocumentCategory) -> &mut Option<String> {
    match category {
        DocumentCategory::Photo => &mut employee.photo_path,
        DocumentCategory::Cv => &mut employee.cv_path,
        DocumentCategory::IdDoc => &mut employee.id_document_path,
    }
}

#[async_trait::async_trait]
impl TimesheetRepo for MemoryRepo {
    async fn list_timesheets(&self) -> Result<Vec<TimesheetDisplay>, DeskError> {
        let tables = self.tables.lock().unwrap();
        let mut timesheets: Vec<_> = tables
            .timesheets
            .values()
            .filter_map(|timesheet| tables.display(timesheet))
            .collect();
        timesheets.sort_by(|a, b| (b.start_time, b.id).cmp(&(a.start_time, a.id)));
        Ok(timesheets)
    }

    async fn get_timesheet(&self, id: i32) -> Result<Option<TimesheetDisplay>, DeskError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .timesheets
            .get(&id)
            .and_then(|timesheet| tables.display(timesheet)))
    }

    async fn list_by_employee(
        &self,
        employee_id: i32,
        limit: i64,
    ) -> Result<Vec<Timesheet>, DeskError> {
        let tables = self.tables.lock().unwrap();
        let mut timesheets: Vec<_> = tables
            .timesheets
            .values()
            .filter(|timesheet| timesheet.employee_id == employee_id)
            .cloned()
            .collect();
        timesheets.sort_by(|a, b| (b.start_time, b.id).cmp(&(a.start_time, a.id)));
        timesheets.truncate(limit.max(0) as usize);
        Ok(timesheets)
    }

    async fn insert_timesheet(&self, timesheet: &TimesheetInsert) -> Result<Timesheet, DeskError> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_timesheet += 1;
        let timesheet = Timesheet {
            id: tables.next_timesheet,
            employee_id: timesheet.employee_id,
            start_time: timesheet.start_time,
            end_time: timesheet.end_time,
            summary: timesheet.summary.clone(),
        };
        tables.timesheets.insert(timesheet.id, timesheet.clone());
        Ok(timesheet)
    }

    async fn remove_timesheet(&self, id: i32) -> Result<u64, DeskError> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables.timesheets.remove(&id).map_or(0, |_| 1))
    }
}
