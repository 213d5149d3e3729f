#[rustfmt::skip]
use super::router::{
    __path_health_check,
    // Employees
    employee::{
        __path_list_employees,
        __path_create_employee,
        __path_get_employee,
        __path_employee_action,
    },
    // Timesheets
    timesheet::{
        __path_list_timesheets,
        __path_new_timesheet,
        __path_create_timesheet,
        __path_get_timesheet,
        __path_timesheet_action,
    },
    // Documents
    document::{
        __path_upload_document,
        __path_prune_uploads,
    },
};
use super::dto::{ActionResult, PrunePayload, PruneResult};
use crate::core::model::{
    document::{DocumentCategory, StoredDocument},
    employee::{Department, Employee, EmployeeDetail, EmployeeInsert, EmployeeOption},
    timesheet::{Timesheet, TimesheetDisplay, TimesheetInsert},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check,
        // Employees
        list_employees,
        create_employee,
        get_employee,
        employee_action,
        // Timesheets
        list_timesheets,
        new_timesheet,
        create_timesheet,
        get_timesheet,
        timesheet_action,
        // Documents
        upload_document,
        prune_uploads,
    ),
    components(schemas(
        Employee,
        EmployeeDetail,
        EmployeeInsert,
        EmployeeOption,
        Department,
        Timesheet,
        TimesheetDisplay,
        TimesheetInsert,
        DocumentCategory,
        StoredDocument,
        ActionResult,
        PrunePayload,
        PruneResult,
    )),
    tags(
        (name = "staffdesk", description = "Employee and timesheet management API")
    )
)]
pub struct ApiDoc;
