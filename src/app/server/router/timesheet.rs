use crate::{
    app::{server::form::FormData, state::ServiceState},
    core::model::{
        employee::EmployeeOption,
        timesheet::{TimesheetDisplay, TimesheetInsert},
    },
    error::DeskError,
};
use axum::{
    extract::{Path, State},
    response::Redirect,
    Json,
};

#[utoipa::path(
    get,
    path = "/timesheets",
    responses(
        (status = 200, description = "List timesheets with their employees, latest first", body = [TimesheetDisplay]),
        (status = 500, description = "Internal server error")
    )
)]
pub(in crate::app::server) async fn list_timesheets(
    services: State<ServiceState>,
) -> Result<Json<Vec<TimesheetDisplay>>, DeskError> {
    Ok(Json(services.timesheet.list().await?))
}

#[utoipa::path(
    get,
    path = "/timesheets/new",
    responses(
        (status = 200, description = "Employees a timesheet can be created for", body = [EmployeeOption]),
        (status = 500, description = "Internal server error")
    )
)]
pub(in crate::app::server) async fn new_timesheet(
    services: State<ServiceState>,
) -> Result<Json<Vec<EmployeeOption>>, DeskError> {
    Ok(Json(services.employee.list_options().await?))
}

#[utoipa::path(
    post,
    path = "/timesheets",
    request_body(content = TimesheetInsert, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Timesheet created, redirects to `/timesheets`"),
        (status = 404, description = "Employee not found"),
        (status = 422, description = "Invalid timesheet"),
        (status = 500, description = "Internal server error")
    )
)]
pub(in crate::app::server) async fn create_timesheet(
    services: State<ServiceState>,
    form: FormData,
) -> Result<Redirect, DeskError> {
    let insert: TimesheetInsert = form.decode()?;
    services.timesheet.create(insert).await?;
    Ok(Redirect::to("/timesheets"))
}

#[utoipa::path(
    get,
    path = "/timesheets/{id}",
    responses(
        (status = 200, description = "Timesheet with its employee", body = TimesheetDisplay),
        (status = 404, description = "Timesheet not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i32, Path, description = "Timesheet ID")
    )
)]
pub(in crate::app::server) async fn get_timesheet(
    services: State<ServiceState>,
    Path(id): Path<i32>,
) -> Result<Json<TimesheetDisplay>, DeskError> {
    Ok(Json(services.timesheet.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/timesheets/{id}",
    request_body(content = String, content_type = "application/x-www-form-urlencoded", description = "Form with `intent=delete`"),
    responses(
        (status = 303, description = "Timesheet deleted, redirects to `/timesheets`"),
        (status = 404, description = "Timesheet not found"),
        (status = 422, description = "Invalid intent"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i32, Path, description = "Timesheet ID")
    )
)]
pub(in crate::app::server) async fn timesheet_action(
    services: State<ServiceState>,
    Path(id): Path<i32>,
    form: FormData,
) -> Result<Redirect, DeskError> {
    match form.intent()? {
        "delete" => {
            services.timesheet.delete(id).await?;
            Ok(Redirect::to("/timesheets"))
        }
        intent => Err(DeskError::InvalidIntent(intent.to_string())),
    }
}
