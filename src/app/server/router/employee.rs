use crate::{
    app::{
        server::{dto::ActionResult, form::FormData},
        state::ServiceState,
    },
    core::model::employee::{Employee, EmployeeDetail, EmployeeInsert},
    error::DeskError,
};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};

#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "List employees, newest first", body = [Employee]),
        (status = 500, description = "Internal server error")
    )
)]
pub(in crate::app::server) async fn list_employees(
    services: State<ServiceState>,
) -> Result<Json<Vec<Employee>>, DeskError> {
    Ok(Json(services.employee.list().await?))
}

#[utoipa::path(
    post,
    path = "/employees",
    request_body(content = EmployeeInsert, content_type = "multipart/form-data", description = "Employee fields with optional `photo`, `cv` and `id_doc` files"),
    responses(
        (status = 303, description = "Employee created, redirects to `/employees`"),
        (status = 422, description = "Invalid employee"),
        (status = 500, description = "Internal server error")
    )
)]
pub(in crate::app::server) async fn create_employee(
    services: State<ServiceState>,
    mut form: FormData,
) -> Result<Redirect, DeskError> {
    let insert: EmployeeInsert = form.decode()?;
    let documents = form.take_documents()?;

    let employee = services.employee.create(insert).await?;

    for (category, file) in documents {
        services
            .document
            .upload(employee.id, category, &file)
            .await?;
    }

    Ok(Redirect::to("/employees"))
}

#[utoipa::path(
    get,
    path = "/employees/{id}",
    responses(
        (status = 200, description = "Employee with their latest timesheets", body = EmployeeDetail),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i32, Path, description = "Employee ID")
    )
)]
pub(in crate::app::server) async fn get_employee(
    services: State<ServiceState>,
    Path(id): Path<i32>,
) -> Result<Json<EmployeeDetail>, DeskError> {
    Ok(Json(services.employee.get_detail(id).await?))
}

/// Form actions on a single employee, dispatched on the `intent` field:
///
/// - `upload`: attach the `file` as the document of category `type`.
/// - `remove_document`: detach the document of category `type`.
/// - `update`: overwrite the employee fields.
/// - `delete`: delete the employee and their timesheets.
#[utoipa::path(
    post,
    path = "/employees/{id}",
    request_body(content = String, content_type = "multipart/form-data", description = "Form with an `intent` field and the fields the intent requires"),
    responses(
        (status = 200, description = "Employee updated", body = ActionResult),
        (status = 303, description = "Action applied, redirects to the employee or the employee list"),
        (status = 404, description = "Employee not found"),
        (status = 422, description = "Invalid form, intent, category or payload"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i32, Path, description = "Employee ID")
    )
)]
pub(in crate::app::server) async fn employee_action(
    services: State<ServiceState>,
    Path(id): Path<i32>,
    mut form: FormData,
) -> Result<Response, DeskError> {
    let intent = form.intent()?.to_string();

    match intent.as_str() {
        "upload" => {
            let category = form.category()?;
            let file = form.take_file("file").unwrap_or_default();
            services.document.upload(id, category, &file).await?;
            Ok(Redirect::to(&format!("/employees/{id}")).into_response())
        }
        "remove_document" => {
            let category = form.category()?;
            services.document.remove(id, category).await?;
            Ok(Redirect::to(&format!("/employees/{id}")).into_response())
        }
        "update" => {
            let update: EmployeeInsert = form.decode()?;
            services.employee.update(id, update).await?;
            Ok(Json(ActionResult { success: true }).into_response())
        }
        "delete" => {
            services.employee.delete(id).await?;
            Ok(Redirect::to("/employees").into_response())
        }
        _ => Err(DeskError::InvalidIntent(intent)),
    }
}
