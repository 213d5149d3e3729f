use crate::{
    app::{
        server::{
            dto::{PrunePayload, PruneResult},
            form::FormData,
        },
        state::ServiceState,
    },
    error::DeskError,
};
use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Json,
};

#[utoipa::path(
    post,
    path = "/employees/{id}/upload",
    request_body(content = String, content_type = "multipart/form-data", description = "Form with the document category as `type` and the document as `file`"),
    responses(
        (status = 303, description = "Document stored, redirects to the employee"),
        (status = 404, description = "Employee not found"),
        (status = 422, description = "Empty file or invalid category"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i32, Path, description = "Employee ID")
    )
)]
pub(in crate::app::server) async fn upload_document(
    services: State<ServiceState>,
    Path(id): Path<i32>,
    mut form: FormData,
) -> Result<Redirect, DeskError> {
    let category = form.category()?;
    let file = form.take_file("file").unwrap_or_default();

    services.document.upload(id, category, &file).await?;

    Ok(Redirect::to(&format!("/employees/{id}")))
}

#[utoipa::path(
    post,
    path = "/admin/uploads/prune",
    responses(
        (status = 200, description = "Delete stored files no employee references", body = PruneResult),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("params" = PrunePayload, Query, description = "Query parameters"),
    ),
)]
pub(in crate::app::server) async fn prune_uploads(
    services: State<ServiceState>,
    params: Option<Query<PrunePayload>>,
) -> Result<Json<PruneResult>, DeskError> {
    let Query(params) = params.unwrap_or_default();
    let removed = services.document.prune(params.grace()).await?;
    Ok(Json(PruneResult { removed }))
}
