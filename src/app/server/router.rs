use super::api::ApiDoc;
use crate::{app::state::AppState, config::MAX_BODY_SIZE};
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    classify::ServerErrorsFailureClass, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};
use tracing::Span;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub(super) mod document;
pub(super) mod employee;
pub(super) mod timesheet;

pub fn router(state: AppState, origins: Vec<String>) -> Router {
    let origins = origins
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => {
                tracing::info!("Adding {origin} to allowed origins");
                Some(value)
            }
            Err(e) => {
                tracing::warn!("Skipping invalid origin '{origin}': {e}");
                None
            }
        })
        .collect::<Vec<_>>();

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::AllowOrigin::list(origins))
        .allow_headers(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST]);

    use document::*;
    use employee::*;
    use timesheet::*;

    let router = Router::new()
        .route("/employees", get(list_employees))
        .route("/employees", post(create_employee))
        .route("/employees/:id", get(get_employee))
        .route("/employees/:id", post(employee_action))
        .route("/employees/:id/upload", post(upload_document))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .route("/timesheets", get(list_timesheets))
        .route("/timesheets", post(create_timesheet))
        .route("/timesheets/new", get(new_timesheet))
        .route("/timesheets/:id", get(get_timesheet))
        .route("/timesheets/:id", post(timesheet_action))
        .route("/admin/uploads/prune", post(prune_uploads))
        .with_state(state.services.clone())
        .nest_service("/uploads", ServeDir::new(&state.upload_path));

    router
        .layer(
            TraceLayer::new_for_http()
                .on_request(|req: &axum::http::Request<_>, _span: &Span| {
                    let ctype = req
                        .headers()
                        .get("content-type")
                        .map(|v| v.to_str().unwrap_or("none"))
                        .unwrap_or("none");

                    tracing::info!(
                        "Processing request | {} {} | content-type: {ctype}",
                        req.method(),
                        req.uri().path()
                    );
                })
                .on_response(
                    |res: &axum::http::Response<_>, latency: Duration, _span: &Span| {
                        let status = res.status();
                        let ctype = res
                            .headers()
                            .get("content-type")
                            .map(|v| v.to_str().unwrap_or("none"))
                            .unwrap_or("none");

                        tracing::info!(
                            "Sending response | {status} | {}ms | {ctype}",
                            latency.as_millis()
                        );
                    },
                )
                .on_failure(
                    |error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                        tracing::error!("Error in request: {error}")
                    },
                ),
        )
        .layer(cors)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Has to go last to exclude all the tracing/cors layers
        .route("/_health", get(health_check))
}

#[utoipa::path(
    get,
    path = "/_health",
    responses(
        (status = 200, description = "Service is up")
    )
)]
pub(super) async fn health_check() -> impl IntoResponse {
    "OK"
}
