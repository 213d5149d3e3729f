use super::DeskError;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::error;

impl DeskError {
    pub fn status(&self) -> StatusCode {
        use DeskError as E;
        use StatusCode as SC;
        match self {
            E::DoesNotExist(_) => SC::NOT_FOUND,
            E::Multipart(_) => SC::BAD_REQUEST,
            E::EmptyFile
            | E::Validation(_)
            | E::InvalidCategory(_)
            | E::InvalidFileName(_)
            | E::InvalidIntent(_)
            | E::InvalidForm(_) => SC::UNPROCESSABLE_ENTITY,
            E::IO(_) | E::Sqlx(_) => SC::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response wrapper.
#[derive(Debug, Serialize)]
struct ResponseError<T: Serialize> {
    error_type: ErrorType,
    body: T,
}

impl<T> ResponseError<T>
where
    T: Serialize,
{
    pub fn new(error_type: ErrorType, body: T) -> Self {
        Self { error_type, body }
    }
}

#[derive(Debug, Serialize)]
enum ErrorType {
    Internal,
    Api,
}

impl<T> IntoResponse for ResponseError<T>
where
    T: Serialize,
{
    fn into_response(self) -> axum::response::Response {
        <Json<ResponseError<T>> as IntoResponse>::into_response(Json(self))
    }
}

/// Body for errors the user can correct by resubmitting the form.
#[derive(Debug, Serialize)]
struct FormError {
    error: String,
}

impl IntoResponse for DeskError {
    fn into_response(self) -> axum::response::Response {
        error!("{self}");

        let status = self.status();

        use DeskError as DE;
        use ErrorType as ET;

        match self {
            DE::EmptyFile => (
                status,
                Json(FormError {
                    error: self.to_string(),
                }),
            )
                .into_response(),

            DE::DoesNotExist(e)
            | DE::InvalidCategory(e)
            | DE::InvalidFileName(e)
            | DE::InvalidIntent(e)
            | DE::InvalidForm(e) => (status, ResponseError::new(ET::Api, e)).into_response(),

            DE::Validation(errors) => (status, ResponseError::new(ET::Api, errors)).into_response(),

            DE::Multipart(e) => {
                (status, ResponseError::new(ET::Api, e.body_text())).into_response()
            }

            DE::IO(_) | DE::Sqlx(_) => (
                status,
                ResponseError::new(ET::Internal, "Internal".to_string()),
            )
                .into_response(),
        }
    }
}
