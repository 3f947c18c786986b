//! API error responses.

use salvo::{
    http::{StatusCode, StatusError},
    oapi::{Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
    writing::Scribe,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::validation::ValidationErrors;

/// Error body shared by every non-validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Upper snake case status name, e.g. `NOT_FOUND`
    pub status: String,

    /// Human readable explanation
    pub message: String,

    /// Numeric HTTP status code
    pub code: u16,
}

impl ErrorResponse {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status_name(status),
            message: message.into(),
            code: status.as_u16(),
        }
    }
}

/// Error returned by handlers.
///
/// Validation failures render the field to message map directly; everything
/// else renders an [`ErrorResponse`].
#[derive(Debug)]
pub(crate) enum ApiError {
    Invalid(ValidationErrors),
    Status { status: StatusCode, message: String },
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub(crate) fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }

    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::Status { status, .. } => *status,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Invalid(errors)
    }
}

impl From<StatusError> for ApiError {
    fn from(error: StatusError) -> Self {
        Self::new(error.code, error.brief)
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status());

        match self {
            Self::Invalid(errors) => res.render(Json(errors)),
            Self::Status { status, message } => res.render(Json(ErrorResponse::new(status, message))),
        }
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        StatusError::register(components, operation);
    }
}

/// Render framework level failures (bad path params, malformed JSON, unknown
/// routes) with the same body shape as handler errors.
#[handler]
pub(crate) async fn json_catcher(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    if status.is_client_error() || status.is_server_error() {
        let message = status.canonical_reason().unwrap_or("Unknown Error");

        res.render(Json(ErrorResponse::new(status, message)));
        ctrl.skip_rest();
    }
}

fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_ascii_uppercase()
        .replace([' ', '-'], "_")
}

#[cfg(test)]
mod tests {
    use salvo::{
        catcher::Catcher,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[test]
    fn status_names_are_upper_snake_case() {
        assert_eq!(status_name(StatusCode::NOT_FOUND), "NOT_FOUND");
        assert_eq!(status_name(StatusCode::CONFLICT), "CONFLICT");
        assert_eq!(
            status_name(StatusCode::INTERNAL_SERVER_ERROR),
            "INTERNAL_SERVER_ERROR"
        );
    }

    #[handler]
    async fn invalid() -> Result<&'static str, ApiError> {
        let mut errors = ValidationErrors::new();

        errors.add("price", "The product price cannot be null");

        Err(errors.into())
    }

    #[handler]
    async fn missing() -> Result<&'static str, ApiError> {
        Err(ApiError::not_found("product not found"))
    }

    #[tokio::test]
    async fn validation_errors_render_field_map() -> TestResult {
        let service = Service::new(Router::with_path("invalid").get(invalid));

        let mut res = TestClient::get("http://example.com/invalid")
            .send(&service)
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body,
            serde_json::json!({ "price": "The product price cannot be null" })
        );

        Ok(())
    }

    #[tokio::test]
    async fn status_errors_render_error_response() -> TestResult {
        let service = Service::new(Router::with_path("missing").get(missing));

        let mut res = TestClient::get("http://example.com/missing")
            .send(&service)
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(
            body,
            ErrorResponse {
                status: "NOT_FOUND".to_string(),
                message: "product not found".to_string(),
                code: 404,
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn catcher_renders_unknown_routes_as_json() -> TestResult {
        let service = Service::new(Router::with_path("missing").get(missing))
            .catcher(Catcher::default().hoop(json_catcher));

        let mut res = TestClient::get("http://example.com/nowhere")
            .send(&service)
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.status, "NOT_FOUND");
        assert_eq!(body.code, 404);

        Ok(())
    }
}
