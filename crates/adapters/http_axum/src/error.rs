//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use climate_domain::error::ClimateError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`ClimateError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(ClimateError);

impl From<ClimateError> for ApiError {
    fn from(err: ClimateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ClimateError::InvalidDate(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ClimateError::NoData(err) => (StatusCode::NOT_FOUND, err.to_string()),
            ClimateError::StoreUnavailable(err) => {
                tracing::error!(error = ?err, "store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "store unavailable".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use climate_domain::error::{InvalidDateError, NoDataError};
    use http_body_util::BodyExt;

    async fn render(err: ClimateError) -> (StatusCode, serde_json::Value) {
        let response = ApiError::from(err).into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn should_map_invalid_date_to_bad_request() {
        let (status, body) = render(InvalidDateError::new("2016-13-01").into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "invalid date \"2016-13-01\", expected YYYY-MM-DD"
        );
    }

    #[tokio::test]
    async fn should_map_no_data_to_not_found() {
        let (status, body) = render(NoDataError.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "no observations recorded");
    }

    #[tokio::test]
    async fn should_hide_store_details_behind_service_unavailable() {
        let err = ClimateError::StoreUnavailable(Box::new(std::io::Error::other(
            "unable to open database file",
        )));
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "store unavailable");
    }
}
