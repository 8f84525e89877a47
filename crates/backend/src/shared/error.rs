use axum::{http::StatusCode, Json};
use thiserror::Error;

/// Handler result: JSON body, or a status with a plain-text message
pub type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

/// Domain failures raised by services and mapped to HTTP statuses by handlers
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

/// Status and message for an error coming out of a service call.
/// Unknown errors become 500 and are logged.
pub fn error_response(context: &str, err: &anyhow::Error) -> (StatusCode, String) {
    if let Some(service_err) = err.downcast_ref::<ServiceError>() {
        return (service_err.status_code(), service_err.to_string());
    }
    if is_unique_violation(err) {
        return (StatusCode::CONFLICT, "Record already exists".to_string());
    }
    tracing::error!("{}: {:#}", context, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.chain()
        .any(|cause| cause.to_string().contains("UNIQUE constraint failed"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_service_errors() {
        let err = anyhow::Error::new(ServiceError::Conflict("Challan CH-1 was already received".into()));
        let (status, message) = error_response("receive", &err);
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(message, "Challan CH-1 was already received");

        let err = anyhow::Error::new(ServiceError::NotFound);
        assert_eq!(error_response("get", &err).0, StatusCode::NOT_FOUND);

        let err = anyhow::Error::new(ServiceError::Validation("bad".into()));
        assert_eq!(error_response("save", &err).0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unique_violations_are_conflicts() {
        let err = anyhow::anyhow!("UNIQUE constraint failed: jobs.job_id");
        assert_eq!(error_response("save", &err).0, StatusCode::CONFLICT);
    }

    #[test]
    fn other_errors_are_internal() {
        let err = anyhow::anyhow!("disk full");
        assert_eq!(
            error_response("save", &err).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
