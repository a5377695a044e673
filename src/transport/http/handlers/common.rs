use crate::app::ServiceError;
use crate::storage::ipfs::IpfsErrorCode;
use crate::transport::http::responses::ErrorResponse;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::Json;
use tracing::warn;

pub type ErrorReply = (StatusCode, Json<ErrorResponse>);

pub fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::InvalidRequest(_) | ServiceError::Pagination(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
        ServiceError::Storage(e) => match e.code() {
            IpfsErrorCode::InvalidCid => StatusCode::BAD_REQUEST,
            IpfsErrorCode::FetchFailed => StatusCode::NOT_FOUND,
            IpfsErrorCode::InitFailed
            | IpfsErrorCode::NotInitialized
            | IpfsErrorCode::SpaceRegistrationFailed => StatusCode::SERVICE_UNAVAILABLE,
            IpfsErrorCode::UploadFailed | IpfsErrorCode::ParseFailed => StatusCode::BAD_GATEWAY,
        },
        ServiceError::ContentMismatch { .. }
        | ServiceError::Conversion(_)
        | ServiceError::IdsExhausted => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Translates a service failure into the error envelope.
pub fn service_error(err: ServiceError) -> ErrorReply {
    let status = status_for(&err);
    if status.is_server_error() {
        warn!(code = err.code(), error = %err, "request failed");
    }
    let mut body = ErrorResponse::new(err.to_string()).with_code(err.code());
    if let ServiceError::NotFound { entity, id } = &err {
        body = body.with_detail("entity", *entity).with_detail("id", id.as_str());
    }
    (status, Json(body))
}

pub fn query_400(err: QueryRejection) -> ErrorReply {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(format!("Invalid query: {}", err)).with_code("INVALID_QUERY")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ipfs::IpfsError;
    use crate::transport::http::types::PaginationError;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(status_for(&ServiceError::InvalidRequest("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&ServiceError::Pagination(PaginationError::ZeroLimit)), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&ServiceError::Storage(IpfsError::new(IpfsErrorCode::NotInitialized, "x"))),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn not_found_carries_details() {
        let (status, Json(body)) = service_error(ServiceError::NotFound {
            entity: "bottle",
            id: "9".to_string(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code.as_deref(), Some("NOT_FOUND"));
        assert_eq!(body.details.unwrap()["id"], serde_json::json!("9"));
    }
}
