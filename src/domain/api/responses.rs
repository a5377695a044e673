//! Response envelopes returned across the API boundary.

use super::requests::{Pagination, PaginationError, PaginationParams};
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};
use utoipa::ToSchema;

/// A `success` field fixed to one boolean value; decoding the other value fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuccessFlag<const V: bool>;

impl<const V: bool> Serialize for SuccessFlag<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(V)
    }
}

impl<'de, const V: bool> Deserialize<'de> for SuccessFlag<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let got = bool::deserialize(deserializer)?;
        if got != V {
            let expected = if V { "true" } else { "false" };
            return Err(D::Error::invalid_value(Unexpected::Bool(got), &expected));
        }
        Ok(SuccessFlag)
    }
}

/// General envelope: `data` is null on failure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            success: true,
            error: None,
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            data: None,
            success: false,
            error: Some(error.into()),
            message: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PaginatedResponse<T = JsonValue> {
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<T>,
    pub success: bool,
    pub pagination: Pagination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, pagination: Pagination) -> Self {
        Self {
            data,
            success: true,
            pagination,
            error: None,
        }
    }

    /// Cuts the requested page out of the full, already ordered result set.
    pub fn paginate(items: Vec<T>, params: PaginationParams) -> Result<Self, PaginationError> {
        let pagination = Pagination::new(params.page, params.limit, items.len() as u64)?;
        let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        let page = items
            .into_iter()
            .skip(offset)
            .take(params.limit as usize)
            .collect();
        Ok(Self::new(page, pagination))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorResponse {
    #[schema(value_type = bool)]
    pub success: SuccessFlag<false>,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Map<String, JsonValue>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: SuccessFlag,
            error: error.into(),
            code: None,
            details: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.details
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SuccessResponse<T = JsonValue> {
    #[schema(value_type = bool)]
    pub success: SuccessFlag<true>,
    #[schema(value_type = Object)]
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: SuccessFlag,
            data,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_response_success_is_always_false() {
        let resp = ErrorResponse::new("boom").with_code("NOT_FOUND").with_detail("id", 4);
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "success": false, "error": "boom", "code": "NOT_FOUND", "details": { "id": 4 } })
        );
        assert!(serde_json::from_value::<ErrorResponse>(json!({ "success": true, "error": "x" })).is_err());
    }

    #[test]
    fn success_response_success_is_always_true() {
        let resp = SuccessResponse::new(json!({ "id": 1 }));
        assert_eq!(serde_json::to_value(&resp).unwrap(), json!({ "success": true, "data": { "id": 1 } }));
        assert!(serde_json::from_value::<SuccessResponse>(json!({ "success": false, "data": 1 })).is_err());
    }

    #[test]
    fn api_response_failure_has_null_data() {
        let resp: ApiResponse<u32> = ApiResponse::failure("nope");
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "data": null, "success": false, "error": "nope" })
        );
        let ok = ApiResponse::ok_with_message(3u32, "done");
        assert_eq!(ok.data, Some(3));
        assert_eq!(ok.message.as_deref(), Some("done"));
    }

    #[test]
    fn paginate_slices_requested_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = PaginatedResponse::paginate(items.clone(), PaginationParams { page: 3, limit: 10 }).unwrap();
        assert_eq!(page.data, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.pagination.total, 25);
        assert_eq!(page.pagination.total_pages, 3);

        let beyond = PaginatedResponse::paginate(items, PaginationParams { page: 9, limit: 10 }).unwrap();
        assert!(beyond.data.is_empty());
        assert_eq!(beyond.pagination.total_pages, 3);
    }

    #[test]
    fn paginate_rejects_zero_limit() {
        let res = PaginatedResponse::paginate(vec![1, 2, 3], PaginationParams { page: 1, limit: 0 });
        assert_eq!(res.unwrap_err(), PaginationError::ZeroLimit);
    }
}
