use serde_json::Value;

use crate::services::review_api::types::ApiError;

/// Validate the shape of a decoded API response and hand back the submissions.
///
/// Checks run in a fixed order so the first diagnostic is deterministic:
/// mapping type, `homeworks` key, `current_date` key, `homeworks` is an array.
/// The array is returned unchanged, most-recent-first as the server sends it.
/// `current_date` is required to be present but its value is not consumed.
pub fn check_response(response: &Value) -> Result<&Vec<Value>, ApiError> {
    let object = response.as_object().ok_or_else(|| {
        ApiError::TypeMismatch(format!("response is not an object: {}", response))
    })?;

    if !object.contains_key("homeworks") {
        return Err(ApiError::MissingKey("homeworks"));
    }
    if !object.contains_key("current_date") {
        return Err(ApiError::MissingKey("current_date"));
    }

    object["homeworks"]
        .as_array()
        .ok_or_else(|| ApiError::TypeMismatch("'homeworks' is not an array".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_object_response() {
        let err = check_response(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ApiError::TypeMismatch(_)));
    }

    #[test]
    fn rejects_missing_homeworks_key() {
        let err = check_response(&json!({"current_date": 1000})).unwrap_err();
        assert!(matches!(err, ApiError::MissingKey("homeworks")));
    }

    #[test]
    fn rejects_missing_current_date_key() {
        let err = check_response(&json!({"homeworks": []})).unwrap_err();
        assert!(matches!(err, ApiError::MissingKey("current_date")));
    }

    #[test]
    fn rejects_non_array_homeworks() {
        let err =
            check_response(&json!({"homeworks": "nope", "current_date": 1000})).unwrap_err();
        assert!(matches!(err, ApiError::TypeMismatch(_)));
    }

    #[test]
    fn returns_homeworks_unchanged() {
        let body = json!({
            "homeworks": [{"homework_name": "hw2"}, {"homework_name": "hw1"}],
            "current_date": 1000
        });
        let homeworks = check_response(&body).unwrap();
        assert_eq!(homeworks.len(), 2);
        assert_eq!(homeworks[0]["homework_name"], "hw2");
    }

    #[test]
    fn accepts_empty_homeworks_list() {
        let body = json!({"homeworks": [], "current_date": 1000});
        assert!(check_response(&body).unwrap().is_empty());
    }
}
