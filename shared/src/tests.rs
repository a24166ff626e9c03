#[cfg(test)]
mod tests {
    use crate::models::{CountResponse, CreatePoolRequest, CreatePoolResponse, displayed_count};
    use crate::validation::{validate_pool_request, ValidationError, MAX_TITLE_LENGTH};
    use crate::error::ErrorResponse;

    fn request(title: &str) -> CreatePoolRequest {
        CreatePoolRequest { title: title.to_string() }
    }

    #[test]
    fn test_displayed_count() {
        assert_eq!(displayed_count(5), 4);
        assert_eq!(displayed_count(10), 9);
        assert_eq!(displayed_count(1), 0);
        // applied unconditionally, even when the seed row is missing
        assert_eq!(displayed_count(0), -1);
    }

    #[test]
    fn test_title_validation() {
        assert!(validate_pool_request(&request("Copa 2022")).is_ok());
        assert_eq!(validate_pool_request(&request("")), Err(ValidationError::EmptyTitle));
        assert_eq!(validate_pool_request(&request("   ")), Err(ValidationError::EmptyTitle));

        let long = "a".repeat(MAX_TITLE_LENGTH + 1);
        assert_eq!(validate_pool_request(&request(&long)), Err(ValidationError::TitleTooLong));

        let max = "a".repeat(MAX_TITLE_LENGTH);
        assert!(validate_pool_request(&request(&max)).is_ok());
    }

    #[test]
    fn test_count_wire_format() {
        let parsed: CountResponse = serde_json::from_str(r#"{"count":100}"#).unwrap();
        assert_eq!(parsed, CountResponse { count: 100 });
    }

    #[test]
    fn test_create_pool_wire_format() {
        let body = serde_json::to_value(request("Copa 2022")).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "Copa 2022" }));

        let parsed: CreatePoolResponse = serde_json::from_str(r#"{"code":"XYZ9"}"#).unwrap();
        assert_eq!(parsed.code, "XYZ9");
    }

    #[test]
    fn test_error_response_wire_format() {
        let parsed: ErrorResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(parsed.error, "boom");
    }
}
