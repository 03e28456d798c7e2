//! Submission request DTOs

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::constants::PHONE_PATTERN;

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid phone pattern"));

/// Team submission request
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    #[validate(length(min = 1, message = "team_id must not be empty"))]
    pub team_id: String,

    #[validate(length(min = 1, message = "team_name must not be empty"))]
    pub team_name: String,

    #[validate(length(min = 1, message = "leader_name must not be empty"))]
    pub leader_name: String,

    #[validate(length(min = 1, message = "leader_id must not be empty"))]
    pub leader_id: String,

    #[validate(regex(path = *PHONE_REGEX, message = "phone must be exactly 10 digits"))]
    pub phone: String,

    /// Problem code such as "SIH25010"; the numeric id is derived server-side
    #[validate(length(min = 1, message = "problem_code must not be empty"))]
    pub problem_code: String,

    #[validate(url(message = "slides_link must be a valid URL"))]
    pub slides_link: String,
}

/// List submissions query parameters
#[derive(Debug, Deserialize)]
pub struct ListSubmissionsQuery {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SubmitRequest {
        SubmitRequest {
            team_id: "T042".to_string(),
            team_name: "Null Pointers".to_string(),
            leader_name: "Asha Verma".to_string(),
            leader_id: "21CS104".to_string(),
            phone: "9876543210".to_string(),
            problem_code: "SIH25010".to_string(),
            slides_link: "https://example.com/decks/t042.pdf".to_string(),
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_phone_must_be_ten_digits() {
        for phone in ["12345", "12345678901", "12345abcde", ""] {
            let mut request = valid_request();
            request.phone = phone.to_string();
            assert!(request.validate().is_err(), "accepted phone {phone:?}");
        }
    }

    #[test]
    fn test_empty_fields_rejected() {
        let mut request = valid_request();
        request.team_id = String::new();
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.leader_name = String::new();
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.problem_code = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_slides_link_must_be_absolute_url() {
        let mut request = valid_request();
        request.slides_link = "not a url".to_string();
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.slides_link = "/relative/path.pdf".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_error_names_field() {
        let mut request = valid_request();
        request.phone = "12345".to_string();
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("phone"));
    }
}
