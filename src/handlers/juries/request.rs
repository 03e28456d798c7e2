//! Jury request DTOs

use serde::Deserialize;

/// Jury login request
///
/// Fields default to empty rather than rejecting the request: a missing email
/// or password simply fails authentication, so the response is the same 401
/// whether the field was absent or wrong.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request: LoginRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.email, "");
        assert_eq!(request.password, "");
    }

    #[test]
    fn test_full_body() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"email":"a@b.example","password":"pw"}"#).unwrap();
        assert_eq!(request.email, "a@b.example");
        assert_eq!(request.password, "pw");
    }
}
