//! Evaluation request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_CRITERION_SCORE, MIN_CRITERION_SCORE};

/// Create evaluation request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEvaluationRequest {
    #[validate(length(min = 1, message = "team_id must not be empty"))]
    pub team_id: String,

    #[validate(length(min = 1, message = "jury_id must not be empty"))]
    pub jury_id: String,

    #[validate(range(min = MIN_CRITERION_SCORE, max = MAX_CRITERION_SCORE, message = "ppt_design must be between 0 and 10"))]
    pub ppt_design: i32,

    #[validate(range(min = MIN_CRITERION_SCORE, max = MAX_CRITERION_SCORE, message = "idea must be between 0 and 10"))]
    pub idea: i32,

    #[validate(range(min = MIN_CRITERION_SCORE, max = MAX_CRITERION_SCORE, message = "pitching must be between 0 and 10"))]
    pub pitching: i32,

    #[validate(range(min = MIN_CRITERION_SCORE, max = MAX_CRITERION_SCORE, message = "project_impact must be between 0 and 10"))]
    pub project_impact: i32,

    pub remarks: Option<String>,
}

/// List evaluations query parameters
#[derive(Debug, Deserialize)]
pub struct ListEvaluationsQuery {
    pub team_id: Option<String>,
    pub jury_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateEvaluationRequest {
        CreateEvaluationRequest {
            team_id: "T042".to_string(),
            jury_id: "J007".to_string(),
            ppt_design: 7,
            idea: 9,
            pitching: 6,
            project_impact: 8,
            remarks: Some("Strong prototype".to_string()),
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_score_bounds() {
        let mut request = valid_request();
        request.idea = 11;
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.pitching = -1;
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.ppt_design = 0;
        request.project_impact = 10;
        assert!(request.validate().is_ok());
    }
}
