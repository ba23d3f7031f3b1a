//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Gender, TherapyStatus};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Foods
// ============================================================================

/// Category values arrive as text and are parsed by the service so that an
/// unknown value is reported as a validation error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodRequest {
    #[validate(length(min = 1, max = 200))]
    pub food_name: String,
    pub type1: String,
    pub type2: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFoodRequest {
    #[validate(length(min = 1, max = 200))]
    pub food_name: Option<String>,
    pub type1: Option<String>,
    pub type2: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodsQuery {
    pub cook_id: Option<Uuid>,
}

/// Body of `POST /studentsfood`. Names are kept from the first assignment
/// when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignStudentFoodRequest {
    pub student_id: String,
    #[validate(length(min = 1, max = 200))]
    pub food: String,
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
}

// ============================================================================
// Orders
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub food_id: String,
}

/// Body of `PUT /order/{id}`; value is `Prihvacena` or `Neprihvacena`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

// ============================================================================
// Reviews
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRatingRequest {
    pub rating: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCommentRequest {
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentsQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummaryRequest {
    #[serde(default)]
    pub food_ids: Vec<String>,
}

// ============================================================================
// Therapies
// ============================================================================

/// Status change pushed from the food service to healthcare
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TherapyStatusUpdate {
    pub id: Uuid,
    pub status: TherapyStatus,
}

/// Body of `PUT /therapy/{id}` on the food service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetTherapyStatusRequest {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTherapyRequest {
    pub student_id: Uuid,
    #[validate(length(min = 1, max = 2000))]
    pub diagnosis: String,
    pub status: Option<TherapyStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTherapyRequest {
    #[validate(length(min = 1, max = 2000))]
    pub diagnosis: Option<String>,
    pub status: Option<TherapyStatus>,
}

// ============================================================================
// Students and health records
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    pub gender: Option<Gender>,
    #[validate(range(min = 1900, max = 2100))]
    pub date_of_birth: Option<i32>,
    pub residence: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    #[validate(range(min = 1900, max = 2100))]
    pub date_of_birth: Option<i32>,
    pub residence: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHealthRecordRequest {
    pub record_data: String,
}

// ============================================================================
// Appointments
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub doctor_id: Option<Uuid>,
    pub date: DateTime<Utc>,
    #[validate(range(min = 0))]
    pub door_number: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub systematic: bool,
    #[serde(default)]
    pub faculty_name: String,
    #[serde(default)]
    pub field_of_study: String,
}

/// Partial update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    pub doctor_id: Option<Uuid>,
    pub date: Option<DateTime<Utc>>,
    #[validate(range(min = 0))]
    pub door_number: Option<i32>,
    pub description: Option<String>,
    pub systematic: Option<bool>,
    pub faculty_name: Option<String>,
    pub field_of_study: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleAppointmentRequest {
    pub student_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_request_defaults_to_empty() {
        let req: BatchSummaryRequest = serde_json::from_str("{}").unwrap();
        assert!(req.food_ids.is_empty());

        let req: BatchSummaryRequest =
            serde_json::from_str(r#"{"foodIds":["a","b"]}"#).unwrap();
        assert_eq!(req.food_ids, vec!["a", "b"]);
    }

    #[test]
    fn test_student_food_request_names_are_optional() {
        let req: AssignStudentFoodRequest =
            serde_json::from_str(r#"{"studentId":"abc","food":"Pasta"}"#).unwrap();
        assert!(req.first_name.is_none());
        assert!(req.validate().is_ok());

        let req: AssignStudentFoodRequest =
            serde_json::from_str(r#"{"studentId":"abc","food":""}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_therapy_status_update_wire_format() {
        let id = Uuid::new_v4();
        let update = TherapyStatusUpdate {
            id,
            status: TherapyStatus::Done,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["status"], "done");
    }

    #[test]
    fn test_create_food_request_validation() {
        let ok = CreateFoodRequest {
            food_name: "Pizza".to_string(),
            type1: "PICA".to_string(),
            type2: "MRSNO".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty = CreateFoodRequest {
            food_name: String::new(),
            ..ok
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_appointment_request_defaults() {
        let req: CreateAppointmentRequest = serde_json::from_str(
            r#"{"date":"2026-03-01T10:00:00Z","doorNumber":12,"systematic":true}"#,
        )
        .unwrap();
        assert!(req.systematic);
        assert_eq!(req.door_number, 12);
        assert!(req.description.is_empty());
    }
}
