//! Domain models for the campus food and healthcare services

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::ValidationError;

/// Account kind carried in the access token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Cook,
    Doctor,
    Admin,
    #[serde(other)]
    Other,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Cook => "cook",
            UserType::Doctor => "doctor",
            UserType::Admin => "admin",
            UserType::Other => "other",
        }
    }
}

impl FromStr for UserType {
    type Err = std::convert::Infallible;

    /// Unknown account kinds map to `Other` rather than failing
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "student" => UserType::Student,
            "cook" => UserType::Cook,
            "doctor" => UserType::Doctor,
            "admin" => UserType::Admin,
            _ => UserType::Other,
        })
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First half of a food's category pair (what kind of dish)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MealType {
    Pasta,
    Pica,
    Salata,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Pasta => "PASTA",
            MealType::Pica => "PICA",
            MealType::Salata => "SALATA",
        }
    }
}

impl FromStr for MealType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PASTA" => Ok(MealType::Pasta),
            "PICA" => Ok(MealType::Pica),
            "SALATA" => Ok(MealType::Salata),
            _ => Err(ValidationError::InvalidValue {
                field: "type1",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Second half of a food's category pair (fasting or not)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DietType {
    Posno,
    Mrsno,
}

impl DietType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Posno => "POSNO",
            DietType::Mrsno => "MRSNO",
        }
    }
}

impl FromStr for DietType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "POSNO" => Ok(DietType::Posno),
            "MRSNO" => Ok(DietType::Mrsno),
            _ => Err(ValidationError::InvalidValue {
                field: "type2",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The (type1, type2) pair recommendations are matched on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryPair {
    pub type1: MealType,
    pub type2: DietType,
}

impl CategoryPair {
    pub fn new(type1: MealType, type2: DietType) -> Self {
        Self { type1, type2 }
    }
}

/// A student and the meal the kitchen has assigned to them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentFood {
    pub student_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food: Option<String>,
}

/// A dish offered by a cook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_name: String,
    pub type1: MealType,
    pub type2: DietType,
}

impl Food {
    pub fn category(&self) -> CategoryPair {
        CategoryPair::new(self.type1, self.type2)
    }
}

/// Whether the kitchen accepted an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcceptanceStatus {
    #[serde(rename = "Prihvacena")]
    Accepted,
    #[serde(rename = "Neprihvacena")]
    Pending,
}

impl AcceptanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcceptanceStatus::Accepted => "Prihvacena",
            AcceptanceStatus::Pending => "Neprihvacena",
        }
    }
}

impl FromStr for AcceptanceStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Prihvacena" => Ok(AcceptanceStatus::Accepted),
            "Neprihvacena" => Ok(AcceptanceStatus::Pending),
            _ => Err(ValidationError::InvalidValue {
                field: "statusO",
                value: s.to_string(),
            }),
        }
    }
}

/// Whether the customer cancelled an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CancellationStatus {
    #[serde(rename = "Otkazana")]
    Cancelled,
    #[serde(rename = "Neotkazana")]
    Active,
}

impl CancellationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CancellationStatus::Cancelled => "Otkazana",
            CancellationStatus::Active => "Neotkazana",
        }
    }
}

impl FromStr for CancellationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Otkazana" => Ok(CancellationStatus::Cancelled),
            "Neotkazana" => Ok(CancellationStatus::Active),
            _ => Err(ValidationError::InvalidValue {
                field: "statusO2",
                value: s.to_string(),
            }),
        }
    }
}

/// An order with the food snapshot taken when it was placed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub food: Food,
    pub user_id: Uuid,
    #[serde(rename = "statusO")]
    pub acceptance: AcceptanceStatus,
    #[serde(rename = "statusO2")]
    pub cancellation: CancellationStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn is_cancelled(&self) -> bool {
        self.cancellation == CancellationStatus::Cancelled
    }
}

/// Free-text comment on a food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub food_id: Uuid,
    pub user_id: Uuid,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregated review state of a food, computed on read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub food_id: Uuid,
    pub avg_rating: f64,
    pub rating_count: i64,
    pub comment_count: i64,
    pub can_review: bool,
    pub my_rating: i32,
}

impl ReviewSummary {
    /// Summary of a food nobody has rated or commented on
    pub fn empty(food_id: Uuid) -> Self {
        Self {
            food_id,
            avg_rating: 0.0,
            rating_count: 0,
            comment_count: 0,
            can_review: false,
            my_rating: 0,
        }
    }
}

/// Progress of a therapy shared between healthcare and the kitchen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TherapyStatus {
    #[serde(rename = "sent to food service")]
    SentToFoodService,
    #[serde(rename = "done")]
    Done,
    #[serde(rename = "undone")]
    Undone,
}

impl TherapyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TherapyStatus::SentToFoodService => "sent to food service",
            TherapyStatus::Done => "done",
            TherapyStatus::Undone => "undone",
        }
    }
}

impl Default for TherapyStatus {
    fn default() -> Self {
        TherapyStatus::SentToFoodService
    }
}

impl FromStr for TherapyStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sent to food service" => Ok(TherapyStatus::SentToFoodService),
            "done" => Ok(TherapyStatus::Done),
            "undone" => Ok(TherapyStatus::Undone),
            _ => Err(ValidationError::InvalidValue {
                field: "status",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TherapyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dietary directive prescribed for a student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapyData {
    #[serde(alias = "id")]
    pub therapy_id: Uuid,
    pub student_id: Uuid,
    pub diagnosis: String,
    #[serde(default)]
    pub status: TherapyStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Student as registered with the healthcare service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_record_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub record_data: String,
}

/// Examination slot; `systematic` slots are reported to the university
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<Uuid>,
    pub date: DateTime<Utc>,
    pub door_number: i32,
    pub description: String,
    pub systematic: bool,
    pub faculty_name: String,
    pub field_of_study: String,
    pub reserved: bool,
}
