use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::application::http::server::api_entities::api_error::ApiError;

/// Accepts RFC 3339 timestamps as well as plain `YYYY-MM-DD` dates (read as UTC midnight).
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Ids that are not UUIDs cannot name a stored ingredient, so they answer 404.
pub fn parse_ingredient_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw)
        .map_err(|_| ApiError::NotFound(format!("Ingredient with ID {raw} not found")))
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
        })
        .transpose()
}

fn validate_test_details(details: &serde_json::Value) -> Result<(), ValidationError> {
    if details.is_object() {
        return Ok(());
    }

    Err(ValidationError::new("test_details_object")
        .with_message("testDetails must be a JSON object".into()))
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIngredientValidator {
    #[validate(length(min = 1, message = "batchNumber is required"))]
    #[schema(example = "MG20241201-001")]
    pub batch_number: String,

    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "愛文芒果")]
    pub name: String,

    #[validate(length(min = 1, message = "origin is required"))]
    #[schema(example = "台南玉井")]
    pub origin: String,

    #[validate(length(min = 1, message = "supplier is required"))]
    #[schema(example = "玉井果農合作社")]
    pub supplier: String,

    #[serde(deserialize_with = "deserialize_date")]
    #[schema(value_type = String, example = "2024-12-01")]
    pub production_date: DateTime<Utc>,

    #[serde(deserialize_with = "deserialize_date")]
    #[schema(value_type = String, example = "2024-12-15")]
    pub expiry_date: DateTime<Utc>,

    #[validate(length(min = 1, message = "testResult is required"))]
    #[schema(example = "合格")]
    pub test_result: String,

    #[serde(default)]
    #[validate(custom(function = "validate_test_details"))]
    #[schema(value_type = Option<Object>)]
    pub test_details: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIngredientValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "batchNumber must not be empty"))]
    pub batch_number: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "origin must not be empty"))]
    pub origin: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "supplier must not be empty"))]
    pub supplier: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_date")]
    #[schema(value_type = Option<String>, example = "2024-12-01")]
    pub production_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "deserialize_optional_date")]
    #[schema(value_type = Option<String>, example = "2024-12-15")]
    pub expiry_date: Option<DateTime<Utc>>,

    #[serde(default)]
    #[validate(length(min = 1, message = "testResult must not be empty"))]
    pub test_result: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_test_details"))]
    #[schema(value_type = Option<Object>)]
    pub test_details: Option<serde_json::Value>,
}
