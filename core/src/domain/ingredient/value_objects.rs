use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct GetIngredientsFilter {
    pub name: Option<String>,
    pub supplier: Option<String>,
    pub test_result: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

pub struct GetIngredientInput {
    pub batch_number: String,
}

#[derive(Debug, Clone)]
pub struct CreateIngredientInput {
    pub batch_number: String,
    pub name: String,
    pub origin: String,
    pub supplier: String,
    pub production_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    pub test_result: String,
    pub test_details: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct UpdateIngredientInput {
    pub ingredient_id: Uuid,
    pub batch_number: Option<String>,
    pub name: Option<String>,
    pub origin: Option<String>,
    pub supplier: Option<String>,
    pub production_date: Option<DateTime<Utc>>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub test_result: Option<String>,
    pub test_details: Option<serde_json::Value>,
}

pub struct DeleteIngredientInput {
    pub ingredient_id: Uuid,
}
