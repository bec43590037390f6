use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_timestamp};

/// A single production lot of a food item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: Uuid,
    #[schema(example = "MG20241201-001")]
    pub batch_number: String,
    #[schema(example = "愛文芒果")]
    pub name: String,
    #[schema(example = "台南玉井")]
    pub origin: String,
    #[schema(example = "玉井果農合作社")]
    pub supplier: String,
    pub production_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    #[schema(example = "合格")]
    pub test_result: String,
    #[schema(value_type = Option<Object>)]
    pub test_details: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct IngredientConfig {
    pub batch_number: String,
    pub name: String,
    pub origin: String,
    pub supplier: String,
    pub production_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    pub test_result: String,
    pub test_details: Option<serde_json::Value>,
}

/// Field changes for a partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct IngredientChanges {
    pub batch_number: Option<String>,
    pub name: Option<String>,
    pub origin: Option<String>,
    pub supplier: Option<String>,
    pub production_date: Option<DateTime<Utc>>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub test_result: Option<String>,
    pub test_details: Option<serde_json::Value>,
}

impl Ingredient {
    pub fn new(config: IngredientConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            batch_number: config.batch_number,
            name: config.name,
            origin: config.origin,
            supplier: config.supplier,
            production_date: config.production_date,
            expiry_date: config.expiry_date,
            test_result: config.test_result,
            test_details: config.test_details,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, changes: IngredientChanges) {
        let (now, _) = generate_timestamp();

        if let Some(batch_number) = changes.batch_number {
            self.batch_number = batch_number;
        }
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(origin) = changes.origin {
            self.origin = origin;
        }
        if let Some(supplier) = changes.supplier {
            self.supplier = supplier;
        }
        if let Some(production_date) = changes.production_date {
            self.production_date = production_date;
        }
        if let Some(expiry_date) = changes.expiry_date {
            self.expiry_date = expiry_date;
        }
        if let Some(test_result) = changes.test_result {
            self.test_result = test_result;
        }
        if let Some(test_details) = changes.test_details {
            self.test_details = Some(test_details);
        }
        self.updated_at = now;
    }

    pub fn ensure_valid_shelf_life(&self) -> Result<(), CoreError> {
        if self.expiry_date < self.production_date {
            return Err(CoreError::Invalid(
                "expiryDate must not be earlier than productionDate".to_string(),
            ));
        }

        Ok(())
    }
}
