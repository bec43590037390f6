use chrono::{TimeZone, Utc};
use sea_orm::ActiveValue::Set;

use crate::domain::ingredient::entities::Ingredient;
use crate::entity::ingredients::{ActiveModel as IngredientActiveModel, Model as IngredientModel};

impl From<IngredientModel> for Ingredient {
    fn from(model: IngredientModel) -> Self {
        Ingredient {
            id: model.id,
            batch_number: model.batch_number,
            name: model.name,
            origin: model.origin,
            supplier: model.supplier,
            production_date: Utc.from_utc_datetime(&model.production_date),
            expiry_date: Utc.from_utc_datetime(&model.expiry_date),
            test_result: model.test_result,
            test_details: model.test_details,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

impl From<&IngredientModel> for Ingredient {
    fn from(model: &IngredientModel) -> Self {
        Ingredient::from(model.clone())
    }
}

impl From<Ingredient> for IngredientActiveModel {
    fn from(ingredient: Ingredient) -> Self {
        IngredientActiveModel {
            id: Set(ingredient.id),
            batch_number: Set(ingredient.batch_number),
            name: Set(ingredient.name),
            origin: Set(ingredient.origin),
            supplier: Set(ingredient.supplier),
            production_date: Set(ingredient.production_date.naive_utc()),
            expiry_date: Set(ingredient.expiry_date.naive_utc()),
            test_result: Set(ingredient.test_result),
            test_details: Set(ingredient.test_details),
            created_at: Set(ingredient.created_at.naive_utc()),
            updated_at: Set(ingredient.updated_at.naive_utc()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_model_maps_to_utc_entity() {
        let production = NaiveDate::from_ymd_opt(2024, 12, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let model = IngredientModel {
            id: Uuid::new_v4(),
            batch_number: "MG20241201-001".to_string(),
            name: "愛文芒果".to_string(),
            origin: "台南玉井".to_string(),
            supplier: "玉井果農合作社".to_string(),
            production_date: production,
            expiry_date: production,
            test_result: "合格".to_string(),
            test_details: Some(json!({ "bacteria": "陰性" })),
            created_at: production,
            updated_at: production,
        };

        let ingredient = Ingredient::from(&model);

        assert_eq!(ingredient.id, model.id);
        assert_eq!(ingredient.production_date.to_rfc3339(), "2024-12-01T00:00:00+00:00");
        assert_eq!(ingredient.test_details, Some(json!({ "bacteria": "陰性" })));
    }
}
