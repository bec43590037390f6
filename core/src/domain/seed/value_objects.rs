use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::value_objects::CreateIngredientInput,
};

/// Flag written once the default admin accounts exist.
pub const ADMIN_ACCOUNTS_SETUP_FLAG: &str = "admin_accounts_setup_completed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSeed {
    pub account: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub already_completed: bool,
    pub created: Vec<String>,
    pub skipped: Vec<String>,
}

fn utc_midnight(year: i32, month: u32, day: u32) -> Result<DateTime<Utc>, CoreError> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .ok_or(CoreError::InternalServerError)
}

pub fn sample_ingredients() -> Result<Vec<CreateIngredientInput>, CoreError> {
    Ok(vec![
        CreateIngredientInput {
            batch_number: "MG20241201-001".to_string(),
            name: "愛文芒果".to_string(),
            origin: "台南玉井".to_string(),
            supplier: "玉井果農合作社".to_string(),
            production_date: utc_midnight(2024, 12, 1)?,
            expiry_date: utc_midnight(2024, 12, 15)?,
            test_result: "合格".to_string(),
            test_details: Some(json!({
                "pesticide": "0.01ppm",
                "heavyMetal": "未檢出",
                "bacteria": "陰性",
            })),
        },
        CreateIngredientInput {
            batch_number: "BA20241202-002".to_string(),
            name: "香蕉".to_string(),
            origin: "高雄旗山".to_string(),
            supplier: "旗山農會".to_string(),
            production_date: utc_midnight(2024, 12, 2)?,
            expiry_date: utc_midnight(2024, 12, 10)?,
            test_result: "合格".to_string(),
            test_details: Some(json!({ "pesticide": "未檢出" })),
        },
    ])
}
