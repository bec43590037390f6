use chrono::{TimeZone, Utc};
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    system_config::{entities::SystemConfig, ports::SystemConfigRepository},
};
use crate::entity::system_configs::{
    ActiveModel as SystemConfigActiveModel, Column as SystemConfigColumn,
    Entity as SystemConfigEntity, Model as SystemConfigModel,
};

impl From<SystemConfigModel> for SystemConfig {
    fn from(model: SystemConfigModel) -> Self {
        SystemConfig {
            key: model.key,
            value: model.value,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostgresSystemConfigRepository {
    pub db: DatabaseConnection,
}

impl PostgresSystemConfigRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SystemConfigRepository for PostgresSystemConfigRepository {
    async fn get_by_key(&self, key: String) -> Result<Option<SystemConfig>, CoreError> {
        let config = SystemConfigEntity::find_by_id(key)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get system config: {}", e);
                CoreError::InternalServerError
            })?
            .map(SystemConfig::from);

        Ok(config)
    }

    async fn upsert(&self, config: SystemConfig) -> Result<SystemConfig, CoreError> {
        SystemConfigEntity::insert(SystemConfigActiveModel {
            key: Set(config.key),
            value: Set(config.value),
            created_at: Set(config.created_at.naive_utc()),
            updated_at: Set(config.updated_at.naive_utc()),
        })
        .on_conflict(
            OnConflict::column(SystemConfigColumn::Key)
                .update_columns([SystemConfigColumn::Value, SystemConfigColumn::UpdatedAt])
                .to_owned(),
        )
        .exec_with_returning(&self.db)
        .await
        .map(SystemConfig::from)
        .map_err(|e| {
            error!("Failed to upsert system config: {}", e);
            CoreError::InternalServerError
        })
    }
}
