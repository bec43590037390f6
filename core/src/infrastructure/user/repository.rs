use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    user::{entities::User, ports::UserRepository, value_objects::CreateUserRequest},
};
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        UserEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::try_from)
            .transpose()
    }

    async fn get_by_account(&self, account: String) -> Result<Option<User>, CoreError> {
        UserEntity::find()
            .filter(UserColumn::Account.eq(account))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by account: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::try_from)
            .transpose()
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<User, CoreError> {
        let (now, timestamp) = generate_timestamp();
        let account = request.account.clone();

        let model = UserEntity::insert(UserActiveModel {
            id: Set(Uuid::new_v7(timestamp)),
            account: Set(request.account),
            password_hash: Set(request.password_hash),
            role: Set(request.role.to_string()),
            created_at: Set(now.naive_utc()),
            updated_at: Set(now.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
                return CoreError::AlreadyExists(format!("Account {account} already exists"));
            }
            error!("Failed to create user: {}", e);
            CoreError::InternalServerError
        })?;

        User::try_from(model)
    }
}
