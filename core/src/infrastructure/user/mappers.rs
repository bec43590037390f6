use chrono::{TimeZone, Utc};

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::entities::{User, UserRole},
};
use crate::entity::users::Model as UserModel;

impl TryFrom<UserModel> for User {
    type Error = CoreError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = model.role.parse::<UserRole>()?;

        Ok(User {
            id: model.id,
            account: model.account,
            password_hash: model.password_hash,
            role,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        })
    }
}
