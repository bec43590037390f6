use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        entities::app_errors::CoreError,
        policies::{FoodtracePolicy, Policy},
    },
    ingredient::ports::IngredientPolicy,
    user::ports::UserRepository,
};

impl<U> IngredientPolicy for FoodtracePolicy<U>
where
    U: UserRepository,
{
    async fn can_manage_ingredients(&self, identity: Identity) -> Result<bool, CoreError> {
        let user = self.get_user_from_identity(&identity).await?;

        Ok(user.is_admin())
    }
}
