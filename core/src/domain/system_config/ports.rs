use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, system_config::entities::SystemConfig,
};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait SystemConfigRepository: Send + Sync {
    fn get_by_key(
        &self,
        key: String,
    ) -> impl Future<Output = Result<Option<SystemConfig>, CoreError>> + Send;

    fn upsert(
        &self,
        config: SystemConfig,
    ) -> impl Future<Output = Result<SystemConfig, CoreError>> + Send;
}
