
pub mod ingredients;
pub mod system_configs;
pub mod users;
