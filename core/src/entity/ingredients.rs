use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub batch_number: String,
    pub name: String,
    pub origin: String,
    pub supplier: String,
    pub production_date: DateTime,
    pub expiry_date: DateTime,
    pub test_result: String,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub test_details: Option<Json>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
