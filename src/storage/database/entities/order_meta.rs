use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order metadata database model
///
/// Key/value rows owned 1:N by an order. There is no database-level
/// cascade; teardown is the deletion strategy's responsibility.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "order_meta")]
pub struct Model {
    /// Metadata row ID
    #[sea_orm(primary_key)]
    pub meta_id: i64,

    /// Owning order ID
    pub order_id: i64,

    /// Metadata key
    pub meta_key: String,

    /// Metadata value
    pub meta_value: Option<String>,
}

/// Order metadata entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning order relation
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
