use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
///
/// One row per order in the shared records table. `record_type` is the
/// discriminator the purge driver filters on.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Order ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Record-type discriminator
    pub record_type: String,

    /// Order status
    pub status: String,

    /// Order total in minor currency units
    pub total_cents: i64,

    /// ISO currency code
    pub currency: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

/// Order entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Metadata rows relation
    #[sea_orm(has_many = "super::order_meta::Entity")]
    OrderMeta,
}

impl Related<super::order_meta::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderMeta.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
