//! Database entities
//!
//! SeaORM entity definitions for the order row store.

pub mod order;
pub mod order_meta;

pub use order::Entity as Order;
pub use order_meta::Entity as OrderMeta;
