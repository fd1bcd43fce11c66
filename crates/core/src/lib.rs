//! Domain layer for the drawer card service.
//!
//! Holds the entity types, the [`store::DocumentStore`] persistence contract,
//! the services built on top of it, and the image intake rules. Nothing in
//! this crate knows about HTTP or SQL.

pub mod card_store;
pub mod drawer_card;
pub mod error;
pub mod image_intake;
pub mod memory_store;
pub mod status_check;
pub mod status_log;
pub mod store;
pub mod timestamp;
pub mod types;
