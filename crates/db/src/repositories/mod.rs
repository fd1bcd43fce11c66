//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod drawer_card_repo;
pub mod status_check_repo;

pub use drawer_card_repo::DrawerCardRepo;
pub use status_check_repo::StatusCheckRepo;
