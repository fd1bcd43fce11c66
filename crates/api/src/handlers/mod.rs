pub mod drawer_cards;
pub mod root;
pub mod status;
pub mod uploads;
