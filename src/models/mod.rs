pub mod activity;
pub mod wellness;
