pub mod config;
pub mod datetime;
pub mod error;
pub mod state;
pub mod view;
