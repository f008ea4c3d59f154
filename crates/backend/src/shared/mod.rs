pub mod clock;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod random;
pub mod state;
pub mod uploads;
