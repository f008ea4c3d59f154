pub mod inventory;
pub mod service;
