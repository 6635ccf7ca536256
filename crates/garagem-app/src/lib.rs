//! Application service layer - config, garage use cases, page controller

pub mod config;
pub mod garage;
pub mod page;
pub mod repository;
