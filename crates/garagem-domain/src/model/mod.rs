//! Domain model types

pub mod maintenance;
pub mod vehicle;

pub use maintenance::Maintenance;
pub use vehicle::Vehicle;
