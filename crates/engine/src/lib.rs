pub mod compliance;
pub mod period;
pub mod service;
