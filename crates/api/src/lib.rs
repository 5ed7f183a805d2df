//! Driv'n Cook franchise compliance API.

pub mod middleware;
pub mod routes;
pub mod state;
