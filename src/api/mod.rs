//! HTTP API server and route handlers

pub mod analytics;
pub mod auth;
pub mod blog;
pub mod careers;
pub mod catalog;
pub mod leads;
pub mod maintenance;
pub mod routes;
pub mod server;
pub mod users;

pub use routes::ApiResponse;
pub use server::{create_router, run_server, AppState, SharedState};
