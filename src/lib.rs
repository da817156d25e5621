//! Roster API: school record-keeping REST backend library.
//!
//! Four document collections (students, teachers, classes, schedules) over
//! SQLite, a reference resolver that turns foreign identifiers into display
//! names without ever faulting on a dangling link, and axum routers serving
//! both assembled listings and the raw record API.

pub mod error;
pub mod handlers;
pub mod ident;
pub mod model;
pub mod resolve;
pub mod routes;
pub mod state;
pub mod store;
pub mod views;

pub use error::AppError;
pub use ident::RecordId;
pub use model::{Class, Schedule, Student, Teacher};
pub use routes::{api_routes, common_routes, common_routes_with_ready, page_routes};
pub use state::AppState;
pub use store::{ensure_collections, open_pool, Collection, Collections, Stored};
