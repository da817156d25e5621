//! Routers per area: /api records, listing pages, health and version.

pub mod api;
pub mod common;
pub mod pages;

pub use api::api_routes;
pub use common::{common_routes, common_routes_with_ready};
pub use pages::page_routes;
