mod healthcheck;
mod records;
mod timezones;


use salvo::Router;

// Re-export route constants from core
pub use zoneboard_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, RECORDS_ROUTE_COMPONENT, RECORDS_ROUTE_PREFIX,
    TIMEZONES_ROUTE_COMPONENT, TIMEZONES_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the JSON API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(healthcheck::routes())
        .push(records::routes())
        .push(timezones::routes())
}
