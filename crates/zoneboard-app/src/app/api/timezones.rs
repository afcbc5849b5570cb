//! Offered timezone identifiers, for populating the selection control.

use salvo::http::StatusCode;
use salvo::prelude::Json;
use salvo::{Depot, Response, Router, handler};

use zoneboard_core::constants::TIMEZONES_ROUTE_COMPONENT;

use crate::store_handler::get_store_from_depot;

/// ## Summary
/// Lists the timezone identifiers the add form offers.
///
/// The same set backs the dropdown and `add_record` alias resolution, so
/// everything selectable is guaranteed to validate.
#[handler]
async fn list(res: &mut Response, depot: &Depot) {
    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get record store");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let offered = store.read().await.offered_timezones().to_vec();
    res.render(Json(offered));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(TIMEZONES_ROUTE_COMPONENT).get(list)
}
