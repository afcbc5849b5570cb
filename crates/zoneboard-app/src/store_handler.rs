use salvo::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::AppResult;
use zoneboard_core::error::CoreError;
use zoneboard_service::store::TimezoneStore;

/// Shared handle to the session's record store.
///
/// Mutations go through the write lock, so label uniqueness and the
/// single-local-record invariant cannot race under concurrent requests.
pub type SharedStore = Arc<RwLock<TimezoneStore>>;

pub struct StoreHandler {
    pub store: SharedStore,
}

#[async_trait]
impl salvo::Handler for StoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        // Insert a handle to the store into the depot
        depot.inject(self.store.clone());
    }
}

/// ## Summary
/// Retrieves the record store from the depot.
///
/// ## Errors
/// Returns an error if the record store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<SharedStore> {
    depot
        .obtain::<SharedStore>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Record store not found in depot").into())
}
