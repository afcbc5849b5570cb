//! JSON API for timezone records.

use salvo::http::StatusCode;
use salvo::prelude::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde::Deserialize;
use serde_json::json;

use zoneboard_core::constants::RECORDS_ROUTE_COMPONENT;
use zoneboard_service::error::StoreError;

use crate::error::store_status;
use crate::store_handler::get_store_from_depot;

#[derive(Debug, Deserialize)]
struct AddRecordBody {
    label: String,
    timezone: String,
}

/// Writes a store rejection as a typed error payload.
fn render_store_error(res: &mut Response, err: &StoreError) {
    res.status_code(store_status(err));
    res.render(Json(json!({
        "kind": err.kind(),
        "error": err.to_string(),
    })));
}

/// ## Summary
/// Lists all records as a snapshot with freshly computed times.
///
/// `?sort=time` orders rows by ascending midnight-relative local time;
/// the default is insertion order.
#[handler]
#[tracing::instrument(skip_all, fields(method = "GET", path = %req.uri().path()))]
async fn list(req: &mut Request, res: &mut Response, depot: &Depot) {
    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get record store");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let sort_by_time = req.query::<String>("sort").is_some_and(|s| s == "time");

    let rows = store.read().await.list_records(sort_by_time);
    res.render(Json(rows));
}

/// ## Summary
/// Adds a record from a JSON body `{"label": ..., "timezone": ...}`.
///
/// Responds 201 with the created record, or a typed rejection payload with
/// 422 (empty/unknown field) or 409 (duplicate label). A rejected submission
/// adds no row.
#[handler]
#[tracing::instrument(skip_all, fields(method = "POST", path = %req.uri().path()))]
async fn add(req: &mut Request, res: &mut Response, depot: &Depot) {
    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get record store");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let body = match req.parse_json::<AddRecordBody>().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(error = %e, "Malformed add-record body");
            res.status_code(StatusCode::BAD_REQUEST);
            res.render(Json(json!({ "error": "Malformed request body" })));
            return;
        }
    };

    let mut store = store.write().await;
    match store.add_record(&body.label, &body.timezone) {
        Ok(record) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(json!({
                "label": record.label,
                "timezone_id": record.timezone_id,
                "is_local": record.is_local,
            })));
        }
        Err(err) => {
            tracing::debug!(error = %err, "Add record rejected");
            render_store_error(res, &err);
        }
    }
}

/// ## Summary
/// Deletes the record identified by the `label` path parameter.
///
/// Responds 204 on success, 404 for an unknown label, and 403 for the
/// protected local record.
#[handler]
#[tracing::instrument(skip_all, fields(method = "DELETE", path = %req.uri().path()))]
async fn delete(req: &mut Request, res: &mut Response, depot: &Depot) {
    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get record store");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let Some(label) = req.param::<String>("label") else {
        res.status_code(StatusCode::BAD_REQUEST);
        return;
    };

    match store.write().await.delete_record(&label) {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(err) => {
            tracing::debug!(error = %err, label = %label, "Delete record rejected");
            render_store_error(res, &err);
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(RECORDS_ROUTE_COMPONENT)
        .get(list)
        .post(add)
        .push(Router::with_path("{label}").delete(delete))
}
