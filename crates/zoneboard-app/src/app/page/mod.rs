//! Server-rendered table page and its form endpoints.
//!
//! The page is the presentation layer of the record store: every operation
//! outcome is observable in the rendered table because each response renders
//! from a fresh store snapshot.

mod render;

use salvo::http::StatusCode;
use salvo::writing::{Redirect, Text};
use salvo::{Depot, Request, Response, Router, handler};
use serde::Deserialize;

use zoneboard_service::error::StoreError;

use crate::error::store_status;
use crate::store_handler::{SharedStore, get_store_from_depot};
use render::{FormState, render_page};

#[derive(Debug, Default, Deserialize)]
struct AddForm {
    #[serde(default)]
    label: String,
    #[serde(default)]
    timezone: String,
}

#[derive(Debug, Deserialize)]
struct DeleteForm {
    label: String,
}

/// Renders the page from a fresh snapshot.
async fn render_snapshot(
    store: &SharedStore,
    sort_by_time: bool,
    form: &FormState,
    error: Option<&StoreError>,
) -> String {
    let store = store.read().await;
    render_page(
        &store.list_records(sort_by_time),
        store.offered_timezones(),
        form,
        error,
    )
}

/// ## Summary
/// Renders the table page. `?sort=time` orders rows by local time.
#[handler]
#[tracing::instrument(skip_all, fields(method = "GET", path = %req.uri().path()))]
async fn index(req: &mut Request, res: &mut Response, depot: &Depot) {
    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get record store");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let sort_by_time = req.query::<String>("sort").is_some_and(|s| s == "time");

    let page = render_snapshot(&store, sort_by_time, &FormState::default(), None).await;
    res.render(Text::Html(page));
}

/// ## Summary
/// Handles the add form. Redirects to the page on success; on rejection,
/// re-renders with the validation message and the submitted values retained.
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

    let form = req.parse_form::<AddForm>().await.unwrap_or_default();

    let outcome = store
        .write()
        .await
        .add_record(&form.label, &form.timezone)
        .map(|_| ());

    match outcome {
        Ok(()) => res.render(Redirect::other("/")),
        Err(err) => {
            tracing::debug!(error = %err, "Add form rejected");
            res.status_code(store_status(&err));
            let state = FormState {
                label: form.label,
                timezone: form.timezone,
            };
            let page = render_snapshot(&store, false, &state, Some(&err)).await;
            res.render(Text::Html(page));
        }
    }
}

/// ## Summary
/// Handles the per-row delete form. Redirects to the page on success; a
/// rejection (unknown label, protected local record) re-renders with the
/// message.
#[handler]
#[tracing::instrument(skip_all, fields(method = "POST", path = %req.uri().path()))]
async fn delete(req: &mut Request, res: &mut Response, depot: &Depot) {
    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get record store");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let Ok(form) = req.parse_form::<DeleteForm>().await else {
        res.status_code(StatusCode::BAD_REQUEST);
        return;
    };

    let outcome = store.write().await.delete_record(&form.label);

    match outcome {
        Ok(()) => res.render(Redirect::other("/")),
        Err(err) => {
            tracing::debug!(error = %err, label = %form.label, "Delete form rejected");
            res.status_code(store_status(&err));
            let page = render_snapshot(&store, false, &FormState::default(), Some(&err)).await;
            res.render(Text::Html(page));
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::new().get(index).push(
        Router::with_path("records")
            .post(add)
            .push(Router::with_path("delete").post(delete)),
    )
}
