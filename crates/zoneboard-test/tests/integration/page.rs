//! Integration tests for the server-rendered page: table contents, form
//! behavior on rejection, and the protected local row's delete control.

use salvo::http::StatusCode;
use salvo::test::ResponseExt;

use zoneboard_test::component::types::TimeFormat;

use super::helpers::{
    LOCAL_LABEL, add_record, create_test_service, fetch_page, post_form, row_count,
};

#[test_log::test(tokio::test)]
async fn page_renders_the_local_row_with_a_disabled_delete_control() {
    let service = create_test_service(TimeFormat::TwelveHour);

    let html = fetch_page(&service, false).await;

    assert!(html.contains("<td>Local (You)</td>"));
    assert!(html.contains("<td>America/Vancouver</td>"));
    assert!(html.contains("disabled>Delete</button>"));
}

#[test_log::test(tokio::test)]
async fn add_form_offers_the_configured_timezones() {
    let service = create_test_service(TimeFormat::TwelveHour);

    let html = fetch_page(&service, false).await;

    for name in [
        "Eastern Standard Time",
        "Central Standard Time",
        "Mountain Standard Time",
        "Pacific Standard Time",
        "Alaska Standard Time",
        "Hawaii-Aleutian Standard Time",
    ] {
        assert!(
            html.contains(&format!("<option value=\"{name}\">{name}</option>")),
            "dropdown should offer {name}"
        );
    }
}

#[test_log::test(tokio::test)]
async fn form_submission_adds_a_row_and_redirects() {
    let service = create_test_service(TimeFormat::TwelveHour);

    let content = post_form(
        &service,
        "/records",
        "label=Europe+HQ&timezone=Eastern+Standard+Time",
    )
    .await;
    assert_eq!(content.status_code, Some(StatusCode::SEE_OTHER));

    let html = fetch_page(&service, false).await;
    assert!(html.contains("<td>Europe HQ</td>"));
    assert!(html.contains("<td>America/New_York</td>"));
}

#[test_log::test(tokio::test)]
async fn rejected_submission_keeps_the_form_open_with_values_retained() {
    let service = create_test_service(TimeFormat::TwelveHour);
    add_record(&service, "Europe HQ", "Eastern Standard Time").await;

    let mut content = post_form(
        &service,
        "/records",
        "label=Europe+HQ&timezone=Central+Standard+Time",
    )
    .await;
    assert_eq!(content.status_code, Some(StatusCode::CONFLICT));

    let html = content.take_string().await.expect("html body");
    // The validation message is shown, the submitted values are retained,
    // and no row was added.
    assert!(html.contains("already exists"));
    assert!(html.contains("value=\"Europe HQ\""));
    assert!(html.contains("<option value=\"Central Standard Time\" selected>"));
    assert!(html.contains("<form method=\"post\" action=\"/records\">"));
    assert_eq!(row_count(&service).await, 2);
}

#[test_log::test(tokio::test)]
async fn empty_label_submission_is_rejected_with_the_form_still_visible() {
    let service = create_test_service(TimeFormat::TwelveHour);

    let mut content = post_form(
        &service,
        "/records",
        "label=&timezone=Eastern+Standard+Time",
    )
    .await;
    assert_eq!(content.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

    let html = content.take_string().await.expect("html body");
    assert!(html.contains("Label must not be empty"));
    assert!(html.contains("<button type=\"submit\">Save</button>"));
    assert_eq!(row_count(&service).await, 1);
}

#[test_log::test(tokio::test)]
async fn delete_form_removes_the_row() {
    let service = create_test_service(TimeFormat::TwelveHour);
    add_record(&service, "Test Zone", "Eastern Standard Time").await;

    let content = post_form(&service, "/records/delete", "label=Test+Zone").await;
    assert_eq!(content.status_code, Some(StatusCode::SEE_OTHER));

    let html = fetch_page(&service, false).await;
    assert!(!html.contains("Test Zone"));
    assert_eq!(row_count(&service).await, 1);
}

#[test_log::test(tokio::test)]
async fn delete_form_cannot_remove_the_local_row() {
    let service = create_test_service(TimeFormat::TwelveHour);

    let mut content = post_form(&service, "/records/delete", "label=Local+(You)").await;
    assert_eq!(content.status_code, Some(StatusCode::FORBIDDEN));

    let html = content.take_string().await.expect("html body");
    assert!(html.contains("cannot be deleted"));
    assert!(html.contains("<td>Local (You)</td>"));
    assert_eq!(row_count(&service).await, 1);
}

#[test_log::test(tokio::test)]
async fn sorted_page_orders_rows_by_local_time() {
    let service = create_test_service(TimeFormat::TwentyFourHour);
    add_record(&service, "Tokyo", "Asia/Tokyo").await;
    add_record(&service, "NY", "America/New_York").await;

    let html = fetch_page(&service, true).await;

    let ny = html.find("<td>NY</td>").expect("NY row");
    let tokyo = html.find("<td>Tokyo</td>").expect("Tokyo row");
    let local = html.find(&format!("<td>{LOCAL_LABEL}</td>")).expect("local row");

    // At the fixed instant: NY 01:30 < Tokyo 14:30 < local 22:30.
    assert!(ny < tokyo);
    assert!(tokyo < local);
}
