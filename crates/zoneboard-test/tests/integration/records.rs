//! Integration tests for the record API, covering the behavioral contract
//! of the store through the HTTP surface.

use chrono_tz::Tz;
use salvo::http::StatusCode;
use salvo::test::{ResponseExt, TestClient};

use zoneboard_test::component::clock::format_local_time;
use zoneboard_test::component::types::TimeFormat;

use super::helpers::{
    BASE_URL, LOCAL_LABEL, add_record, create_test_service, fixed_instant, list_rows, row_count,
};

#[test_log::test(tokio::test)]
async fn healthcheck_responds_ok() {
    let service = create_test_service(TimeFormat::TwelveHour);

    let mut content = TestClient::get(format!("{BASE_URL}/api/healthcheck"))
        .send(&service)
        .await;

    assert_eq!(content.status_code, Some(StatusCode::OK));
    assert_eq!(content.take_string().await.expect("body"), "OK");
}

#[test_log::test(tokio::test)]
async fn local_record_is_created_automatically() {
    let service = create_test_service(TimeFormat::TwelveHour);

    let rows = list_rows(&service, false).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["label"], LOCAL_LABEL);
    assert_eq!(rows[0]["timezone_id"], "America/Vancouver");
    assert_eq!(rows[0]["is_local"], true);
}

#[test_log::test(tokio::test)]
async fn added_record_shows_the_computed_time() {
    let service = create_test_service(TimeFormat::TwelveHour);

    add_record(&service, "Europe HQ", "Eastern Standard Time").await;

    let rows = list_rows(&service, false).await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["label"], "Europe HQ");
    assert_eq!(rows[1]["timezone_id"], "America/New_York");
    assert_eq!(
        rows[1]["current_time"],
        format_local_time(Tz::America__New_York, fixed_instant(), TimeFormat::TwelveHour)
    );
}

#[test_log::test(tokio::test)]
async fn every_offered_timezone_can_be_added() {
    let service = create_test_service(TimeFormat::TwelveHour);

    let mut content = TestClient::get(format!("{BASE_URL}/api/timezones"))
        .send(&service)
        .await;
    assert_eq!(content.status_code, Some(StatusCode::OK));
    let offered = content
        .take_json::<Vec<String>>()
        .await
        .expect("offered identifiers");
    assert_eq!(offered.len(), 6);

    for timezone in &offered {
        add_record(&service, &format!("Test-{timezone}"), timezone).await;
    }

    assert_eq!(row_count(&service).await, 1 + offered.len());
}

#[test_log::test(tokio::test)]
async fn duplicate_label_keeps_a_single_instance() {
    let service = create_test_service(TimeFormat::TwelveHour);

    add_record(&service, "Duplicate Label", "Eastern Standard Time").await;

    let content = TestClient::post(format!("{BASE_URL}/api/records"))
        .json(&serde_json::json!({
            "label": "Duplicate Label",
            "timezone": "Eastern Standard Time",
        }))
        .send(&service)
        .await;
    assert_eq!(content.status_code, Some(StatusCode::CONFLICT));

    let rows = list_rows(&service, false).await;
    let matching = rows
        .iter()
        .filter(|r| r["label"] == "Duplicate Label")
        .count();
    assert_eq!(matching, 1);
}

#[test_log::test(tokio::test)]
async fn invalid_submissions_do_not_change_the_row_count() {
    let service = create_test_service(TimeFormat::TwelveHour);
    add_record(&service, "Existing", "Pacific Standard Time").await;
    let initial = row_count(&service).await;

    let invalid = [
        ("", "Eastern Standard Time"),
        ("No Timezone", ""),
        ("Invalid Zone", "Invalid/Timezone"),
    ];

    for (label, timezone) in invalid {
        let content = TestClient::post(format!("{BASE_URL}/api/records"))
            .json(&serde_json::json!({ "label": label, "timezone": timezone }))
            .send(&service)
            .await;
        assert_eq!(
            content.status_code,
            Some(StatusCode::UNPROCESSABLE_ENTITY),
            "submission ({label}, {timezone}) should be rejected"
        );
        assert_eq!(row_count(&service).await, initial);
    }
}

#[test_log::test(tokio::test)]
async fn any_record_except_the_local_one_can_be_deleted() {
    let service = create_test_service(TimeFormat::TwelveHour);

    add_record(&service, "Test Zone", "Eastern Standard Time").await;

    let deleted = TestClient::delete(format!("{BASE_URL}/api/records/Test%20Zone"))
        .send(&service)
        .await;
    assert_eq!(deleted.status_code, Some(StatusCode::NO_CONTENT));

    let rows = list_rows(&service, false).await;
    assert!(rows.iter().all(|r| r["label"] != "Test Zone"));

    // The local record stays protected.
    let protected = TestClient::delete(format!("{BASE_URL}/api/records/Local%20(You)"))
        .send(&service)
        .await;
    assert_eq!(protected.status_code, Some(StatusCode::FORBIDDEN));
    assert_eq!(row_count(&service).await, 1);
}

#[test_log::test(tokio::test)]
async fn listing_is_stable_across_reloads() {
    let service = create_test_service(TimeFormat::TwelveHour);

    add_record(&service, "Reload Test", "Central Standard Time").await;

    // The clock is fixed, so two reads must render identical rows.
    let before = list_rows(&service, false).await;
    let after = list_rows(&service, false).await;
    assert_eq!(before, after);
}

#[test_log::test(tokio::test)]
async fn time_sorted_listing_wraps_across_midnight() {
    let service = create_test_service(TimeFormat::TwentyFourHour);

    // At the fixed instant: NY 01:30, London 05:30, Tokyo 14:30, the local
    // Vancouver record 22:30 of the previous day.
    add_record(&service, "Tokyo", "Asia/Tokyo").await;
    add_record(&service, "NY", "America/New_York").await;
    add_record(&service, "London", "Europe/London").await;

    let labels: Vec<String> = list_rows(&service, true)
        .await
        .into_iter()
        .map(|r| r["label"].as_str().unwrap_or_default().to_string())
        .collect();

    assert_eq!(labels, ["NY", "London", "Tokyo", LOCAL_LABEL]);
}
