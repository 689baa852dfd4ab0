#![cfg(target_arch = "wasm32")]

mod common;

use campusware::backend::{Backend, Method};
use campusware::components::recommendation_request_table::RecommendationRequestTable;
use campusware::fixtures::recommendation_request;
use campusware::models::current_user::Capability;
use common::*;
use leptos::*;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

struct TableHarness {
    routes: StubRoutes,
    requests: RequestLog,
    navigation_log: Rc<RefCell<Vec<String>>>,
    notifications: Rc<RefCell<Vec<String>>>,
}

fn mount_table(can_manage: bool) -> TableHarness {
    let root = test_root();
    let routes = StubRoutes::default();
    let requests = RequestLog::default();
    let backend = Backend::new(stub_client(routes.clone(), requests.clone()));
    let (navigator, navigation_log) = recording_navigator();
    let (notifier, notifications) = recording_notifier();
    let rows = recommendation_request::three_recommendation_requests();

    mount_to(root, move || {
        view! {
            <RecommendationRequestTable
                requests=rows
                capability=Capability { can_manage }
                backend=backend
                navigator=navigator
                notifier=notifier
            />
        }
        .into_view()
    });

    TableHarness {
        routes,
        requests,
        navigation_log,
        notifications,
    }
}

#[wasm_bindgen_test]
async fn renders_one_row_per_record_with_cell_test_ids() {
    mount_table(false);
    tick().await;

    assert_eq!(text_of("RecommendationRequestTable-cell-row-0-col-id"), "2");
    assert_eq!(
        text_of("RecommendationRequestTable-cell-row-0-col-requesterEmail"),
        "@student2"
    );
    assert_eq!(
        text_of("RecommendationRequestTable-cell-row-0-col-professorEmail"),
        "@professor2"
    );
    assert_eq!(
        text_of("RecommendationRequestTable-cell-row-0-col-explanation"),
        "explanation2"
    );
    assert_eq!(
        text_of("RecommendationRequestTable-cell-row-0-col-dateRequested"),
        "2022-03-11T00:00:00"
    );
    assert_eq!(
        text_of("RecommendationRequestTable-cell-row-0-col-dateNeeded"),
        "2022-03-18T00:00:00"
    );
    assert_eq!(
        text_of("RecommendationRequestTable-cell-row-0-col-done"),
        "true"
    );

    assert_eq!(text_of("RecommendationRequestTable-cell-row-1-col-id"), "3");
    assert_eq!(
        text_of("RecommendationRequestTable-cell-row-1-col-done"),
        "false"
    );
    assert_eq!(text_of("RecommendationRequestTable-cell-row-2-col-id"), "4");

    assert!(by_test_id("RecommendationRequestTable-cell-row-3-col-id").is_none());
}

#[wasm_bindgen_test]
async fn action_buttons_are_capability_gated() {
    mount_table(false);
    tick().await;
    assert!(by_test_id("RecommendationRequestTable-cell-row-0-col-Edit-button").is_none());
    assert!(by_test_id("RecommendationRequestTable-cell-row-0-col-Delete-button").is_none());

    mount_table(true);
    tick().await;
    let edit = by_test_id("RecommendationRequestTable-cell-row-0-col-Edit-button").unwrap();
    assert!(edit.get_attribute("class").unwrap().contains("btn-primary"));
    let delete = by_test_id("RecommendationRequestTable-cell-row-0-col-Delete-button").unwrap();
    assert!(delete.get_attribute("class").unwrap().contains("btn-danger"));
}

#[wasm_bindgen_test]
async fn edit_navigates_to_the_row_key() {
    let harness = mount_table(true);
    tick().await;

    click("RecommendationRequestTable-cell-row-1-col-Edit-button");
    tick().await;

    assert_eq!(
        harness.navigation_log.borrow().as_slice(),
        ["/recommendationrequest/edit/3"]
    );
}

#[wasm_bindgen_test]
async fn delete_issues_one_delete_keyed_by_id() {
    let harness = mount_table(true);
    harness.routes.reply(
        Method::Delete,
        "/api/recommendationrequest",
        json!({"message": "RecommendationRequest with id 2 deleted"}),
    );
    tick().await;

    click("RecommendationRequestTable-cell-row-0-col-Delete-button");
    wait_for(|| !harness.requests.of_method(Method::Delete).is_empty()).await;

    let deletes = harness.requests.of_method(Method::Delete);
    assert_eq!(deletes.len(), 1);
    assert_eq!(deletes[0].url, "/api/recommendationrequest");
    assert_eq!(deletes[0].param_value("id"), Some("2"));

    wait_for(|| !harness.notifications.borrow().is_empty()).await;
    assert_eq!(
        harness.notifications.borrow().as_slice(),
        ["RecommendationRequest with id 2 deleted"]
    );
}
