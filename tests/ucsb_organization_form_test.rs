#![cfg(target_arch = "wasm32")]

mod common;

use campusware::components::ucsb_organization_form::{
    UCSBOrganizationForm, UcsbOrganizationFormValues,
};
use campusware::fixtures::ucsb_organization;
use common::*;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_form(
    initial_contents: Option<campusware::models::ucsb_organization::UcsbOrganization>,
) -> (Rc<RefCell<Vec<UcsbOrganizationFormValues>>>, Rc<RefCell<Vec<String>>>) {
    let root = test_root();
    let (navigator, navigation_log) = recording_navigator();
    let submitted = Rc::new(RefCell::new(Vec::new()));
    let submit_log = Rc::clone(&submitted);
    let submit_action = Callback::new(move |values| submit_log.borrow_mut().push(values));

    mount_to(root, move || match initial_contents {
        Some(contents) => view! {
            <UCSBOrganizationForm
                navigator=navigator
                submit_action=submit_action
                initial_contents=contents
                button_label="Update"
            />
        }
        .into_view(),
        None => view! {
            <UCSBOrganizationForm
                navigator=navigator
                submit_action=submit_action
            />
        }
        .into_view(),
    });
    (submitted, navigation_log)
}

#[wasm_bindgen_test]
async fn renders_every_field_and_org_code_is_editable_on_create() {
    mount_form(None);
    tick().await;

    for field in [
        "orgCode",
        "orgTranslationShort",
        "orgTranslation",
        "inactive",
        "submit",
        "cancel",
    ] {
        assert!(
            by_test_id(&format!("UCSBOrganizationForm-{field}")).is_some(),
            "missing field {field}"
        );
    }
    assert!(!input_by_test_id("UCSBOrganizationForm-orgCode").disabled());

    let text = body_text();
    for label in [
        "Organization Code",
        "Organization Translation Short",
        "Organization Translation",
        "Inactive",
    ] {
        assert!(text.contains(label), "missing label {label}");
    }
}

#[wasm_bindgen_test]
async fn prefills_and_locks_org_code_when_editing() {
    mount_form(Some(ucsb_organization::one_organization()));
    tick().await;

    let org_code = input_by_test_id("UCSBOrganizationForm-orgCode");
    assert_eq!(org_code.value(), "KFC");
    assert!(org_code.disabled());

    assert_eq!(
        input_value("UCSBOrganizationForm-orgTranslationShort"),
        "KF NOC"
    );
    assert_eq!(input_value("UCSBOrganizationForm-orgTranslation"), "RKFC");
    assert_eq!(input_value("UCSBOrganizationForm-inactive"), "false");
    assert_eq!(text_of("UCSBOrganizationForm-submit"), "Update");
}

#[wasm_bindgen_test]
async fn cancel_navigates_back_without_submitting() {
    let (submitted, navigation_log) = mount_form(None);
    tick().await;

    click("UCSBOrganizationForm-cancel");
    tick().await;

    assert_eq!(navigation_log.borrow().as_slice(), ["<back>"]);
    assert!(submitted.borrow().is_empty());
}

#[wasm_bindgen_test]
async fn empty_submit_shows_one_message_per_required_field() {
    let (submitted, _) = mount_form(None);
    tick().await;

    click("UCSBOrganizationForm-submit");
    tick().await;

    let text = body_text();
    for message in [
        "orgTranslationShort is required.",
        "orgTranslation is required.",
        "Inactive is required.",
    ] {
        assert!(text.contains(message), "missing message {message}");
    }
    assert!(submitted.borrow().is_empty());
}

#[wasm_bindgen_test]
async fn org_translation_short_has_a_fifty_character_limit() {
    let (submitted, _) = mount_form(None);
    tick().await;

    set_input("UCSBOrganizationForm-orgCode", "KFC");
    set_input("UCSBOrganizationForm-orgTranslationShort", &"a".repeat(51));
    set_input("UCSBOrganizationForm-orgTranslation", "RKFC");
    set_input("UCSBOrganizationForm-inactive", "false");

    click("UCSBOrganizationForm-submit");
    tick().await;
    assert!(body_text().contains("orgTranslationShort max length 50 characters."));
    assert!(submitted.borrow().is_empty());

    set_input("UCSBOrganizationForm-orgTranslationShort", &"a".repeat(50));
    click("UCSBOrganizationForm-submit");
    wait_for(|| !submitted.borrow().is_empty()).await;
    assert_eq!(submitted.borrow().len(), 1);
}

#[wasm_bindgen_test]
async fn valid_submit_passes_the_field_values_through() {
    let (submitted, _) = mount_form(None);
    tick().await;

    set_input("UCSBOrganizationForm-orgCode", "OSLI");
    set_input("UCSBOrganizationForm-orgTranslationShort", "STUDENT LIFE");
    set_input(
        "UCSBOrganizationForm-orgTranslation",
        "OFFICE OF STUDENT LIFE",
    );
    set_input("UCSBOrganizationForm-inactive", "false");
    click("UCSBOrganizationForm-submit");
    wait_for(|| !submitted.borrow().is_empty()).await;

    assert_eq!(
        submitted.borrow()[0],
        UcsbOrganizationFormValues {
            org_code: "OSLI".into(),
            org_translation_short: "STUDENT LIFE".into(),
            org_translation: "OFFICE OF STUDENT LIFE".into(),
            inactive: "false".into(),
        }
    );
}

#[wasm_bindgen_test]
async fn editing_submits_the_locked_org_code() {
    let (submitted, _) = mount_form(Some(ucsb_organization::one_organization()));
    tick().await;

    set_input("UCSBOrganizationForm-orgTranslationShort", "KFCS");
    set_input("UCSBOrganizationForm-orgTranslation", "KFCT");
    set_input("UCSBOrganizationForm-inactive", "true");
    click("UCSBOrganizationForm-submit");
    wait_for(|| !submitted.borrow().is_empty()).await;

    assert_eq!(
        submitted.borrow()[0],
        UcsbOrganizationFormValues {
            org_code: "KFC".into(),
            org_translation_short: "KFCS".into(),
            org_translation: "KFCT".into(),
            inactive: "true".into(),
        }
    );
}
