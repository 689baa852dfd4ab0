use crate::models::ucsb_organization::UcsbOrganization;
use crate::utils::navigation::Navigator;
use crate::utils::validation::{validate, FieldRules, MaxLength};
use leptos::ev::SubmitEvent;
use leptos::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UcsbOrganizationFormValues {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: String,
}

const ORG_TRANSLATION_SHORT: FieldRules = FieldRules {
    required: Some("orgTranslationShort is required."),
    max_length: Some(MaxLength {
        limit: 50,
        message: "orgTranslationShort max length 50 characters.",
    }),
};
const ORG_TRANSLATION: FieldRules = FieldRules {
    required: Some("orgTranslation is required."),
    max_length: None,
};
const INACTIVE: FieldRules = FieldRules {
    required: Some("Inactive is required."),
    max_length: None,
};

/// `orgCode` is the natural key: editable when creating, shown read-only when
/// `initial_contents` is present.
#[component]
pub fn UCSBOrganizationForm(
    navigator: Navigator,
    #[prop(into)] submit_action: Callback<UcsbOrganizationFormValues>,
    #[prop(optional, into)] initial_contents: Option<UcsbOrganization>,
    #[prop(into, default = String::from("Create"))] button_label: String,
) -> impl IntoView {
    let editing = initial_contents.is_some();

    let (org_code, set_org_code) = create_signal(
        initial_contents
            .as_ref()
            .map(|contents| contents.org_code.clone())
            .unwrap_or_default(),
    );
    let (org_translation_short, set_org_translation_short) = create_signal(
        initial_contents
            .as_ref()
            .map(|contents| contents.org_translation_short.clone())
            .unwrap_or_default(),
    );
    let (org_translation, set_org_translation) = create_signal(
        initial_contents
            .as_ref()
            .map(|contents| contents.org_translation.clone())
            .unwrap_or_default(),
    );
    let (inactive, set_inactive) = create_signal(
        initial_contents
            .as_ref()
            .map(|contents| contents.inactive.clone())
            .unwrap_or_default(),
    );

    let (errors, set_errors) = create_signal(BTreeMap::<&'static str, &'static str>::new());
    let field_error = move |name: &'static str| errors.with(|map| map.get(name).copied());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let values = UcsbOrganizationFormValues {
            org_code: org_code.get(),
            org_translation_short: org_translation_short.get(),
            org_translation: org_translation.get(),
            inactive: inactive.get(),
        };
        let failures = validate(&[
            (
                "orgTranslationShort",
                &values.org_translation_short,
                ORG_TRANSLATION_SHORT,
            ),
            ("orgTranslation", &values.org_translation, ORG_TRANSLATION),
            ("inactive", &values.inactive, INACTIVE),
        ]);
        if !failures.is_empty() {
            set_errors.set(failures);
            return;
        }
        set_errors.set(BTreeMap::new());
        submit_action.call(values);
    };

    view! {
        <form on:submit=handle_submit>
            <div class="form-group mb-3">
                <label for="orgCode">"Organization Code"</label>
                <input
                    id="orgCode"
                    type="text"
                    class="form-control"
                    data-testid="UCSBOrganizationForm-orgCode"
                    prop:value=org_code
                    disabled=editing
                    on:input=move |ev| set_org_code.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group mb-3">
                <label for="orgTranslationShort">"Organization Translation Short"</label>
                <input
                    id="orgTranslationShort"
                    type="text"
                    class="form-control"
                    class=("is-invalid", move || field_error("orgTranslationShort").is_some())
                    data-testid="UCSBOrganizationForm-orgTranslationShort"
                    prop:value=org_translation_short
                    on:input=move |ev| set_org_translation_short.set(event_target_value(&ev))
                />
                {move || field_error("orgTranslationShort").map(|message| view! {
                    <div class="invalid-feedback">{message}</div>
                })}
            </div>

            <div class="form-group mb-3">
                <label for="orgTranslation">"Organization Translation"</label>
                <input
                    id="orgTranslation"
                    type="text"
                    class="form-control"
                    class=("is-invalid", move || field_error("orgTranslation").is_some())
                    data-testid="UCSBOrganizationForm-orgTranslation"
                    prop:value=org_translation
                    on:input=move |ev| set_org_translation.set(event_target_value(&ev))
                />
                {move || field_error("orgTranslation").map(|message| view! {
                    <div class="invalid-feedback">{message}</div>
                })}
            </div>

            <div class="form-group mb-3">
                <label for="inactive">"Inactive"</label>
                <input
                    id="inactive"
                    type="text"
                    class="form-control"
                    class=("is-invalid", move || field_error("inactive").is_some())
                    data-testid="UCSBOrganizationForm-inactive"
                    prop:value=inactive
                    on:input=move |ev| set_inactive.set(event_target_value(&ev))
                />
                {move || field_error("inactive").map(|message| view! {
                    <div class="invalid-feedback">{message}</div>
                })}
            </div>

            <button
                type="submit"
                class="btn btn-primary"
                data-testid="UCSBOrganizationForm-submit"
            >
                {button_label}
            </button>
            <button
                type="button"
                class="btn btn-secondary"
                data-testid="UCSBOrganizationForm-cancel"
                on:click=move |_| navigator.back()
            >
                "Cancel"
            </button>
        </form>
    }
}
