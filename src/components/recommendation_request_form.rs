use crate::models::recommendation_request::RecommendationRequest;
use crate::utils::navigation::Navigator;
use crate::utils::validation::{validate, FieldRules, MaxLength};
use leptos::ev::SubmitEvent;
use leptos::*;
use std::collections::BTreeMap;

/// What the form hands to its `submit_action`: every field as the string the
/// user saw. `id` is only present when the form was opened on an existing
/// record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecommendationRequestFormValues {
    pub id: Option<String>,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: String,
    pub date_needed: String,
    pub done: String,
}

const REQUESTER_EMAIL: FieldRules = FieldRules {
    required: Some("RequesterEmail is required."),
    max_length: Some(MaxLength {
        limit: 50,
        message: "Max length 50 characters",
    }),
};
const PROFESSOR_EMAIL: FieldRules = FieldRules {
    required: Some("ProfessorEmail is required."),
    max_length: None,
};
const EXPLANATION: FieldRules = FieldRules {
    required: Some("Explanation is required."),
    max_length: Some(MaxLength {
        limit: 3000,
        message: "Max length 3000 characters",
    }),
};
const DATE_REQUESTED: FieldRules = FieldRules {
    required: Some("DateRequested is required."),
    max_length: None,
};
const DATE_NEEDED: FieldRules = FieldRules {
    required: Some("DateNeeded is required."),
    max_length: None,
};
const DONE: FieldRules = FieldRules {
    required: Some("Done is required."),
    max_length: None,
};

#[component]
pub fn RecommendationRequestForm(
    navigator: Navigator,
    #[prop(into)] submit_action: Callback<RecommendationRequestFormValues>,
    #[prop(optional, into)] initial_contents: Option<RecommendationRequest>,
    #[prop(into, default = String::from("Create"))] button_label: String,
) -> impl IntoView {
    let id_value = initial_contents.as_ref().map(|contents| contents.id.to_string());

    let (requester_email, set_requester_email) = create_signal(
        initial_contents
            .as_ref()
            .map(|contents| contents.requester_email.clone())
            .unwrap_or_default(),
    );
    let (professor_email, set_professor_email) = create_signal(
        initial_contents
            .as_ref()
            .map(|contents| contents.professor_email.clone())
            .unwrap_or_default(),
    );
    let (explanation, set_explanation) = create_signal(
        initial_contents
            .as_ref()
            .map(|contents| contents.explanation.clone())
            .unwrap_or_default(),
    );
    let (date_requested, set_date_requested) = create_signal(
        initial_contents
            .as_ref()
            .map(|contents| contents.date_requested.clone())
            .unwrap_or_default(),
    );
    let (date_needed, set_date_needed) = create_signal(
        initial_contents
            .as_ref()
            .map(|contents| contents.date_needed.clone())
            .unwrap_or_default(),
    );
    let (done, set_done) = create_signal(
        initial_contents
            .as_ref()
            .map(|contents| contents.done.to_string())
            .unwrap_or_default(),
    );

    let (errors, set_errors) = create_signal(BTreeMap::<&'static str, &'static str>::new());
    let field_error = move |name: &'static str| errors.with(|map| map.get(name).copied());

    let id_for_submit = id_value.clone();
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let values = RecommendationRequestFormValues {
            id: id_for_submit.clone(),
            requester_email: requester_email.get(),
            professor_email: professor_email.get(),
            explanation: explanation.get(),
            date_requested: date_requested.get(),
            date_needed: date_needed.get(),
            done: done.get(),
        };
        let failures = validate(&[
            ("requesterEmail", &values.requester_email, REQUESTER_EMAIL),
            ("professorEmail", &values.professor_email, PROFESSOR_EMAIL),
            ("explanation", &values.explanation, EXPLANATION),
            ("dateRequested", &values.date_requested, DATE_REQUESTED),
            ("dateNeeded", &values.date_needed, DATE_NEEDED),
            ("done", &values.done, DONE),
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
            {id_value.map(|id| view! {
                <div class="form-group mb-3">
                    <label for="id">"Id"</label>
                    <input
                        id="id"
                        type="text"
                        class="form-control"
                        data-testid="RecommendationRequestForm-id"
                        prop:value=id
                        disabled=true
                    />
                </div>
            })}

            <div class="form-group mb-3">
                <label for="requesterEmail">"Requester Email"</label>
                <input
                    id="requesterEmail"
                    type="text"
                    class="form-control"
                    class=("is-invalid", move || field_error("requesterEmail").is_some())
                    data-testid="RecommendationRequestForm-requesterEmail"
                    prop:value=requester_email
                    on:input=move |ev| set_requester_email.set(event_target_value(&ev))
                />
                {move || field_error("requesterEmail").map(|message| view! {
                    <div class="invalid-feedback">{message}</div>
                })}
            </div>

            <div class="form-group mb-3">
                <label for="professorEmail">"Professor Email"</label>
                <input
                    id="professorEmail"
                    type="text"
                    class="form-control"
                    class=("is-invalid", move || field_error("professorEmail").is_some())
                    data-testid="RecommendationRequestForm-professorEmail"
                    prop:value=professor_email
                    on:input=move |ev| set_professor_email.set(event_target_value(&ev))
                />
                {move || field_error("professorEmail").map(|message| view! {
                    <div class="invalid-feedback">{message}</div>
                })}
            </div>

            <div class="form-group mb-3">
                <label for="explanation">"Explanation"</label>
                <input
                    id="explanation"
                    type="text"
                    class="form-control"
                    class=("is-invalid", move || field_error("explanation").is_some())
                    data-testid="RecommendationRequestForm-explanation"
                    prop:value=explanation
                    on:input=move |ev| set_explanation.set(event_target_value(&ev))
                />
                {move || field_error("explanation").map(|message| view! {
                    <div class="invalid-feedback">{message}</div>
                })}
            </div>

            <div class="form-group mb-3">
                <label for="dateRequested">"Date Requested"</label>
                <input
                    id="dateRequested"
                    type="datetime-local"
                    class="form-control"
                    class=("is-invalid", move || field_error("dateRequested").is_some())
                    data-testid="RecommendationRequestForm-dateRequested"
                    prop:value=date_requested
                    on:input=move |ev| set_date_requested.set(event_target_value(&ev))
                />
                {move || field_error("dateRequested").map(|message| view! {
                    <div class="invalid-feedback">{message}</div>
                })}
            </div>

            <div class="form-group mb-3">
                <label for="dateNeeded">"Date Needed"</label>
                <input
                    id="dateNeeded"
                    type="datetime-local"
                    class="form-control"
                    class=("is-invalid", move || field_error("dateNeeded").is_some())
                    data-testid="RecommendationRequestForm-dateNeeded"
                    prop:value=date_needed
                    on:input=move |ev| set_date_needed.set(event_target_value(&ev))
                />
                {move || field_error("dateNeeded").map(|message| view! {
                    <div class="invalid-feedback">{message}</div>
                })}
            </div>

            <div class="form-group mb-3">
                <label for="done">"Done"</label>
                <input
                    id="done"
                    type="text"
                    class="form-control"
                    class=("is-invalid", move || field_error("done").is_some())
                    data-testid="RecommendationRequestForm-done"
                    prop:value=done
                    on:input=move |ev| set_done.set(event_target_value(&ev))
                />
                {move || field_error("done").map(|message| view! {
                    <div class="invalid-feedback">{message}</div>
                })}
            </div>

            <button
                type="submit"
                class="btn btn-primary"
                data-testid="RecommendationRequestForm-submit"
            >
                {button_label}
            </button>
            <button
                type="button"
                class="btn btn-secondary"
                data-testid="RecommendationRequestForm-cancel"
                on:click=move |_| navigator.back()
            >
                "Cancel"
            </button>
        </form>
    }
}
