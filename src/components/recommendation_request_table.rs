use crate::backend::{use_backend_mutation, Backend};
use crate::models::current_user::Capability;
use crate::models::recommendation_request::RecommendationRequest;
use crate::utils::navigation::Navigator;
use crate::utils::notifications::{response_message, Notifier};
use crate::utils::recommendation_request;
use leptos::*;

const TEST_ID: &str = "RecommendationRequestTable";

type Column = (
    &'static str,
    &'static str,
    fn(&RecommendationRequest) -> String,
);

// (header, column id, accessor)
const COLUMNS: [Column; 7] = [
    ("id", "id", |request| request.id.to_string()),
    ("Requester Email", "requesterEmail", |request| {
        request.requester_email.clone()
    }),
    ("Professor Email", "professorEmail", |request| {
        request.professor_email.clone()
    }),
    ("Explanation", "explanation", |request| {
        request.explanation.clone()
    }),
    ("Date Requested", "dateRequested", |request| {
        request.date_requested.clone()
    }),
    ("Date Needed", "dateNeeded", |request| {
        request.date_needed.clone()
    }),
    ("Done", "done", |request| request.done.to_string()),
];

#[component]
pub fn RecommendationRequestTable(
    requests: Vec<RecommendationRequest>,
    capability: Capability,
    backend: Backend,
    navigator: Navigator,
    notifier: Notifier,
) -> impl IntoView {
    let delete_mutation = use_backend_mutation(
        &backend,
        |request: &RecommendationRequest| recommendation_request::delete_params(request),
        vec![recommendation_request::COLLECTION_KEY.to_string()],
        move |response| notifier.notify(response_message(response)),
    );

    view! {
        <table class="table">
            <thead>
                <tr>
                    {COLUMNS.iter().map(|(header, _, _)| view! { <th>{*header}</th> }).collect::<Vec<_>>()}
                    {capability.can_manage.then(|| view! {
                        <th>"Edit"</th>
                        <th>"Delete"</th>
                    })}
                </tr>
            </thead>
            <tbody>
                {requests.into_iter().enumerate().map(|(index, request)| {
                    let cells = COLUMNS.iter().map(|(_, field, value_of)| view! {
                        <td data-testid=format!("{TEST_ID}-cell-row-{index}-col-{field}")>
                            {value_of(&request)}
                        </td>
                    }).collect::<Vec<_>>();
                    let actions = capability.can_manage.then(|| {
                        let edit_target = format!("/recommendationrequest/edit/{}", request.id);
                        let navigator = navigator.clone();
                        let delete_mutation = delete_mutation.clone();
                        let record = request.clone();
                        view! {
                            <td>
                                <button
                                    type="button"
                                    class="btn btn-primary"
                                    data-testid=format!("{TEST_ID}-cell-row-{index}-col-Edit-button")
                                    on:click=move |_| navigator.push(&edit_target)
                                >
                                    "Edit"
                                </button>
                            </td>
                            <td>
                                <button
                                    type="button"
                                    class="btn btn-danger"
                                    data-testid=format!("{TEST_ID}-cell-row-{index}-col-Delete-button")
                                    on:click=move |_| delete_mutation.mutate(record.clone())
                                >
                                    "Delete"
                                </button>
                            </td>
                        }
                    });
                    view! { <tr>{cells}{actions}</tr> }
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
